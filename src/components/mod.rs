//! UI Components
//!
//! Leptos components of the item console.

mod account_select;
mod batch_default_reply_modal;
mod connection_settings;
mod default_reply_modal;
mod delete_confirm_button;
mod edit_item_modal;
mod item_replies_page;
mod item_row;
mod items_page;
mod reply_form;
mod toast_stack;

pub use account_select::AccountSelect;
pub use batch_default_reply_modal::BatchDefaultReplyModal;
pub use connection_settings::ConnectionSettings;
pub use default_reply_modal::DefaultReplyModal;
pub use delete_confirm_button::DeleteConfirmButton;
pub use edit_item_modal::EditItemModal;
pub use item_replies_page::ItemRepliesPage;
pub use item_row::ItemRow;
pub use items_page::ItemsPage;
pub use reply_form::ReplyFormFields;
pub use toast_stack::ToastStack;

/// Blocking browser confirm dialog; false when unavailable
pub(crate) fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
