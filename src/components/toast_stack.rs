//! Toast Stack Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Fixed corner stack of the current toasts; click to dismiss
#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="toast-stack">
            {move || ctx.toaster.toasts().into_iter().map(|toast| {
                let id = toast.id;
                view! {
                    <div class=toast.kind.class() on:click=move |_| ctx.toaster.dismiss(id)>
                        {toast.message}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
