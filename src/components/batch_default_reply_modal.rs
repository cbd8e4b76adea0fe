//! Batch Default Reply Modal
//!
//! Applies one default reply config to every selected item of a single account.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::batch::{same_account_batch, MIXED_ACCOUNTS_MESSAGE};
use crate::components::ReplyFormFields;
use crate::context::use_app_context;
use crate::error::BatchError;
use crate::models::{BatchDefaultReplyRequest, DefaultReplyForm};
use crate::store::{store_clear_selection, use_items_store, ItemsStateStoreFields};

#[component]
pub fn BatchDefaultReplyModal(
    show: RwSignal<bool>,
    /// Reset by the opener before `show` is set
    form: RwSignal<DefaultReplyForm>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_items_store();
    let (saving, set_saving) = signal(false);
    let (uploading, set_uploading) = signal(false);

    let save = move |_| {
        let batch = match same_account_batch(&store.items().read_untracked(), &store.selection().read_untracked()) {
            Ok(batch) => batch,
            Err(BatchError::MixedAccounts(_)) => {
                ctx.toaster.error(MIXED_ACCOUNTS_MESSAGE);
                return;
            }
            Err(BatchError::NothingSelected) => return,
        };
        let count = batch.item_ids.len();
        let request = BatchDefaultReplyRequest {
            item_ids: batch.item_ids,
            form: form.get_untracked(),
        };
        let client = ctx.client();
        set_saving.set(true);
        spawn_local(async move {
            let result = api::batch_save_item_default_reply(&client, &batch.cookie_id, &request).await;
            let message = format!("批量保存成功，共 {} 个商品", count);
            if ctx.finish(result, message, "批量保存失败").is_some() {
                show.set(false);
                store_clear_selection(&store);
            }
            set_saving.set(false);
        });
    };

    // Batch images go through the generic upload endpoint
    let upload = Callback::new(move |file: web_sys::File| {
        let client = ctx.client();
        set_uploading.set(true);
        spawn_local(async move {
            match api::upload_image(&client, &file).await {
                Ok(response) => match response.into_image_url(false) {
                    Ok(url) => {
                        form.update(|f| f.set_image(&url));
                        ctx.toaster.success("图片上传成功");
                    }
                    Err(message) => ctx.toaster.error(message),
                },
                Err(e) => {
                    log::warn!("image upload failed: {}", e);
                    ctx.toaster.error("图片上传失败");
                }
            }
            set_uploading.set(false);
        });
    });

    view! {
        <Show when=move || show.get()>
            <div class="modal-overlay">
                <div class="modal-content">
                    <div class="modal-header">
                        <h2 class="modal-title">"批量设置默认回复"</h2>
                        <button class="modal-close" on:click=move |_| show.set(false)>"×"</button>
                    </div>
                    <div class="modal-body">
                        <div class="item-summary">
                            {move || format!("已选择 {} 个商品", store.selection().read().len())}
                        </div>
                        <ReplyFormFields
                            form=form
                            uploading=uploading
                            on_file=upload
                            enabled_label="启用默认回复"
                        />
                    </div>
                    <div class="modal-footer">
                        <button
                            type="button"
                            class="btn-secondary"
                            disabled=move || saving.get()
                            on:click=move |_| show.set(false)
                        >
                            "取消"
                        </button>
                        <button class="btn-primary" disabled=move || saving.get() on:click=save>
                            {move || if saving.get() { "保存中..." } else { "批量保存" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
