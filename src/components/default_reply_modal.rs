//! Default Reply Modal
//!
//! Loads, edits, saves and deletes the default reply of a single item.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{DeleteConfirmButton, ReplyFormFields};
use crate::context::use_app_context;
use crate::models::{DefaultReplyForm, Item};

#[component]
pub fn DefaultReplyModal(
    /// Item whose reply is being configured; `None` hides the modal
    target: RwSignal<Option<Item>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(DefaultReplyForm::default());
    let (loading, set_loading) = signal(false);
    let (saving, set_saving) = signal(false);
    let (uploading, set_uploading) = signal(false);

    // Load stored config whenever a new item is opened
    Effect::new(move |_| {
        let Some(item) = target.get() else { return };
        form.set(DefaultReplyForm::default());
        set_loading.set(true);
        let client = ctx.client();
        spawn_local(async move {
            let loaded = api::get_item_default_reply(&client, &item.cookie_id, &item.item_id).await;
            // a failed or empty lookup edits a fresh config
            let next = match loaded {
                Ok(Some(config)) => DefaultReplyForm::from(config),
                Ok(None) => DefaultReplyForm::default(),
                Err(e) => {
                    log::warn!("loading default reply of {} failed: {}", item.item_id, e);
                    DefaultReplyForm::default()
                }
            };
            form.set(next);
            set_loading.set(false);
        });
    });

    let close = move || {
        target.set(None);
        form.set(DefaultReplyForm::default());
    };

    let save = move |_| {
        let Some(item) = target.get_untracked() else { return };
        let body = form.get_untracked();
        let client = ctx.client();
        set_saving.set(true);
        spawn_local(async move {
            let result = api::save_item_default_reply(&client, &item.cookie_id, &item.item_id, &body).await;
            if ctx.finish(result, "商品默认回复保存成功", "保存失败").is_some() {
                close();
            }
            set_saving.set(false);
        });
    };

    let delete = Callback::new(move |_: ()| {
        let Some(item) = target.get_untracked() else { return };
        let client = ctx.client();
        spawn_local(async move {
            let result = api::delete_item_default_reply(&client, &item.cookie_id, &item.item_id).await;
            if ctx.finish(result, "商品默认回复已删除", "删除失败").is_some() {
                close();
            }
        });
    });

    let upload = Callback::new(move |file: web_sys::File| {
        let Some(item) = target.get_untracked() else { return };
        let client = ctx.client();
        set_uploading.set(true);
        spawn_local(async move {
            match api::upload_item_default_reply_image(&client, &item.cookie_id, &item.item_id, &file).await {
                Ok(response) => match response.into_image_url(true) {
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

    let busy = Signal::derive(move || loading.get() || saving.get());

    view! {
        {move || target.get().map(|item| view! {
            <div class="modal-overlay">
                <div class="modal-content">
                    <div class="modal-header">
                        <h2 class="modal-title">"商品默认回复配置"</h2>
                        <button class="modal-close" on:click=move |_| close()>"×"</button>
                    </div>
                    <div class="modal-body">
                        <Show
                            when=move || !loading.get()
                            fallback=|| view! { <div class="loading">"加载中..."</div> }
                        >
                            <div class="input-group">
                                <label class="input-label">"商品信息"</label>
                                <div class="item-summary">
                                    <div>"ID: " {item.item_id.clone()}</div>
                                    <div class="line-clamp-1">{item.display_title().to_string()}</div>
                                </div>
                            </div>
                            <ReplyFormFields
                                form=form
                                uploading=uploading
                                on_file=upload
                                enabled_label="启用商品默认回复"
                            />
                        </Show>
                    </div>
                    <div class="modal-footer">
                        <DeleteConfirmButton
                            button_class="btn-danger push-left"
                            prompt="确定要删除此商品的默认回复配置吗？"
                            disabled=busy
                            on_confirm=delete
                        />
                        <button
                            type="button"
                            class="btn-secondary"
                            disabled=move || saving.get()
                            on:click=move |_| close()
                        >
                            "取消"
                        </button>
                        <button class="btn-primary" disabled=move || busy.get() on:click=save>
                            {move || if saving.get() { "保存中..." } else { "保存" }}
                        </button>
                    </div>
                </div>
            </div>
        })}
    }
}
