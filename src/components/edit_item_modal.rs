//! Edit Item Modal
//!
//! Edits the detail text of one item.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::models::{Item, ItemPatch};

#[component]
pub fn EditItemModal(
    /// Item being edited; `None` hides the modal
    editing: RwSignal<Option<Item>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (detail, set_detail) = signal(String::new());
    let (saving, set_saving) = signal(false);

    // Prefill when a new item is opened
    Effect::new(move |_| {
        if let Some(item) = editing.get() {
            set_detail.set(item.detail_text().unwrap_or_default().to_string());
        }
    });

    let save = move |_| {
        let Some(item) = editing.get_untracked() else { return };
        let patch = ItemPatch {
            item_detail: Some(detail.get_untracked()),
            ..Default::default()
        };
        let client = ctx.client();
        set_saving.set(true);
        spawn_local(async move {
            let result = api::update_item(&client, &item.cookie_id, &item.item_id, &patch).await;
            if ctx.finish(result, "商品详情已更新", "更新失败").is_some() {
                editing.set(None);
            }
            set_saving.set(false);
        });
    };

    view! {
        {move || editing.get().map(|item| view! {
            <div class="modal-overlay">
                <div class="modal-content">
                    <div class="modal-header">
                        <h2 class="modal-title">"编辑商品"</h2>
                        <button class="modal-close" on:click=move |_| editing.set(None)>"×"</button>
                    </div>
                    <div class="modal-body">
                        <div class="input-group">
                            <label class="input-label">"商品ID"</label>
                            <input type="text" class="input-text" disabled value=item.item_id.clone() />
                        </div>
                        <div class="input-group">
                            <label class="input-label">"商品标题"</label>
                            <input
                                type="text"
                                class="input-text"
                                disabled
                                value=item.title_text().unwrap_or_default().to_string()
                            />
                        </div>
                        <div class="input-group">
                            <label class="input-label">"商品详情"</label>
                            <textarea
                                class="input-textarea tall"
                                placeholder="输入商品详情..."
                                prop:value=move || detail.get()
                                on:input=move |ev| set_detail.set(event_target_value(&ev))
                            ></textarea>
                        </div>
                    </div>
                    <div class="modal-footer">
                        <button
                            type="button"
                            class="btn-secondary"
                            disabled=move || saving.get()
                            on:click=move |_| editing.set(None)
                        >
                            "取消"
                        </button>
                        <button class="btn-primary" disabled=move || saving.get() on:click=save>
                            {move || if saving.get() { "保存中..." } else { "保存" }}
                        </button>
                    </div>
                </div>
            </div>
        })}
    }
}
