//! Default Reply Form Fields
//!
//! Enabled toggle, reply text, image URL with upload, and reply-once toggle.
//! Shared by the single-item and batch default reply modals.

use leptos::prelude::*;

use crate::models::DefaultReplyForm;

const CONTENT_PLACEHOLDER: &str =
    "输入默认回复内容，支持变量：{send_user_name}、{send_user_id}、{send_message}、{item_id}";

#[component]
pub fn ReplyFormFields(
    form: RwSignal<DefaultReplyForm>,
    #[prop(into)] uploading: Signal<bool>,
    /// Called with the picked image file
    #[prop(into)] on_file: Callback<web_sys::File>,
    #[prop(into)] enabled_label: String,
) -> impl IntoView {
    let on_file_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file.run(file);
        }
        // allow picking the same file again
        input.set_value("");
    };

    view! {
        <div class="input-group">
            <label class="input-label checkbox-label">
                <input
                    type="checkbox"
                    prop:checked=move || form.with(|f| f.enabled)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        form.update(|f| f.enabled = checked);
                    }
                />
                {enabled_label}
            </label>
        </div>

        <div class="input-group">
            <label class="input-label">"回复内容"</label>
            <textarea
                class="input-textarea"
                placeholder=CONTENT_PLACEHOLDER
                prop:value=move || form.with(|f| f.reply_content.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.reply_content = value);
                }
            ></textarea>
        </div>

        <div class="input-group">
            <label class="input-label">"回复图片"</label>
            <div class="image-row">
                <input
                    type="text"
                    class="input-text"
                    placeholder="图片URL（可选）"
                    prop:value=move || form.with(|f| f.image().to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.set_image(&value));
                    }
                />
                <label class=move || if uploading.get() { "btn-secondary disabled" } else { "btn-secondary" }>
                    {move || if uploading.get() { "上传中..." } else { "上传图片" }}
                    <input
                        type="file"
                        accept="image/*"
                        class="hidden"
                        disabled=move || uploading.get()
                        on:change=on_file_change
                    />
                </label>
            </div>
            {move || {
                let url = form.with(|f| f.image().to_string());
                (!url.is_empty()).then(|| view! {
                    <div class="image-preview">
                        <img src=url alt="预览" />
                    </div>
                })
            }}
        </div>

        <div class="input-group">
            <label class="input-label checkbox-label">
                <input
                    type="checkbox"
                    prop:checked=move || form.with(|f| f.reply_once)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        form.update(|f| f.reply_once = checked);
                    }
                />
                "只回复一次（同一用户只回复一次）"
            </label>
        </div>
    }
}
