//! Connection Settings Component
//!
//! Edits and persists the API base URL, token and log level, and shows recent log lines.

use leptos::prelude::*;
use log::LevelFilter;

use crate::config::{normalize_base_url, ApiConfig};
use crate::context::use_app_context;

const LEVELS: &[LevelFilter] = &[
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
];

#[component]
pub fn ConnectionSettings(
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let current = ctx.config.get_untracked();

    let (base_url, set_base_url) = signal(current.base_url.clone());
    let (token, set_token) = signal(current.token.clone().unwrap_or_default());
    let (level, set_level) = signal(current.log_level);
    let (show_logs, set_show_logs) = signal(false);

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let token = token.get_untracked().trim().to_string();
        let next = ApiConfig {
            base_url: normalize_base_url(&base_url.get_untracked()),
            token: Some(token).filter(|t| !t.is_empty()),
            log_level: level.get_untracked(),
        };
        if let Err(e) = next.save() {
            log::warn!("saving settings failed: {}", e);
            ctx.toaster.error("保存设置失败");
            return;
        }
        console_logger::set_level(next.log_level);
        log::info!("settings saved, base_url={:?}", next.base_url);
        ctx.config.set(next);
        ctx.toaster.success("设置已保存");
        on_close.run(());
    };

    view! {
        <form class="card settings-form" on:submit=save>
            <div class="card-header">
                <h2 class="card-title">"连接设置"</h2>
                <button type="button" class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
            </div>
            <div class="input-group">
                <label class="input-label">"API 地址"</label>
                <input
                    type="text"
                    class="input-text"
                    placeholder="留空表示当前站点"
                    prop:value=move || base_url.get()
                    on:input=move |ev| set_base_url.set(event_target_value(&ev))
                />
            </div>
            <div class="input-group">
                <label class="input-label">"访问令牌"</label>
                <input
                    type="password"
                    class="input-text"
                    prop:value=move || token.get()
                    on:input=move |ev| set_token.set(event_target_value(&ev))
                />
            </div>
            <div class="input-group">
                <label class="input-label">"日志级别"</label>
                <select
                    class="input-select"
                    on:change=move |ev| {
                        if let Ok(parsed) = event_target_value(&ev).parse::<LevelFilter>() {
                            set_level.set(parsed);
                        }
                    }
                >
                    {LEVELS.iter().map(|l| {
                        let l = *l;
                        view! {
                            <option value=l.as_str() selected=move || level.get() == l>{l.as_str()}</option>
                        }
                    }).collect_view()}
                </select>
            </div>
            <div class="form-actions">
                <button type="button" class="btn-secondary" on:click=move |_| set_show_logs.update(|v| *v = !*v)>
                    {move || if show_logs.get() { "隐藏日志" } else { "最近日志" }}
                </button>
                <button type="submit" class="btn-primary">"保存"</button>
            </div>
            <Show when=move || show_logs.get()>
                <pre class="log-view">{console_logger::recent().join("\n")}</pre>
            </Show>
        </form>
    }
}
