//! Item Console App
//!
//! Root component: connection header, page tabs and the toast stack.

use leptos::prelude::*;

use crate::components::{ConnectionSettings, ItemRepliesPage, ItemsPage, ToastStack};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::toast::Toaster;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Page {
    Items,
    ItemReplies,
}

#[component]
pub fn App() -> impl IntoView {
    // State
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let config = RwSignal::new(ApiConfig::load());
    let toaster = Toaster::new();
    let (page, set_page) = signal(Page::Items);
    let (show_settings, set_show_settings) = signal(false);

    let ctx = AppContext::new((reload_trigger, set_reload_trigger), config, toaster);
    provide_context(ctx);

    // Open settings on first visit
    if !config.get_untracked().is_authenticated() {
        set_show_settings.set(true);
    }

    let tab_class = move |target: Page| {
        move || if page.get() == target { "tab active" } else { "tab" }
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <span class="app-title">"商品管理控制台"</span>
                <nav class="tabs">
                    <button class=tab_class(Page::Items) on:click=move |_| set_page.set(Page::Items)>
                        "商品管理"
                    </button>
                    <button class=tab_class(Page::ItemReplies) on:click=move |_| set_page.set(Page::ItemReplies)>
                        "商品回复"
                    </button>
                </nav>
                <span class="connection-status">
                    {move || {
                        let cfg = config.get();
                        let target = if cfg.base_url.is_empty() { "当前站点".to_string() } else { cfg.base_url };
                        if cfg.token.is_some() { target } else { format!("{} (未登录)", target) }
                    }}
                </span>
                <button class="btn-secondary" on:click=move |_| set_show_settings.update(|v| *v = !*v)>
                    "设置"
                </button>
            </header>

            <Show when=move || show_settings.get()>
                <ConnectionSettings on_close=move |_: ()| set_show_settings.set(false) />
            </Show>

            <main class="main-content">
                <Show
                    when=move || ctx.is_authenticated()
                    fallback=|| view! { <div class="empty-state">"请先在设置中填写访问令牌"</div> }
                >
                    {move || match page.get() {
                        Page::Items => view! { <ItemsPage /> }.into_any(),
                        Page::ItemReplies => view! { <ItemRepliesPage /> }.into_any(),
                    }}
                </Show>
            </main>

            <ToastStack />
        </div>
    }
}
