//! Account Select Component
//!
//! Account filter dropdown; loads the linked accounts itself.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::models::Account;

#[component]
pub fn AccountSelect(
    /// Selected account id, empty for all accounts
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (accounts, set_accounts) = signal(Vec::<Account>::new());

    Effect::new(move |_| {
        if !ctx.is_authenticated() {
            set_accounts.set(Vec::new());
            return;
        }
        let client = ctx.client();
        spawn_local(async move {
            match api::get_accounts(&client).await {
                Ok(loaded) => set_accounts.set(loaded),
                // account list only feeds the filter
                Err(e) => log::warn!("loading accounts failed: {}", e),
            }
        });
    });

    view! {
        <div class="input-group">
            <label class="input-label">"筛选账号"</label>
            <select
                class="input-select"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">"所有账号"</option>
                {move || accounts.get().into_iter().map(|account| {
                    let selected = value.get_untracked() == account.id;
                    view! {
                        <option value=account.id.clone() selected=selected>{account.id.clone()}</option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
