//! Items Page
//!
//! Item management: account filter, search, fetch from marketplace,
//! table with selection, and the batch actions on the selected rows.

use leptos::prelude::*;
use leptos::task::spawn_local;

use reactive_stores::Store;

use crate::api;
use crate::batch::{same_account_batch, selected_keys, MIXED_ACCOUNTS_MESSAGE};
use crate::components::{
    confirm, AccountSelect, BatchDefaultReplyModal, DefaultReplyModal, EditItemModal, ItemRow,
};
use crate::context::use_app_context;
use crate::error::BatchError;
use crate::format::fetch_summary;
use crate::models::{DefaultReplyForm, FetchOutcome, Item};
use crate::store::{
    store_begin_load, store_clear_selection, store_filtered_items, store_is_current, store_toggle_all,
    ItemsState, ItemsStateStoreFields, ItemsStore,
};

#[component]
pub fn ItemsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store: ItemsStore = Store::new(ItemsState::new());
    provide_context(store);

    let (fetching, set_fetching) = signal(false);
    let (fetch_page, set_fetch_page) = signal(1u32);

    // Modal state
    let editing = RwSignal::new(None::<Item>);
    let reply_target = RwSignal::new(None::<Item>);
    let show_batch_reply = RwSignal::new(false);
    let batch_form = RwSignal::new(DefaultReplyForm::default());
    let (confirm_batch_reply_delete, set_confirm_batch_reply_delete) = signal(false);

    // Load items when account, settings or trigger changes
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let account = store.selected_account().get();
        if !ctx.is_authenticated() {
            store.items().set(Vec::new());
            store.loading().set(false);
            return;
        }
        let generation = store_begin_load(&store);
        log::debug!("[ITEMS] loading account={:?} trigger={} generation={}", account, trigger, generation);
        let client = ctx.client();
        spawn_local(async move {
            let account = Some(account.as_str()).filter(|a| !a.is_empty());
            let result = api::get_items(&client, account).await;
            if !store_is_current(&store, generation) {
                log::debug!("[ITEMS] dropping stale response {}", generation);
                return;
            }
            match result {
                Ok(items) => {
                    log::info!("[ITEMS] loaded {} items", items.len());
                    store.items().set(items);
                }
                Err(e) => {
                    log::warn!("loading items failed: {}", e);
                    ctx.toaster.error("加载商品列表失败");
                }
            }
            store.loading().set(false);
        });
    });

    let filtered = Memo::new(move |_| store_filtered_items(&store));

    // ========================
    // Fetch From Account
    // ========================

    let run_fetch = move |page: Option<u32>| {
        let account = store.selected_account().get_untracked();
        if account.is_empty() {
            ctx.toaster.warning("请先选择账号后再获取商品");
            return;
        }
        let client = ctx.client();
        set_fetching.set(true);
        spawn_local(async move {
            let result = match page {
                Some(page) => api::fetch_items_from_account(&client, &account, Some(page)).await,
                None => api::fetch_all_items_from_account(&client, &account).await,
            };
            match result {
                Ok(FetchOutcome { success: true, total_count, saved_count, .. }) => {
                    ctx.toaster.success(fetch_summary(total_count, saved_count));
                    ctx.reload();
                }
                Ok(outcome) => {
                    ctx.toaster.error(outcome.message.unwrap_or_else(|| "获取商品失败".to_string()));
                }
                Err(e) => {
                    log::warn!("fetching items of {} failed: {}", account, e);
                    ctx.toaster.error("获取商品失败");
                }
            }
            set_fetching.set(false);
        });
    };

    // ========================
    // Batch Actions
    // ========================

    let batch_delete = move |_| {
        let keys = match selected_keys(&store.items().read_untracked(), &store.selection().read_untracked()) {
            Ok(keys) => keys,
            Err(_) => {
                ctx.toaster.warning("请先选择要删除的商品");
                return;
            }
        };
        if !confirm(&format!("确定要删除选中的 {} 个商品吗？", keys.len())) {
            return;
        }
        let client = ctx.client();
        spawn_local(async move {
            let result = api::batch_delete_items(&client, &keys).await;
            let message = format!("成功删除 {} 个商品", keys.len());
            if ctx.finish(result, message, "批量删除失败").is_some() {
                store_clear_selection(&store);
            }
        });
    };

    let open_batch_reply = move |_| {
        if store.selection().read_untracked().is_empty() {
            ctx.toaster.warning("请先选择商品");
            return;
        }
        batch_form.set(DefaultReplyForm::default());
        show_batch_reply.set(true);
    };

    let batch_delete_replies = move |_| {
        let batch = match same_account_batch(&store.items().read_untracked(), &store.selection().read_untracked()) {
            Ok(batch) => batch,
            Err(BatchError::MixedAccounts(_)) => {
                ctx.toaster.error(MIXED_ACCOUNTS_MESSAGE);
                return;
            }
            Err(BatchError::NothingSelected) => return,
        };
        let client = ctx.client();
        spawn_local(async move {
            let result = api::batch_delete_item_default_reply(&client, &batch.cookie_id, &batch.item_ids).await;
            let message = format!("批量删除成功，共 {} 个商品", batch.item_ids.len());
            if ctx.finish(result, message, "批量删除失败").is_some() {
                set_confirm_batch_reply_delete.set(false);
                store_clear_selection(&store);
            }
        });
    };

    let selected_count = move || store.selection().read().len();

    view! {
        <div class="page">
            // Header
            <div class="page-header">
                <div>
                    <h1 class="page-title">"商品管理"</h1>
                    <p class="page-description">"管理各账号的商品信息"</p>
                </div>
                <div class="header-actions">
                    <Show when=move || { selected_count() > 0 }>
                        <button class="btn-secondary" on:click=open_batch_reply>"批量默认回复"</button>
                        <button class="btn-secondary" on:click=move |_| set_confirm_batch_reply_delete.set(true)>
                            "批量删除回复"
                        </button>
                        <button class="btn-danger" on:click=batch_delete>
                            {move || format!("删除选中 ({})", selected_count())}
                        </button>
                    </Show>
                    <button class="btn-primary" disabled=move || fetching.get() on:click=move |_| run_fetch(None)>
                        {move || if fetching.get() { "获取中..." } else { "获取商品" }}
                    </button>
                    <span class="page-fetch">
                        <input
                            type="number"
                            min="1"
                            class="input-number"
                            prop:value=move || fetch_page.get().to_string()
                            on:input=move |ev| {
                                let page = event_target_value(&ev).parse::<u32>().unwrap_or(1).max(1);
                                set_fetch_page.set(page);
                            }
                        />
                        <button
                            class="btn-secondary"
                            disabled=move || fetching.get()
                            on:click=move |_| run_fetch(Some(fetch_page.get_untracked()))
                        >
                            "获取指定页"
                        </button>
                    </span>
                    <button class="btn-secondary" on:click=move |_| ctx.reload()>"刷新"</button>
                </div>
            </div>

            // Filters
            <div class="card filters">
                <AccountSelect
                    value=Signal::derive(move || store.selected_account().get())
                    on_change=move |account: String| {
                        store.selected_account().set(account);
                    }
                />
                <div class="input-group">
                    <label class="input-label">"搜索商品"</label>
                    <input
                        type="text"
                        class="input-text"
                        placeholder="搜索商品标题或详情..."
                        prop:value=move || store.keyword().get()
                        on:input=move |ev| store.keyword().set(event_target_value(&ev))
                    />
                </div>
            </div>

            // Items list
            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">"商品列表"</h2>
                    <span class="badge">{move || format!("{} 个商品", filtered.with(Vec::len))}</span>
                </div>
                <Show
                    when=move || !store.loading().get()
                    fallback=|| view! { <div class="loading">"加载中..."</div> }
                >
                    <div class="table-scroll">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>
                                        <input
                                            type="checkbox"
                                            title=move || {
                                                if filtered.with(|rows| store.selection().read().all_selected(rows)) {
                                                    "取消全选"
                                                } else {
                                                    "全选"
                                                }
                                            }
                                            prop:checked=move || filtered.with(|rows| store.selection().read().all_selected(rows))
                                            on:change=move |_| filtered.with_untracked(|rows| store_toggle_all(&store, rows))
                                        />
                                    </th>
                                    <th>"账号ID"</th>
                                    <th>"商品ID"</th>
                                    <th>"商品标题"</th>
                                    <th>"价格"</th>
                                    <th>"多规格"</th>
                                    <th>"多数量发货"</th>
                                    <th>"更新时间"</th>
                                    <th>"操作"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    let rows = filtered.get();
                                    if rows.is_empty() {
                                        view! {
                                            <tr>
                                                <td colspan="9">
                                                    <div class="empty-state">"暂无商品数据"</div>
                                                </td>
                                            </tr>
                                        }.into_any()
                                    } else {
                                        rows.into_iter().map(|item| view! {
                                            <ItemRow
                                                item=item
                                                on_edit=move |item: Item| editing.set(Some(item))
                                                on_default_reply=move |item: Item| reply_target.set(Some(item))
                                            />
                                        }).collect_view().into_any()
                                    }
                                }}
                            </tbody>
                        </table>
                    </div>
                </Show>
            </div>

            <EditItemModal editing=editing />
            <DefaultReplyModal target=reply_target />
            <BatchDefaultReplyModal show=show_batch_reply form=batch_form />

            // Batch delete of default replies
            <Show when=move || confirm_batch_reply_delete.get()>
                <div class="modal-overlay">
                    <div class="modal-content small">
                        <div class="modal-header">
                            <h2 class="modal-title">"批量删除默认回复"</h2>
                        </div>
                        <div class="modal-body">
                            {move || format!("确定要删除选中 {} 个商品的默认回复配置吗？", selected_count())}
                        </div>
                        <div class="modal-footer">
                            <button class="btn-secondary" on:click=move |_| set_confirm_batch_reply_delete.set(false)>
                                "取消"
                            </button>
                            <button class="btn-danger" on:click=batch_delete_replies>"确认删除"</button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
