//! Item Replies Page
//!
//! Per-item reply texts: list by account, inline edit, single and batch delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::batch::picked_keys;
use crate::components::{confirm, AccountSelect, DeleteConfirmButton};
use crate::context::use_app_context;
use crate::filter::filter_rows;
use crate::format::format_timestamp;
use crate::models::{ItemReply, ItemReplyPayload, LocalId};
use crate::selection::SelectionSet;

#[component]
pub fn ItemRepliesPage() -> impl IntoView {
    let ctx = use_app_context();

    let (replies, set_replies) = signal(Vec::<ItemReply>::new());
    let (loading, set_loading) = signal(true);
    let (account, set_account) = signal(String::new());
    let (keyword, set_keyword) = signal(String::new());
    let selection = RwSignal::new(SelectionSet::default());
    let generation = StoredValue::new(0u64);

    // Row being edited and its draft text
    let editing = RwSignal::new(None::<LocalId>);
    let draft = RwSignal::new(String::new());

    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        let account = account.get();
        if !ctx.is_authenticated() {
            set_replies.set(Vec::new());
            set_loading.set(false);
            return;
        }
        let current = generation.get_value() + 1;
        generation.set_value(current);
        set_loading.set(true);
        log::debug!("[REPLIES] loading account={:?} trigger={}", account, trigger);
        let client = ctx.client();
        spawn_local(async move {
            let account = Some(account.as_str()).filter(|a| !a.is_empty());
            let result = api::get_item_replies(&client, account).await;
            if generation.get_value() != current {
                return;
            }
            match result {
                Ok(rows) => {
                    log::info!("[REPLIES] loaded {} replies", rows.len());
                    set_replies.set(rows);
                }
                Err(e) => {
                    log::warn!("loading item replies failed: {}", e);
                    ctx.toaster.error("加载商品回复失败");
                }
            }
            set_loading.set(false);
        });
    });

    let filtered = Memo::new(move |_| replies.with(|rows| filter_rows(rows, &keyword.get())));

    let start_edit = move |reply: &ItemReply| {
        draft.set(reply.reply_content.clone());
        editing.set(Some(reply.local_id()));
    };

    let save_edit = move |reply: ItemReply| {
        let payload = ItemReplyPayload {
            reply_content: draft.get_untracked(),
        };
        if payload.reply_content.trim().is_empty() {
            ctx.toaster.warning("回复内容不能为空");
            return;
        }
        let client = ctx.client();
        spawn_local(async move {
            let result = api::save_item_reply(&client, &reply.cookie_id, &reply.item_id, &payload).await;
            if ctx.finish(result, "回复已保存", "保存失败").is_some() {
                editing.set(None);
            }
        });
    };

    let batch_delete = move |_| {
        let keys = replies.with_untracked(|rows| {
            selection.with_untracked(|sel| picked_keys(rows, sel, ItemReply::key))
        });
        if keys.is_empty() {
            ctx.toaster.warning("请先选择要删除的回复");
            return;
        }
        if !confirm(&format!("确定要删除选中的 {} 条回复吗？", keys.len())) {
            return;
        }
        let client = ctx.client();
        spawn_local(async move {
            let result = api::batch_delete_item_replies(&client, &keys).await;
            let message = format!("成功删除 {} 条回复", keys.len());
            if ctx.finish(result, message, "批量删除失败").is_some() {
                selection.update(SelectionSet::clear);
            }
        });
    };

    let all_selected = move || filtered.with(|rows| selection.with(|sel| sel.all_selected(rows)));
    let selected_count = move || selection.with(SelectionSet::len);

    view! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h1 class="page-title">"商品回复"</h1>
                    <p class="page-description">"管理各商品的专属回复内容"</p>
                </div>
                <div class="header-actions">
                    <Show when=move || { selected_count() > 0 }>
                        <button class="btn-danger" on:click=batch_delete>
                            {move || format!("删除选中 ({})", selected_count())}
                        </button>
                    </Show>
                    <button class="btn-secondary" on:click=move |_| ctx.reload()>"刷新"</button>
                </div>
            </div>

            <div class="card filters">
                <AccountSelect
                    value=Signal::derive(move || account.get())
                    on_change=move |next: String| {
                        selection.update(SelectionSet::clear);
                        set_account.set(next);
                    }
                />
                <div class="input-group">
                    <label class="input-label">"搜索回复"</label>
                    <input
                        type="text"
                        class="input-text"
                        placeholder="搜索商品标题或回复内容..."
                        prop:value=move || keyword.get()
                        on:input=move |ev| set_keyword.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">"回复列表"</h2>
                    <span class="badge">{move || format!("{} 条回复", filtered.with(Vec::len))}</span>
                </div>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="loading">"加载中..."</div> }
                >
                    <div class="table-scroll">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>
                                        <input
                                            type="checkbox"
                                            prop:checked=all_selected
                                            on:change=move |_| {
                                                filtered.with_untracked(|rows| selection.update(|sel| sel.toggle_all(rows)))
                                            }
                                        />
                                    </th>
                                    <th>"账号ID"</th>
                                    <th>"商品ID"</th>
                                    <th>"商品标题"</th>
                                    <th>"回复内容"</th>
                                    <th>"更新时间"</th>
                                    <th>"操作"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    let rows = filtered.get();
                                    if rows.is_empty() {
                                        return view! {
                                            <tr>
                                                <td colspan="7">
                                                    <div class="empty-state">"暂无回复数据"</div>
                                                </td>
                                            </tr>
                                        }.into_any();
                                    }
                                    rows.into_iter().map(|reply| {
                                        let id = reply.local_id();
                                        let id_checked = id.clone();
                                        let id_editing = id.clone();
                                        let id_toggle = id.clone();
                                        let is_editing = Memo::new(move |_| editing.with(|e| e.as_ref() == Some(&id_editing)));
                                        let for_edit = reply.clone();
                                        let for_save = reply.clone();
                                        let for_delete = reply.clone();
                                        let content = reply.reply_content.clone();
                                        let delete = Callback::new(move |_: ()| {
                                            let reply = for_delete.clone();
                                            let client = ctx.client();
                                            spawn_local(async move {
                                                let result = api::delete_item_reply(&client, &reply.cookie_id, &reply.item_id).await;
                                                ctx.finish(result, "删除成功", "删除失败");
                                            });
                                        });
                                        view! {
                                            <tr>
                                                <td>
                                                    <input
                                                        type="checkbox"
                                                        prop:checked=move || selection.with(|sel| sel.contains(&id_checked))
                                                        on:change=move |_| selection.update(|sel| sel.toggle(id_toggle.clone()))
                                                    />
                                                </td>
                                                <td class="account-cell">{reply.cookie_id.clone()}</td>
                                                <td class="id-cell">{reply.item_id.clone()}</td>
                                                <td class="title-cell">
                                                    <div class="line-clamp-2">{reply.display_title().to_string()}</div>
                                                </td>
                                                <td class="reply-cell">
                                                    <Show
                                                        when=move || is_editing.get()
                                                        fallback=move || view! { <div class="line-clamp-2">{content.clone()}</div> }
                                                    >
                                                        <textarea
                                                            class="input-textarea"
                                                            rows="3"
                                                            prop:value=move || draft.get()
                                                            on:input=move |ev| draft.set(event_target_value(&ev))
                                                        ></textarea>
                                                    </Show>
                                                </td>
                                                <td class="time-cell">{format_timestamp(reply.updated_at.as_deref())}</td>
                                                <td class="actions-cell">
                                                    <Show
                                                        when=move || is_editing.get()
                                                        fallback=move || {
                                                            let reply = for_edit.clone();
                                                            view! {
                                                                <button class="table-action-btn" on:click=move |_| start_edit(&reply)>
                                                                    "编辑"
                                                                </button>
                                                            }
                                                        }
                                                    >
                                                        {
                                                            let reply = for_save.clone();
                                                            view! {
                                                                <button class="table-action-btn" on:click=move |_| save_edit(reply.clone())>
                                                                    "保存"
                                                                </button>
                                                                <button class="table-action-btn" on:click=move |_| editing.set(None)>
                                                                    "取消"
                                                                </button>
                                                            }
                                                        }
                                                    </Show>
                                                    <DeleteConfirmButton
                                                        button_class="table-action-btn danger"
                                                        disabled=false
                                                        on_confirm=delete
                                                    />
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view().into_any()
                                }}
                            </tbody>
                        </table>
                    </div>
                </Show>
            </div>
        </div>
    }
}
