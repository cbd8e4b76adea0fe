//! Item Row Component
//!
//! One table row: selection box, listing fields, flag toggles and actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::format::{format_timestamp, toggle_message};
use crate::models::Item;
use crate::store::{store_toggle_selected, use_items_store, ItemsStateStoreFields};

fn flag_class(enabled: bool) -> &'static str {
    if enabled { "flag-btn on" } else { "flag-btn off" }
}

fn flag_label(enabled: bool) -> &'static str {
    if enabled { "已开启" } else { "已关闭" }
}

#[component]
pub fn ItemRow(
    item: Item,
    #[prop(into)] on_edit: Callback<Item>,
    #[prop(into)] on_default_reply: Callback<Item>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_items_store();

    let id = item.local_id();
    let id_for_class = id.clone();
    let is_selected = move || store.selection().read().contains(&id_for_class);
    let id_for_box = id.clone();
    let box_selected = move || store.selection().read().contains(&id_for_box);

    let multi_spec = item.multi_spec();
    let multi_quantity = item.multi_quantity_delivery;

    let toggle_spec = {
        let item = item.clone();
        move |_| {
            let item = item.clone();
            let client = ctx.client();
            let enabled = !multi_spec;
            spawn_local(async move {
                let result = api::update_item_multi_spec(&client, &item.cookie_id, &item.item_id, enabled).await;
                ctx.finish(result, toggle_message("多规格", enabled), "操作失败");
            });
        }
    };

    let toggle_quantity = {
        let item = item.clone();
        move |_| {
            let item = item.clone();
            let client = ctx.client();
            let enabled = !multi_quantity;
            spawn_local(async move {
                let result =
                    api::update_item_multi_quantity_delivery(&client, &item.cookie_id, &item.item_id, enabled).await;
                ctx.finish(result, toggle_message("多数量发货", enabled), "操作失败");
            });
        }
    };

    let delete = {
        let item = item.clone();
        Callback::new(move |_: ()| {
            let item = item.clone();
            let client = ctx.client();
            spawn_local(async move {
                let result = api::delete_item(&client, &item.cookie_id, &item.item_id).await;
                ctx.finish(result, "删除成功", "删除失败");
            });
        })
    };

    let edit_item = item.clone();
    let reply_item = item.clone();
    let title = item.display_title().to_string();
    let detail = item.detail_text().map(str::to_string);

    view! {
        <tr class=move || if is_selected() { "row-selected" } else { "" }>
            <td>
                <input
                    type="checkbox"
                    prop:checked=box_selected
                    on:change=move |_| store_toggle_selected(&store, id.clone())
                />
            </td>
            <td class="account-cell">{item.cookie_id.clone()}</td>
            <td class="id-cell">
                <a href=item.listing_url() target="_blank" rel="noopener noreferrer">
                    {item.item_id.clone()} " ↗"
                </a>
            </td>
            <td class="title-cell">
                <div class="line-clamp-2" title=title.clone()>{title.clone()}</div>
                {detail.map(|d| view! { <div class="detail-line line-clamp-1" title=d.clone()>{d.clone()}</div> })}
            </td>
            <td class="price-cell">{item.price_label()}</td>
            <td>
                <button
                    class=flag_class(multi_spec)
                    title=if multi_spec { "点击关闭多规格" } else { "点击开启多规格" }
                    on:click=toggle_spec
                >
                    {flag_label(multi_spec)}
                </button>
            </td>
            <td>
                <button
                    class=flag_class(multi_quantity)
                    title=if multi_quantity { "点击关闭多数量发货" } else { "点击开启多数量发货" }
                    on:click=toggle_quantity
                >
                    {flag_label(multi_quantity)}
                </button>
            </td>
            <td class="time-cell">{format_timestamp(item.updated_at.as_deref())}</td>
            <td class="actions-cell">
                <button class="table-action-btn" title="默认回复" on:click=move |_| on_default_reply.run(reply_item.clone())>
                    "回复"
                </button>
                <button class="table-action-btn" title="编辑" on:click=move |_| on_edit.run(edit_item.clone())>
                    "编辑"
                </button>
                <DeleteConfirmButton
                    button_class="table-action-btn danger"
                    disabled=false
                    on_confirm=delete
                />
            </td>
        </tr>
    }
}
