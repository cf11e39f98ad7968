//! Item List Page

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::ItemSummary;
use crate::router::Route;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ItemListPage() -> impl IntoView {
    let store = use_app_store();

    view! {
        <main class="pc-main item-list-page">
            <h2>"습득물 목록"</h2>
            <Show
                when=move || !store.items().read().is_empty()
                fallback=|| view! { <p class="page-message">"등록된 습득물이 없습니다."</p> }
            >
                <div class="item-grid">
                    <For
                        each=move || store.items().get()
                        key=|item| item.id
                        children=move |item| view! { <ItemCard item=item /> }
                    />
                </div>
            </Show>
            <p class="item-count">{move || item_count_label(store.items().read().len())}</p>
        </main>
    }
}

fn item_count_label(count: usize) -> String {
    format!("총 {}건", count)
}

#[component]
fn ItemCard(item: ItemSummary) -> impl IntoView {
    let ctx = use_app_context();
    let id = item.id;

    view! {
        <div class="item-card" on:click=move |_| ctx.router.navigate(Route::ItemDetail(id))>
            <div class="item-thumb">
                {match item.image {
                    Some(src) => view! { <img src=src alt=item.title.clone() /> }.into_any(),
                    None => view! { <span class="no-image">"이미지 없음"</span> }.into_any(),
                }}
            </div>
            <div class="item-card-body">
                <span class="item-title">{item.title.clone()}</span>
                <span class="item-date">{item.date}</span>
                <span class="status-badge">{item.status}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_count_label() {
        assert_eq!(item_count_label(0), "총 0건");
        assert_eq!(item_count_label(12), "총 12건");
    }
}
