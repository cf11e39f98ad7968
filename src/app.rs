//! Lost & Found Frontend App
//!
//! Composition root: builds shared state, provides it via context and
//! switches pages on the current route.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{ItemDetailPage, ItemListPage, RegisterItemPage, SignupPage};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::router::{Route, Router};
use crate::store::AppState;

/// Page kind; detail pages for different ids share one page instance
#[derive(Clone, Copy, PartialEq, Eq)]
enum Page {
    List,
    Detail,
    Register,
    Signup,
    NotFound,
}

impl From<Route> for Page {
    fn from(route: Route) -> Self {
        match route {
            Route::ItemList => Page::List,
            Route::ItemDetail(_) => Page::Detail,
            Route::RegisterItem => Page::Register,
            Route::Signup => Page::Signup,
            Route::NotFound => Page::NotFound,
        }
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::default());
    let router = Router::new();
    let ctx = AppContext::new(config, store, router);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load the item list once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            ctx.gateway.fetch_items().await;
        });
    });

    let page = Memo::new(move |_| Page::from(router.route()));

    view! {
        <div class="app-layout">
            <nav class="top-nav">
                <span class="brand" on:click=move |_| router.navigate(Route::ItemList)>"분실물 센터"</span>
                <div class="nav-links">
                    <button on:click=move |_| router.navigate(Route::ItemList)>"목록"</button>
                    <button on:click=move |_| router.navigate(Route::RegisterItem)>"습득물 등록"</button>
                    {move || match ctx.session.current_user() {
                        Some(user) => view! {
                            <span class="user-name">{user.name}</span>
                            <button on:click=move |_| ctx.session.logout()>"로그아웃"</button>
                        }.into_any(),
                        None => view! {
                            <button on:click=move |_| router.navigate(Route::Signup)>"회원가입"</button>
                        }.into_any(),
                    }}
                </div>
            </nav>

            {move || match page.get() {
                Page::List => view! { <ItemListPage /> }.into_any(),
                Page::Detail => view! { <ItemDetailPage /> }.into_any(),
                Page::Register => view! { <RegisterItemPage /> }.into_any(),
                Page::Signup => view! { <SignupPage /> }.into_any(),
                Page::NotFound => view! {
                    <div class="page-message">"페이지를 찾을 수 없습니다."</div>
                }.into_any(),
            }}
        </div>
    }
}
