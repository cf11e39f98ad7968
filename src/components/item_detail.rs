//! Item Detail Page
//!
//! One found item with its claim form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ClaimForm;
use crate::context::use_app_context;
use crate::dialog;
use crate::generation::RequestGeneration;
use crate::models::ItemDetail;
use crate::router::Route;

/// What the page body shows
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Loading,
    NotFound,
    Loaded(ItemDetail),
}

impl DetailView {
    pub fn resolve(fetched: Option<ItemDetail>) -> Self {
        fetched.map(DetailView::Loaded).unwrap_or(DetailView::NotFound)
    }
}

/// Claim button appearance for an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimButton {
    pub disabled: bool,
    pub label: &'static str,
}

impl ClaimButton {
    pub fn for_item(item: &ItemDetail) -> Self {
        if item.accepts_claims() {
            Self { disabled: false, label: "내 물건 수령 신청하기" }
        } else {
            Self { disabled: true, label: "현재 수령 불가" }
        }
    }
}

const RECEIVE_PROMPT: &str = "방문 수령 방법을 확인하시겠습니까?";
const RECEIVE_NOTICE: &str =
    "방문 수령은 온라인으로 접수되지 않습니다. 학생증을 지참하고 보관 장소를 직접 방문해주세요.";

/// Visit-pickup notice. Informational only, nothing is sent.
fn confirm_receive() {
    if dialog::confirm(RECEIVE_PROMPT) {
        dialog::alert(RECEIVE_NOTICE);
    }
}

#[component]
pub fn ItemDetailPage() -> impl IntoView {
    let ctx = use_app_context();
    let gateway = ctx.gateway;

    let item_id = Memo::new(move |_| match ctx.router.route() {
        Route::ItemDetail(id) => Some(id),
        _ => None,
    });

    let (view_state, set_view_state) = signal(DetailView::Loading);
    let (show_form, set_show_form) = signal(false);

    let generation = RequestGeneration::new();
    on_cleanup({
        let generation = generation.clone();
        move || generation.invalidate()
    });

    // One fetch per id; a late answer for an older id is dropped
    Effect::new(move |_| {
        let Some(id) = item_id.get() else { return };
        let ticket = generation.begin();
        set_view_state.set(DetailView::Loading);
        set_show_form.set(false);

        let generation = generation.clone();
        spawn_local(async move {
            let fetched = gateway.get_item_detail(id).await;
            if generation.is_current(ticket) {
                set_view_state.set(DetailView::resolve(fetched));
            } else {
                log::debug!("discarded stale detail response for item {}", id);
            }
        });
    });

    view! {
        <div class="pc-container detail-page">
            <div class="detail-back-row">
                <button class="back-btn" on:click=move |_| ctx.router.back()>"← 목록으로"</button>
            </div>

            {move || match view_state.get() {
                DetailView::Loading => view! {
                    <div class="page-message">"데이터 불러오는 중..."</div>
                }.into_any(),
                DetailView::NotFound => view! {
                    <div class="page-message">"물건 정보를 찾을 수 없습니다."</div>
                }.into_any(),
                DetailView::Loaded(item) => view! {
                    <ItemDetailCard item=item show_form=show_form set_show_form=set_show_form />
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ItemDetailCard(
    item: ItemDetail,
    show_form: ReadSignal<bool>,
    set_show_form: WriteSignal<bool>,
) -> impl IntoView {
    let button = ClaimButton::for_item(&item);
    let button_class = if button.disabled { "claim-btn unavailable" } else { "claim-btn" };
    let item_id = item.id;
    let status = item.status.clone().unwrap_or_default();
    let description = item
        .description
        .clone()
        .unwrap_or_else(|| "상세 설명이 없습니다.".to_string());

    view! {
        <main class="pc-main detail-card">
            <div class="detail-image-pane">
                {match item.image.clone() {
                    Some(src) => view! { <img class="detail-image" src=src alt="물건" /> }.into_any(),
                    None => view! { <span class="no-image">"이미지 없음"</span> }.into_any(),
                }}
            </div>

            <div class="detail-info-pane">
                <div>
                    <span class="category-badge">{item.category.clone()}</span>
                    <h1 class="detail-title">{item.title.clone()}</h1>
                    <p class="detail-status">"상태: " {status}</p>
                </div>

                <div class="divider"></div>

                <div class="detail-facts">
                    <div class="fact-row">
                        <span class="fact-label">"습득일"</span>
                        <span>{item.date.clone()}</span>
                    </div>
                    <div class="fact-row">
                        <span class="fact-label">"습득장소"</span>
                        <span>{item.location.clone()}</span>
                    </div>
                </div>

                <div class="divider"></div>

                <div class="detail-description">
                    <h4>"상세 설명"</h4>
                    <p>{description}</p>
                </div>

                <div class="warning-box">
                    <strong>"본인의 물건이 확실한가요?"</strong>
                    " 타인의 물건을 허위로 수령 신청할 경우 관련 법에 의해 처벌받을 수 있습니다."
                </div>

                <Show
                    when=move || show_form.get()
                    fallback=move || view! {
                        <button
                            class=button_class
                            disabled=button.disabled
                            on:click=move |_| {
                                if !button.disabled {
                                    set_show_form.set(true);
                                }
                            }
                        >
                            {button.label}
                        </button>
                    }
                >
                    <ClaimForm item_id=item_id on_cancel=Callback::new(move |_| set_show_form.set(false)) />
                </Show>

                <button class="receive-btn" on:click=move |_| confirm_receive()>
                    "방문 수령 안내"
                </button>
            </div>
        </main>
    }
}
