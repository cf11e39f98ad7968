//! Item Registration Page
//!
//! Form for posting a found item with an optional photo.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

use crate::category::CATEGORIES;
use crate::context::use_app_context;
use crate::models::NewItem;
use crate::router::Route;

#[component]
pub fn RegisterItemPage() -> impl IntoView {
    let ctx = use_app_context();

    let inputs = RwSignal::new(NewItem {
        category: CATEGORIES[0].0.to_string(),
        ..NewItem::default()
    });
    let (submitting, set_submitting) = signal(false);
    let photo = StoredValue::new_local(None::<File>);

    let pick_file = move |ev: web_sys::Event| {
        let picked = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        photo.set_value(picked);
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let item = inputs.get_untracked();
        if item.title.trim().is_empty() || submitting.get_untracked() {
            return;
        }
        let image = photo.get_value();
        set_submitting.set(true);
        spawn_local(async move {
            let added = ctx.gateway.add_item(&item, image).await;
            set_submitting.set(false);
            if added {
                ctx.router.navigate(Route::ItemList);
            }
        });
    };

    view! {
        <main class="pc-main register-page">
            <h2>"습득물 등록"</h2>
            <form class="register-form" on:submit=submit>
                <label class="form-label">"물건 명칭"</label>
                <input
                    type="text"
                    prop:value=move || inputs.with(|i| i.title.clone())
                    on:input=move |ev| inputs.update(|i| i.title = event_target_value(&ev))
                />

                <label class="form-label">"카테고리"</label>
                <select
                    prop:value=move || inputs.with(|i| i.category.clone())
                    on:change=move |ev| inputs.update(|i| i.category = event_target_value(&ev))
                >
                    {CATEGORIES.iter().map(|(label, _)| view! {
                        <option value=*label>{*label}</option>
                    }).collect_view()}
                </select>

                <label class="form-label">"습득 날짜"</label>
                <input
                    type="date"
                    prop:value=move || inputs.with(|i| i.found_date.clone())
                    on:input=move |ev| inputs.update(|i| i.found_date = event_target_value(&ev))
                />

                <label class="form-label">"습득 건물 번호"</label>
                <input
                    type="text"
                    prop:value=move || inputs.with(|i| i.place_id.clone())
                    on:input=move |ev| inputs.update(|i| i.place_id = event_target_value(&ev))
                />

                <label class="form-label">"상세 위치"</label>
                <input
                    type="text"
                    placeholder="예: 2층 엘리베이터 앞"
                    prop:value=move || inputs.with(|i| i.detail_location.clone())
                    on:input=move |ev| inputs.update(|i| i.detail_location = event_target_value(&ev))
                />

                <label class="form-label">"상세 설명"</label>
                <textarea
                    prop:value=move || inputs.with(|i| i.description.clone())
                    on:input=move |ev| inputs.update(|i| i.description = event_target_value(&ev))
                ></textarea>

                <label class="form-label">"사진"</label>
                <input type="file" accept="image/*" on:change=pick_file />

                <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                    {move || if submitting.get() { "등록 중..." } else { "등록하기" }}
                </button>
            </form>
        </main>
    }
}
