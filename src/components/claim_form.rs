//! Claim Form Component
//!
//! Ownership evidence form shown under an item's details.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

use crate::api;
use crate::context::use_app_context;
use crate::dialog;
use crate::models::ClaimRequest;

const CLAIM_DONE: &str = "회수 신청이 완료되었습니다! (48시간 동안 선점됨)";
const CLAIM_FAILED: &str = "신청 실패";

/// Claim submission form
///
/// On success the page reloads so the server-confirmed status shows; the
/// form never assumes the claim went through on its own.
#[component]
pub fn ClaimForm(
    item_id: u32,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();

    let (address, set_address) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let proof_image = StoredValue::new_local(None::<File>);

    let pick_file = move |ev: web_sys::Event| {
        let picked = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        proof_image.set_value(picked);
    };

    let submit_claim = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let claim = ClaimRequest {
            item_id,
            address_guess: address.get_untracked(),
            description: description.get_untracked(),
        };
        let image = proof_image.get_value();
        set_submitting.set(true);

        spawn_local(async move {
            let token = ctx.session.token();
            match api::create_claim(&ctx.config, &claim, image.as_ref(), token.as_deref()).await {
                Ok(()) => {
                    log::info!("claim submitted for item {}", item_id);
                    dialog::alert(CLAIM_DONE);
                    ctx.router.reload();
                }
                Err(err) => {
                    log::warn!("claim for item {} failed: {}", item_id, err);
                    dialog::alert(&err.user_message(CLAIM_FAILED));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <form class="claim-form" on:submit=submit_claim>
            <h4>"증거 제출 (본인 물건 인증)"</h4>

            <label class="form-label">"증거 사진 첨부"</label>
            <input type="file" accept="image/*" on:change=pick_file />

            <label class="form-label">"상세 습득 장소 유추"</label>
            <input
                type="text"
                placeholder="예: A동 3층 화장실 세면대 위"
                prop:value=move || address.get()
                on:input=move |ev| set_address.set(event_target_value(&ev))
            />

            <label class="form-label">"상세 설명 (물건 특징)"</label>
            <textarea
                placeholder="예: 케이스 뒤에 라이언 스티커가 붙어있습니다."
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>

            <div class="form-actions">
                <button type="button" class="cancel-btn" on:click=move |_| on_cancel.run(())>
                    "취소"
                </button>
                <button type="submit" class="submit-btn" disabled=move || submitting.get()>
                    {move || if submitting.get() { "제출 중..." } else { "제출하기" }}
                </button>
            </div>
        </form>
    }
}
