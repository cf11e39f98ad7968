//! Terms Modal Component
//!
//! Bottom sheet with the signup agreements.

use leptos::prelude::*;

use crate::signup::{SignupFlow, Term};

#[component]
pub fn TermsModal(
    flow: RwSignal<SignupFlow>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let all_checked = move || flow.with(|f| f.agreements.all());
    let mandatory_ok = move || flow.with(|f| f.agreements.mandatory_accepted());
    let busy = move || flow.with(SignupFlow::is_busy);

    view! {
        <div class="modal-backdrop" on:click=move |_| flow.update(SignupFlow::close_terms)></div>
        <div class="terms-sheet">
            <div class="terms-header">
                <h3>"약관 동의"</h3>
                <button class="close-btn" on:click=move |_| flow.update(SignupFlow::close_terms)>"×"</button>
            </div>

            <div class="terms-body">
                <div class="terms-all" on:click=move |_| flow.update(|f| f.agreements.toggle_all())>
                    <span class=move || if all_checked() { "check-dot checked" } else { "check-dot" }>"✓"</span>
                    <span class="terms-all-label">"전체 동의"</span>
                </div>
                <div class="terms-list">
                    {Term::ALL.iter().map(|term| {
                        let term = *term;
                        view! {
                            <TermItem
                                text=term.label()
                                checked=Signal::derive(move || flow.with(|f| f.agreements.is_checked(term)))
                                on_toggle=Callback::new(move |_| flow.update(|f| f.agreements.toggle(term)))
                            />
                        }
                    }).collect_view()}
                </div>
            </div>

            <div class="terms-footer">
                <button
                    class=move || if mandatory_ok() { "primary-btn" } else { "primary-btn inactive" }
                    disabled=busy
                    on:click=move |_| on_confirm.run(())
                >
                    {move || if busy() { "발송 중..." } else { "동의하고 인증번호 받기" }}
                </button>
            </div>
        </div>
    }
}

#[component]
fn TermItem(
    text: &'static str,
    checked: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="term-item" on:click=move |_| on_toggle.run(())>
            <span class=move || if checked.get() { "check-dot small checked" } else { "check-dot small" }>
                {move || checked.get().then_some("✓")}
            </span>
            <span class="term-text">{text}</span>
            <span class="term-chevron">"›"</span>
        </div>
    }
}
