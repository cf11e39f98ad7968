//! Signup Page
//!
//! Profile entry, terms, then email code verification and registration.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::TermsModal;
use crate::context::{use_app_context, AppContext};
use crate::dialog;
use crate::generation::RequestGeneration;
use crate::router::Route;
use crate::signup::{format_countdown, SignupFlow, SignupScreen};

/// Ask the server to email a code to the drafted address
fn request_code(ctx: AppContext, flow: RwSignal<SignupFlow>, generation: RequestGeneration) {
    let email = flow.with_untracked(|f| f.profile.email.clone());
    let ticket = generation.begin();
    spawn_local(async move {
        let result = api::send_code(&ctx.config, &email).await;
        if !generation.is_current(ticket) {
            log::debug!("discarded stale send-code response");
            return;
        }
        match result {
            Ok(()) => {
                dialog::alert("이메일로 인증번호가 발송되었습니다.");
                flow.update(SignupFlow::code_sent);
            }
            Err(err) => {
                log::warn!("Email send error: {}", err);
                dialog::alert(&err.describe("인증번호 발송에 실패했습니다.", "서버와 통신할 수 없습니다."));
                flow.update(SignupFlow::code_send_failed);
            }
        }
    });
}

/// Verify the code, then register the drafted profile
fn verify_and_register(ctx: AppContext, flow: RwSignal<SignupFlow>, generation: RequestGeneration) {
    let (profile, code) = flow.with_untracked(|f| (f.profile.clone(), f.code().to_string()));
    let ticket = generation.begin();
    spawn_local(async move {
        let verified = api::verify_code(&ctx.config, &profile.email, &code).await;
        if !generation.is_current(ticket) {
            return;
        }
        if let Err(err) = verified {
            log::warn!("code verification failed: {}", err);
            dialog::alert(&err.describe("인증번호가 틀렸습니다.", "서버 에러가 발생했습니다."));
            flow.update(SignupFlow::submission_failed);
            return;
        }
        flow.update(SignupFlow::verified);

        match api::register(&ctx.config, &profile).await {
            Ok(auth) => {
                // The account exists now, so the session is kept even if the page moved on
                ctx.session.remember_token(&auth.token);
                ctx.session.login(auth.user);
                if !generation.is_current(ticket) {
                    return;
                }
                flow.update(SignupFlow::registered);
                dialog::alert(&format!("{}님 환영합니다! 가입이 완료되었습니다.", profile.name));
                ctx.router.navigate(Route::ItemList);
            }
            Err(err) => {
                log::error!("Register error: {}", err);
                if !generation.is_current(ticket) {
                    return;
                }
                dialog::alert(&err.describe("회원가입에 실패했습니다.", "서버 에러가 발생했습니다."));
                flow.update(SignupFlow::submission_failed);
            }
        }
    });
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let ctx = use_app_context();
    let flow = RwSignal::new(SignupFlow::new());
    let (email_touched, set_email_touched) = signal(false);

    let generation = RequestGeneration::new();
    on_cleanup({
        let generation = generation.clone();
        move || generation.invalidate()
    });
    let generation = StoredValue::new(generation);

    let screen = Memo::new(move |_| flow.with(SignupFlow::screen));
    let terms_open = Memo::new(move |_| flow.with(SignupFlow::terms_open));
    let countdown_running = Memo::new(move |_| flow.with(SignupFlow::countdown_running));

    // Dropping the interval cancels it; the slot is dropped with the page
    let ticker = StoredValue::new_local(None::<Interval>);
    Effect::new(move |_| {
        let running = countdown_running.get();
        ticker.update_value(|slot| {
            if !running {
                *slot = None;
            } else if slot.is_none() {
                *slot = Some(Interval::new(1_000, move || flow.update(SignupFlow::tick)));
            }
        });
    });

    let confirm_terms = Callback::new(move |_: ()| match flow.try_update(SignupFlow::confirm_terms) {
        Some(Ok(())) => request_code(ctx, flow, generation.get_value()),
        Some(Err(rejection)) => dialog::alert(&rejection.to_string()),
        None => {}
    });

    let resend = move |_| {
        if flow.try_update(SignupFlow::resend) == Some(true) {
            request_code(ctx, flow, generation.get_value());
        }
    };

    let submit_code = move |_| match flow.try_update(SignupFlow::begin_verification) {
        Some(Ok(())) => verify_and_register(ctx, flow, generation.get_value()),
        Some(Err(rejection)) => dialog::alert(&rejection.to_string()),
        None => {}
    };

    let back_to_profile = move |_| {
        generation.with_value(RequestGeneration::invalidate);
        flow.update(SignupFlow::back_to_profile);
    };

    let profile_valid = move || flow.with(|f| f.profile.is_valid());
    let busy = move || flow.with(SignupFlow::is_busy);

    let profile_step = move || view! {
        <div class="page-header">
            <button class="back-btn" on:click=move |_| ctx.router.back()>"←"</button>
            <h2>"회원가입"</h2>
        </div>

        <div class="signup-fields">
            <h4>"계정 정보"</h4>
            <div class="field-group">
                <label class="form-label">"아이디 (이메일)"</label>
                <input
                    type="email"
                    placeholder="example@tukorea.ac.kr"
                    prop:value=move || flow.with(|f| f.profile.email.clone())
                    on:input=move |ev| flow.update(|f| f.profile.email = event_target_value(&ev))
                    on:blur=move |_| set_email_touched.set(true)
                />
                <Show when=move || email_touched.get() && !flow.with(|f| f.profile.email_looks_valid())>
                    <span class="error-text">"올바른 이메일 형식을 입력해주세요"</span>
                </Show>
            </div>
            <div class="field-group">
                <label class="form-label">"비밀번호"</label>
                <input
                    type="password"
                    placeholder="비밀번호 입력"
                    prop:value=move || flow.with(|f| f.profile.password.clone())
                    on:input=move |ev| flow.update(|f| f.profile.password = event_target_value(&ev))
                />
            </div>

            <div class="divider"></div>

            <h4>"기본 정보"</h4>
            <div class="field-group">
                <label class="form-label">"이름"</label>
                <input
                    placeholder="이름 입력"
                    prop:value=move || flow.with(|f| f.profile.name.clone())
                    on:input=move |ev| flow.update(|f| f.profile.name = event_target_value(&ev))
                />
            </div>
            <div class="field-group">
                <label class="form-label">"휴대폰번호"</label>
                <input
                    placeholder="-없이 숫자만 입력"
                    maxlength="11"
                    prop:value=move || flow.with(|f| f.profile.phone_number.clone())
                    on:input=move |ev| flow.update(|f| f.profile.phone_number = event_target_value(&ev))
                />
            </div>
        </div>

        <button
            class=move || if profile_valid() { "primary-btn" } else { "primary-btn inactive" }
            disabled=move || !profile_valid()
            on:click=move |_| {
                flow.update(|f| {
                    f.open_terms();
                });
            }
        >
            "인증하고 가입하기"
        </button>
    };

    let code_step = move || view! {
        <div class="page-header">
            <button class="back-btn" on:click=back_to_profile>"←"</button>
            <h2>"이메일 인증"</h2>
        </div>

        <div class="code-step">
            <h3>"인증번호를 입력해주세요."</h3>
            <p class="hint">{move || format!("{}로 발송되었습니다.", flow.with(|f| f.profile.email.clone()))}</p>

            <div class="field-group">
                <label class="form-label">"인증번호"</label>
                <div class="code-input-row">
                    <input
                        placeholder="인증번호 6자리"
                        maxlength="6"
                        prop:value=move || flow.with(|f| f.code().to_string())
                        on:input=move |ev| flow.update(|f| f.set_code(&event_target_value(&ev)))
                    />
                    <span class="countdown">{move || format_countdown(flow.with(SignupFlow::remaining_secs))}</span>
                </div>
            </div>

            <div class="resend-row">
                "인증번호를 받지 못하셨나요? "
                <span class="resend-link" on:click=resend>"다시 받기"</span>
            </div>
        </div>

        <button
            class=move || if flow.with(SignupFlow::submit_enabled) { "primary-btn" } else { "primary-btn inactive" }
            disabled=move || !flow.with(SignupFlow::submit_enabled)
            on:click=submit_code
        >
            {move || if busy() { "가입 처리 중..." } else { "인증하고 가입 완료" }}
        </button>
    };

    view! {
        <div class="pc-container signup-page">
            <div class="signup-card">
                {move || match screen.get() {
                    SignupScreen::Profile => profile_step().into_any(),
                    SignupScreen::Code => code_step().into_any(),
                    SignupScreen::Done => view! {
                        <div class="page-message">"가입이 완료되었습니다."</div>
                    }.into_any(),
                }}
                <Show when=move || terms_open.get()>
                    <TermsModal flow=flow on_confirm=confirm_terms />
                </Show>
            </div>
        </div>
    }
}
