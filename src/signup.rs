//! Signup Flow
//!
//! State machine behind the signup wizard:
//! `Draft -> TermsPending -> CodeSent -> Verified -> Registered`.
//!
//! The page owns one [`SignupFlow`] and calls its transitions from event
//! handlers and request callbacks. Nothing here touches the browser, so the
//! whole flow is testable on the host.

use crate::models::SignupProfile;

/// Lifetime of an emailed verification code
pub const CODE_TTL_SECS: u32 = 180;
pub const CODE_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupStep {
    /// Profile entry
    Draft,
    /// Terms modal open (or its code request in flight)
    TermsPending,
    /// Waiting for the emailed code
    CodeSent,
    /// Code accepted, registration in flight
    Verified,
    Registered,
}

/// Which form the page shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupScreen {
    Profile,
    Code,
    Done,
}

// ========================
// Terms
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    Service,
    Privacy,
    Location,
    EmailVerification,
    Marketing,
}

impl Term {
    pub const ALL: [Term; 5] = [
        Term::Service,
        Term::Privacy,
        Term::Location,
        Term::EmailVerification,
        Term::Marketing,
    ];

    pub fn is_mandatory(self) -> bool {
        !matches!(self, Term::Marketing)
    }

    pub fn label(self) -> &'static str {
        match self {
            Term::Service => "서비스 이용약관 (필수)",
            Term::Privacy => "개인정보 수집 및 이용 (필수)",
            Term::Location => "위치기반 서비스 이용약관 (필수)",
            Term::EmailVerification => "이메일 인증 진행 동의 (필수)",
            Term::Marketing => "이벤트 마케팅 수신 (선택)",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Checklist state of the terms modal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Agreements {
    all: bool,
    terms: [bool; 5],
}

impl Agreements {
    pub fn all(&self) -> bool {
        self.all
    }

    pub fn is_checked(&self, term: Term) -> bool {
        self.terms[term.index()]
    }

    /// Set every term to the inverse of the current "all" indicator
    pub fn toggle_all(&mut self) {
        let value = !self.all;
        self.all = value;
        self.terms = [value; 5];
    }

    /// Flip one term; "all" follows whether every listed term is now checked
    pub fn toggle(&mut self, term: Term) {
        let slot = &mut self.terms[term.index()];
        *slot = !*slot;
        self.all = self.terms.iter().all(|checked| *checked);
    }

    pub fn mandatory_accepted(&self) -> bool {
        Term::ALL
            .iter()
            .filter(|t| t.is_mandatory())
            .all(|t| self.is_checked(*t))
    }
}

// ========================
// Countdown
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Default for Countdown {
    fn default() -> Self {
        Self { remaining: CODE_TTL_SECS }
    }
}

impl Countdown {
    pub fn restart(&mut self) {
        self.remaining = CODE_TTL_SECS;
    }

    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }
}

/// `MM:SS`
pub fn format_countdown(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

// ========================
// Rejections
// ========================

/// Why the terms modal refused to continue
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TermsRejection {
    #[error("필수 약관에 모두 동의해주세요.")]
    MandatoryMissing,
}

/// Why a code submission was blocked before any request
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CodeRejection {
    #[error("입력 시간이 초과되었습니다. 다시 받아주세요.")]
    Expired,
    #[error("인증번호 6자리를 입력해주세요.")]
    WrongLength,
}

// ========================
// Flow
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct SignupFlow {
    pub profile: SignupProfile,
    pub agreements: Agreements,
    code: String,
    countdown: Countdown,
    step: SignupStep,
    busy: bool,
}

impl Default for SignupFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupFlow {
    pub fn new() -> Self {
        Self {
            profile: SignupProfile::default(),
            agreements: Agreements::default(),
            code: String::new(),
            countdown: Countdown::default(),
            step: SignupStep::Draft,
            busy: false,
        }
    }

    pub fn step(&self) -> SignupStep {
        self.step
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn remaining_secs(&self) -> u32 {
        self.countdown.remaining()
    }

    /// The profile form stays behind the terms modal; the code form stays
    /// up until registration ends
    pub fn screen(&self) -> SignupScreen {
        match self.step {
            SignupStep::Draft | SignupStep::TermsPending => SignupScreen::Profile,
            SignupStep::CodeSent | SignupStep::Verified => SignupScreen::Code,
            SignupStep::Registered => SignupScreen::Done,
        }
    }

    pub fn terms_open(&self) -> bool {
        self.step == SignupStep::TermsPending && !self.busy
    }

    /// Countdown only runs while a code is awaited
    pub fn countdown_running(&self) -> bool {
        self.step == SignupStep::CodeSent && !self.countdown.is_expired()
    }

    pub fn open_terms(&mut self) -> bool {
        if self.step != SignupStep::Draft || !self.profile.is_valid() {
            return false;
        }
        self.step = SignupStep::TermsPending;
        true
    }

    pub fn close_terms(&mut self) {
        if self.step == SignupStep::TermsPending && !self.busy {
            self.step = SignupStep::Draft;
        }
    }

    /// Accept the terms and start the code request
    pub fn confirm_terms(&mut self) -> Result<(), TermsRejection> {
        if !self.agreements.mandatory_accepted() {
            return Err(TermsRejection::MandatoryMissing);
        }
        self.busy = true;
        Ok(())
    }

    /// Ask for a fresh code from step 2. Returns false if a request is in flight.
    pub fn resend(&mut self) -> bool {
        if self.busy || self.step != SignupStep::CodeSent {
            return false;
        }
        self.code.clear();
        self.busy = true;
        true
    }

    pub fn code_sent(&mut self) {
        self.busy = false;
        self.countdown.restart();
        self.step = SignupStep::CodeSent;
    }

    /// A failed send from the modal drops back to the profile form;
    /// a failed resend stays on step 2.
    pub fn code_send_failed(&mut self) {
        self.busy = false;
        if self.step == SignupStep::TermsPending {
            self.step = SignupStep::Draft;
        }
    }

    pub fn set_code(&mut self, input: &str) {
        self.code = input.chars().take(CODE_LEN).collect();
    }

    pub fn submit_enabled(&self) -> bool {
        self.step == SignupStep::CodeSent && !self.busy && self.code.chars().count() >= CODE_LEN
    }

    pub fn check_submission(&self) -> Result<(), CodeRejection> {
        if self.countdown.is_expired() {
            return Err(CodeRejection::Expired);
        }
        if self.code.chars().count() != CODE_LEN {
            return Err(CodeRejection::WrongLength);
        }
        Ok(())
    }

    /// Start verifying the entered code
    pub fn begin_verification(&mut self) -> Result<(), CodeRejection> {
        self.check_submission()?;
        self.busy = true;
        Ok(())
    }

    pub fn verified(&mut self) {
        if self.step == SignupStep::CodeSent {
            self.step = SignupStep::Verified;
        }
    }

    pub fn registered(&mut self) {
        if self.step == SignupStep::Verified {
            self.step = SignupStep::Registered;
            self.busy = false;
        }
    }

    /// Verification or registration was refused; the code can be retried
    pub fn submission_failed(&mut self) {
        self.busy = false;
        if self.step == SignupStep::Verified {
            self.step = SignupStep::CodeSent;
        }
    }

    pub fn back_to_profile(&mut self) {
        self.busy = false;
        self.countdown.restart();
        self.step = SignupStep::Draft;
    }

    pub fn tick(&mut self) {
        if self.step == SignupStep::CodeSent {
            self.countdown.tick();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_flow() -> SignupFlow {
        let mut flow = SignupFlow::new();
        flow.profile = SignupProfile {
            email: "lee@tukorea.ac.kr".into(),
            password: "pass1234".into(),
            name: "이영희".into(),
            phone_number: "01012345678".into(),
        };
        flow
    }

    fn accept_mandatory(agreements: &mut Agreements) {
        for term in Term::ALL.iter().filter(|t| t.is_mandatory()) {
            agreements.toggle(*term);
        }
    }

    fn flow_on_code_step() -> SignupFlow {
        let mut flow = filled_flow();
        assert!(flow.open_terms());
        accept_mandatory(&mut flow.agreements);
        flow.confirm_terms().unwrap();
        flow.code_sent();
        flow
    }

    #[test]
    fn test_toggle_all_sets_every_term() {
        let mut agreements = Agreements::default();
        agreements.toggle_all();
        assert!(agreements.all());
        assert!(Term::ALL.iter().all(|t| agreements.is_checked(*t)));

        agreements.toggle_all();
        assert!(!agreements.all());
        assert!(Term::ALL.iter().all(|t| !agreements.is_checked(*t)));
    }

    #[test]
    fn test_toggle_all_from_partial_state_checks_everything() {
        let mut agreements = Agreements::default();
        agreements.toggle(Term::Privacy);
        agreements.toggle_all();
        assert!(agreements.all());
        assert!(agreements.is_checked(Term::Privacy));
        assert!(agreements.is_checked(Term::Marketing));
    }

    #[test]
    fn test_all_indicator_needs_optional_term_too() {
        let mut agreements = Agreements::default();
        accept_mandatory(&mut agreements);
        assert!(agreements.mandatory_accepted());
        assert!(!agreements.all());

        agreements.toggle(Term::Marketing);
        assert!(agreements.all());

        agreements.toggle(Term::Service);
        assert!(!agreements.all());
        assert!(!agreements.mandatory_accepted());
    }

    #[test]
    fn test_last_mandatory_term_flips_all_when_optional_checked() {
        let mut agreements = Agreements::default();
        agreements.toggle(Term::Marketing);
        agreements.toggle(Term::Service);
        agreements.toggle(Term::Privacy);
        agreements.toggle(Term::Location);
        assert!(!agreements.all());
        agreements.toggle(Term::EmailVerification);
        assert!(agreements.all());
    }

    #[test]
    fn test_open_terms_requires_valid_profile() {
        let mut flow = SignupFlow::new();
        assert!(!flow.open_terms());
        assert_eq!(flow.step(), SignupStep::Draft);

        let mut flow = filled_flow();
        assert!(flow.open_terms());
        assert_eq!(flow.step(), SignupStep::TermsPending);
        assert!(flow.terms_open());

        flow.close_terms();
        assert_eq!(flow.step(), SignupStep::Draft);
    }

    #[test]
    fn test_confirm_terms_requires_mandatory() {
        let mut flow = filled_flow();
        flow.open_terms();
        flow.agreements.toggle(Term::Marketing);
        assert_eq!(flow.confirm_terms(), Err(TermsRejection::MandatoryMissing));
        assert!(!flow.is_busy());

        accept_mandatory(&mut flow.agreements);
        assert_eq!(flow.confirm_terms(), Ok(()));
        assert!(flow.is_busy());
        assert!(!flow.terms_open());
        assert_eq!(flow.screen(), SignupScreen::Profile);
    }

    #[test]
    fn test_send_success_enters_code_step_with_fresh_countdown() {
        let flow = flow_on_code_step();
        assert_eq!(flow.step(), SignupStep::CodeSent);
        assert_eq!(flow.remaining_secs(), 180);
        assert!(flow.countdown_running());
        assert_eq!(flow.screen(), SignupScreen::Code);
    }

    #[test]
    fn test_send_failure_returns_to_profile() {
        let mut flow = filled_flow();
        flow.open_terms();
        accept_mandatory(&mut flow.agreements);
        flow.confirm_terms().unwrap();
        flow.code_send_failed();
        assert_eq!(flow.step(), SignupStep::Draft);
        assert!(!flow.is_busy());
    }

    #[test]
    fn test_countdown_ticks_and_stops_at_zero() {
        let mut flow = flow_on_code_step();
        flow.tick();
        assert_eq!(flow.remaining_secs(), 179);
        for _ in 0..500 {
            flow.tick();
        }
        assert_eq!(flow.remaining_secs(), 0);
        assert!(!flow.countdown_running());
    }

    #[test]
    fn test_countdown_only_ticks_on_code_step() {
        let mut flow = filled_flow();
        flow.tick();
        assert_eq!(flow.remaining_secs(), 180);
    }

    #[test]
    fn test_back_to_profile_resets_countdown() {
        let mut flow = flow_on_code_step();
        flow.tick();
        flow.tick();
        flow.back_to_profile();
        assert_eq!(flow.step(), SignupStep::Draft);
        assert_eq!(flow.remaining_secs(), 180);
        flow.tick();
        assert_eq!(flow.remaining_secs(), 180);
    }

    #[test]
    fn test_expired_code_rejected_even_with_valid_length() {
        let mut flow = flow_on_code_step();
        flow.set_code("123456");
        for _ in 0..CODE_TTL_SECS {
            flow.tick();
        }
        assert_eq!(flow.check_submission(), Err(CodeRejection::Expired));
        assert_eq!(flow.begin_verification(), Err(CodeRejection::Expired));
        assert!(!flow.is_busy());
    }

    #[test]
    fn test_code_length_rules() {
        let mut flow = flow_on_code_step();
        flow.set_code("12345");
        assert!(!flow.submit_enabled());
        assert_eq!(flow.check_submission(), Err(CodeRejection::WrongLength));

        flow.set_code("1234567");
        assert_eq!(flow.code(), "123456");
        assert!(flow.submit_enabled());
        assert_eq!(flow.check_submission(), Ok(()));
    }

    #[test]
    fn test_verify_then_register() {
        let mut flow = flow_on_code_step();
        flow.set_code("000111");
        flow.begin_verification().unwrap();
        assert!(!flow.submit_enabled());
        flow.verified();
        assert_eq!(flow.step(), SignupStep::Verified);
        assert_eq!(flow.screen(), SignupScreen::Code);
        flow.registered();
        assert_eq!(flow.step(), SignupStep::Registered);
        assert_eq!(flow.screen(), SignupScreen::Done);
        assert!(!flow.is_busy());
    }

    #[test]
    fn test_registration_refused_allows_retry() {
        let mut flow = flow_on_code_step();
        flow.set_code("000111");
        flow.begin_verification().unwrap();
        flow.verified();
        flow.submission_failed();
        assert_eq!(flow.step(), SignupStep::CodeSent);
        assert!(flow.submit_enabled());
    }

    #[test]
    fn test_resend_clears_code_and_keeps_step() {
        let mut flow = flow_on_code_step();
        flow.set_code("999");
        flow.tick();
        assert!(flow.resend());
        assert_eq!(flow.code(), "");
        assert!(!flow.resend(), "no second send while one is in flight");

        flow.code_send_failed();
        assert_eq!(flow.step(), SignupStep::CodeSent);
        assert_eq!(flow.remaining_secs(), 179);

        assert!(flow.resend());
        flow.code_sent();
        assert_eq!(flow.remaining_secs(), 180);
    }

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(180), "03:00");
        assert_eq!(format_countdown(61), "01:01");
        assert_eq!(format_countdown(9), "00:09");
        assert_eq!(format_countdown(0), "00:00");
    }
}
