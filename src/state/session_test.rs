use super::*;

// =============================================================
// Role classification
// =============================================================

#[test]
fn admin_email_grants_admin_role() {
    let user = User::from_email(ADMIN_EMAIL);
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.id, "1");
    assert_eq!(user.email, ADMIN_EMAIL);
}

#[test]
fn admin_match_is_case_insensitive() {
    let user = User::from_email("Admin@ConsultaJa.com.BR");
    assert_eq!(user.role, Role::Admin);
    // The stored address is the canonical literal, not the typed casing.
    assert_eq!(user.email, ADMIN_EMAIL);
}

#[test]
fn other_emails_are_patients() {
    let user = User::from_email("maria@exemplo.com");
    assert_eq!(user.role, Role::Patient);
    assert_eq!(user.email, "maria@exemplo.com");
}

#[test]
fn admin_match_is_exact_not_fuzzy() {
    // Trailing whitespace or a different domain must never grant admin.
    assert_eq!(User::from_email("admin@consultaja.com.br ").role, Role::Patient);
    assert_eq!(User::from_email("admin@example.com").role, Role::Patient);
    assert_eq!(User::from_email("xadmin@consultaja.com.br").role, Role::Patient);
}

#[test]
fn patient_name_is_email_local_part() {
    assert_eq!(User::from_email("maria@exemplo.com").name, "maria");
    // Casing of the local part is preserved as entered.
    assert_eq!(User::from_email("Maria.Silva@exemplo.com").name, "Maria.Silva");
}

#[test]
fn patient_name_without_at_sign_is_whole_input() {
    assert_eq!(User::from_email("maria").name, "maria");
}

#[test]
fn patient_ids_are_not_stable_across_sign_ins() {
    let a = User::from_email("maria@exemplo.com");
    let b = User::from_email("maria@exemplo.com");
    assert_ne!(a.id, b.id);
}

// =============================================================
// SessionState transitions
// =============================================================

#[test]
fn default_state_has_no_user_and_is_not_loading() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(!state.is_admin());
}

#[test]
fn begin_sign_in_raises_loading() {
    let mut state = SessionState::default();
    state.begin_sign_in();
    assert!(state.loading);
}

#[test]
fn complete_sign_in_installs_identity_and_clears_loading() {
    let mut state = SessionState::default();
    let generation = state.begin_sign_in();
    assert!(state.complete_sign_in(generation, User::from_email(ADMIN_EMAIL)));
    assert!(!state.loading);
    assert!(state.is_admin());
}

#[test]
fn stale_completion_is_discarded() {
    let mut state = SessionState::default();
    let first = state.begin_sign_in();
    let second = state.begin_sign_in();

    // The superseded attempt must not install anything.
    assert!(!state.complete_sign_in(first, User::from_email(ADMIN_EMAIL)));
    assert!(state.user.is_none());
    assert!(state.loading);

    // The newest attempt wins.
    assert!(state.complete_sign_in(second, User::from_email("maria@exemplo.com")));
    assert!(!state.is_admin());
    assert!(!state.loading);
}

#[test]
fn failed_sign_in_keeps_prior_identity() {
    let mut state = SessionState::default();
    let generation = state.begin_sign_in();
    state.complete_sign_in(generation, User::from_email(ADMIN_EMAIL));

    let generation = state.begin_sign_in();
    state.fail_sign_in(generation);
    assert!(!state.loading);
    assert!(state.is_admin());
}

#[test]
fn sign_out_clears_identity_regardless_of_prior_state() {
    let mut state = SessionState::default();
    state.sign_out();
    assert!(state.user.is_none());
    assert!(!state.is_admin());

    let generation = state.begin_sign_in();
    state.complete_sign_in(generation, User::from_email(ADMIN_EMAIL));
    state.sign_out();
    assert!(state.user.is_none());
    assert!(!state.is_admin());
}

#[test]
fn sign_out_supersedes_inflight_sign_in() {
    let mut state = SessionState::default();
    let generation = state.begin_sign_in();
    state.sign_out();

    assert!(!state.complete_sign_in(generation, User::from_email(ADMIN_EMAIL)));
    assert!(state.user.is_none());
    assert!(!state.loading);
}
