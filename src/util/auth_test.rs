use super::*;

// =============================================================
// Unauthenticated navigations
// =============================================================

#[test]
fn unauthenticated_non_login_path_redirects_to_login() {
    assert_eq!(guard_redirect(false, "/admin"), Some(LOGIN_PATH));
}

#[test]
fn unauthenticated_deep_path_redirects_to_login() {
    assert_eq!(guard_redirect(false, "/admin/settings"), Some(LOGIN_PATH));
}

#[test]
fn unauthenticated_root_redirects_to_login() {
    // Every non-login path requires a session, including paths outside
    // the admin area.
    assert_eq!(guard_redirect(false, "/"), Some(LOGIN_PATH));
}

#[test]
fn unauthenticated_login_page_does_not_redirect() {
    // No loop: the login page itself is reachable without a session.
    assert_eq!(guard_redirect(false, LOGIN_PATH), None);
}

// =============================================================
// Authenticated navigations
// =============================================================

#[test]
fn authenticated_login_page_redirects_home() {
    assert_eq!(guard_redirect(true, LOGIN_PATH), Some(HOME_PATH));
}

#[test]
fn authenticated_non_login_path_passes_through() {
    assert_eq!(guard_redirect(true, "/admin"), None);
    assert_eq!(guard_redirect(true, "/admin/settings"), None);
}

// =============================================================
// Route constants
// =============================================================

#[test]
fn login_path_lives_under_home() {
    assert!(LOGIN_PATH.starts_with(HOME_PATH));
    assert_ne!(LOGIN_PATH, HOME_PATH);
}
