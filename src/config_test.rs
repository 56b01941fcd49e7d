use super::*;

/// # Safety
/// Only touches `CREDENTIAL_FORMS_BASE_URL`; every test that sets it runs
/// through this helper and restores the unset state afterwards.
unsafe fn with_base_url_env(value: Option<&str>, f: impl FnOnce()) {
    unsafe {
        match value {
            Some(v) => std::env::set_var(BASE_URL_ENV, v),
            None => std::env::remove_var(BASE_URL_ENV),
        }
    }
    f();
    unsafe { std::env::remove_var(BASE_URL_ENV) };
}

#[test]
fn default_points_at_fixed_host() {
    let cfg = ApiConfig::default();
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.endpoint(FormKind::Login), "https://signup-login-woeu.onrender.com/login");
    assert_eq!(cfg.endpoint(FormKind::Signup), "https://signup-login-woeu.onrender.com/signup");
}

#[test]
fn new_trims_trailing_slash() {
    let cfg = ApiConfig::new("http://127.0.0.1:8080/");
    assert_eq!(cfg.base_url, "http://127.0.0.1:8080");
    assert_eq!(cfg.endpoint(FormKind::Login), "http://127.0.0.1:8080/login");
}

// Env-driven cases live in one test so they cannot race each other.
#[test]
fn from_env_override_and_fallbacks() {
    unsafe {
        with_base_url_env(Some("https://staging.example.test/"), || {
            assert_eq!(ApiConfig::from_env().base_url, "https://staging.example.test");
            // Only the explicit opt-in reads the variable.
            assert_eq!(ApiConfig::default().base_url, DEFAULT_BASE_URL);
            assert_eq!(
                crate::app::CredentialPages::new(&ApiConfig::default()).login.endpoint(),
                "https://signup-login-woeu.onrender.com/login"
            );
        });
        with_base_url_env(Some("   "), || {
            assert_eq!(ApiConfig::from_env(), ApiConfig::default());
        });
        with_base_url_env(None, || {
            assert_eq!(ApiConfig::from_env(), ApiConfig::default());
        });
    }
}
