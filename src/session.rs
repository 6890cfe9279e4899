//! Session Guard
//!
//! Decodes the JWT payload held by the session collaborator and gates every
//! state-changing action on token expiry. Expiry forces a logout before any
//! API call can be issued.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use leptos::prelude::*;
use serde_json::Value;

use crate::auth::{self, AuthAction, AuthState};

const TOKEN_KEY: &str = "jwtToken";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    MalformedToken,
    BadPayload(String),
}

/// Decode the claims segment of a JWT without verifying the signature.
/// Verification is the server's job; the client only needs `exp`.
pub fn decode_payload(token: &str) -> Result<Value, SessionError> {
    let payload = token.split('.').nth(1).ok_or(SessionError::MalformedToken)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| SessionError::MalformedToken)?;
    serde_json::from_slice(&bytes).map_err(|e| SessionError::BadPayload(e.to_string()))
}

/// `exp` is seconds since epoch; `now_secs` is `Date::now() / 1000` at call sites
pub fn is_expired(exp: f64, now_secs: f64) -> bool {
    exp < now_secs
}

fn now_secs() -> f64 {
    js_sys::Date::now() / 1000.0
}

/// Token read once at app start. Writes stay inside this module.
pub fn stored_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(TOKEN_KEY).ok()?
}

fn clear_stored_token() {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

#[derive(Clone)]
struct ActiveSession {
    token: String,
    exp: f64,
}

/// App-wide session handle provided via context
#[derive(Clone, Copy)]
pub struct SessionContext {
    auth: RwSignal<AuthState>,
    active: RwSignal<Option<ActiveSession>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            auth: RwSignal::new(AuthState::new()),
            active: RwSignal::new(None),
        }
    }

    /// Reactive view of the auth slice
    pub fn auth(&self) -> RwSignal<AuthState> {
        self.auth
    }

    /// Explicit init at app start with the token handed over by the session
    /// collaborator. An undecodable token leaves the session signed out.
    pub fn init(&self, token: &str) {
        match decode_payload(token) {
            Ok(payload) => {
                let exp = payload.get("exp").and_then(Value::as_f64).unwrap_or(0.0);
                self.active.set(Some(ActiveSession {
                    token: token.to_string(),
                    exp,
                }));
                self.dispatch(AuthAction::SetUser(payload));
            }
            Err(err) => {
                web_sys::console::error_1(&format!("invalid session token: {err:?}").into());
            }
        }
    }

    pub fn logout(&self, expired: bool) {
        clear_stored_token();
        self.clear(expired);
    }

    /// Guard check before any state-changing action. Returns the bearer token
    /// when the session is live; on expiry performs the forced logout and
    /// returns None, so the caller never reaches the API client.
    pub fn guard(&self) -> Option<String> {
        let was_active = self.active.with_untracked(Option::is_some);
        let token = self.guard_at(now_secs());
        if was_active && token.is_none() {
            clear_stored_token();
        }
        token
    }

    /// Expiry check against an explicit clock, separate from the browser
    /// storage side effect
    fn guard_at(&self, now_secs: f64) -> Option<String> {
        let session = self.active.get_untracked()?;
        if is_expired(session.exp, now_secs) {
            self.clear(true);
            return None;
        }
        Some(session.token)
    }

    fn clear(&self, expired: bool) {
        self.active.set(None);
        self.dispatch(AuthAction::Logout {
            with_message: expired,
        });
    }

    fn dispatch(&self, action: AuthAction) {
        self.auth
            .update(|state| *state = auth::reduce(std::mem::take(state), action));
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the session context
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_token(payload: &Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
        format!("{header}.{body}.sig")
    }

    #[test]
    fn decodes_exp_from_a_well_formed_token() {
        let token = make_token(&json!({"id": "u1", "exp": 1700000000}));
        let payload = decode_payload(&token).unwrap();
        assert_eq!(payload["exp"].as_f64(), Some(1700000000.0));
        assert_eq!(payload["id"], "u1");
    }

    #[test]
    fn rejects_tokens_without_a_payload_segment() {
        assert_eq!(
            decode_payload("not-a-jwt"),
            Err(SessionError::MalformedToken)
        );
    }

    #[test]
    fn rejects_garbage_base64() {
        assert_eq!(
            decode_payload("a.!!!!.c"),
            Err(SessionError::MalformedToken)
        );
    }

    #[test]
    fn rejects_non_json_payloads() {
        let body = URL_SAFE_NO_PAD.encode(b"plain text");
        let token = format!("h.{body}.s");
        assert!(matches!(
            decode_payload(&token),
            Err(SessionError::BadPayload(_))
        ));
    }

    #[test]
    fn expiry_comparison_is_strict() {
        assert!(is_expired(100.0, 100.5));
        assert!(!is_expired(100.5, 100.0));
        assert!(!is_expired(100.0, 100.0));
    }

    #[test]
    fn live_session_guard_returns_the_bearer_token() {
        let session = SessionContext::new();
        let token = make_token(&json!({"id": "u1", "exp": 200}));
        session.init(&token);

        assert_eq!(session.guard_at(150.0), Some(token));
        assert!(session.auth().with_untracked(|a| a.is_authenticated));
    }

    #[test]
    fn expired_session_forces_logout_and_blocks_the_menu() {
        use crate::auth::EXPIRED_INFO;
        use crate::ui::ManageUi;

        let session = SessionContext::new();
        session.init(&make_token(&json!({"id": "u1", "exp": 100})));
        assert!(session.auth().with_untracked(|a| a.is_authenticated));

        // Row-menu handler shape: guard first, then the transition and the
        // request. An expired guard must leave both unreached.
        let mut ui = ManageUi::new();
        let mut requests = 0;
        if session.guard_at(150.0).is_some() {
            ui.open_menu("a", "Read");
            requests += 1;
        }

        assert!(!ui.menu_open);
        assert_eq!(ui, ManageUi::new());
        assert_eq!(requests, 0);

        let auth = session.auth();
        assert!(auth.with_untracked(|a| !a.is_authenticated));
        assert_eq!(auth.with_untracked(|a| a.expired_info.clone()), EXPIRED_INFO);

        // The session is gone for good: an earlier clock cannot revive it
        assert_eq!(session.guard_at(50.0), None);
    }
}
