//! Auth State
//!
//! Reducer over the authenticated-user slice, mirroring the habit store
//! pattern. The login flow itself lives outside this app; we only hold the
//! decoded user and the forced-logout notice.

use serde_json::Value;

pub const EXPIRED_INFO: &str = "Token has expired, log in again";

#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Value,
    pub expired_info: String,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            is_authenticated: false,
            user: Value::Null,
            expired_info: String::new(),
        }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug)]
pub enum AuthAction {
    SetUser(Value),
    /// `with_message` marks a forced logout caused by token expiry
    Logout { with_message: bool },
    ClearExpiredInfo,
}

pub fn reduce(state: AuthState, action: AuthAction) -> AuthState {
    match action {
        AuthAction::SetUser(payload) => AuthState {
            user: payload,
            is_authenticated: true,
            expired_info: state.expired_info,
        },
        AuthAction::Logout { with_message } => AuthState {
            user: Value::Null,
            is_authenticated: false,
            expired_info: if with_message {
                EXPIRED_INFO.to_string()
            } else {
                String::new()
            },
        },
        AuthAction::ClearExpiredInfo => AuthState {
            expired_info: String::new(),
            ..state
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_user_authenticates() {
        let next = reduce(AuthState::new(), AuthAction::SetUser(json!({"exp": 999})));
        assert!(next.is_authenticated);
        assert_eq!(next.user["exp"], 999);
    }

    #[test]
    fn forced_logout_sets_expired_info() {
        let signed_in = reduce(AuthState::new(), AuthAction::SetUser(json!({})));
        let next = reduce(signed_in, AuthAction::Logout { with_message: true });
        assert!(!next.is_authenticated);
        assert_eq!(next.user, Value::Null);
        assert_eq!(next.expired_info, EXPIRED_INFO);
    }

    #[test]
    fn plain_logout_has_no_message() {
        let signed_in = reduce(AuthState::new(), AuthAction::SetUser(json!({})));
        let next = reduce(signed_in, AuthAction::Logout { with_message: false });
        assert!(next.expired_info.is_empty());
    }

    #[test]
    fn clear_expired_info_keeps_the_rest() {
        let state = AuthState {
            is_authenticated: false,
            user: Value::Null,
            expired_info: EXPIRED_INFO.to_string(),
        };
        let next = reduce(state, AuthAction::ClearExpiredInfo);
        assert!(next.expired_info.is_empty());
        assert!(!next.is_authenticated);
    }
}
