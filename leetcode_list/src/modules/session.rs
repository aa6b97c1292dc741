use crate::modules::utils::env_value;
use leetcode_list_libs::SessionGate;

/// セッション情報を環境変数から読み込む実装
///
/// `LEETCODE_USER`が設定されていればサインイン済みとみなし、`LEETCODE_COOKIE`をセッショントークンとして扱う
#[derive(Debug, Clone, Default)]
pub struct EnvSession {
    user: Option<String>,
    cookie: Option<String>,
}

impl EnvSession {
    pub fn new(user: Option<String>, cookie: Option<String>) -> Self {
        EnvSession {
            user: user.filter(|user| !user.trim().is_empty()),
            cookie: cookie.filter(|cookie| !cookie.trim().is_empty()),
        }
    }

    pub fn from_env() -> Self {
        EnvSession::new(env_value("LEETCODE_USER"), env_value("LEETCODE_COOKIE"))
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }
}

impl SessionGate for EnvSession {
    fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    fn session_token(&self) -> Option<String> {
        self.cookie.clone()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn signed_in_with_user_and_cookie() {
        let session = EnvSession::new(
            Some(String::from("alice")),
            Some(String::from("LEETCODE_SESSION=abc")),
        );

        assert!(session.is_signed_in());
        assert_eq!(session.user(), Some("alice"));
        assert_eq!(
            session.session_token(),
            Some(String::from("LEETCODE_SESSION=abc"))
        );
    }

    #[test]
    fn blank_values_are_treated_as_missing() {
        let session = EnvSession::new(Some(String::from("  ")), Some(String::new()));

        assert!(!session.is_signed_in());
        assert_eq!(session.session_token(), None);
    }

    #[test]
    fn signed_in_without_cookie() {
        let session = EnvSession::new(Some(String::from("alice")), None);

        assert!(session.is_signed_in());
        assert_eq!(session.session_token(), None);
    }
}
