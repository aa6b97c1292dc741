/// Reports whether a user session exists and exposes its credential.
pub trait SessionGate: Send + Sync {
    fn is_signed_in(&self) -> bool;
    fn session_token(&self) -> Option<String>;
}
