//! Session resolution state.

/// Where a client session stands with endpoint discovery.
///
/// `Resolved` is sticky for the session lifetime; there is no automatic
/// transition back. A new session (process restart) starts over at
/// `Unresolved`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No probe pass has succeeded yet.
    #[default]
    Unresolved,
    /// A probe pass is in flight; concurrent resolvers wait for it.
    Resolving,
    /// A candidate answered; all session traffic goes here.
    Resolved(String),
}

impl SessionState {
    /// The cached winner, if this session has one.
    pub fn resolved_url(&self) -> Option<&str> {
        match self {
            SessionState::Resolved(url) => Some(url),
            _ => None,
        }
    }
}
