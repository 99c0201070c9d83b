//! Identity and routing collaborators of the editor.
//!
//! Both are stand-ins. The session always reports the same authenticated demo user, and the
//! route gate matches application and API paths but lets every request through unchanged. No
//! editing behaviour depends on either.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Signed-in user as reported by the session provider.
pub struct User {
    /// Account identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Authentication state visible to the application.
pub struct Session {
    /// Whether a user is signed in.
    pub is_authenticated: bool,
    /// The signed-in user.
    pub user: Option<User>,
}

impl Session {
    #[must_use]
    /// The fixed demo identity this deployment always reports.
    pub fn demo() -> Self {
        Self {
            is_authenticated: true,
            user: Some(User {
                id: "mock-user-id".to_string(),
                name: "Demo User".to_string(),
                email: "demo@interviewmaster.ai".to_string(),
            }),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::demo()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Outcome of filtering an inbound request.
pub enum GateDecision {
    /// The path is outside the gate's matcher; it was never consulted.
    Unmatched,
    /// The gate matched the path and let the request through unmodified.
    PassThrough,
}

#[derive(Clone, Copy, Debug, Default)]
/// Request filter over application and API paths that enforces nothing.
pub struct RouteGate;

impl RouteGate {
    #[must_use]
    /// Whether the gate is consulted for `path`.
    ///
    /// Matches the root, anything under `/api` or `/trpc`, and every other path that contains
    /// no dot (static assets) and no `_next` segment (framework internals).
    pub fn matches(self, path: &str) -> bool {
        if path == "/" || path.starts_with("/api") || path.starts_with("/trpc") {
            return true;
        }
        path.starts_with('/') && !path.contains('.') && !path.contains("_next")
    }

    #[must_use]
    /// Filters one request path. Matched requests are always passed through.
    pub fn filter(self, path: &str) -> GateDecision {
        if self.matches(path) {
            tracing::trace!(path, "Route gate passing request through");
            GateDecision::PassThrough
        } else {
            GateDecision::Unmatched
        }
    }
}

#[cfg(test)]
#[path = "tests/session.rs"]
mod tests;
