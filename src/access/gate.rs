/// Role string carried by administrator accounts.
pub const ADMIN_ROLE: &str = "admin";

/// Where the viewer's authentication currently stands.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AuthStatus {
    /// The session lookup has not finished.
    Loading,
    /// No signed-in user.
    Anonymous,
    /// Signed in with `role` (`"admin"`, `"customer"`, ...).
    Authenticated {
        /// Account role.
        role: String,
    },
}

/// Capability check injected into the admin area.
pub trait AdminGate {
    /// Current authentication state.
    fn status(&self) -> AuthStatus;

    /// `true` only for a finished lookup of an administrator.
    fn is_authorized_admin(&self) -> bool {
        matches!(self.status(), AuthStatus::Authenticated { role } if role == ADMIN_ROLE)
    }
}

/// What the admin area should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminAccess {
    /// Still loading; show a spinner.
    Pending,
    /// Nobody signed in; send to the login page.
    RedirectToLogin,
    /// Signed in without admin rights.
    Denied,
    /// Render the admin pages.
    Granted,
}

impl AdminAccess {
    /// Login route for [`AdminAccess::RedirectToLogin`].
    pub const LOGIN_ROUTE: &'static str = "/login";
}

/// Decide what the admin area renders for the gate's current state.
pub fn resolve_admin_access(gate: &dyn AdminGate) -> AdminAccess {
    let access = match gate.status() {
        AuthStatus::Loading => AdminAccess::Pending,
        AuthStatus::Anonymous => AdminAccess::RedirectToLogin,
        AuthStatus::Authenticated { .. } if gate.is_authorized_admin() => AdminAccess::Granted,
        AuthStatus::Authenticated { .. } => AdminAccess::Denied,
    };
    tracing::debug!(?access, "admin gate resolved");
    access
}

/// Gate with a fixed status, for the CLI and tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticGate(pub AuthStatus);

impl StaticGate {
    /// Signed-in gate with `role`.
    pub fn signed_in(role: impl Into<String>) -> Self {
        Self(AuthStatus::Authenticated { role: role.into() })
    }
}

impl AdminGate for StaticGate {
    fn status(&self) -> AuthStatus {
        self.0.clone()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/access/gate.rs"]
mod tests;
