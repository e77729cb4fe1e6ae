//! Session context.
//!
//! Explicit session value threaded through wizard construction instead
//! of a module-level reactive singleton. The wizard itself serves
//! anonymous visitors; a signed-in user only pre-fills the draft.

/// The signed-in user, when there is one.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

/// Per-wizard session context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub user: Option<SessionUser>,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn signed_in(user: SessionUser) -> Self {
        Self { user: Some(user) }
    }
}
