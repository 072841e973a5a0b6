use serde::{Deserialize, Serialize};

/// Role of the user driving the hosting screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    Admin,
    Agency,
    Employee,
    Validator,
}

/// Explicit scoping context passed into every call that needs it, instead
/// of an ambient global session store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthContext {
    pub user_id: String,
    pub agency_id: Option<String>,
    pub role: Role,
}

impl AuthContext {
    pub fn new(user_id: impl Into<String>, agency_id: Option<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            agency_id,
            role,
        }
    }
}
