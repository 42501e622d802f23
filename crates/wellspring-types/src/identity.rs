/// Who the active snapshot belongs to — an authenticated user or the
/// anonymous guest scope. Supplied by the auth provider at the app boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Guest,
    User {
        id: String,
        display_name: Option<String>,
    },
}

impl Identity {
    /// Storage key for this identity's snapshot. One snapshot per key.
    pub fn storage_key(&self) -> String {
        match self {
            Identity::Guest => "snapshot:guest".to_string(),
            Identity::User { id, .. } => format!("snapshot:{}", id),
        }
    }

    /// Id sent on coach requests. Guests are reported as "guest".
    pub fn user_id(&self) -> &str {
        match self {
            Identity::Guest => "guest",
            Identity::User { id, .. } => id,
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        match self {
            Identity::Guest => None,
            Identity::User { display_name, .. } => display_name.as_deref(),
        }
    }

    pub fn is_guest(&self) -> bool {
        matches!(self, Identity::Guest)
    }
}
