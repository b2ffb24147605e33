//! Session-related types for admin authentication.

use serde::{Deserialize, Serialize};

/// Session-stored admin identity.
///
/// Minimal data stored in the session to identify the logged-in admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// Admin's login username.
    pub username: String,
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the current logged-in admin.
    pub const CURRENT_ADMIN: &str = "current_admin";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_roundtrip() {
        let admin = CurrentAdmin {
            username: "admin".to_string(),
        };

        let json = serde_json::to_string(&admin).unwrap();
        let back: CurrentAdmin = serde_json::from_str(&json).unwrap();
        assert_eq!(back.username, "admin");
    }
}
