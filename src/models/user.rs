use serde::{Deserialize, Serialize};

/// The currently signed-in user.
///
/// There is no real credential check; the record only personalizes the
/// dashboard and scopes the local data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    /// Build a user from an email address, using the local part as the
    /// display name.
    pub fn from_email(email: &str) -> Self {
        let name = email.split('@').next().unwrap_or(email).to_string();
        Self {
            name,
            email: email.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_email_local_part() {
        let user = User::from_email("alice@example.com");
        assert_eq!(user.name, "alice");
        assert_eq!(user.email, "alice@example.com");
    }
}
