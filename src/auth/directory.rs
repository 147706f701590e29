use serde::{Deserialize, Serialize};

use crate::auth::error::AuthError;

/// Seeded demo account. The password is stored in plaintext on purpose:
/// the directory is a fixed in-process list and nothing ever leaves the
/// process, so there is no transport to protect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u32,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub name: String,
    pub role: String,
    pub avatar: String,
}

/// Public part of the user returned to the client after login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublicUser {
    pub id: u32,
    pub email: String,
    pub name: String,
    pub role: String,
    pub avatar: String,
}

impl From<&UserRecord> for PublicUser {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id,
            email: record.email.clone(),
            name: record.name.clone(),
            role: record.role.clone(),
            avatar: record.avatar.clone(),
        }
    }
}

/// Fixed list of demo accounts, loaded once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<UserRecord>,
}

impl UserDirectory {
    /// The four accounts the demo ships with.
    pub fn seeded() -> Self {
        let users = vec![
            UserRecord {
                id: 1,
                email: "admin@ztai-block.com".into(),
                password: "admin123".into(),
                name: "Admin User".into(),
                role: "Admin".into(),
                avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face".into(),
            },
            UserRecord {
                id: 2,
                email: "employee@ztai-block.com".into(),
                password: "emp123".into(),
                name: "John Smith".into(),
                role: "Employee".into(),
                avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face".into(),
            },
            UserRecord {
                id: 3,
                email: "client@ztai-block.com".into(),
                password: "client123".into(),
                name: "Sarah Johnson".into(),
                role: "Client".into(),
                avatar: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=150&h=150&fit=crop&crop=face".into(),
            },
            UserRecord {
                id: 4,
                email: "hr@ztai-block.com".into(),
                password: "hr123".into(),
                name: "Mike Wilson".into(),
                role: "HR".into(),
                avatar: "https://images.unsplash.com/photo-1560250097-0b93528c311a?w=150&h=150&fit=crop&crop=face".into(),
            },
        ];
        Self { users }
    }

    /// Exact-match lookup on both fields at once, case-sensitive.
    ///
    /// The error never says which field mismatched; unknown email and wrong
    /// password are indistinguishable to the caller.
    pub fn validate(&self, email: &str, password: &str) -> Result<PublicUser, AuthError> {
        self.users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .map(PublicUser::from)
            .ok_or(AuthError::InvalidCredentials)
    }

    /// Synthetic profile returned by the social-login simulation.
    pub fn social_profile(provider: &str) -> PublicUser {
        PublicUser {
            id: 999,
            email: format!("user@{provider}.com"),
            name: format!("{provider} User"),
            role: "Client".into(),
            avatar: "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=150&h=150&fit=crop&crop=face".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_login_succeeds_with_seeded_password() {
        let directory = UserDirectory::seeded();
        let user = directory
            .validate("admin@ztai-block.com", "admin123")
            .expect("seeded admin credentials should validate");
        assert_eq!(user.id, 1);
        assert_eq!(user.role, "Admin");
        assert_eq!(user.name, "Admin User");
    }

    #[test]
    fn every_seeded_account_validates_against_its_own_password() {
        let directory = UserDirectory::seeded();
        for (email, password, role) in [
            ("admin@ztai-block.com", "admin123", "Admin"),
            ("employee@ztai-block.com", "emp123", "Employee"),
            ("client@ztai-block.com", "client123", "Client"),
            ("hr@ztai-block.com", "hr123", "HR"),
        ] {
            let user = directory.validate(email, password).expect("seeded account");
            assert_eq!(user.email, email);
            assert_eq!(user.role, role);
        }
    }

    #[test]
    fn wrong_password_fails_with_the_fixed_message() {
        let directory = UserDirectory::seeded();
        let err = directory
            .validate("admin@ztai-block.com", "wrong")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid credentials or unauthorized access"
        );
    }

    #[test]
    fn unknown_email_fails_even_with_a_valid_password() {
        let directory = UserDirectory::seeded();
        assert!(directory.validate("nobody@ztai-block.com", "admin123").is_err());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let directory = UserDirectory::seeded();
        assert!(directory.validate("Admin@ztai-block.com", "admin123").is_err());
        assert!(directory.validate("admin@ztai-block.com", "Admin123").is_err());
    }

    #[test]
    fn serialized_profile_never_contains_the_password() {
        let directory = UserDirectory::seeded();
        let user = directory
            .validate("employee@ztai-block.com", "emp123")
            .expect("seeded account");
        let json = serde_json::to_string(&user).expect("serialize profile");
        assert!(!json.contains("emp123"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn social_profile_is_derived_from_the_provider() {
        let user = UserDirectory::social_profile("google");
        assert_eq!(user.id, 999);
        assert_eq!(user.email, "user@google.com");
        assert_eq!(user.role, "Client");
    }
}
