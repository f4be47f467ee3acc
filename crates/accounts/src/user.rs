//! User documents and the login check.
//!
//! Passwords are stored and compared verbatim. There is no hashing and no
//! session or token issuance: a successful login only returns the public
//! profile.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use wayfarer_core::{Collection, Document, DomainResult, NewDocument, UserId, cast::optional_text, require_text};

/// Name of the field used to look users up.
pub const EMAIL_FIELD: &str = "email";

/// Stored user document.
///
/// # Invariants
/// - `email` is intended to be unique, but uniqueness is only checked by a
///   read before insert. Two concurrent registrations can both succeed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl User {
    /// Plain string comparison against the stored password.
    pub fn password_matches(&self, supplied: &str) -> bool {
        self.password == supplied
    }

    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

impl Document for User {
    type Id = UserId;

    const COLLECTION: Collection = Collection::Users;

    fn id(&self) -> UserId {
        self.id
    }
}

/// Registration payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl NewDocument for UserDraft {
    type Document = User;

    fn validate(&self) -> DomainResult<()> {
        require_text(Collection::Users, "name", self.name.as_deref())?;
        require_text(Collection::Users, EMAIL_FIELD, self.email.as_deref())?;
        require_text(Collection::Users, "password", self.password.as_deref())
    }
}

/// Public view of a user. Never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// Login payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    #[serde(default, deserialize_with = "optional_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub password: Option<String>,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LoginError {
    /// Unknown email or wrong password. The two cases are not distinguished.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

impl Credentials {
    /// Check these credentials against the user found by email, if any.
    pub fn verify(&self, user: Option<&User>) -> Result<UserProfile, LoginError> {
        match (user, self.password.as_deref()) {
            (Some(user), Some(password)) if user.password_matches(password) => Ok(user.profile()),
            _ => Err(LoginError::InvalidCredentials),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use wayfarer_core::DomainError;

    fn stored_user() -> User {
        User {
            id: UserId::new(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "s3cret".to_string(),
        }
    }

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[test]
    fn draft_requires_every_field() {
        let draft = UserDraft {
            name: Some("Ada".to_string()),
            email: None,
            password: Some("pw".to_string()),
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation("User validation failed: email is required".to_string())
        );
    }

    #[test]
    fn complete_draft_is_valid() {
        let draft = UserDraft {
            name: Some("Ada".to_string()),
            email: Some("ada@example.com".to_string()),
            password: Some("pw".to_string()),
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn stored_document_keeps_password_but_profile_drops_it() {
        let user = stored_user();
        let stored = serde_json::to_value(&user).unwrap();
        assert_eq!(stored["password"], "s3cret");
        assert_eq!(stored["_id"], user.id.to_string());

        let profile = serde_json::to_value(user.profile()).unwrap();
        assert!(profile.get("password").is_none());
        assert_eq!(profile["name"], "Ada");
        assert_eq!(profile["email"], "ada@example.com");
    }

    #[test]
    fn verify_accepts_matching_password() {
        let user = stored_user();
        let profile = credentials("ada@example.com", "s3cret").verify(Some(&user)).unwrap();
        assert_eq!(profile.id, user.id);
    }

    #[test]
    fn verify_rejects_wrong_password_and_unknown_user() {
        let user = stored_user();
        assert_eq!(
            credentials("ada@example.com", "nope").verify(Some(&user)),
            Err(LoginError::InvalidCredentials)
        );
        assert_eq!(
            credentials("ghost@example.com", "s3cret").verify(None),
            Err(LoginError::InvalidCredentials)
        );
    }

    #[test]
    fn verify_rejects_missing_password() {
        let user = stored_user();
        let creds = Credentials {
            email: Some(user.email.clone()),
            password: None,
        };
        assert_eq!(creds.verify(Some(&user)), Err(LoginError::InvalidCredentials));
    }

    #[test]
    fn numeric_password_is_read_as_text() {
        let creds: Credentials =
            serde_json::from_value(serde_json::json!({ "email": "ada@example.com", "password": 12345 }))
                .unwrap();
        assert_eq!(creds.password.as_deref(), Some("12345"));
        assert_eq!(creds.verify(Some(&stored_user())), Err(LoginError::InvalidCredentials));
    }

    proptest! {
        #[test]
        fn only_the_exact_password_verifies(supplied in ".{0,24}") {
            let user = stored_user();
            let result = credentials(&user.email, &supplied).verify(Some(&user));
            prop_assert_eq!(result.is_ok(), supplied == user.password);
        }
    }
}
