//! Session — the explicit current-user context.
//!
//! The signed-in user is carried as a value through the application rather
//! than living in ambient global state. Sign-in is a lookup against the user
//! collection: no passwords or tokens exist in this system.

use crate::types::{AccountStatus, Role, User};
use thiserror::Error;

/// Why a sign-in attempt was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignInError {
    #[error("no account matches {0:?}")]
    UnknownEmail(String),
    #[error("account {0:?} is inactive")]
    Inactive(String),
}

/// An authenticated dashboard session.
#[derive(Debug, Clone)]
pub struct Session {
    user: User,
}

impl Session {
    /// Resolve `email` against `directory` (case-insensitive) and open a
    /// session for the matching account. Inactive accounts are refused.
    pub fn sign_in(directory: &[User], email: &str) -> Result<Self, SignInError> {
        let user = directory
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .ok_or_else(|| SignInError::UnknownEmail(email.to_string()))?;

        if user.status == AccountStatus::Inactive {
            return Err(SignInError::Inactive(email.to_string()));
        }

        Ok(Self { user: user.clone() })
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    /// Admin-only surfaces (e.g. export) gate on this.
    pub fn is_admin(&self) -> bool {
        self.user.role == Role::Admin
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn user(email: &str, role: Role, status: AccountStatus) -> User {
        User {
            id: "1".into(),
            name: "Test User".into(),
            email: email.into(),
            phone: None,
            role,
            status,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn sign_in_matches_email_case_insensitively() {
        let directory = vec![user("alisher@email.com", Role::Admin, AccountStatus::Active)];
        let session = Session::sign_in(&directory, "Alisher@Email.com").unwrap();
        assert_eq!(session.user().email, "alisher@email.com");
        assert!(session.is_admin());
    }

    #[test]
    fn unknown_email_is_refused() {
        let directory = vec![user("a@email.com", Role::User, AccountStatus::Active)];
        assert_eq!(
            Session::sign_in(&directory, "b@email.com"),
            Err(SignInError::UnknownEmail("b@email.com".into()))
        );
    }

    #[test]
    fn inactive_account_is_refused() {
        let directory = vec![user("a@email.com", Role::User, AccountStatus::Inactive)];
        assert_eq!(
            Session::sign_in(&directory, "a@email.com"),
            Err(SignInError::Inactive("a@email.com".into()))
        );
    }
}
