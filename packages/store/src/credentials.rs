//! # Credential store and session flow
//!
//! [`CredentialStore`] owns the `users` list and the session marker inside a
//! [`KeyValueStorage`]. It is the whole of "authentication" in this app:
//! credentials are compared in plaintext, the token is fabricated, and the
//! dashboard is gated on nothing but [`CredentialStore::is_logged_in`].
//!
//! | Operation | Effect on storage |
//! |-----------|-------------------|
//! | [`users`](CredentialStore::users) | seeds the default account when `users` is absent |
//! | [`login`](CredentialStore::login) | writes `authToken` + `LoggedIn` on an exact email/password match |
//! | [`register`](CredentialStore::register) | appends to `users`, then logs in |
//! | [`logout`](CredentialStore::logout) | removes `authToken` + `LoggedIn` |
//!
//! Email uniqueness is checked against the list in this store only, and the
//! token's `exp` is written but never read back.

use thiserror::Error;

use crate::config::SessionConfig;
use crate::models::User;
use crate::session::{SessionToken, TokenError, AUTH_TOKEN_KEY, LOGGED_IN_KEY, USERS_KEY};
use crate::storage::{KeyValueStorage, StorageError};

/// Errors surfaced by the login/registration form. `Display` is the banner text.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Email already registered")]
    EmailTaken,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Stored users could not be read: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Could not create session: {0}")]
    Token(#[from] TokenError),
}

/// The account seeded on first run.
pub fn default_user() -> User {
    User {
        id: "1".to_string(),
        name: "Mahesh Dubey".to_string(),
        email: "mahesh@example.com".to_string(),
        password: "mahesh123".to_string(),
    }
}

/// Registered users and the session marker, kept in a key/value store.
#[derive(Clone, Debug)]
pub struct CredentialStore<S: KeyValueStorage> {
    storage: S,
    config: SessionConfig,
}

impl<S: KeyValueStorage> CredentialStore<S> {
    pub fn new(storage: S, config: SessionConfig) -> Self {
        Self { storage, config }
    }

    /// All registered users. Seeds and persists the default account when the
    /// `users` key has never been written.
    pub fn users(&self) -> Result<Vec<User>, AuthError> {
        match self.storage.get_item(USERS_KEY) {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => {
                let users = vec![default_user()];
                self.save_users(&users)?;
                Ok(users)
            }
        }
    }

    fn save_users(&self, users: &[User]) -> Result<(), AuthError> {
        let raw = serde_json::to_string(users)?;
        self.storage.set_item(USERS_KEY, &raw)?;
        Ok(())
    }

    /// Log in with an exact (case-sensitive) email and password match.
    pub fn login(&self, email: &str, password: &str) -> Result<SessionToken, AuthError> {
        require("Email", email)?;
        require("Password", password)?;

        let users = self.users()?;
        let user = users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .ok_or(AuthError::InvalidCredentials)?;
        self.start_session(user)
    }

    /// Register a new account and log it in.
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<SessionToken, AuthError> {
        require("Name", name)?;
        require("Email", email)?;
        require("Password", password)?;

        let mut users = self.users()?;
        if users.iter().any(|u| u.email == email) {
            return Err(AuthError::EmailTaken);
        }

        let user = User {
            id: (users.len() + 1).to_string(),
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        users.push(user.clone());
        self.save_users(&users)?;
        self.start_session(&user)
    }

    fn start_session(&self, user: &User) -> Result<SessionToken, AuthError> {
        let token = SessionToken::new(user, self.config.ttl_secs);
        let encoded = token.encode(&self.config.secret)?;
        self.storage.set_item(AUTH_TOKEN_KEY, &encoded)?;
        self.storage.set_item(LOGGED_IN_KEY, "true")?;
        Ok(token)
    }

    /// Clear both session entries.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.storage.remove_item(AUTH_TOKEN_KEY)?;
        self.storage.remove_item(LOGGED_IN_KEY)?;
        Ok(())
    }

    /// Whether the dashboard may be shown: a non-empty token and `LoggedIn == "true"`.
    pub fn is_logged_in(&self) -> bool {
        let has_token = self
            .storage
            .get_item(AUTH_TOKEN_KEY)
            .is_some_and(|t| !t.is_empty());
        has_token && self.storage.get_item(LOGGED_IN_KEY).as_deref() == Some("true")
    }

    /// The claims of the stored token, when there is one and it decodes.
    pub fn current_session(&self) -> Option<SessionToken> {
        let raw = self.storage.get_item(AUTH_TOKEN_KEY)?;
        SessionToken::decode(&raw).ok()
    }
}

fn require(field: &'static str, value: &str) -> Result<(), AuthError> {
    if value.trim().is_empty() {
        return Err(AuthError::MissingField(field));
    }
    Ok(())
}
