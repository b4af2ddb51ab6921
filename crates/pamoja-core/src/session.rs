//! Admin Session
//!
//! A client-side credential check gating the dashboard. The pair is
//! compiled into the bundle and visible to anyone who reads it; there is no
//! hashing, lockout or rate limiting.

use serde::{Deserialize, Serialize};

use crate::error::{HubError, Result};

pub const ADMIN_USERNAME: &str = "BT";
pub const ADMIN_PASSWORD: &str = "2025#wBT";

/// Check a login attempt against the compiled-in pair
pub fn login(username: &str, password: &str) -> Result<()> {
    if username == ADMIN_USERNAME && password == ADMIN_PASSWORD {
        Ok(())
    } else {
        Err(HubError::InvalidCredentials)
    }
}

/// In-memory admin session state, lost on reload
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSession {
    authenticated: bool,

    /// Message shown under the login form after a failed attempt
    login_error: Option<String>,
}

impl AdminSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt a login; failure leaves the session unauthenticated
    pub fn attempt(&mut self, username: &str, password: &str) -> Result<()> {
        match login(username, password) {
            Ok(()) => {
                self.authenticated = true;
                self.login_error = None;
                tracing::info!("Admin logged in");
                Ok(())
            }
            Err(e) => {
                self.authenticated = false;
                self.login_error = Some(e.user_message());
                tracing::warn!(username = %username, "Admin login rejected");
                Err(e)
            }
        }
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
        self.login_error = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn login_error(&self) -> Option<&str> {
        self.login_error.as_deref()
    }

    /// Fail with `Unauthenticated` unless logged in
    pub fn require(&self) -> Result<()> {
        if self.authenticated {
            Ok(())
        } else {
            Err(HubError::Unauthenticated)
        }
    }
}
