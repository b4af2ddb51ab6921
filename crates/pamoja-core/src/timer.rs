//! Community Redirect Rule
//!
//! After a successful payment the community invitation opens once, three
//! seconds later. The pending open is keyed on the payment status and the
//! configured link: entering `success` arms it, leaving `success` cancels
//! it, and a link saved mid-countdown re-arms it with the new link.
//!
//! The shell owns the actual timer; `RedirectTrigger` only says what to do
//! with it after each state change.

use std::time::Duration;

use crate::checkout::PaymentStatus;

/// Delay between entering `success` and opening the link
pub const REDIRECT_DELAY: Duration = Duration::from_secs(3);

/// What the shell should do with its pending timer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RedirectAction {
    /// Leave the pending timer (if any) alone
    Keep,

    /// Clear the pending timer
    Cancel,

    /// Clear the pending timer, then open `link` after `delay`
    Arm { link: String, delay: Duration },
}

/// Status/link-keyed decision state for the post-payment redirect
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectTrigger {
    delay: Duration,
    key: Option<(PaymentStatus, String)>,
}

impl Default for RedirectTrigger {
    fn default() -> Self {
        Self::with_delay(REDIRECT_DELAY)
    }
}

impl RedirectTrigger {
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            key: None,
        }
    }

    /// Feed the current status and link after every state change.
    ///
    /// Repeated observations of the same pair return `Keep`.
    pub fn observe(&mut self, status: PaymentStatus, link: &str) -> RedirectAction {
        if self
            .key
            .as_ref()
            .is_some_and(|(s, l)| *s == status && l == link)
        {
            return RedirectAction::Keep;
        }
        let was_success = self.in_success();
        self.key = Some((status, link.to_string()));

        if status == PaymentStatus::Success {
            tracing::debug!(link = %link, delay_ms = self.delay.as_millis(), "Community redirect armed");
            return RedirectAction::Arm {
                link: link.to_string(),
                delay: self.delay,
            };
        }

        if was_success {
            tracing::debug!(status = ?status, "Community redirect cancelled");
            RedirectAction::Cancel
        } else {
            RedirectAction::Keep
        }
    }

    /// Last observed status was `success`
    pub fn in_success(&self) -> bool {
        self.key
            .as_ref()
            .is_some_and(|(status, _)| *status == PaymentStatus::Success)
    }
}
