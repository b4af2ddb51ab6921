//! Hub Settings
//!
//! Values the administrator can change from the dashboard. Held in memory
//! only; a reload restores the defaults (or the values baked in at build
//! time).

use serde::{Deserialize, Serialize};

/// Invitation link opened after a successful payment
pub const DEFAULT_COMMUNITY_LINK: &str = "https://chat.whatsapp.com/your-community-invite-code";

/// Where a real provider would post payment events. Display only.
pub const WEBHOOK_URL: &str = "https://your-app.com/api/webhooks/julypay";

/// Runtime settings
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HubSettings {
    /// Payment provider API key; empty means "not configured"
    pub api_key: String,

    pub community_link: String,

    pub webhook_url: String,
}

impl Default for HubSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            community_link: DEFAULT_COMMUNITY_LINK.into(),
            webhook_url: WEBHOOK_URL.into(),
        }
    }
}

// Keep the key out of Debug output
impl std::fmt::Debug for HubSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HubSettings")
            .field("api_key", &self.api_key_hint())
            .field("community_link", &self.community_link)
            .field("webhook_url", &self.webhook_url)
            .finish()
    }
}

impl HubSettings {
    /// Defaults with optional overrides, typically `PAMOJA_API_KEY` and
    /// `PAMOJA_COMMUNITY_LINK` captured at build time. Blank values are
    /// ignored.
    pub fn with_overrides(api_key: Option<&str>, community_link: Option<&str>) -> Self {
        let mut settings = Self::default();
        if let Some(key) = api_key.map(str::trim).filter(|k| !k.is_empty()) {
            settings.api_key = key.to_string();
        }
        if let Some(link) = community_link.map(str::trim).filter(|l| !l.is_empty()) {
            settings.community_link = link.to_string();
        }
        settings
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// First 8 characters of the key followed by an ellipsis
    pub fn api_key_hint(&self) -> String {
        key_hint(&self.api_key)
    }
}

/// Masked form of a secret, safe for logs
pub fn key_hint(key: &str) -> String {
    if key.is_empty() {
        return "<unset>".into();
    }
    let prefix: String = key.chars().take(8).collect();
    format!("{}...", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = HubSettings::default();
        assert!(!settings.has_api_key());
        assert_eq!(settings.community_link, DEFAULT_COMMUNITY_LINK);
        assert_eq!(settings.webhook_url, WEBHOOK_URL);
    }

    #[test]
    fn test_overrides() {
        let settings = HubSettings::with_overrides(Some(" jp_test_key \n"), Some("https://chat.whatsapp.com/abc"));
        assert_eq!(settings.api_key, "jp_test_key");
        assert_eq!(settings.community_link, "https://chat.whatsapp.com/abc");
        assert_eq!(settings.webhook_url, WEBHOOK_URL);

        let blank = HubSettings::with_overrides(Some("  "), Some(""));
        assert_eq!(blank, HubSettings::default());
        assert_eq!(HubSettings::with_overrides(None, None), HubSettings::default());
    }

    #[test]
    fn test_debug_masks_key() {
        let settings = HubSettings {
            api_key: "jp_live_0123456789abcdef".into(),
            ..Default::default()
        };
        let debug = format!("{:?}", settings);
        assert!(debug.contains("jp_live_..."));
        assert!(!debug.contains("0123456789abcdef"));
    }

    #[test]
    fn test_key_hint() {
        assert_eq!(key_hint(""), "<unset>");
        assert_eq!(key_hint("abc"), "abc...");
    }
}
