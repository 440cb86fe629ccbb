//! Site identity and social settings.
//!
//! The `site_config` table is a flat key/value store. [`SiteConfig`] is the
//! fixed-shape record rebuilt from those rows: known keys overwrite the
//! hard-coded defaults, unknown keys are ignored, and missing keys keep
//! their default value.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

pub const KEY_SITE_NAME: &str = "site_name";
pub const KEY_SITE_ICON: &str = "site_icon";
pub const KEY_SITE_LOGO_URL: &str = "site_logo_url";
pub const KEY_SOCIAL_FACEBOOK: &str = "social_facebook";
pub const KEY_SOCIAL_INSTAGRAM: &str = "social_instagram";
pub const KEY_SOCIAL_TWITTER: &str = "social_twitter";
pub const KEY_SOCIAL_WHATSAPP: &str = "social_whatsapp";
pub const KEY_SOCIAL_EMAIL: &str = "social_email";

/// Default site name when the `site_name` row is missing.
pub const DEFAULT_SITE_NAME: &str = "LaserArt";

/// Default site icon when the `site_icon` row is missing.
pub const DEFAULT_SITE_ICON: &str = "⚡";

// ---------------------------------------------------------------------------
// SiteConfig
// ---------------------------------------------------------------------------

/// Branding and social settings rendered by the header and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: String,
    pub site_icon: String,
    pub site_logo_url: String,
    pub social_facebook: String,
    pub social_instagram: String,
    pub social_twitter: String,
    pub social_whatsapp: String,
    pub social_email: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_string(),
            site_icon: DEFAULT_SITE_ICON.to_string(),
            site_logo_url: String::new(),
            social_facebook: String::new(),
            social_instagram: String::new(),
            social_twitter: String::new(),
            social_whatsapp: String::new(),
            social_email: String::new(),
        }
    }
}

impl SiteConfig {
    /// Every key the record knows about, in save order.
    pub const KEYS: [&'static str; 8] = [
        KEY_SITE_NAME,
        KEY_SITE_ICON,
        KEY_SITE_LOGO_URL,
        KEY_SOCIAL_FACEBOOK,
        KEY_SOCIAL_INSTAGRAM,
        KEY_SOCIAL_TWITTER,
        KEY_SOCIAL_WHATSAPP,
        KEY_SOCIAL_EMAIL,
    ];

    /// The subset the header needs.
    pub const HEADER_KEYS: [&'static str; 3] = [KEY_SITE_NAME, KEY_SITE_ICON, KEY_SITE_LOGO_URL];

    /// Whether `key` is one of [`SiteConfig::KEYS`].
    pub fn is_known_key(key: &str) -> bool {
        Self::KEYS.contains(&key)
    }

    /// Fold `(key, value)` rows into a record starting from the defaults.
    ///
    /// Later rows win when a key appears more than once.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();
        for (key, value) in entries {
            config.apply(key, value);
        }
        config
    }

    /// Assign `value` to `key`. Returns `false` (and changes nothing) for
    /// unknown keys.
    pub fn apply(&mut self, key: &str, value: &str) -> bool {
        match self.slot_mut(key) {
            Some(slot) => {
                value.clone_into(slot);
                true
            }
            None => false,
        }
    }

    /// Look up the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            KEY_SITE_NAME => &self.site_name,
            KEY_SITE_ICON => &self.site_icon,
            KEY_SITE_LOGO_URL => &self.site_logo_url,
            KEY_SOCIAL_FACEBOOK => &self.social_facebook,
            KEY_SOCIAL_INSTAGRAM => &self.social_instagram,
            KEY_SOCIAL_TWITTER => &self.social_twitter,
            KEY_SOCIAL_WHATSAPP => &self.social_whatsapp,
            KEY_SOCIAL_EMAIL => &self.social_email,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Iterate `(key, value)` pairs in [`SiteConfig::KEYS`] order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        Self::KEYS
            .iter()
            .filter_map(move |key| self.get(key).map(|value| (*key, value)))
    }

    /// Whether any social link is configured.
    pub fn has_social_links(&self) -> bool {
        [
            &self.social_facebook,
            &self.social_instagram,
            &self.social_twitter,
            &self.social_whatsapp,
            &self.social_email,
        ]
        .iter()
        .any(|v| !v.is_empty())
    }

    fn slot_mut(&mut self, key: &str) -> Option<&mut String> {
        match key {
            KEY_SITE_NAME => Some(&mut self.site_name),
            KEY_SITE_ICON => Some(&mut self.site_icon),
            KEY_SITE_LOGO_URL => Some(&mut self.site_logo_url),
            KEY_SOCIAL_FACEBOOK => Some(&mut self.social_facebook),
            KEY_SOCIAL_INSTAGRAM => Some(&mut self.social_instagram),
            KEY_SOCIAL_TWITTER => Some(&mut self.social_twitter),
            KEY_SOCIAL_WHATSAPP => Some(&mut self.social_whatsapp),
            KEY_SOCIAL_EMAIL => Some(&mut self.social_email),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rows_yield_the_default_record() {
        let config = SiteConfig::from_entries(std::iter::empty());
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.site_name, "LaserArt");
        assert_eq!(config.site_icon, "⚡");
        assert!(config.social_email.is_empty());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config = SiteConfig::from_entries([
            ("site_name", "Nemitzam"),
            ("theme_color", "#ff6600"),
        ]);
        assert_eq!(config.site_name, "Nemitzam");
        assert_eq!(config.site_icon, DEFAULT_SITE_ICON);
        assert_eq!(config.get("theme_color"), None);
    }

    #[test]
    fn known_keys_overwrite_defaults() {
        let config = SiteConfig::from_entries([
            ("social_whatsapp", "+52 1 555 000"),
            ("site_icon", ""),
        ]);
        assert_eq!(config.social_whatsapp, "+52 1 555 000");
        assert_eq!(config.site_icon, "");
        assert_eq!(config.site_name, DEFAULT_SITE_NAME);
    }

    #[test]
    fn apply_reports_unknown_keys() {
        let mut config = SiteConfig::default();
        assert!(config.apply("social_email", "hola@nemitzam.mx"));
        assert!(!config.apply("footer_text", "x"));
        assert_eq!(config.social_email, "hola@nemitzam.mx");
    }

    #[test]
    fn entries_follow_key_order() {
        let config = SiteConfig::default();
        let keys: Vec<&str> = config.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, SiteConfig::KEYS.to_vec());
    }

    #[test]
    fn header_keys_are_known() {
        assert!(SiteConfig::HEADER_KEYS
            .iter()
            .all(|k| SiteConfig::is_known_key(k)));
    }

    #[test]
    fn social_links_presence() {
        let mut config = SiteConfig::default();
        assert!(!config.has_social_links());
        config.social_instagram = "https://instagram.com/nemitzam".into();
        assert!(config.has_social_links());
    }
}
