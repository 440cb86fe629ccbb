//! Header and footer projections of [`SiteConfig`].

use crate::site_config::SiteConfig;

/// Suffix appended to the site name in the document title.
const TITLE_SUFFIX: &str = "Estudio Creativo";

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

/// What the header shows next to the site name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Branding {
    /// `site_logo_url` is an absolute http(s) URL.
    Image { url: String, alt: String },
    /// `site_logo_url` holds something else (usually an emoji).
    Text(String),
    /// No logo; the icon is set.
    Icon(String),
    /// Neither logo nor icon.
    NameOnly,
}

/// Resolve the header mark: logo first, then icon.
pub fn branding(config: &SiteConfig) -> Branding {
    let logo = &config.site_logo_url;
    if !logo.is_empty() {
        if logo.starts_with("http") {
            return Branding::Image {
                url: logo.clone(),
                alt: config.site_name.clone(),
            };
        }
        return Branding::Text(logo.clone());
    }
    if !config.site_icon.is_empty() {
        return Branding::Icon(config.site_icon.clone());
    }
    Branding::NameOnly
}

/// Browser title for the current site name.
pub fn document_title(site_name: &str) -> String {
    format!("{site_name} - {TITLE_SUFFIX}")
}

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    Facebook,
    Instagram,
    Twitter,
    Email,
    WhatsApp,
}

/// A rendered footer link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: String,
    /// Opened in a new tab (`target="_blank"`).
    pub external: bool,
}

/// Footer links for every non-empty social setting, in display order
/// (Facebook, Instagram, Twitter, Email, WhatsApp).
pub fn social_links(config: &SiteConfig) -> Vec<SocialLink> {
    let mut links = Vec::new();

    let plain = [
        (SocialKind::Facebook, &config.social_facebook),
        (SocialKind::Instagram, &config.social_instagram),
        (SocialKind::Twitter, &config.social_twitter),
    ];
    for (kind, url) in plain {
        if !url.is_empty() {
            links.push(SocialLink {
                kind,
                href: url.clone(),
                external: true,
            });
        }
    }

    if !config.social_email.is_empty() {
        links.push(SocialLink {
            kind: SocialKind::Email,
            href: format!("mailto:{}", config.social_email),
            external: false,
        });
    }

    if let Some(href) = whatsapp_href(&config.social_whatsapp) {
        links.push(SocialLink {
            kind: SocialKind::WhatsApp,
            href,
            external: true,
        });
    }

    links
}

/// `wa.me` link built from the digits of `number`.
pub fn whatsapp_href(number: &str) -> Option<String> {
    if number.is_empty() {
        return None;
    }
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    Some(format!("https://wa.me/{digits}"))
}

/// Footer copyright notice.
pub fn copyright_line(year: i32, site_name: &str) -> String {
    format!("© {year} {site_name}. Todos los derechos reservados.")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
