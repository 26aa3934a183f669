//! Build-time site configuration.
//!
//! Values come from the environment at compile time so the wasm bundle needs
//! no runtime config fetch:
//! - `FOLIO_MAIL_ENDPOINT`: mail script URL, absolute or site-relative
//!   (default `/sendMail.php`).
//! - `FOLIO_SITE_ORIGIN`: origin used to resolve a relative endpoint when the
//!   browser cannot tell us (native builds).
//! - cargo feature `mail-test`: never POST, take the success path.

use super::platform;

pub const DEFAULT_MAIL_ENDPOINT: &str = "/sendMail.php";
pub const DEFAULT_SITE_ORIGIN: &str = "http://localhost:8080";

/// How a valid contact submission is delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailMode {
    Live { endpoint: String },
    Test,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub site_origin: String,
    pub mail_mode: MailMode,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        let endpoint = option_env!("FOLIO_MAIL_ENDPOINT").unwrap_or(DEFAULT_MAIL_ENDPOINT);
        let site_origin = platform::site_origin()
            .or_else(|| option_env!("FOLIO_SITE_ORIGIN").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_SITE_ORIGIN.to_string());
        Self::new(site_origin, endpoint, cfg!(feature = "mail-test"))
    }

    pub fn new(site_origin: impl Into<String>, endpoint: &str, test_mode: bool) -> Self {
        let site_origin = site_origin.into();
        let mail_mode = if test_mode {
            MailMode::Test
        } else {
            MailMode::Live {
                endpoint: resolve_endpoint(&site_origin, endpoint),
            }
        };
        Self {
            site_origin,
            mail_mode,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SITE_ORIGIN, DEFAULT_MAIL_ENDPOINT, false)
    }
}

/// Join a site-relative endpoint onto `origin`; absolute URLs pass through.
pub fn resolve_endpoint(origin: &str, endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return endpoint.to_string();
    }
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_endpoints_are_joined_onto_the_origin() {
        assert_eq!(
            resolve_endpoint("https://mirko-rinke.de/", "/sendMail.php"),
            "https://mirko-rinke.de/sendMail.php"
        );
        assert_eq!(
            resolve_endpoint("https://mirko-rinke.de", "https://mail.example.com/send"),
            "https://mail.example.com/send"
        );
    }

    #[test]
    fn test_mode_carries_no_endpoint() {
        let config = SiteConfig::new("https://mirko-rinke.de", "/sendMail.php", true);
        assert_eq!(config.mail_mode, MailMode::Test);
    }

    #[test]
    fn default_posts_to_the_local_script() {
        assert_eq!(
            SiteConfig::default().mail_mode,
            MailMode::Live {
                endpoint: "http://localhost:8080/sendMail.php".into()
            }
        );
    }
}
