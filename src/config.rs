use log::warn;

/// Base URL of the contact backend, set at build time through `SOCIALRISER_BACKEND_URL`.
/// Empty when the site is built without one.
pub fn get_backend_url() -> &'static str {
    option_env!("SOCIALRISER_BACKEND_URL")
        .map(|url| url.trim().trim_end_matches('/'))
        .unwrap_or("")
}

pub const CONTACT_EMAIL: &str = "contact@socialriser.com";
pub const FAVORITES_STORAGE_KEY: &str = "favorite-products";

/// Cosmetic delay of the simulated submission.
pub const SIMULATED_SEND_DELAY_MS: u32 = 1_500;
pub const CONTACT_REQUEST_TIMEOUT_MS: u32 = 10_000;
pub const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactMode {
    /// Log the message and pretend it was sent.
    Simulated,
    /// POST it to the backend.
    Http,
}

impl ContactMode {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "simulated" | "stub" => Some(ContactMode::Simulated),
            "http" | "api" => Some(ContactMode::Http),
            _ => None,
        }
    }
}

/// The site ships without a server, so messages are simulated unless the build opts in with
/// `SOCIALRISER_CONTACT_MODE=http` and a backend URL.
pub fn contact_mode() -> ContactMode {
    resolve_contact_mode(option_env!("SOCIALRISER_CONTACT_MODE"), get_backend_url())
}

fn resolve_contact_mode(requested: Option<&str>, backend_url: &str) -> ContactMode {
    match requested.and_then(ContactMode::parse) {
        Some(ContactMode::Http) if backend_url.is_empty() => {
            warn!("HTTP contact mode needs SOCIALRISER_BACKEND_URL, falling back to simulated");
            ContactMode::Simulated
        }
        Some(mode) => mode,
        None => ContactMode::Simulated,
    }
}

pub fn contact_endpoint() -> String {
    format!("{}/api/contact", get_backend_url())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_contact_modes() {
        assert_eq!(ContactMode::parse("HTTP"), Some(ContactMode::Http));
        assert_eq!(ContactMode::parse(" simulated "), Some(ContactMode::Simulated));
        assert_eq!(ContactMode::parse("smtp"), None);
    }

    #[test]
    fn defaults_to_simulated() {
        assert_eq!(resolve_contact_mode(None, ""), ContactMode::Simulated);
        assert_eq!(
            resolve_contact_mode(None, "https://api.socialriser.com"),
            ContactMode::Simulated
        );
        assert_eq!(resolve_contact_mode(Some("smtp"), ""), ContactMode::Simulated);
    }

    #[test]
    fn http_needs_a_backend_url() {
        assert_eq!(resolve_contact_mode(Some("http"), ""), ContactMode::Simulated);
        assert_eq!(
            resolve_contact_mode(Some("http"), "https://api.socialriser.com"),
            ContactMode::Http
        );
    }

    #[test]
    fn endpoint_is_under_api() {
        assert!(contact_endpoint().ends_with("/api/contact"));
    }
}
