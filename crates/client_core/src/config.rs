//! Fixed endpoint configuration for the donation API.

use url::Url;

use crate::error::ClientError;

pub const API_BASE_URL: &str = "http://localhost:3000";
pub const DONATIONS_ENDPOINT: &str = "/donations";
pub const INSTITUTIONS_ENDPOINT: &str = "/institutions";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_base_url(raw: &str) -> Result<Self, ClientError> {
        let trimmed = raw.trim();
        let base_url = Url::parse(trimmed).map_err(|source| ClientError::InvalidBaseUrl {
            url: trimmed.to_string(),
            reason: source.to_string(),
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl {
                url: trimmed.to_string(),
                reason: format!("unsupported scheme '{}'", base_url.scheme()),
            });
        }
        Ok(Self {
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn institutions_url(&self) -> String {
        format!("{}{}", self.base_url(), INSTITUTIONS_ENDPOINT)
    }

    pub fn donations_url(&self) -> String {
        format!("{}{}", self.base_url(), DONATIONS_ENDPOINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_api() {
        let config = ClientConfig::default();
        assert_eq!(
            config.institutions_url(),
            "http://localhost:3000/institutions"
        );
        assert_eq!(config.donations_url(), "http://localhost:3000/donations");
    }

    #[test]
    fn keeps_path_prefix_of_base_url() {
        let config = ClientConfig::from_base_url("https://api.example.org/v1/").expect("config");
        assert_eq!(
            config.donations_url(),
            "https://api.example.org/v1/donations"
        );
    }

    #[test]
    fn rejects_malformed_and_non_http_urls() {
        assert!(matches!(
            ClientConfig::from_base_url("not a url"),
            Err(ClientError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            ClientConfig::from_base_url("ftp://example.org"),
            Err(ClientError::InvalidBaseUrl { .. })
        ));
    }
}
