pub mod config;
pub mod logging;
pub mod error;
pub mod text;
pub mod export;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

pub use self::config::{AppConfig, Credentials, LoggingConfig, PortalConfig};
pub use logging::*;
pub use error::*;
pub use text::*;
pub use export::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_loading() {
        let config = AppConfig::default();
        assert_eq!(config.portal.base_url, "https://bobochicparis.com");
        assert!(config.portal.verify_labels);
        assert_eq!(config.portal.label_paths.len(), 2);
        assert!(config.credentials.is_none());
    }

    #[test]
    fn test_error_handling() {
        let error = PortalError::authentication(403);
        assert_eq!(error.error_code(), "AUTHENTICATION_ERROR");
        assert_eq!(error.to_string(), "Authentication error: login returned status 403");
    }
}
