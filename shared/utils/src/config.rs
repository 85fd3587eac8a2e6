use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub portal: PortalConfig,
    #[serde(default)]
    pub credentials: Option<Credentials>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub base_url: String,
    pub login_path: String,
    pub commands_path: String,
    pub export_path: String,
    /// Shipping label endpoints, probed in order.
    pub label_paths: Vec<String>,
    pub verify_labels: bool,
    pub timeout_seconds: u64,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file_path: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(
                File::with_name(&format!(
                    "config/{}",
                    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // Add local config (gitignored)
            .add_source(File::with_name("config/local").required(false))
            // e.g. BOBOCHIC__CREDENTIALS__EMAIL
            .add_source(Environment::with_prefix("BOBOCHIC").separator("__"));

        config.build()?.try_deserialize()
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: "https://bobochicparis.com".to_string(),
            login_path: "supplier/login".to_string(),
            commands_path: "supplier/commande".to_string(),
            export_path: "supplier/include/export.php".to_string(),
            label_paths: vec![
                "modules/relaiscolisam/files/in/etiquette/get_file.php".to_string(),
                "modules/relaiscolisam/files/out/etiquette/get_file.php".to_string(),
            ],
            verify_labels: true,
            timeout_seconds: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
            file_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_hides_password() {
        let credentials = Credentials {
            email: "shop@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let rendered = format!("{:?}", credentials);
        assert!(rendered.contains("shop@example.com"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_partial_portal_section_keeps_defaults() {
        let config: AppConfig = Config::builder()
            .set_override("portal.verify_labels", false)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert!(!config.portal.verify_labels);
        assert_eq!(config.portal.export_path, "supplier/include/export.php");
        assert_eq!(config.logging.level, "info");
    }
}
