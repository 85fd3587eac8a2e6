use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortalError {
    #[error("Authentication error: login returned status {status}")]
    Authentication { status: u16 },

    #[error("Export error: commands export returned status {status}")]
    Export { status: u16 },

    #[error("Workbook error: {message}")]
    Workbook { message: String },

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl PortalError {
    pub fn authentication(status: u16) -> Self {
        Self::Authentication { status }
    }

    pub fn export(status: u16) -> Self {
        Self::Export { status }
    }

    pub fn workbook(message: impl Into<String>) -> Self {
        Self::Workbook {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Authentication { .. } => "AUTHENTICATION_ERROR",
            Self::Export { .. } => "EXPORT_ERROR",
            Self::Workbook { .. } => "WORKBOOK_ERROR",
            Self::Transport { .. } => "TRANSPORT_ERROR",
            Self::Configuration { .. } => "CONFIGURATION_ERROR",
        }
    }

    /// Errors raised by the portal itself rather than by the network or the
    /// local setup.
    pub fn is_portal_rejection(&self) -> bool {
        matches!(self, Self::Authentication { .. } | Self::Export { .. })
    }
}

pub type PortalResult<T> = Result<T, PortalError>;

// Conversion from common error types
impl From<reqwest::Error> for PortalError {
    fn from(error: reqwest::Error) -> Self {
        Self::transport(error.to_string())
    }
}

impl From<calamine::XlsxError> for PortalError {
    fn from(error: calamine::XlsxError) -> Self {
        Self::workbook(error.to_string())
    }
}

impl From<config::ConfigError> for PortalError {
    fn from(error: config::ConfigError) -> Self {
        Self::configuration(error.to_string())
    }
}
