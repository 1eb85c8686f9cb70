use derive_more::{Display, Error};

/// Errors raised while assembling the security configuration.
///
/// All of them mean the configuration document is incomplete or
/// contradictory; the current pass cannot continue.
#[derive(Debug, Display, Error)]
pub enum ConfigError {
    #[display("No UserDetailsService registered.")]
    NoUserDetailsService,
    #[display(
        "More than one UserDetailsService registered {candidates:?}. Please use a specific id in your configuration"
    )]
    AmbiguousUserDetailsService {
        candidates: Vec<String>,
    },
    #[display("Cannot register bean definition under name '{name}': there is already a definition bound")]
    DefinitionOverride {
        name: String,
    },
    #[display("Invalid <{element}> element: {message}")]
    InvalidElement { element: String, message: String },
    #[display("Error in <{element}> element: {source}")]
    Element {
        element: String,
        source: Box<ConfigError>,
    },
    #[display("Failed to export bean definitions: {_0}")]
    Export(#[error(source)] serde_json::Error),
}

impl ConfigError {
    /// Wraps the error with the name of the configuration element being processed.
    pub fn in_element(self, element: &str) -> ConfigError {
        ConfigError::Element {
            element: element.to_string(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
