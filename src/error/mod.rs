use std::fmt::Display;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod codes;

pub use codes::ErrorCode;

/// The unified error type for both pipelines.
///
/// Each variant names the stage that failed. The binary never maps these to
/// distinct exit codes; every failure terminates with status 1.
#[derive(Error, Debug)]
pub enum PpiError {
    #[error("[E{code:04}] Input error: {message}{}", location(.path.as_deref()))]
    Input {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Degenerate input: {message}")]
    Degenerate {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Output error: {message}{}", location(.path.as_deref()))]
    Output {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Remote query failed: {message}{}", endpoint(.url.as_deref()))]
    RemoteQuery {
        code: u16,
        message: String,
        url: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        field: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PpiError {
    /// Create an input error with default code
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input {
            code: ErrorCode::INPUT_GENERIC,
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Create an input error with specific code
    pub fn input_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Input {
            code,
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Create a degenerate-input error with default code
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::Degenerate {
            code: ErrorCode::DEGENERATE_GENERIC,
            message: message.into(),
            source: None,
        }
    }

    /// Create a degenerate-input error with specific code
    pub fn degenerate_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Degenerate {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create an output error with default code
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            code: ErrorCode::OUTPUT_GENERIC,
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Create an output error with specific code
    pub fn output_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Output {
            code,
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Create a remote query error with default code
    pub fn remote(message: impl Into<String>) -> Self {
        Self::RemoteQuery {
            code: ErrorCode::REMOTE_GENERIC,
            message: message.into(),
            url: None,
            source: None,
        }
    }

    /// Create a remote query error with specific code and endpoint
    pub fn remote_with_code(code: u16, message: impl Into<String>, url: Option<String>) -> Self {
        Self::RemoteQuery {
            code,
            message: message.into(),
            url,
            source: None,
        }
    }

    /// Create a configuration error with default code
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_GENERIC,
            message: message.into(),
            field: None,
            source: None,
        }
    }

    /// Create a configuration error with specific code and field
    pub fn config_with_code(code: u16, message: impl Into<String>, field: Option<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            field,
            source: None,
        }
    }

    /// Add a source error to this error
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        match &mut self {
            Self::Input { source: src, .. }
            | Self::Degenerate { source: src, .. }
            | Self::Output { source: src, .. }
            | Self::RemoteQuery { source: src, .. }
            | Self::Config { source: src, .. } => {
                *src = Some(source.into());
            }
        }
        self
    }

    /// Attach the file an input or output error refers to
    pub fn with_path(mut self, path: &Path) -> Self {
        match &mut self {
            Self::Input { path: p, .. } | Self::Output { path: p, .. } => {
                *p = Some(path.to_path_buf());
            }
            _ => {}
        }
        self
    }

    /// Add context to the error message
    pub fn with_context(mut self, context: impl Display) -> Self {
        match &mut self {
            Self::Input { message, .. }
            | Self::Degenerate { message, .. }
            | Self::Output { message, .. }
            | Self::RemoteQuery { message, .. }
            | Self::Config { message, .. } => {
                *message = format!("{}: {}", message, context);
            }
        }
        self
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Input { code, .. }
            | Self::Degenerate { code, .. }
            | Self::Output { code, .. }
            | Self::RemoteQuery { code, .. }
            | Self::Config { code, .. } => *code,
        }
    }
}

fn location(path: Option<&Path>) -> String {
    path.map(|p| format!(" ({})", p.display())).unwrap_or_default()
}

fn endpoint(url: Option<&str>) -> String {
    url.map(|u| format!(" ({})", u)).unwrap_or_default()
}

/// Type alias for Results using PpiError
pub type Result<T> = std::result::Result<T, PpiError>;
