//! Error types for Steam metadata discovery and Proton resolution

use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of a [`ProtonError`]
///
/// Callers use this to decide whether a failure was a skippable decode
/// problem, a broken file format, a plain miss, or an unsatisfiable override.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    StructuralDecode,
    Format,
    NotFound,
    ConfigOverride,
}

#[derive(Debug, Error)]
pub enum ProtonError {
    /// A file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A text or binary KeyValues document is malformed.
    #[error("malformed document ({context}): {message}")]
    Decode { context: String, message: String },

    /// The catalog or one of its fields does not have the expected layout.
    #[error("invalid format: {0}")]
    Format(String),

    #[error("no Steam installation found")]
    SteamNotFound,

    #[error("no Proton installation configured in config.vdf")]
    NoConfiguredRuntime,

    #[error("could not find the app ID of compat tool '{name}' in appinfo.vdf")]
    RuntimeIdUnresolved { name: String },

    #[error("compat tool '{name}' has app ID {app_id} but no matching installation was found")]
    RuntimeNotInstalled { name: String, app_id: u64 },

    #[error("Steam app {app_id} is not installed or has no Proton prefix")]
    AppNotFound { app_id: u64 },

    /// An explicit override was set but cannot be honored.
    #[error("${variable} is set but {reason}")]
    ConfigOverride { variable: &'static str, reason: String },
}

impl ProtonError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProtonError::Io { .. } => ErrorKind::Io,
            ProtonError::Decode { .. } => ErrorKind::StructuralDecode,
            ProtonError::Format(_) => ErrorKind::Format,
            ProtonError::SteamNotFound
            | ProtonError::NoConfiguredRuntime
            | ProtonError::RuntimeIdUnresolved { .. }
            | ProtonError::RuntimeNotInstalled { .. }
            | ProtonError::AppNotFound { .. } => ErrorKind::NotFound,
            ProtonError::ConfigOverride { .. } => ErrorKind::ConfigOverride,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ProtonError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn decode(context: impl Into<String>, message: impl Into<String>) -> Self {
        ProtonError::Decode {
            context: context.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProtonError>;
