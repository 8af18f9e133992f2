//! Assistant-layer errors.
//!
//! Collaborator failures are carried through unchanged so callers can
//! match on the original store or transport classification.

use std::error::Error;
use std::fmt::{Display, Formatter};

use pstore::StoreError;
use ptransport::TransportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistantErrorKind {
    Store,
    Transport,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantError {
    Store(StoreError),
    Transport(TransportError),
}

impl AssistantError {
    pub fn kind(&self) -> AssistantErrorKind {
        match self {
            Self::Store(_) => AssistantErrorKind::Store,
            Self::Transport(_) => AssistantErrorKind::Transport,
        }
    }

    pub fn store_error(&self) -> Option<&StoreError> {
        match self {
            Self::Store(error) => Some(error),
            Self::Transport(_) => None,
        }
    }

    pub fn transport_error(&self) -> Option<&TransportError> {
        match self {
            Self::Store(_) => None,
            Self::Transport(error) => Some(error),
        }
    }
}

impl Display for AssistantError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(error) => Display::fmt(error, f),
            Self::Transport(error) => Display::fmt(error, f),
        }
    }
}

impl Error for AssistantError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(error) => Some(error),
            Self::Transport(error) => Some(error),
        }
    }
}

impl From<StoreError> for AssistantError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<TransportError> for AssistantError {
    fn from(value: TransportError) -> Self {
        Self::Transport(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistantBuildErrorKind {
    MissingModel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantBuildError {
    pub kind: AssistantBuildErrorKind,
    pub message: String,
}

impl AssistantBuildError {
    pub fn new(kind: AssistantBuildErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn missing_model() -> Self {
        Self::new(
            AssistantBuildErrorKind::MissingModel,
            "assistant requires a non-empty model identifier",
        )
    }
}

impl Display for AssistantBuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for AssistantBuildError {}
