//! Common `ptransport` imports for downstream crates.

pub use crate::{
    Message, Role, SecretString, Transport, TransportError, TransportErrorKind, TransportRequest,
    TransportResponse, Usage,
};
pub use pcommon::{BoxFuture, ThreadId};
