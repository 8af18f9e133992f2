use pcommon::BoxFuture;

use crate::{TransportError, TransportRequest, TransportResponse};

/// Sends an ordered conversation to a remote model and returns its reply.
///
/// Implementations hold no per-conversation state between calls. A response
/// without any choice is an error, never an empty reply, and non-success
/// statuses must surface as errors rather than zero-valued responses.
pub trait Transport: Send + Sync {
    fn request<'a>(
        &'a self,
        request: TransportRequest,
    ) -> BoxFuture<'a, Result<TransportResponse, TransportError>>;
}
