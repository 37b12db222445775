//! CompletionClient trait definition.
//!
//! This is the core abstraction over the remote professor service. Uses
//! RPITIT for `complete` so implementations can be plain `async fn`.

use std::future::Future;
use std::sync::Arc;

use mindset_types::completion::{CompletionRequest, CompletionResponse};
use mindset_types::error::CompletionError;

/// Trait for completion endpoint backends.
///
/// One call issues exactly one request: no retries, no cancellation. A
/// non-success status or a transport failure is an error. Implementations
/// never touch the conversation log; that is the caller's job.
///
/// The HTTP implementation lives in mindset-infra (`HttpCompletionClient`).
pub trait CompletionClient: Send + Sync {
    /// Send a request and wait for the reply.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl Future<Output = Result<CompletionResponse, CompletionError>> + Send;
}

impl<T: CompletionClient> CompletionClient for Arc<T> {
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl Future<Output = Result<CompletionResponse, CompletionError>> + Send {
        (**self).complete(request)
    }
}

impl<T: CompletionClient> CompletionClient for &T {
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl Future<Output = Result<CompletionResponse, CompletionError>> + Send {
        (**self).complete(request)
    }
}
