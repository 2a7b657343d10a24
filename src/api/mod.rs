pub mod client;

pub use client::MetadataClient;

use crate::lookup::{LookupError, LookupRequest, LookupResult};

/// Anything able to answer a single lookup. The HTTP client in production,
/// scripted fakes in tests.
pub trait InfoSource: Clone + Send + Sync + 'static {
    fn fetch(
        &self,
        request: &LookupRequest,
    ) -> impl Future<Output = Result<LookupResult, LookupError>> + Send;
}
