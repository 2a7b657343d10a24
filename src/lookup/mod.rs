//! Lookup domain: what the user asks for, what comes back, and how it fails.

pub mod error;
pub mod models;

pub use error::{InputError, LookupError};
pub use models::{ChannelInfo, Format, Intent, LookupRequest, LookupResult, Metric, Resolution, VideoInfo};

/// Gate a submission on non-blank input. The URL shape is the service's call.
pub fn validate(url: &str) -> Result<(), InputError> {
    if url.trim().is_empty() {
        return Err(InputError::EmptyInput);
    }
    Ok(())
}
