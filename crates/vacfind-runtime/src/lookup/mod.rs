//! The remote lookup collaborator.
//!
//! A lookup takes validated [`SearchCriteria`] and answers with a
//! country → cities mapping. How it gets there is opaque to the session.

mod http;

pub use http::HttpLookup;

use async_trait::async_trait;
use std::fmt;
use std::time::Duration;
use vacfind_engine::SearchCriteria;
use vacfind_types::LookupResponse;

#[async_trait]
pub trait CityLookup: Send + Sync {
    async fn find_cities(&self, criteria: &SearchCriteria) -> Result<LookupResponse, LookupError>;
}

/// Why a lookup produced no usable response.
///
/// The detail is for logs; users see one generic message for all of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Service answered with a non-2xx status
    Status(u16),
    /// Request never completed (connection refused, DNS, reset, ...)
    Transport(String),
    /// Response body was not the expected JSON shape
    Decode(String),
    Timeout(Duration),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::Status(code) => write!(f, "lookup returned HTTP {}", code),
            LookupError::Transport(msg) => write!(f, "lookup request failed: {}", msg),
            LookupError::Decode(msg) => write!(f, "lookup response could not be decoded: {}", msg),
            LookupError::Timeout(after) => {
                write!(f, "lookup timed out after {}s", after.as_secs_f64())
            }
        }
    }
}

impl std::error::Error for LookupError {}
