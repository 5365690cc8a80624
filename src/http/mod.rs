//! HTTP protocol layer module
//!
//! Content-type resolution and response building, decoupled from the
//! file-serving business logic.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_403_response, build_404_response, build_405_response, build_500_response,
};
