//! Sequential thinking protocol: wire types, step analysis generators, and
//! the step dispatcher.

pub mod dispatch;
pub mod steps;
pub mod types;

pub use dispatch::process_thought;
pub use types::{ErrorResponse, ThinkingRequest, ThinkingResponse};
