//! Request handlers.

mod notes;
mod system;


pub use notes::*;
pub use system::*;

use serde::Serialize;
use utoipa::ToSchema;

/// JSON error body shared by all handlers.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Note not found")]
    pub error: String,
}
