// Claude mapper module
// Handles Claude ↔ Gemini protocol transformation

pub mod request;
pub mod response;


pub use request::{convert_request, convert_tools, RequestConverter};
pub use response::convert_response;
