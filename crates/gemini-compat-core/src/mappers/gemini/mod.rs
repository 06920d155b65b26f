// Gemini mapper module
// Destination-side passes that run on already-built Gemini trees

pub mod signature;
pub mod wrapper;

pub use signature::{
    ensure_function_call_signatures, inject_thought_signatures, DUMMY_THOUGHT_SIGNATURE,
};
pub use wrapper::{for_each_parts_array, unwrap_response};
