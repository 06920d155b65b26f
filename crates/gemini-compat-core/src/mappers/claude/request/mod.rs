mod content_builder;
mod generation_config;
mod google_content;
mod monolith;
mod safety;
mod system_instruction;
mod tool_result_handler;
mod tools_builder;

pub use monolith::{convert_request, RequestConverter};
pub use tools_builder::convert_tools;
