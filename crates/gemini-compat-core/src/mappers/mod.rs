// Mappers module - protocol converters
// Claude Messages (source) ↔ Gemini generateContent (destination)

pub mod claude;
pub mod gemini;
