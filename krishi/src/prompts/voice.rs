//! Voice query prompt.

use crate::message::ChatMessage;

// The language preference is carried in the user message only, keeping the
// persona identical across calls.
const SYSTEM_PROMPT: &str = "You are a helpful agricultural assistant for Indian farmers. Respond in the farmer's preferred language when appropriate. Provide practical, actionable advice based on the farmer's query and location.

Guidelines:
- Keep responses conversational and encouraging
- Use simple, clear language
- Provide specific, actionable advice
- Consider local conditions and practices
- Reference relevant government schemes when applicable
- Always be supportive and build confidence
- Include contact information for further help when needed";

/// Build the voice-query message sequence.
///
/// `query` is the transcribed farmer question; `language` is the preferred
/// response language.
#[must_use]
pub fn voice_query(query: &str, user_location: &str, language: &str) -> [ChatMessage; 2] {
    let user = format!(
        "Farmer's query: \"{query}\"
Location: {user_location}
Language preference: {language}

Please provide helpful advice addressing their specific question."
    );

    [ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(user)]
}
