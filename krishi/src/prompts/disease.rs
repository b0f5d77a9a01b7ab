//! Disease diagnosis prompt.

use crate::message::ChatMessage;

const SYSTEM_PROMPT: &str = "You are an expert plant pathologist specializing in crop diseases in India. Analyze the provided information and give accurate disease diagnosis with practical treatment solutions.

Guidelines:
- Identify the most likely disease based on symptoms
- Provide confidence level (high/medium/low)
- List all visible symptoms clearly
- Recommend immediate treatment steps
- Suggest preventive measures for future
- Consider local disease patterns in the region
- Provide organic and chemical treatment options
- Include timeline for recovery
- Mention when to consult local agriculture officer";

/// Build the disease-diagnosis message sequence.
///
/// Symptoms are free text from the farmer, passed through verbatim.
#[must_use]
pub fn disease_detection(crop_name: &str, location: &str, symptoms: &str) -> [ChatMessage; 2] {
    let user = format!(
        "Please analyze this crop disease:

Crop: {crop_name}
Location: {location}
Observed Symptoms: {symptoms}

Please provide:
1. Disease identification with confidence level
2. Detailed symptom analysis
3. Immediate treatment recommendations
4. Prevention strategies
5. Expected recovery timeline
6. When to seek additional help"
    );

    [ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(user)]
}
