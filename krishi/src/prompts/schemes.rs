//! Government schemes prompt.

use crate::message::ChatMessage;
use serde_json::Value;

const SYSTEM_PROMPT: &str = "You are a government schemes advisor specializing in Indian agricultural policies. Provide accurate, up-to-date information about relevant schemes based on farmer profile and location.

Guidelines:
- List schemes in order of relevance and benefit
- Provide clear eligibility criteria
- Include application process and required documents
- Mention deadlines and key dates
- Provide official website links and contact information
- Explain benefits clearly in simple terms
- Include both central and state schemes
- Mention success stories to encourage applications";

/// Build the government-schemes message sequence.
///
/// `user_profile` is opaque structured data (land size, crops, category,
/// whatever the caller collected); it is serialized compactly with stable
/// key order and not inspected here.
#[must_use]
pub fn government_schemes(user_profile: &Value, location: &str) -> [ChatMessage; 2] {
    let user = format!(
        "Please recommend government schemes for this farmer:

Profile: {user_profile}
Location: {location}

Include:
1. Most relevant schemes with benefits
2. Eligibility requirements
3. Application process and deadlines
4. Required documents
5. Official registration links
6. Contact information for assistance
7. Expected approval timeline"
    );

    [ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(user)]
}
