//! Treatment dosage prompt.

use crate::message::ChatMessage;
use serde::{Deserialize, Serialize};
use std::fmt;

const SYSTEM_PROMPT: &str = "You are an expert agricultural scientist specializing in precision farming and sustainable agriculture. Calculate optimal dosages for treatments considering environmental impact, cost-effectiveness, and crop health.

Guidelines:
- Provide exact quantities and mixing ratios
- Consider crop stage and growth requirements
- Minimize environmental impact
- Optimize cost-effectiveness
- Include application timing and methods
- Suggest organic alternatives when possible
- Provide safety guidelines for application
- Calculate total cost estimation";

/// The kind of treatment a dosage is calculated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreatmentType {
    /// Nutrient application.
    Fertilizer,
    /// Pest or disease control.
    Pesticide,
}

impl TreatmentType {
    /// Lowercase name as it appears in the prompt text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fertilizer => "fertilizer",
            Self::Pesticide => "pesticide",
        }
    }
}

impl fmt::Display for TreatmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the dosage-calculation message sequence.
///
/// `land_area` is in acres; `disease_severity` is free text (the reference
/// uses high/medium/low but nothing is enforced).
#[must_use]
pub fn dosage_calculation(
    crop_name: &str,
    crop_stage: &str,
    land_area: f64,
    disease_severity: &str,
    treatment: TreatmentType,
) -> [ChatMessage; 2] {
    let user = format!(
        "Calculate optimal {treatment} dosage for:

Crop: {crop_name}
Growth Stage: {crop_stage}
Land Area: {land_area} acres
Disease/Deficiency Severity: {disease_severity}

Please provide:
1. Recommended product and dosage
2. Mixing instructions and ratios
3. Application method and timing
4. Safety precautions
5. Cost estimation
6. Expected results timeline
7. Organic alternatives if available"
    );

    [ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(user)]
}
