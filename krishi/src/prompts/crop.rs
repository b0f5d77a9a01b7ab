//! Crop recommendation prompt.

use crate::message::ChatMessage;
use serde_json::Value;

const SYSTEM_PROMPT: &str = "You are an expert agricultural advisor for Indian farmers. Provide practical, location-specific crop recommendations considering local conditions, market demand, and profitability. Always give advice in a friendly, encouraging manner that builds farmer confidence.

Guidelines:
- Consider seasonal patterns and local climate
- Recommend 3-5 suitable crops with reasons
- Include expected yield and profit margins
- Suggest intercropping opportunities when beneficial
- Consider water requirements and availability
- Factor in market demand and price trends
- Provide timeline for planting and harvesting
- Include risk mitigation strategies";

/// Build the crop-recommendation message sequence.
///
/// `weather` is opaque structured data; it is serialized compactly with
/// stable key order, so identical input always yields identical output.
/// `farm_size` is in acres, `experience` in years.
#[must_use]
pub fn crop_recommendation(
    location: &str,
    soil_type: &str,
    weather: &Value,
    farm_size: f64,
    experience: u32,
) -> [ChatMessage; 2] {
    let user = format!(
        "Please recommend the best crops for my farm:

Location: {location}
Soil Type: {soil_type}
Farm Size: {farm_size} acres
Experience: {experience} years
Current Weather: {weather}

I need specific recommendations with expected yields, profit margins, and growing timeline. Also suggest any government schemes I might be eligible for."
    );

    [ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(user)]
}
