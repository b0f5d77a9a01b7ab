//! Prompt builders for the advisory domains.
//!
//! Five independent, pure functions. Each maps structured domain inputs to
//! a two-message sequence `[system, user]`: the system text is a fixed
//! per-builder persona that never varies with arguments, and the user text
//! interpolates every scalar input verbatim. Builders never call the
//! network; composing them with
//! [`CompletionClient`](crate::CompletionClient) is the caller's job.
//!
//! # Example
//!
//! ```rust,ignore
//! use krishi::{CompletionClient, prompts};
//!
//! let messages = prompts::disease_detection("Tomato", "Kerala", "yellow leaves");
//! let client = CompletionClient::new();
//! let advice = client.complete("gpt-4o", &messages).await?;
//! ```
//!
//! Builders perform no input validation beyond type shape: out-of-range or
//! malformed values pass through into the prompt text unmodified.

mod crop;
mod disease;
mod dosage;
mod schemes;
mod voice;

pub use crop::crop_recommendation;
pub use disease::disease_detection;
pub use dosage::{TreatmentType, dosage_calculation};
pub use schemes::government_schemes;
pub use voice::voice_query;
