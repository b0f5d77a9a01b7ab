//! Krishi is the AI advisory core of an agricultural assistant for Indian
//! farmers: a thin client for a remote chat-completion service plus a
//! family of deterministic prompt builders for the advisory domains (crop
//! recommendation, disease diagnosis, voice queries, treatment dosage,
//! government schemes).
//!
//! The two halves compose but never call each other: a builder turns
//! structured domain inputs into a `[system, user]` message pair, and the
//! caller hands that pair to [`CompletionClient::complete`], which returns
//! plain advice text or the single normalized [`CompletionError`].
//!
//! # Example
//!
//! ```rust,ignore
//! use krishi::{CompletionClient, prompts};
//!
//! let client = CompletionClient::new();
//! let messages = prompts::disease_detection("Tomato", "Kerala", "yellow leaves with spots");
//! let advice = client.complete("gpt-4o", &messages).await?;
//! ```

pub mod client;
pub mod completion;
pub mod error;
pub mod message;
pub mod prompts;

pub use client::{CompletionClient, CompletionClientBuilder};
pub use completion::{CompletionRequest, DEFAULT_MAX_TOKENS, NO_RESPONSE_FALLBACK, TEMPERATURE};
pub use error::{COMPLETION_FAILED_MESSAGE, CompletionError, CompletionErrorKind, Result};
pub use message::{ChatMessage, ContentPart, FileAttachment, ImageUrl, MessageContent, MessageRole};
pub use prompts::{
    TreatmentType, crop_recommendation, disease_detection, dosage_calculation, government_schemes,
    voice_query,
};
