//! Structured output extraction.
//!
//! Turns an unreliable, possibly truncated model response into a validated
//! JSON object: one request with a strict schema contract, one silent retry
//! when truncation swallowed the payload, a forgiving parse (direct, then
//! first-`{`-to-last-`}` fallback), and shape validation against the declared
//! schema. Everything else is a classified failure.

pub mod error;
pub mod executor;
pub mod schema;


pub use error::StructuredOutputError;
pub use executor::{StructuredRequest, execute};
pub use schema::{FieldKind, ObjectSchema};
