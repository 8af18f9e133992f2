//! OpenAI-compatible chat completions transport.

mod serde_api;
mod transport;

pub use transport::{DEFAULT_OPENAI_ENDPOINT, OpenAiHttpTransport};
