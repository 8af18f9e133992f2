#[cfg(feature = "transport-openai")]
pub mod openai;
