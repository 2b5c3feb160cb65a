pub mod openai;
pub mod provider;
pub mod types;

pub use openai::OpenAIProvider;
pub use provider::LLMProvider;
pub use types::LLMResponse;
