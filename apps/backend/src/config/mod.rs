pub mod engine;
pub mod word_api;

pub use engine::EngineConfig;
pub use word_api::WordApiConfig;
