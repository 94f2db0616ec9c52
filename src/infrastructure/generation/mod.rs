// src/infrastructure/generation/mod.rs
mod chat_completions;

pub use chat_completions::{
    ChatCompletionsClient, ChatCompletionsSettings, DEFAULT_ENDPOINT, DEFAULT_MODEL,
    DEFAULT_TIMEOUT,
};
