// src/application/commands/generation/mod.rs
mod policy;
mod run;
mod service;

pub use policy::OverlapPolicy;
pub use run::{GENERATION_PROMPT, compose_article};
pub use service::ArticleGenerationService;
