// src/application/commands/generation/service.rs
use std::sync::Arc;

use tokio::sync::Mutex;

use super::OverlapPolicy;
use crate::{application::ports::generation::TextGenerator, domain::article::ArticleWriteRepository};

pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 200;

pub struct ArticleGenerationService {
    pub(super) generator: Arc<dyn TextGenerator>,
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) max_output_tokens: u32,
    pub(super) policy: OverlapPolicy,
    pub(super) in_flight: Mutex<()>,
}

impl ArticleGenerationService {
    #[must_use]
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        write_repo: Arc<dyn ArticleWriteRepository>,
    ) -> Self {
        Self {
            generator,
            write_repo,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            policy: OverlapPolicy::default(),
            in_flight: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: OverlapPolicy) -> Self {
        self.policy = policy;
        self
    }
}
