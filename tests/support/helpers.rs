// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::Response;
use serde_json::Value;

use autoblog_core::application::commands::generation::OverlapPolicy;
use autoblog_core::application::ports::generation::TextGenerator;
use autoblog_core::application::services::{ApplicationServices, PipelineSettings};
use autoblog_core::infrastructure::seed_corpus;
use autoblog_core::presentation::http::{routes::build_router, state::HttpState};

use super::mocks::InMemoryArticleStore;

pub fn build_services(
    store: Arc<InMemoryArticleStore>,
    generator: Arc<dyn TextGenerator>,
    overlap_policy: OverlapPolicy,
) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(
        store.clone(),
        store,
        generator,
        PipelineSettings {
            max_output_tokens: 200,
            overlap_policy,
            seed_corpus: seed_corpus::default_corpus().expect("default corpus"),
        },
    ))
}

pub fn make_test_router(
    store: Arc<InMemoryArticleStore>,
    generator: Arc<dyn TextGenerator>,
) -> axum::Router {
    let services = build_services(store, generator, OverlapPolicy::Allow);
    build_router(HttpState { services })
}

pub async fn json_body(resp: Response<Body>) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("response body is JSON")
}
