#![allow(dead_code)]

use axum_test::TestServer;
use shortcode::domain::entities::NewLink;
use shortcode::domain::repositories::{InsertOutcome, LinkRepository};
use shortcode::infrastructure::persistence::MemoryLinkRepository;
use shortcode::routes::app_router;
use shortcode::state::AppState;
use std::sync::Arc;

pub const TEST_BASE_URL: &str = "https://sho.rt";

pub fn create_test_state() -> (AppState, Arc<MemoryLinkRepository>) {
    let repository = Arc::new(MemoryLinkRepository::new());
    let state = AppState::new(repository.clone(), TEST_BASE_URL.to_string(), "memory");
    (state, repository)
}

pub fn create_test_server() -> (TestServer, Arc<MemoryLinkRepository>) {
    let (state, repository) = create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();
    (server, repository)
}

pub async fn seed_link(repository: &MemoryLinkRepository, code: &str, url: &str) {
    let outcome = repository
        .insert(NewLink {
            code: code.to_string(),
            target_url: url.to_string(),
        })
        .await
        .unwrap();

    assert!(matches!(outcome, InsertOutcome::Inserted(_)));
}
