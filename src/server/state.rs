use crate::books::BookManager;
use axum::extract::FromRef;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedBookManager = Arc<BookManager>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub manager: GuardedBookManager,
}

impl FromRef<ServerState> for GuardedBookManager {
    fn from_ref(input: &ServerState) -> Self {
        input.manager.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
