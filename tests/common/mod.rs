//! Fake Hacker News upstream served from a local axum server
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const SCENARIO_IDS: [i64; 5] = [111111111, 222222222, 333333333, 444444444, 555555555];

#[derive(Clone)]
struct UpstreamState {
    ids: Vec<i64>,
    items: HashMap<i64, Value>,
    top_status: StatusCode,
    item_status: HashMap<i64, StatusCode>,
    top_hits: Arc<AtomicUsize>,
    item_hits: Arc<AtomicUsize>,
}

pub struct FakeUpstream {
    state: UpstreamState,
}

pub struct RunningUpstream {
    pub base_url: String,
    top_hits: Arc<AtomicUsize>,
    item_hits: Arc<AtomicUsize>,
}

impl RunningUpstream {
    pub fn top_hits(&self) -> usize {
        self.top_hits.load(Ordering::SeqCst)
    }

    pub fn item_hits(&self) -> usize {
        self.item_hits.load(Ordering::SeqCst)
    }
}

impl FakeUpstream {
    pub fn new() -> Self {
        Self {
            state: UpstreamState {
                ids: Vec::new(),
                items: HashMap::new(),
                top_status: StatusCode::OK,
                item_status: HashMap::new(),
                top_hits: Arc::new(AtomicUsize::new(0)),
                item_hits: Arc::new(AtomicUsize::new(0)),
            },
        }
    }

    /// Five valid stories, `Test1`..`Test5` with `http://test<n>.com`
    pub fn scenario() -> Self {
        SCENARIO_IDS
            .iter()
            .enumerate()
            .fold(Self::new(), |upstream, (i, &id)| {
                upstream.story(
                    id,
                    json!({
                        "id": id,
                        "by": "tester",
                        "type": "story",
                        "title": format!("Test{}", i + 1),
                        "url": format!("http://test{}.com", i + 1),
                    }),
                )
            })
    }

    /// Add an item; its ID is appended to the top-stories list
    pub fn story(mut self, id: i64, body: Value) -> Self {
        self.state.ids.push(id);
        self.state.items.insert(id, body);
        self
    }

    /// List an ID whose item resolves to `null`
    pub fn deleted(mut self, id: i64) -> Self {
        self.state.ids.push(id);
        self
    }

    pub fn top_status(mut self, status: StatusCode) -> Self {
        self.state.top_status = status;
        self
    }

    pub fn item_status(mut self, id: i64, status: StatusCode) -> Self {
        self.state.item_status.insert(id, status);
        self
    }

    pub async fn start(self) -> RunningUpstream {
        let top_hits = self.state.top_hits.clone();
        let item_hits = self.state.item_hits.clone();

        let app = Router::new()
            .route("/v0/topstories.json", get(top_stories))
            .route("/v0/item/:file", get(item))
            .with_state(self.state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        RunningUpstream {
            base_url: format!("http://{}/v0/", addr),
            top_hits,
            item_hits,
        }
    }
}

async fn top_stories(State(state): State<UpstreamState>) -> Response {
    state.top_hits.fetch_add(1, Ordering::SeqCst);

    if !state.top_status.is_success() {
        return (state.top_status, "upstream failure").into_response();
    }

    Json(state.ids.clone()).into_response()
}

async fn item(State(state): State<UpstreamState>, Path(file): Path<String>) -> Response {
    state.item_hits.fetch_add(1, Ordering::SeqCst);

    let id = match file.trim_end_matches(".json").parse::<i64>() {
        Ok(id) => id,
        Err(_) => return StatusCode::NOT_FOUND.into_response(),
    };

    if let Some(status) = state.item_status.get(&id) {
        return (*status, "item failure").into_response();
    }

    // Unknown items are `null`, like the real API
    Json(state.items.get(&id).cloned().unwrap_or(Value::Null)).into_response()
}
