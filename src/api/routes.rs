use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use crate::domain::{PageRequest, StoryData};
use crate::errors::{StoriesError, StoriesResult};
use crate::services::ListingService;
use crate::sources::StorySource;
use crate::storage::StoryCache;

pub const STORIES_PATH: &str = "/api/stories";

pub fn router<S, C>(service: Arc<ListingService<S, C>>) -> Router
where
    S: StorySource + 'static,
    C: StoryCache + 'static,
{
    Router::new()
        .route(STORIES_PATH, get(list_stories::<S, C>))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// GET /api/stories?pageIndex=&pageSize=&title=
async fn list_stories<S, C>(
    State(service): State<Arc<ListingService<S, C>>>,
    query: Result<Query<PageRequest>, QueryRejection>,
) -> StoriesResult<Json<StoryData>>
where
    S: StorySource + 'static,
    C: StoryCache + 'static,
{
    let Query(request) = query.map_err(|rejection| StoriesError::validation(rejection.body_text()))?;

    let data = service.list_stories(&request).await?;
    Ok(Json(data))
}
