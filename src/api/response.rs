use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::domain::StoryData;
use crate::errors::StoriesError;

/// Errors reach the client as a `StoryData` envelope carrying one message,
/// so the browser client can surface `errors` the same way for every status.
impl IntoResponse for StoriesError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "stories request failed");
        } else {
            tracing::warn!(error = %self, "stories request rejected");
        }

        (status, Json(StoryData::from_error(self.to_string()))).into_response()
    }
}
