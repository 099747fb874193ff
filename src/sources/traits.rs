use async_trait::async_trait;

use crate::domain::Story;
use crate::errors::StoriesResult;

/// Upstream provider of top-story IDs and story records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorySource: Send + Sync {
    /// Current top-story IDs, in ranking order
    async fn fetch_top_ids(&self) -> StoriesResult<Vec<i64>>;

    /// Resolve a single story by ID
    async fn fetch_story(&self, id: i64) -> StoriesResult<Story>;
}
