use futures::stream::{self, StreamExt, TryStreamExt};

use crate::domain::{PageRequest, Story, StoryData};
use crate::errors::StoriesResult;
use crate::sources::StorySource;
use crate::storage::StoryCache;

pub const DEFAULT_FETCH_CONCURRENCY: usize = 8;

/// Builds a page of top stories: fetch IDs, resolve each through the cache,
/// drop invalid stories, apply the title filter, then cut the page window.
pub struct ListingService<S: StorySource, C: StoryCache> {
    source: S,
    cache: C,
    concurrency: usize,
}

impl<S: StorySource, C: StoryCache> ListingService<S, C> {
    pub fn new(source: S, cache: C) -> Self {
        Self {
            source,
            cache,
            concurrency: DEFAULT_FETCH_CONCURRENCY,
        }
    }

    /// Bound on concurrent story lookups per request (at least 1)
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// List one page of top stories.
    ///
    /// Page parameters are validated before any upstream call. A page past
    /// the end comes back empty rather than failing. Any upstream failure
    /// fails the whole listing.
    pub async fn list_stories(&self, request: &PageRequest) -> StoriesResult<StoryData> {
        let page = request.validate()?;

        let ids = self.source.fetch_top_ids().await?;
        tracing::debug!(count = ids.len(), "fetched top story ids");

        let stories = self.resolve_all(ids).await?;

        let filtered: Vec<Story> = match request.title_filter() {
            Some(filter) => stories
                .into_iter()
                .filter(|story| story.matches_title(filter))
                .collect(),
            None => stories,
        };

        let total_stories = filtered.len();

        Ok(StoryData::new(page.slice(filtered), total_stories))
    }

    /// Resolve every ID, keeping upstream order and dropping invalid stories
    async fn resolve_all(&self, ids: Vec<i64>) -> StoriesResult<Vec<Story>> {
        let resolved: Vec<Option<Story>> = stream::iter(ids)
            .map(|id| self.resolve(id))
            .buffered(self.concurrency)
            .try_collect()
            .await?;

        Ok(resolved.into_iter().flatten().collect())
    }

    /// Cache first, then upstream. Only valid stories are cached.
    async fn resolve(&self, id: i64) -> StoriesResult<Option<Story>> {
        if let Some(story) = self.cache.get(id) {
            tracing::trace!(id, "story cache hit");
            return Ok(Some(story).filter(Story::is_valid));
        }

        tracing::trace!(id, "story cache miss");
        let story = self.source.fetch_story(id).await?;

        if !story.is_valid() {
            tracing::debug!(id, "dropping story with blank title or url");
            return Ok(None);
        }

        self.cache.put(id, story.clone());
        Ok(Some(story))
    }
}
