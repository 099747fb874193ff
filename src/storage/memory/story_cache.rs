use std::time::Duration;

use moka::sync::Cache;

use crate::domain::Story;
use crate::storage::traits::StoryCache;

pub const DEFAULT_TTL: Duration = Duration::from_secs(10 * 60);
pub const DEFAULT_CAPACITY: u64 = 10_000;

/// In-process story cache backed by moka.
///
/// Entries expire a fixed time after insertion; reads never extend it.
/// Expired entries read as misses even before moka's housekeeping drops them.
#[derive(Clone)]
pub struct MemoryStoryCache {
    entries: Cache<i64, Story>,
    ttl: Duration,
}

impl MemoryStoryCache {
    pub fn new(ttl: Duration) -> Self {
        Self::with_capacity(ttl, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(ttl: Duration, capacity: u64) -> Self {
        Self {
            entries: Cache::builder()
                .max_capacity(capacity)
                .time_to_live(ttl)
                .build(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl Default for MemoryStoryCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl StoryCache for MemoryStoryCache {
    fn get(&self, id: i64) -> Option<Story> {
        self.entries.get(&id)
    }

    fn put(&self, id: i64, story: Story) {
        self.entries.insert(id, story);
    }
}
