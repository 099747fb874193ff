use crate::domain::Story;

/// Story lookups keyed by upstream ID, with a fixed time-to-live per entry
#[cfg_attr(test, mockall::automock)]
pub trait StoryCache: Send + Sync {
    /// Cached story, or `None` when absent or expired
    fn get(&self, id: i64) -> Option<Story>;

    /// Store a story. Its expiry is counted from this call.
    fn put(&self, id: i64, story: Story);
}
