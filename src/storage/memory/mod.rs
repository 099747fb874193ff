pub mod story_cache;

pub use story_cache::{MemoryStoryCache, DEFAULT_CAPACITY, DEFAULT_TTL};
