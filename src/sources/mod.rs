pub mod traits;
pub mod hacker_news;

pub use traits::StorySource;
pub use hacker_news::{HackerNewsSource, DEFAULT_BASE_URL};
