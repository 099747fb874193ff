pub mod traits;
pub mod memory;

pub use traits::StoryCache;
pub use memory::MemoryStoryCache;
