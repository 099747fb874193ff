pub mod story;
pub mod story_data;
pub mod page;

pub use story::Story;
pub use story_data::StoryData;
pub use page::{Page, PageRequest, NEGATIVE_PAGE_MESSAGE};
