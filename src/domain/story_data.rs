use serde::{Deserialize, Serialize};

use super::Story;

/// Response envelope returned by the stories listing.
///
/// `total_stories` counts the stories that survived filtering, before the
/// page window was applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryData {
    pub stories: Vec<Story>,
    pub errors: Vec<String>,
    pub total_stories: usize,
}

impl StoryData {
    pub fn new(stories: Vec<Story>, total_stories: usize) -> Self {
        Self {
            stories,
            errors: Vec::new(),
            total_stories,
        }
    }

    /// An envelope carrying a single error and no stories
    pub fn from_error(message: impl Into<String>) -> Self {
        Self {
            stories: Vec::new(),
            errors: vec![message.into()],
            total_stories: 0,
        }
    }
}
