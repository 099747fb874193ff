use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub title: String,
    pub url: String,
}

impl Story {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    /// A story needs a non-blank title and a non-blank URL to be listed
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.url.trim().is_empty()
    }

    /// Case-insensitive substring match on the title.
    /// A blank filter matches everything.
    pub fn matches_title(&self, filter: &str) -> bool {
        if filter.trim().is_empty() {
            return true;
        }

        self.title.to_lowercase().contains(&filter.to_lowercase())
    }
}
