use serde::Deserialize;

use crate::errors::{StoriesError, StoriesResult};

pub const NEGATIVE_PAGE_MESSAGE: &str = "Page index and page size cannot be negative numbers.";

/// Page parameters exactly as a client sent them.
/// Missing values default to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    #[serde(default)]
    pub page_index: i64,
    #[serde(default)]
    pub page_size: i64,
    #[serde(default)]
    pub title: Option<String>,
}

impl PageRequest {
    pub fn new(page_index: i64, page_size: i64) -> Self {
        Self {
            page_index,
            page_size,
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Reject negative values and produce a usable page window
    pub fn validate(&self) -> StoriesResult<Page> {
        if self.page_index < 0 || self.page_size < 0 {
            return Err(StoriesError::validation(NEGATIVE_PAGE_MESSAGE));
        }

        Ok(Page {
            index: usize::try_from(self.page_index).unwrap_or(usize::MAX),
            size: usize::try_from(self.page_size).unwrap_or(usize::MAX),
        })
    }

    /// The title filter, if one was given and is not blank
    pub fn title_filter(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub index: usize,
    pub size: usize,
}

impl Page {
    /// Offset of the first item on this page
    pub fn offset(&self) -> usize {
        self.index.saturating_mul(self.size)
    }

    /// Take this page's window out of `items`.
    /// Pages past the end come back empty.
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        items.into_iter().skip(self.offset()).take(self.size).collect()
    }
}
