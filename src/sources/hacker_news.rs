use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::domain::Story;
use crate::errors::{StoriesError, StoriesResult};
use crate::sources::traits::StorySource;

pub const DEFAULT_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0/";

/// Item payload from `/item/<id>.json`. Only the fields we list are read.
#[derive(Debug, Deserialize)]
struct ItemResponse {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

impl From<ItemResponse> for Story {
    fn from(item: ItemResponse) -> Self {
        Story::new(item.title.unwrap_or_default(), item.url.unwrap_or_default())
    }
}

pub struct HackerNewsSource {
    client: Client,
    base_url: Url,
}

impl HackerNewsSource {
    pub fn new(base_url: &str) -> StoriesResult<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Self::with_client(client, base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> StoriesResult<Self> {
        Ok(Self {
            client,
            base_url: Self::parse_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Parse the base URL, making sure relative joins land under its path
    fn parse_base_url(base_url: &str) -> StoriesResult<Url> {
        let mut parsed = Url::parse(base_url)
            .map_err(|e| StoriesError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        if parsed.cannot_be_a_base() {
            return Err(StoriesError::InvalidUrl(format!(
                "{}: not usable as a base URL",
                base_url
            )));
        }

        if !parsed.path().ends_with('/') {
            let path = format!("{}/", parsed.path());
            parsed.set_path(&path);
        }

        Ok(parsed)
    }

    fn top_stories_url(&self) -> StoriesResult<Url> {
        self.join("topstories.json")
    }

    fn item_url(&self, id: i64) -> StoriesResult<Url> {
        self.join(&format!("item/{}.json", id))
    }

    fn join(&self, path: &str) -> StoriesResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| StoriesError::InvalidUrl(format!("{}{}: {}", self.base_url, path, e)))
    }

    /// GET a JSON document. Transport failures, non-success statuses and
    /// undecodable bodies all count as the upstream being unavailable.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> StoriesResult<T> {
        tracing::debug!(%url, "fetching from upstream");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| StoriesError::upstream(format!("GET {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoriesError::upstream(format!(
                "GET {} returned {}",
                url, status
            )));
        }

        response.json::<T>().await.map_err(|e| {
            StoriesError::upstream(format!("GET {} returned an unreadable body: {}", url, e))
        })
    }
}

#[async_trait]
impl StorySource for HackerNewsSource {
    async fn fetch_top_ids(&self) -> StoriesResult<Vec<i64>> {
        let url = self.top_stories_url()?;
        self.get_json::<Vec<i64>>(url).await
    }

    async fn fetch_story(&self, id: i64) -> StoriesResult<Story> {
        let url = self.item_url(id)?;

        // Unknown or deleted items come back as `null`
        let item = self.get_json::<Option<ItemResponse>>(url).await?;

        Ok(item.map(Story::from).unwrap_or_else(|| Story::new("", "")))
    }
}
