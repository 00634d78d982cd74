use async_trait::async_trait;
use folio::{DocumentSource, LoadError};
use gloo_net::http::Request;

/// A document fetched relative to the page
pub struct FetchSource {
    url: String,
}

impl FetchSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl DocumentSource for FetchSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<String, LoadError> {
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::transport(&self.url, e))?;

        if !response.ok() {
            return Err(LoadError::transport(
                &self.url,
                format!("HTTP error! status: {}", response.status()),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| LoadError::transport(&self.url, e))
    }
}
