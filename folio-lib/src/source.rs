use async_trait::async_trait;

use crate::error::LoadError;

/// Where the portfolio document comes from.
///
/// The document is fetched once per load; nothing is retried.
#[async_trait(?Send)]
pub trait DocumentSource {
    /// Human readable location, used in logs and transport errors
    fn describe(&self) -> String;

    async fn fetch(&self) -> Result<String, LoadError>;
}

#[async_trait(?Send)]
impl<T: DocumentSource + ?Sized> DocumentSource for Box<T> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    async fn fetch(&self) -> Result<String, LoadError> {
        (**self).fetch().await
    }
}

/// A document already held in memory
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: String,
    body: String,
}

impl StaticSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self::named("inline", body)
    }

    pub fn named(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }
}

#[async_trait(?Send)]
impl DocumentSource for StaticSource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    async fn fetch(&self) -> Result<String, LoadError> {
        Ok(self.body.clone())
    }
}

/// A source that always fails, as an unreachable endpoint would
#[derive(Debug, Clone)]
pub struct FailingSource {
    name: String,
    reason: String,
}

impl FailingSource {
    pub fn new(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[async_trait(?Send)]
impl DocumentSource for FailingSource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    async fn fetch(&self) -> Result<String, LoadError> {
        Err(LoadError::transport(&self.name, &self.reason))
    }
}

#[cfg(feature = "native")]
pub use native::{source_for, FileSource, HttpSource};

#[cfg(feature = "native")]
mod native {
    use super::*;
    use std::path::PathBuf;

    /// A document on the local filesystem
    #[derive(Debug, Clone)]
    pub struct FileSource {
        path: PathBuf,
    }

    impl FileSource {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }
    }

    #[async_trait(?Send)]
    impl DocumentSource for FileSource {
        fn describe(&self) -> String {
            self.path.display().to_string()
        }

        async fn fetch(&self) -> Result<String, LoadError> {
            tokio::fs::read_to_string(&self.path)
                .await
                .map_err(|e| LoadError::transport(self.describe(), e))
        }
    }

    /// A document served over HTTP(S). Non-success statuses are transport errors.
    #[derive(Debug, Clone)]
    pub struct HttpSource {
        url: String,
        client: reqwest::Client,
    }

    impl HttpSource {
        pub fn new(url: impl Into<String>) -> Self {
            Self {
                url: url.into(),
                client: reqwest::Client::new(),
            }
        }
    }

    #[async_trait(?Send)]
    impl DocumentSource for HttpSource {
        fn describe(&self) -> String {
            self.url.clone()
        }

        async fn fetch(&self) -> Result<String, LoadError> {
            let response = self
                .client
                .get(&self.url)
                .send()
                .await
                .and_then(|response| response.error_for_status())
                .map_err(|e| LoadError::transport(&self.url, e))?;

            response
                .text()
                .await
                .map_err(|e| LoadError::transport(&self.url, e))
        }
    }

    /// Pick a source for a configured location: http(s) URLs are fetched, anything else is a path
    pub fn source_for(location: &str) -> Box<dyn DocumentSource> {
        if crate::config::is_remote(location) {
            Box::new(HttpSource::new(location))
        } else {
            Box::new(FileSource::new(location))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_source() {
        let source = StaticSource::named("data.json", "{}");
        assert_eq!(source.describe(), "data.json");
        assert_eq!(source.fetch().await.unwrap(), "{}");
    }

    #[tokio::test]
    async fn test_failing_source_is_transport_error() {
        let source: Box<dyn DocumentSource> =
            Box::new(FailingSource::new("data.json", "404 Not Found"));
        let error = source.fetch().await.unwrap_err();
        assert!(error.is_transport());
        assert!(error.to_string().contains("404 Not Found"));
    }

    #[cfg(feature = "native")]
    #[tokio::test]
    async fn test_missing_file_is_transport_error() {
        let source = FileSource::new("definitely/not/here/data.json");
        let error = source.fetch().await.unwrap_err();
        assert!(matches!(
            error,
            LoadError::Transport { ref source_name, .. } if source_name == "definitely/not/here/data.json"
        ));
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_source_for_location() {
        assert_eq!(
            source_for("https://example.com/data.json").describe(),
            "https://example.com/data.json"
        );
        assert_eq!(source_for("site/data.json").describe(), "site/data.json");
    }
}
