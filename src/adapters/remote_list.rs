use crate::domain::model::DomainSet;
use crate::domain::ports::DomainSource;
use crate::utils::error::{Result, SyncError};
use async_trait::async_trait;
use reqwest::Client;

/// Desired-state source backed by a remote line-delimited list.
pub struct RemoteListSource {
    client: Client,
    url: String,
}

impl RemoteListSource {
    pub fn new(url: String) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }
}

#[async_trait]
impl DomainSource for RemoteListSource {
    fn describe(&self) -> String {
        format!("URL '{}'", self.url)
    }

    async fn load(&self) -> Result<DomainSet> {
        tracing::debug!("Fetching domain list from {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(SyncError::StatusError {
                context: format!("URL list fetch ({})", self.url),
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        // 每一行視為一個網域，空白行略過
        let body = response.text().await?;
        let domains = body
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect::<DomainSet>();

        Ok(domains)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_load_splits_body_into_lines() {
        let server = MockServer::start();
        let list_mock = server.mock(|when, then| {
            when.method(GET).path("/domains.txt");
            then.status(200)
                .body("a.example.com\r\nb.example.com\n\nc.example.com\n");
        });

        let source = RemoteListSource::new(server.url("/domains.txt"));
        let domains = source.load().await.unwrap();

        list_mock.assert();
        assert_eq!(domains.len(), 3);
        assert!(domains.contains("a.example.com"));
        assert!(domains.contains("b.example.com"));
        assert!(domains.contains("c.example.com"));
    }

    #[tokio::test]
    async fn test_load_non_200_is_an_error() {
        let server = MockServer::start();
        let list_mock = server.mock(|when, then| {
            when.method(GET).path("/domains.txt");
            then.status(500).body("upstream broke");
        });

        let source = RemoteListSource::new(server.url("/domains.txt"));
        let result = source.load().await;

        list_mock.assert();
        match result {
            Err(SyncError::StatusError { status, body, .. }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "upstream broke");
            }
            other => panic!("expected StatusError, got {:?}", other.map(|d| d.len())),
        }
    }
}
