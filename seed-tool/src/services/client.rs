use crate::config::SeedConfig;
use crate::models::errors::SeedError;
use crate::models::responses::BookSummary;
use catalog_core::ValidatedBook;
use reqwest::{Client, RequestBuilder, StatusCode};
use std::time::Duration;
use tracing::{error, info};

/// HTTP client for the catalog backend.
pub struct CatalogClient {
    client: Client,
    config: SeedConfig,
}

impl CatalogClient {
    pub fn new(config: SeedConfig) -> Result<Self, SeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SeedConfig {
        &self.config
    }

    pub async fn health_check(&self) -> Result<(), SeedError> {
        let url = self.config.endpoint("/health");
        info!("Checking backend health at {}", url);

        let response = self.client.get(url).send().await?;

        if response.status().is_success() {
            info!("Backend is ready");
            Ok(())
        } else {
            error!("Backend responded with status: {}", response.status());
            Err(SeedError::BackendUnavailable {
                status: response.status().as_u16(),
            })
        }
    }

    /// Ids of every book currently stored. Entries without an id are skipped.
    pub async fn list_book_ids(&self) -> Result<Vec<String>, SeedError> {
        let url = self.config.endpoint("/books");
        let response = self.authorized(self.client.get(url.clone())).send().await?;

        if response.status() != StatusCode::OK {
            return Err(SeedError::ClearFailed {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let books: Vec<BookSummary> = response.json().await?;
        Ok(books.into_iter().filter_map(BookSummary::into_id).collect())
    }

    pub async fn delete_book(&self, id: &str) -> Result<(), SeedError> {
        let url = self.config.endpoint(&format!("/books/{}", id));
        let response = self
            .authorized(self.client.delete(url.clone()))
            .send()
            .await?;

        if response.status() == StatusCode::NO_CONTENT {
            Ok(())
        } else {
            error!("Failed to delete book {}: {}", id, response.status());
            Err(SeedError::ClearFailed {
                url: url.to_string(),
                status: response.status().as_u16(),
            })
        }
    }

    /// Posts one book. Anything but a 201 is a rejection.
    pub async fn create_book(&self, book: &ValidatedBook) -> Result<(), SeedError> {
        let url = self.config.endpoint("/books");
        let response = self.authorized(self.client.post(url)).json(book).send().await?;

        let status = response.status();
        if status == StatusCode::CREATED {
            return Ok(());
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                error!("Failed to read the response for '{}': {}", book.title(), e);
                format!("<unreadable response body: {}>", e)
            }
        };
        error!("Backend rejected '{}' with {}: {}", book.title(), status, body);
        Err(SeedError::UploadRejected {
            title: book.title().to_string(),
            status: status.as_u16(),
            body,
        })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.credentials {
            Some(credentials) => {
                request.basic_auth(&credentials.username, Some(&credentials.password))
            }
            None => request,
        }
    }
}
