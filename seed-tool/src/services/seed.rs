use crate::models::errors::SeedError;
use crate::services::client::CatalogClient;
use crate::services::loader::load_books;
use crate::utils::prompt::Confirm;
use catalog_core::{validate_all, RawBook, ValidatedBook};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedOptions {
    /// Delete every book on the backend before uploading.
    pub clear_existing: bool,
}

impl SeedOptions {
    pub fn question(&self) -> &'static str {
        if self.clear_existing {
            "This will clear whatever it was in your database before, are you sure?"
        } else {
            "Have you updated your database?"
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub cleared: usize,
    pub uploaded: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Completed(SeedReport),
    /// The operator answered no; nothing was changed.
    Declined,
}

/// Drives a seeding run against one backend.
///
/// Requests are issued one at a time, in document order. The first failure
/// aborts the run and books already uploaded stay on the backend.
pub struct Seeder {
    client: CatalogClient,
    confirm: Box<dyn Confirm + Send>,
}

impl Seeder {
    pub fn new(client: CatalogClient, confirm: Box<dyn Confirm + Send>) -> Self {
        Self { client, confirm }
    }

    pub async fn seed_file(
        &mut self,
        path: &Path,
        options: SeedOptions,
    ) -> Result<SeedOutcome, SeedError> {
        let books = load_books(path)?;
        self.run(&books, options).await
    }

    /// Health check, validation of the whole batch, confirmation, optional
    /// clear, then upload. Nothing is deleted or posted unless every entry
    /// validates.
    pub async fn run(
        &mut self,
        books: &[RawBook],
        options: SeedOptions,
    ) -> Result<SeedOutcome, SeedError> {
        self.client.health_check().await?;

        let books = validate_all(books)?;
        info!("All {} books are valid", books.len());

        if !self
            .confirm
            .confirm(options.question())
            .map_err(SeedError::Prompt)?
        {
            info!("Seeding declined, nothing was changed");
            return Ok(SeedOutcome::Declined);
        }

        let cleared = if options.clear_existing {
            self.clear().await?
        } else {
            0
        };
        let uploaded = self.upload(&books).await?;

        info!("Seeding complete: {} cleared, {} uploaded", cleared, uploaded);
        Ok(SeedOutcome::Completed(SeedReport { cleared, uploaded }))
    }

    async fn clear(&self) -> Result<usize, SeedError> {
        let ids = self.client.list_book_ids().await?;
        if !ids.is_empty() {
            info!("Clearing {} existing rows...", ids.len());
        }

        for id in &ids {
            self.client.delete_book(id).await?;
        }

        Ok(ids.len())
    }

    async fn upload(&self, books: &[ValidatedBook]) -> Result<usize, SeedError> {
        for (i, book) in books.iter().enumerate() {
            self.client.create_book(book).await?;
            info!("[{}/{}] Uploaded '{}'", i + 1, books.len(), book.title());
        }

        Ok(books.len())
    }
}
