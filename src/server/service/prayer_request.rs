use sea_orm::DatabaseConnection;

use crate::server::{
    data::document::DocumentRepository,
    error::{AppError, StoreContext},
    model::{
        document::{DeletedDocument, Document, Filter},
        prayer_request::{CreatePrayerRequestParams, PrayerRequest, UpdatePrayerRequestParams},
        PageParams,
    },
    service::malformed,
};

/// Collection holding prayer request documents.
pub const PRAYER_REQUESTS: &str = "prayer-requests";

pub struct PrayerRequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PrayerRequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a prayer request under a store-generated id.
    pub async fn create(
        &self,
        params: CreatePrayerRequestParams,
    ) -> Result<PrayerRequest, AppError> {
        let repo = DocumentRepository::new(self.db);

        let document = repo
            .create(PRAYER_REQUESTS, params.into_data())
            .await
            .context("Failed to create prayer request")?;

        tracing::info!("Created prayer request {}", document.id);

        read_prayer_request(document)
    }

    /// Lists prayer requests in id order.
    pub async fn find_all(&self, page: PageParams) -> Result<Vec<PrayerRequest>, AppError> {
        self.find_where(&[], page).await
    }

    /// Lists the prayer requests sent by `requester`.
    pub async fn find_by_requester(
        &self,
        requester: &str,
        page: PageParams,
    ) -> Result<Vec<PrayerRequest>, AppError> {
        self.find_where(&[Filter::eq("requester", requester)], page)
            .await
    }

    /// Gets a prayer request by id.
    ///
    /// # Returns
    /// - `Ok(PrayerRequest)` - The prayer request
    /// - `Err(AppError::NotFound)` - No prayer request with that id
    /// - `Err(AppError::StoreErr)` - Store failure
    pub async fn find_one(&self, id: &str) -> Result<PrayerRequest, AppError> {
        let repo = DocumentRepository::new(self.db);

        let document = repo
            .find_one(PRAYER_REQUESTS, id)
            .await
            .context("Failed to fetch prayer request")?
            .ok_or_else(|| not_found(id))?;

        read_prayer_request(document)
    }

    pub async fn update(
        &self,
        id: &str,
        params: UpdatePrayerRequestParams,
    ) -> Result<PrayerRequest, AppError> {
        let repo = DocumentRepository::new(self.db);

        let document = repo
            .update(PRAYER_REQUESTS, id, params.patch)
            .await
            .context("Failed to update prayer request")?
            .ok_or_else(|| not_found(id))?;

        tracing::debug!("Updated prayer request {}", id);

        read_prayer_request(document)
    }

    pub async fn remove(&self, id: &str) -> Result<DeletedDocument, AppError> {
        let repo = DocumentRepository::new(self.db);

        let deleted = repo
            .remove(PRAYER_REQUESTS, id)
            .await
            .context("Failed to delete prayer request")?
            .ok_or_else(|| not_found(id))?;

        tracing::info!("Deleted prayer request {}", id);

        Ok(deleted)
    }

    async fn find_where(
        &self,
        filters: &[Filter],
        page: PageParams,
    ) -> Result<Vec<PrayerRequest>, AppError> {
        let repo = DocumentRepository::new(self.db);

        let documents = repo
            .find_all(
                PRAYER_REQUESTS,
                filters,
                page.limit,
                page.start_after.as_deref(),
            )
            .await
            .context("Failed to fetch prayer requests")?;

        documents.into_iter().map(read_prayer_request).collect()
    }
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Prayer request with ID {} not found", id))
}

fn read_prayer_request(document: Document) -> Result<PrayerRequest, AppError> {
    let id = document.id.clone();
    PrayerRequest::from_document(document).map_err(|e| malformed("prayer request", &id, e))
}
