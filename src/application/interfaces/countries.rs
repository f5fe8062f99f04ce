use crate::error::AppError;
use crate::model::responses::ResourceResponse;
use async_trait::async_trait;

/// Interface for the master reference data country lookup
#[async_trait]
pub trait CountryService: Send + Sync {
    /// Fetches reference data for one country
    ///
    /// # Arguments
    /// * `country_code` - ISO 3166-1 alpha-2 code, e.g. "FR"
    async fn get_country(&self, country_code: &str) -> Result<ResourceResponse, AppError>;
}
