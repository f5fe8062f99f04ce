use crate::error::AppError;
use crate::model::responses::ResourceResponse;
use crate::presentation::measurement::MeasurementRecord;
use async_trait::async_trait;

/// Interface for the add-measurements feature block
#[async_trait]
pub trait MeasurementService: Send + Sync {
    /// Submits measurements to the configured member's data store
    ///
    /// The member uid and connection id go in the query string and the
    /// member key in the `Connection-Token` header.
    async fn add_measurements(
        &self,
        records: &[MeasurementRecord],
    ) -> Result<ResourceResponse, AppError>;
}
