use crate::error::AppError;
use crate::model::requests::IdentifyRequest;
use crate::model::responses::ResourceResponse;
use async_trait::async_trait;

/// Interface for the identify endpoint
#[async_trait]
pub trait IdentifyService: Send + Sync {
    /// Requests a URL where the member proves their MydexID
    async fn identify(&self, request: &IdentifyRequest) -> Result<ResourceResponse, AppError>;
}
