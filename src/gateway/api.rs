//! Narrow view of the API Gateway management API: the three read-only
//! listing calls this tool needs, behind a trait so the sweep can be
//! exercised without AWS.

use async_trait::async_trait;
use aws_sdk_apigateway::error::{ProvideErrorMetadata, SdkError};

use super::error::GatewayError;

#[async_trait]
pub trait GatewayApi {
    /// Ids of every REST API deployed in the client's region.
    async fn rest_api_ids(&self) -> Result<Vec<String>, GatewayError>;

    /// Names of the deployment stages configured for one REST API.
    async fn stage_names(&self, rest_api_id: &str) -> Result<Vec<String>, GatewayError>;

    /// Resource paths registered under one REST API.
    async fn resource_paths(&self, rest_api_id: &str) -> Result<Vec<String>, GatewayError>;
}

/// `GatewayApi` backed by the AWS SDK client for a single region.
pub struct RestApiGateway {
    client: aws_sdk_apigateway::Client,
}

impl RestApiGateway {
    pub fn new(client: aws_sdk_apigateway::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GatewayApi for RestApiGateway {
    async fn rest_api_ids(&self) -> Result<Vec<String>, GatewayError> {
        let response = self
            .client
            .get_rest_apis()
            .send()
            .await
            .map_err(|error| classify("GetRestApis", error))?;

        Ok(response
            .items()
            .iter()
            .filter_map(|api| api.id().map(str::to_string))
            .collect())
    }

    async fn stage_names(&self, rest_api_id: &str) -> Result<Vec<String>, GatewayError> {
        let response = self
            .client
            .get_stages()
            .rest_api_id(rest_api_id)
            .send()
            .await
            .map_err(|error| classify("GetStages", error))?;

        Ok(response
            .item()
            .iter()
            .filter_map(|stage| stage.stage_name().map(str::to_string))
            .collect())
    }

    async fn resource_paths(&self, rest_api_id: &str) -> Result<Vec<String>, GatewayError> {
        let response = self
            .client
            .get_resources()
            .rest_api_id(rest_api_id)
            .send()
            .await
            .map_err(|error| classify("GetResources", error))?;

        Ok(response
            .items()
            .iter()
            .filter_map(|resource| resource.path().map(str::to_string))
            .collect())
    }
}

/// Sorts an SDK failure into the recoverable access-denied kind or the
/// fatal catch-all. Only the `AccessDeniedException` code is recoverable.
fn classify<E, R>(operation: &'static str, error: SdkError<E, R>) -> GatewayError
where
    SdkError<E, R>: std::error::Error + ProvideErrorMetadata + Send + Sync + 'static,
{
    if error.code() == Some("AccessDeniedException") {
        GatewayError::AccessDenied { operation }
    } else {
        GatewayError::Api {
            operation,
            source: Box::new(error),
        }
    }
}
