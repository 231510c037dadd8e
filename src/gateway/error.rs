use thiserror::Error;

/// Failures surfaced by the API Gateway listing calls.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The caller's credentials lack permission for the listing call.
    /// Recoverable: the sweep skips the region (REST API listing) or the
    /// REST API (stage/resource listing) and moves on.
    #[error("AccessDeniedException: {operation}")]
    AccessDenied { operation: &'static str },

    /// Any other provider failure. Aborts the run.
    #[error("{operation} failed: {source}")]
    Api {
        operation: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl GatewayError {
    pub fn is_access_denied(&self) -> bool {
        matches!(self, GatewayError::AccessDenied { .. })
    }
}
