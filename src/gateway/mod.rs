mod api;
mod enumerate;
mod error;
mod summary;

pub use api::{GatewayApi, RestApiGateway};
pub use enumerate::enumerate_endpoints;
pub use error::GatewayError;
pub use summary::Summary;
