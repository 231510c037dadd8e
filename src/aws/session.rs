//! Shared AWS credentials for a run, handed out as per-region clients.

use aws_config::BehaviorVersion;
use aws_sdk_apigateway::config::Region;

pub struct Session {
    config: aws_config::SdkConfig,
}

impl Session {
    /// Resolve credentials from the environment, optionally pinned to a
    /// named profile from ~/.aws/config.
    pub async fn connect(profile: Option<String>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(profile) = profile {
            loader = loader.profile_name(profile);
        }
        Self {
            config: loader.load().await,
        }
    }

    /// API Gateway client scoped to one region.
    pub fn client(&self, region: &str) -> aws_sdk_apigateway::Client {
        let config = aws_sdk_apigateway::config::Builder::from(&self.config)
            .region(Region::new(region.to_string()))
            .build();
        aws_sdk_apigateway::Client::from_conf(config)
    }
}
