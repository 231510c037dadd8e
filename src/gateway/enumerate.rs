//! The sweep itself: walk every region, list REST APIs, stages and resource
//! paths, and assemble the publicly reachable invoke URLs.

use tracing::{info, warn};

use super::api::GatewayApi;
use super::error::GatewayError;
use super::summary::Summary;

fn invoke_url(rest_api_id: &str, region: &str, stage_name: &str, resource_path: &str) -> String {
    format!("https://{rest_api_id}.execute-api.{region}.amazonaws.com/{stage_name}{resource_path}")
}

/// Enumerates invoke URLs region by region, sequentially, in the order the
/// regions were supplied.
///
/// Access denied on the REST API listing skips the whole region; access
/// denied on the stage or resource listing skips that REST API. Any other
/// provider failure aborts the run. When a region holds several REST APIs,
/// only the last API whose stage and resource listings both succeeded
/// contributes endpoints, matching the original tool's behavior.
pub async fn enumerate_endpoints<C, F>(regions: &[String], client_for: F) -> Result<Summary, GatewayError>
where
    C: GatewayApi,
    F: Fn(&str) -> C,
{
    let mut summary = Summary::default();

    for region in regions {
        info!("starting region {region}");
        let client = client_for(region);

        let rest_api_ids = match client.rest_api_ids().await {
            Ok(ids) => ids,
            Err(error) if error.is_access_denied() => {
                warn!("{error}, skipping region {region}");
                continue;
            }
            Err(error) => return Err(error),
        };

        if rest_api_ids.is_empty() {
            continue;
        }

        let mut last_fetched: Option<(String, Vec<String>, Vec<String>)> = None;
        for rest_api_id in rest_api_ids {
            let stage_names = match client.stage_names(&rest_api_id).await {
                Ok(names) => names,
                Err(error) if error.is_access_denied() => {
                    warn!("{error}, skipping REST API {rest_api_id}");
                    continue;
                }
                Err(error) => return Err(error),
            };

            let resource_paths = match client.resource_paths(&rest_api_id).await {
                Ok(paths) => paths,
                Err(error) if error.is_access_denied() => {
                    warn!("{error}, skipping REST API {rest_api_id}");
                    continue;
                }
                Err(error) => return Err(error),
            };

            // Overwrites on every fully fetched API, so a multi-API region
            // assembles endpoints from the last successful fetch only.
            last_fetched = Some((rest_api_id, stage_names, resource_paths));
        }

        let mut endpoints = Vec::new();
        if let Some((rest_api_id, stage_names, resource_paths)) = last_fetched {
            for stage_name in &stage_names {
                for resource_path in &resource_paths {
                    let endpoint = invoke_url(&rest_api_id, region, stage_name, resource_path);
                    info!("found {endpoint}");
                    endpoints.push(endpoint);
                }
            }
        }
        summary.record(region, endpoints);
    }

    info!("region sweep complete");
    Ok(summary)
}
