use anyhow::Result;
use serde::Deserialize;
use std::process::Command;
use tracing::warn;

const FALLBACK_REGIONS: &[&str] = &[
    "us-east-1",
    "us-east-2",
    "us-west-1",
    "us-west-2",
    "af-south-1",
    "ap-east-1",
    "ap-south-1",
    "ap-south-2",
    "ap-southeast-1",
    "ap-southeast-2",
    "ap-southeast-3",
    "ap-southeast-4",
    "ap-northeast-1",
    "ap-northeast-2",
    "ap-northeast-3",
    "ca-central-1",
    "eu-central-1",
    "eu-central-2",
    "eu-west-1",
    "eu-west-2",
    "eu-west-3",
    "eu-south-1",
    "eu-south-2",
    "eu-north-1",
    "me-south-1",
    "me-central-1",
    "sa-east-1",
];

/// List the AWS regions to sweep when the user did not name any.
pub fn list_regions() -> Vec<String> {
    match fetch_regions_via_aws_cli() {
        Ok(regions) if !regions.is_empty() => regions,
        Ok(_) => {
            warn!("received empty AWS region list, falling back to static list");
            fallback_regions()
        }
        Err(error) => {
            warn!(?error, "failed to fetch AWS regions via CLI, falling back to static list");
            fallback_regions()
        }
    }
}

fn fallback_regions() -> Vec<String> {
    FALLBACK_REGIONS.iter().map(|region| region.to_string()).collect()
}

fn fetch_regions_via_aws_cli() -> Result<Vec<String>> {
    let output = Command::new("aws")
        .args([
            "--output",
            "json",
            "ec2",
            "describe-regions",
            "--filters",
            "Name=opt-in-status,Values=opt-in-not-required,opted-in",
        ])
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!(
            "aws CLI returned non-zero status ({}): {}",
            output.status,
            stderr.trim()
        );
    }

    let stdout = String::from_utf8(output.stdout)?;
    let response: DescribeRegionsResponse = serde_json::from_str(&stdout)?;

    let mut regions: Vec<String> = response
        .regions
        .into_iter()
        .filter_map(|region| region.region_name)
        .collect();
    regions.sort();
    regions.dedup();
    Ok(regions)
}

#[derive(Debug, Deserialize)]
struct DescribeRegionsResponse {
    #[serde(default, rename = "Regions")]
    regions: Vec<RegionSummary>,
}

#[derive(Debug, Deserialize)]
struct RegionSummary {
    #[serde(rename = "RegionName")]
    region_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_list_is_non_empty_and_unique() {
        let regions = fallback_regions();
        assert!(!regions.is_empty());

        let mut deduped = regions.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), regions.len());
    }

    #[test]
    fn parses_describe_regions_payload() {
        let payload = r#"{
            "Regions": [
                {"RegionName": "eu-west-1", "Endpoint": "ec2.eu-west-1.amazonaws.com"},
                {"RegionName": "us-east-1", "Endpoint": "ec2.us-east-1.amazonaws.com"}
            ]
        }"#;

        let response: DescribeRegionsResponse = serde_json::from_str(payload).unwrap();
        let names: Vec<_> = response
            .regions
            .into_iter()
            .filter_map(|region| region.region_name)
            .collect();
        assert_eq!(names, vec!["eu-west-1", "us-east-1"]);
    }

    #[test]
    fn tolerates_missing_regions_key() {
        let response: DescribeRegionsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.regions.is_empty());
    }
}
