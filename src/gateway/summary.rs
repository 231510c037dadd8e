/// Endpoints discovered per region, kept in the order regions were swept.
/// Built fresh each run and discarded after the report is rendered.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    regions: Vec<(String, Vec<String>)>,
}

impl Summary {
    pub fn record(&mut self, region: &str, endpoints: Vec<String>) {
        self.regions.push((region.to_string(), endpoints));
    }

    pub fn endpoints(&self, region: &str) -> Option<&[String]> {
        self.regions
            .iter()
            .find(|(name, _)| name == region)
            .map(|(_, endpoints)| endpoints.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Human-readable report: a `Region:` line per region followed by one
    /// line per endpoint, in sweep order. Empty summary renders as "".
    pub fn report(&self) -> String {
        let mut out = String::new();
        for (region, endpoints) in &self.regions {
            out.push_str("Region: ");
            out.push_str(region);
            out.push('\n');
            for endpoint in endpoints {
                out.push_str(endpoint);
                out.push('\n');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_summary_renders_empty_report() {
        assert_eq!(Summary::default().report(), "");
    }

    #[test]
    fn report_lists_regions_in_sweep_order() {
        let mut summary = Summary::default();
        summary.record(
            "us-east-1",
            vec!["https://a1b2c3.execute-api.us-east-1.amazonaws.com/prod/".to_string()],
        );
        summary.record("eu-west-1", vec![]);

        assert_eq!(
            summary.report(),
            "Region: us-east-1\n\
             https://a1b2c3.execute-api.us-east-1.amazonaws.com/prod/\n\
             Region: eu-west-1\n"
        );
    }

    #[test]
    fn endpoints_looks_up_by_region() {
        let mut summary = Summary::default();
        summary.record("us-east-1", vec!["url".to_string()]);

        assert_eq!(summary.endpoints("us-east-1"), Some(&["url".to_string()][..]));
        assert_eq!(summary.endpoints("eu-west-1"), None);
    }
}
