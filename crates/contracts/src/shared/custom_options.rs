use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Free-form JSON overrides a chart editor lets power users attach to the
/// generated chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CustomChartOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data_options_json: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_layout_options_json: Option<String>,
}

impl CustomChartOptions {
    /// Editors show `{}` while the data override is unset.
    pub fn data_json(&self) -> String {
        self.custom_data_options_json
            .clone()
            .unwrap_or_else(|| "{}".to_string())
    }

    /// Editors show `{}` while the layout override is unset.
    pub fn layout_json(&self) -> String {
        self.custom_layout_options_json
            .clone()
            .unwrap_or_else(|| "{}".to_string())
    }
}

/// Parse one of the free-form JSON blocks, keeping serde_json's position
/// info in the error chain.
pub fn parse_custom_options(raw: &str) -> anyhow::Result<serde_json::Value> {
    serde_json::from_str(raw).context("invalid custom options JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_overrides_render_as_empty_object() {
        let options = CustomChartOptions::default();
        assert_eq!(options.data_json(), "{}");
        assert_eq!(options.layout_json(), "{}");
    }

    #[test]
    fn test_parse_accepts_object() {
        assert!(parse_custom_options("{\"showlegend\": false}").is_ok());
        assert!(parse_custom_options("{}").is_ok());
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        let err = parse_custom_options("{not json").unwrap_err();
        assert!(err.to_string().contains("invalid custom options JSON"));
    }
}
