use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a dashboard widget titles a visualization next to its query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetTitleMode {
    /// No header at all
    Hide,
    /// Only the visualization's own name
    VisualizationOnly,
    /// Only the name of the query feeding the widget
    QueryOnly,
    /// Both lines
    #[default]
    Full,
}

impl WidgetTitleMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetTitleMode::Hide => "hide",
            WidgetTitleMode::VisualizationOnly => "viz",
            WidgetTitleMode::QueryOnly => "query",
            WidgetTitleMode::Full => "full",
        }
    }

    /// Parse the saved flag. Anything unrecognized shows the full header.
    pub fn from_flag(flag: &str) -> Self {
        match flag {
            "hide" => WidgetTitleMode::Hide,
            "viz" => WidgetTitleMode::VisualizationOnly,
            "query" => WidgetTitleMode::QueryOnly,
            _ => WidgetTitleMode::Full,
        }
    }
}

impl Serialize for WidgetTitleMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for WidgetTitleMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let flag = String::deserialize(deserializer)?;
        Ok(WidgetTitleMode::from_flag(&flag))
    }
}

/// Registered visualization types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VisualizationKind {
    Chart,
    Table,
    Counter,
    Pivot,
}

impl VisualizationKind {
    /// Name a freshly created visualization of this kind gets.
    pub fn default_name(&self) -> &'static str {
        match self {
            VisualizationKind::Chart => "Chart",
            VisualizationKind::Table => "Table",
            VisualizationKind::Counter => "Counter",
            VisualizationKind::Pivot => "Pivot Table",
        }
    }
}

/// Per-visualization display options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VisualizationOptions {
    #[serde(default)]
    pub widget_title: WidgetTitleMode,
}

/// A saved rendering of a query's result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visualization {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: VisualizationKind,
    pub name: String,
    #[serde(default)]
    pub options: VisualizationOptions,
}

/// The lines a widget header shows for a visualization / query pair.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WidgetTitle {
    pub visualization_name: Option<String>,
    pub query_name: Option<String>,
}

/// Decide what the widget header shows.
///
/// The visualization's own name only appears when it was renamed away from
/// its kind's default, so "Chart" next to "Chart" is never shown twice.
pub fn resolve_widget_title(visualization: &Visualization, query_name: &str) -> WidgetTitle {
    let custom_name = (visualization.name != visualization.kind.default_name())
        .then(|| visualization.name.clone());

    match visualization.options.widget_title {
        WidgetTitleMode::Hide => WidgetTitle::default(),
        WidgetTitleMode::VisualizationOnly => WidgetTitle {
            visualization_name: custom_name,
            query_name: None,
        },
        WidgetTitleMode::QueryOnly => WidgetTitle {
            visualization_name: None,
            query_name: Some(query_name.to_string()),
        },
        WidgetTitleMode::Full => WidgetTitle {
            visualization_name: custom_name,
            query_name: Some(query_name.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(kind: VisualizationKind, name: &str, mode: WidgetTitleMode) -> Visualization {
        Visualization {
            id: Uuid::nil(),
            kind,
            name: name.to_string(),
            options: VisualizationOptions { widget_title: mode },
        }
    }

    #[test]
    fn test_hide_mode() {
        let viz = sample(VisualizationKind::Chart, "Revenue", WidgetTitleMode::Hide);
        assert_eq!(resolve_widget_title(&viz, "Sales"), WidgetTitle::default());
    }

    #[test]
    fn test_default_name_is_suppressed() {
        let viz = sample(VisualizationKind::Chart, "Chart", WidgetTitleMode::Full);
        let title = resolve_widget_title(&viz, "Sales");
        assert_eq!(title.visualization_name, None);
        assert_eq!(title.query_name.as_deref(), Some("Sales"));
    }

    #[test]
    fn test_renamed_visualization_is_shown() {
        let viz = sample(
            VisualizationKind::Chart,
            "Revenue",
            WidgetTitleMode::VisualizationOnly,
        );
        let title = resolve_widget_title(&viz, "Sales");
        assert_eq!(title.visualization_name.as_deref(), Some("Revenue"));
        assert_eq!(title.query_name, None);
    }

    #[test]
    fn test_query_only_mode() {
        let viz = sample(
            VisualizationKind::Pivot,
            "Breakdown",
            WidgetTitleMode::QueryOnly,
        );
        let title = resolve_widget_title(&viz, "Sales");
        assert_eq!(title.visualization_name, None);
        assert_eq!(title.query_name.as_deref(), Some("Sales"));
    }

    #[test]
    fn test_unknown_flag_falls_back_to_full() {
        assert_eq!(WidgetTitleMode::from_flag("banner"), WidgetTitleMode::Full);
    }
}
