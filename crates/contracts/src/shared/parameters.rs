use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Declared type of a dashboard query parameter.
///
/// Wire tags match what saved query definitions carry. Unknown tags fall
/// back to `Text` at the parse boundary, so the editor dispatch itself
/// stays exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParameterType {
    #[default]
    Text,
    Number,
    Date,
    DatetimeLocal,
    DatetimeWithSeconds,
    DateRange,
    DatetimeRange,
    DatetimeRangeWithSeconds,
    Enum,
    Query,
}

impl ParameterType {
    /// Wire tag for this type (used in saved queries and URLs).
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterType::Text => "text",
            ParameterType::Number => "number",
            ParameterType::Date => "date",
            ParameterType::DatetimeLocal => "datetime-local",
            ParameterType::DatetimeWithSeconds => "datetime-with-seconds",
            ParameterType::DateRange => "date-range",
            ParameterType::DatetimeRange => "datetime-range",
            ParameterType::DatetimeRangeWithSeconds => "datetime-range-with-seconds",
            ParameterType::Enum => "enum",
            ParameterType::Query => "query",
        }
    }

    /// Parse a wire tag. Anything unrecognized is treated as plain text.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "number" => ParameterType::Number,
            "date" => ParameterType::Date,
            "datetime-local" => ParameterType::DatetimeLocal,
            "datetime-with-seconds" => ParameterType::DatetimeWithSeconds,
            "date-range" => ParameterType::DateRange,
            "datetime-range" => ParameterType::DatetimeRange,
            "datetime-range-with-seconds" => ParameterType::DatetimeRangeWithSeconds,
            "enum" => ParameterType::Enum,
            "query" => ParameterType::Query,
            _ => ParameterType::Text,
        }
    }

    /// Which editor this type is rendered with.
    pub fn editor_kind(&self) -> EditorKind {
        match self {
            ParameterType::Date
            | ParameterType::DatetimeLocal
            | ParameterType::DatetimeWithSeconds => EditorKind::Date,
            ParameterType::DateRange
            | ParameterType::DatetimeRange
            | ParameterType::DatetimeRangeWithSeconds => EditorKind::DateRange,
            ParameterType::Enum => EditorKind::Enum,
            ParameterType::Query => EditorKind::Query,
            ParameterType::Number => EditorKind::Number,
            ParameterType::Text => EditorKind::Text,
        }
    }

    /// Native input type used by the date editors.
    pub fn date_input_type(&self) -> &'static str {
        match self {
            ParameterType::Date | ParameterType::DateRange => "date",
            _ => "datetime-local",
        }
    }

    /// Whether the date editors pick values down to the second.
    pub fn with_seconds(&self) -> bool {
        matches!(
            self,
            ParameterType::DatetimeWithSeconds | ParameterType::DatetimeRangeWithSeconds
        )
    }
}

impl Serialize for ParameterType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ParameterType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(ParameterType::from_tag(&tag))
    }
}

/// The six input strategies a parameter editor can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKind {
    Text,
    Number,
    Date,
    DateRange,
    Enum,
    Query,
}

/// A parameter value as it travels between widgets, forms, and saved state.
///
/// Mirrors the JSON shapes a saved dashboard carries: plain text, numbers,
/// multi-select lists, or no value at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum ParameterValue {
    Text(String),
    Number(f64),
    List(Vec<ParameterValue>),
    #[default]
    Null,
}

impl ParameterValue {
    pub fn text(value: impl Into<String>) -> Self {
        ParameterValue::Text(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ParameterValue::Null)
    }

    /// Coerce to the list shape multi-select widgets work with.
    /// Null becomes an empty selection, a scalar becomes a single entry.
    pub fn into_list(self) -> Vec<ParameterValue> {
        match self {
            ParameterValue::List(values) => values,
            ParameterValue::Null => Vec::new(),
            scalar => vec![scalar],
        }
    }
}

/// Present when a parameter accepts several values at once. The separator
/// and quotes describe how the selection is spliced into the query text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiValuesOptions {
    pub separator: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
}

impl Default for MultiValuesOptions {
    fn default() -> Self {
        Self {
            separator: ",".to_string(),
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

/// A named, typed input slot on a dashboard query.
///
/// Owned and committed by the containing form; editors read it and propose
/// new values through callbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Parameter {
    /// Identifier referenced by the query text
    pub name: String,
    /// Display title
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type")]
    pub param_type: ParameterType,
    /// Committed value
    #[serde(default)]
    pub value: ParameterValue,
    /// Newline-delimited options for the enum editor
    #[serde(default)]
    pub enum_options: String,
    /// Source query feeding a query-backed dropdown
    #[serde(default)]
    pub query_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_values_options: Option<MultiValuesOptions>,
    /// Edited but not yet applied value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_value: Option<ParameterValue>,
}

impl Parameter {
    pub fn has_pending_value(&self) -> bool {
        self.pending_value.is_some()
    }

    pub fn is_multi_select(&self) -> bool {
        self.multi_values_options.is_some()
    }
}

/// One selectable entry of a query-backed dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub value: ParameterValue,
    pub name: String,
}

/// Response carrying the dropdown values produced by a source query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropdownValuesResponse {
    pub options: Vec<DropdownOption>,
}

/// Check a value produced by the date editors: `YYYY-MM-DD`, optionally
/// followed by `THH:MM[:SS]`.
pub fn is_valid_date_value(raw: &str) -> bool {
    let date_part = raw.split('T').next().unwrap_or(raw);
    chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_tags_round_trip() {
        for tag in [
            "text",
            "number",
            "date",
            "datetime-local",
            "datetime-with-seconds",
            "date-range",
            "datetime-range",
            "datetime-range-with-seconds",
            "enum",
            "query",
        ] {
            assert_eq!(ParameterType::from_tag(tag).as_str(), tag);
        }
    }

    #[test]
    fn test_unknown_tag_is_text() {
        assert_eq!(ParameterType::from_tag("geo-point"), ParameterType::Text);
        assert_eq!(ParameterType::from_tag(""), ParameterType::Text);
    }

    #[test]
    fn test_editor_dispatch() {
        use EditorKind::*;
        let expected = [
            (ParameterType::Text, Text),
            (ParameterType::Number, Number),
            (ParameterType::Date, Date),
            (ParameterType::DatetimeLocal, Date),
            (ParameterType::DatetimeWithSeconds, Date),
            (ParameterType::DateRange, DateRange),
            (ParameterType::DatetimeRange, DateRange),
            (ParameterType::DatetimeRangeWithSeconds, DateRange),
            (ParameterType::Enum, Enum),
            (ParameterType::Query, Query),
        ];
        for (param_type, editor) in expected {
            assert_eq!(param_type.editor_kind(), editor);
        }
    }

    #[test]
    fn test_value_serde_shapes() {
        let value: ParameterValue = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(value, ParameterValue::text("abc"));

        let value: ParameterValue = serde_json::from_str("42").unwrap();
        assert_eq!(value, ParameterValue::Number(42.0));

        let value: ParameterValue = serde_json::from_str("[1, \"b\"]").unwrap();
        assert_eq!(
            value,
            ParameterValue::List(vec![
                ParameterValue::Number(1.0),
                ParameterValue::text("b")
            ])
        );

        let value: ParameterValue = serde_json::from_str("null").unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn test_into_list_normalization() {
        assert_eq!(ParameterValue::Null.into_list(), Vec::new());
        assert_eq!(
            ParameterValue::text("a").into_list(),
            vec![ParameterValue::text("a")]
        );
        let list = ParameterValue::List(vec![ParameterValue::Number(1.0)]);
        assert_eq!(list.into_list(), vec![ParameterValue::Number(1.0)]);
    }

    #[test]
    fn test_parameter_type_field_name() {
        let parameter: Parameter =
            serde_json::from_str(r#"{"name": "region", "type": "enum"}"#).unwrap();
        assert_eq!(parameter.param_type, ParameterType::Enum);
        assert!(!parameter.has_pending_value());
        assert!(!parameter.is_multi_select());
    }

    #[test]
    fn test_date_value_validation() {
        assert!(is_valid_date_value("2024-03-15"));
        assert!(is_valid_date_value("2024-03-15T14:02"));
        assert!(is_valid_date_value("2024-03-15T14:02:26"));
        assert!(!is_valid_date_value("15.03.2024"));
        assert!(!is_valid_date_value(""));
    }
}
