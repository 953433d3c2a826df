//! Value reconciliation against a loaded option set
//!
//! Whatever the form holds, what the widget shows must be selectable.
//! These helpers compute the closest valid value.

use contracts::shared::parameters::{DropdownOption, ParameterValue};

/// Multi-select: keep only the incoming values that are still selectable,
/// ordered the way the options are ordered.
pub fn reconcile_multi(
    value: &ParameterValue,
    options: &[DropdownOption],
) -> Vec<ParameterValue> {
    let requested = value.clone().into_list();
    options
        .iter()
        .filter(|option| requested.contains(&option.value))
        .map(|option| option.value.clone())
        .collect()
}

/// Single-select: keep the value only when it matches a selectable option,
/// otherwise fall back to the first option, or to no value at all.
pub fn reconcile_single(value: &ParameterValue, options: &[DropdownOption]) -> ParameterValue {
    if options.iter().any(|option| option.value == *value) {
        return value.clone();
    }
    options
        .first()
        .map(|option| option.value.clone())
        .unwrap_or(ParameterValue::Null)
}

/// Split the newline-delimited option text of an enum parameter.
pub fn parse_enum_options(enum_options: &str) -> Vec<String> {
    enum_options
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Numeric editor input; anything that is not a number carries no value.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(values: &[i64]) -> Vec<DropdownOption> {
        values
            .iter()
            .map(|v| DropdownOption {
                value: ParameterValue::Number(*v as f64),
                name: format!("Option {}", v),
            })
            .collect()
    }

    #[test]
    fn test_multi_keeps_option_order() {
        let value = ParameterValue::List(vec![
            ParameterValue::Number(3.0),
            ParameterValue::Number(1.0),
        ]);
        assert_eq!(
            reconcile_multi(&value, &options(&[1, 2, 3])),
            vec![ParameterValue::Number(1.0), ParameterValue::Number(3.0)]
        );
    }

    #[test]
    fn test_multi_drops_values_no_longer_present() {
        let value = ParameterValue::List(vec![
            ParameterValue::Number(7.0),
            ParameterValue::Number(2.0),
        ]);
        assert_eq!(
            reconcile_multi(&value, &options(&[1, 2])),
            vec![ParameterValue::Number(2.0)]
        );
    }

    #[test]
    fn test_multi_coerces_scalars_and_null() {
        let scalar = ParameterValue::Number(2.0);
        assert_eq!(
            reconcile_multi(&scalar, &options(&[1, 2])),
            vec![ParameterValue::Number(2.0)]
        );
        assert_eq!(reconcile_multi(&ParameterValue::Null, &options(&[1, 2])), vec![]);
    }

    #[test]
    fn test_single_keeps_exact_match() {
        let value = ParameterValue::Number(2.0);
        assert_eq!(
            reconcile_single(&value, &options(&[1, 2])),
            ParameterValue::Number(2.0)
        );
    }

    #[test]
    fn test_single_falls_back_to_first_option() {
        // value 3 is not selectable among [1, 2]
        let value = ParameterValue::Number(3.0);
        assert_eq!(
            reconcile_single(&value, &options(&[1, 2])),
            ParameterValue::Number(1.0)
        );
    }

    #[test]
    fn test_single_with_no_options_is_null() {
        let value = ParameterValue::Number(3.0);
        assert_eq!(reconcile_single(&value, &[]), ParameterValue::Null);
    }

    #[test]
    fn test_enum_options_split() {
        assert_eq!(parse_enum_options("a\nb\nc"), vec!["a", "b", "c"]);
        assert_eq!(parse_enum_options("a\n\nb\n"), vec!["a", "b"]);
        assert!(parse_enum_options("").is_empty());
    }

    #[test]
    fn test_number_parsing() {
        assert_eq!(parse_number("12"), Some(12.0));
        assert_eq!(parse_number(" 12.5 "), Some(12.5));
        assert_eq!(parse_number("-3"), Some(-3.0));
        assert_eq!(parse_number("12x"), None);
        assert_eq!(parse_number(""), None);
    }
}
