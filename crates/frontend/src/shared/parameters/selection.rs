use contracts::shared::parameters::{DropdownOption, ParameterValue};

/// A change requested by a multi-select choice widget.
///
/// "Select all" and "clear" used to be smuggled through reserved option
/// values; as commands they cannot collide with anything a query returns.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionUpdate {
    /// Replace the selection with the given values
    Replace(Vec<ParameterValue>),
    /// Select every available option
    SelectAll,
    /// Empty the selection
    Clear,
}

/// Resolve a selection command against the currently available options.
pub fn apply_selection(
    update: SelectionUpdate,
    options: &[DropdownOption],
) -> Vec<ParameterValue> {
    match update {
        SelectionUpdate::Replace(values) => values,
        SelectionUpdate::SelectAll => {
            options.iter().map(|option| option.value.clone()).collect()
        }
        SelectionUpdate::Clear => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<DropdownOption> {
        ["a", "b", "c"]
            .into_iter()
            .map(|v| DropdownOption {
                value: ParameterValue::text(v),
                name: v.to_uppercase(),
            })
            .collect()
    }

    #[test]
    fn test_select_all_expands_in_option_order() {
        let result = apply_selection(SelectionUpdate::SelectAll, &options());
        assert_eq!(
            result,
            vec![
                ParameterValue::text("a"),
                ParameterValue::text("b"),
                ParameterValue::text("c"),
            ]
        );
    }

    #[test]
    fn test_clear_empties_the_selection() {
        assert_eq!(apply_selection(SelectionUpdate::Clear, &options()), vec![]);
    }

    #[test]
    fn test_replace_passes_through() {
        let picked = vec![ParameterValue::text("b")];
        assert_eq!(
            apply_selection(SelectionUpdate::Replace(picked.clone()), &options()),
            picked
        );
    }
}
