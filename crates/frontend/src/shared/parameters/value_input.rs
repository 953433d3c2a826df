//! Type-dispatched parameter editor
//!
//! Renders the editor matching a parameter's declared type and reports every
//! proposed value upward together with a dirty flag.

use contracts::shared::parameters::{
    is_valid_date_value, DropdownOption, EditorKind, Parameter, ParameterValue,
};
use leptos::prelude::*;

use super::query_based::{QueryBasedParameterInput, SelectMode};
use super::reconcile::{parse_enum_options, parse_number};
use super::selection::{apply_selection, SelectionUpdate};
use crate::shared::components::ui::{ChoiceList, DateInput, DateRangeInput, Input, Select};

/// Derive the editor-local display state from the committed props.
/// A pending value pre-marks the editor dirty.
fn display_state(value: &ParameterValue, parameter: &Parameter) -> (ParameterValue, bool) {
    match &parameter.pending_value {
        Some(pending) => (pending.clone(), true),
        None => (value.clone(), false),
    }
}

fn range_part(value: &ParameterValue, index: usize) -> String {
    match value {
        ParameterValue::List(parts) => match parts.get(index) {
            Some(ParameterValue::Text(text)) => text.clone(),
            _ => String::new(),
        },
        _ => String::new(),
    }
}

#[component]
pub fn ParameterValueInput(
    /// Parameter descriptor
    #[prop(into)]
    parameter: Signal<Parameter>,
    /// Value committed by the containing form
    #[prop(into)]
    value: Signal<ParameterValue>,
    /// Fired with the proposed value and whether it differs from the
    /// committed one
    on_select: Callback<(ParameterValue, bool)>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let (initial_value, initial_dirty) =
        display_state(&value.get_untracked(), &parameter.get_untracked());
    let (current_value, set_current_value) = signal(initial_value);
    let (is_dirty, set_is_dirty) = signal(initial_dirty);

    // external resets must not be masked by stale local edits
    Effect::new(move |_| {
        let (next_value, next_dirty) = display_state(&value.get(), &parameter.get());
        set_current_value.set(next_value);
        set_is_dirty.set(next_dirty);
    });

    let propose = move |proposed: ParameterValue| {
        let dirty = proposed != value.get_untracked();
        set_current_value.set(proposed.clone());
        set_is_dirty.set(dirty);
        on_select.run((proposed, dirty));
    };

    let editor = move || {
        let parameter_now = parameter.get();
        match parameter_now.param_type.editor_kind() {
            EditorKind::Date => {
                let input_type = parameter_now.param_type.date_input_type().to_string();
                let with_seconds = parameter_now.param_type.with_seconds();
                let date_value = Signal::derive(move || match current_value.get() {
                    ParameterValue::Text(text) => text,
                    _ => String::new(),
                });
                view! {
                    <DateInput
                        value=date_value
                        input_type=input_type
                        with_seconds=with_seconds
                        on_change=move |raw: String| {
                            if raw.is_empty() {
                                propose(ParameterValue::Null);
                            } else if is_valid_date_value(&raw) {
                                propose(ParameterValue::Text(raw));
                            }
                        }
                    />
                }
                .into_any()
            }
            EditorKind::DateRange => {
                let input_type = parameter_now.param_type.date_input_type().to_string();
                let with_seconds = parameter_now.param_type.with_seconds();
                let start = Signal::derive(move || range_part(&current_value.get(), 0));
                let end = Signal::derive(move || range_part(&current_value.get(), 1));
                view! {
                    <DateRangeInput
                        start=start
                        end=end
                        input_type=input_type
                        with_seconds=with_seconds
                        on_change=Callback::new(move |(from, to): (String, String)| {
                            let from_ok = from.is_empty() || is_valid_date_value(&from);
                            let to_ok = to.is_empty() || is_valid_date_value(&to);
                            if from_ok && to_ok {
                                propose(ParameterValue::List(vec![
                                    ParameterValue::Text(from),
                                    ParameterValue::Text(to),
                                ]));
                            }
                        })
                    />
                }
                .into_any()
            }
            EditorKind::Enum => {
                let enum_options: Vec<DropdownOption> =
                    parse_enum_options(&parameter_now.enum_options)
                        .into_iter()
                        .map(|option| DropdownOption {
                            value: ParameterValue::text(option.clone()),
                            name: option,
                        })
                        .collect();
                if parameter_now.is_multi_select() {
                    let options_for_apply = enum_options.clone();
                    let options_signal = Signal::derive(move || enum_options.clone());
                    // the widget never sees null: the selection is a list
                    let selected = Signal::derive(move || current_value.get().into_list());
                    view! {
                        <ChoiceList
                            options=options_signal
                            selected=selected
                            on_change=Callback::new(move |update: SelectionUpdate| {
                                let resolved = apply_selection(update, &options_for_apply);
                                propose(ParameterValue::List(resolved));
                            })
                        />
                    }
                    .into_any()
                } else {
                    let options_for_pick = enum_options.clone();
                    let options_for_position = enum_options.clone();
                    let options_signal = Signal::derive(move || enum_options.clone());
                    let selected = Signal::derive(move || {
                        let current = current_value.get();
                        options_for_position
                            .iter()
                            .position(|option| option.value == current)
                    });
                    view! {
                        <Select
                            options=options_signal
                            selected=selected
                            on_change=Callback::new(move |index: usize| {
                                if let Some(option) = options_for_pick.get(index) {
                                    propose(option.value.clone());
                                }
                            })
                        />
                    }
                    .into_any()
                }
            }
            EditorKind::Query => {
                let mode = if parameter_now.is_multi_select() {
                    SelectMode::Multiple
                } else {
                    SelectMode::Single
                };
                view! {
                    <QueryBasedParameterInput
                        query_id=Signal::derive(move || parameter.get().query_id)
                        value=current_value
                        mode=mode
                        on_select=Callback::new(move |proposed: ParameterValue| propose(proposed))
                    />
                }
                .into_any()
            }
            EditorKind::Number => {
                let number_value = Signal::derive(move || match current_value.get() {
                    ParameterValue::Number(number) => number.to_string(),
                    ParameterValue::Text(text) => text,
                    _ => String::new(),
                });
                view! {
                    <Input
                        value=number_value
                        input_type="number".to_string()
                        on_input=Callback::new(move |raw: String| {
                            propose(match parse_number(&raw) {
                                Some(number) => ParameterValue::Number(number),
                                None => ParameterValue::Null,
                            });
                        })
                    />
                }
                .into_any()
            }
            EditorKind::Text => {
                let text_value = Signal::derive(move || match current_value.get() {
                    ParameterValue::Text(text) => text,
                    ParameterValue::Number(number) => number.to_string(),
                    _ => String::new(),
                });
                view! {
                    <Input
                        value=text_value
                        on_input=Callback::new(move |raw: String| {
                            propose(ParameterValue::Text(raw));
                        })
                    />
                }
                .into_any()
            }
        }
    };

    view! {
        <div
            class=move || format!("parameter-input {}", class.get().unwrap_or_default())
            data-dirty=move || is_dirty.get().then_some("true")
        >
            {editor}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::parameters::ParameterType;

    #[test]
    fn test_display_state_without_pending_value() {
        let parameter = Parameter {
            name: "p".to_string(),
            ..Default::default()
        };
        let value = ParameterValue::text("committed");
        assert_eq!(
            display_state(&value, &parameter),
            (ParameterValue::text("committed"), false)
        );
    }

    #[test]
    fn test_pending_value_wins_and_marks_dirty() {
        let parameter = Parameter {
            name: "p".to_string(),
            param_type: ParameterType::Text,
            pending_value: Some(ParameterValue::text("draft")),
            ..Default::default()
        };
        let value = ParameterValue::text("committed");
        assert_eq!(
            display_state(&value, &parameter),
            (ParameterValue::text("draft"), true)
        );
    }

    #[test]
    fn test_range_part_extraction() {
        let range = ParameterValue::List(vec![
            ParameterValue::text("2024-01-01"),
            ParameterValue::text("2024-01-31"),
        ]);
        assert_eq!(range_part(&range, 0), "2024-01-01");
        assert_eq!(range_part(&range, 1), "2024-01-31");
        assert_eq!(range_part(&range, 2), "");
        assert_eq!(range_part(&ParameterValue::Null, 0), "");
    }
}
