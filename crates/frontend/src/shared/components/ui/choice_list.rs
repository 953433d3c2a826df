use contracts::shared::parameters::{DropdownOption, ParameterValue};
use leptos::prelude::*;

use crate::shared::parameters::selection::SelectionUpdate;

/// Multi-select choice list with search filtering
///
/// "Select All" and "Clear" are separate controls emitting commands, never
/// option values, so they cannot collide with anything a query returns.
#[component]
pub fn ChoiceList(
    /// Available options
    #[prop(into)]
    options: Signal<Vec<DropdownOption>>,
    /// Currently selected values
    #[prop(into)]
    selected: Signal<Vec<ParameterValue>>,
    /// Selection command handler
    on_change: Callback<SelectionUpdate>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let (search, set_search) = signal(String::new());

    let filtered = Signal::derive(move || {
        let query = search.get().to_lowercase();
        options
            .get()
            .into_iter()
            .filter(|option| query.is_empty() || option.name.to_lowercase().contains(&query))
            .collect::<Vec<_>>()
    });

    let toggle = move |value: ParameterValue| {
        let mut picked = selected.get();
        if let Some(position) = picked.iter().position(|v| *v == value) {
            picked.remove(position);
        } else {
            picked.push(value);
        }
        // the emitted selection keeps option order
        let ordered = options
            .get()
            .into_iter()
            .map(|option| option.value)
            .filter(|v| picked.contains(v))
            .collect();
        on_change.run(SelectionUpdate::Replace(ordered));
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class=move || format!("choice-list {}", additional_class())>
            <input
                type="search"
                class="choice-list__search"
                placeholder="Search"
                prop:value=move || search.get()
                disabled=disabled
                on:input=move |ev| set_search.set(event_target_value(&ev))
            />
            <div class="choice-list__actions">
                <button
                    type="button"
                    class="choice-list__action"
                    disabled=disabled
                    on:click=move |_| on_change.run(SelectionUpdate::Clear)
                >
                    "Clear"
                </button>
                <button
                    type="button"
                    class="choice-list__action"
                    disabled=disabled
                    on:click=move |_| on_change.run(SelectionUpdate::SelectAll)
                >
                    "Select All"
                </button>
            </div>
            {move || {
                let visible = filtered.get();
                if visible.is_empty() {
                    view! { <div class="choice-list__empty">"No options available"</div> }
                        .into_any()
                } else {
                    visible
                        .into_iter()
                        .map(|option| {
                            let value = option.value.clone();
                            let value_for_checked = option.value.clone();
                            let is_checked =
                                move || selected.get().contains(&value_for_checked);
                            view! {
                                <label class="choice-list__row">
                                    <input
                                        type="checkbox"
                                        class="choice-list__checkbox"
                                        checked=is_checked
                                        disabled=disabled
                                        on:change=move |_| toggle(value.clone())
                                    />
                                    <span class="choice-list__label">{option.name.clone()}</span>
                                </label>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
