//! Query-backed dropdown parameter input
//!
//! Loads its option list from the parameter's source query and keeps the
//! held value consistent with what is actually selectable. Out-of-order
//! completions of superseded loads are discarded.

use contracts::shared::parameters::{DropdownOption, ParameterValue};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::reconcile::{reconcile_multi, reconcile_single};
use super::selection::{apply_selection, SelectionUpdate};
use crate::shared::components::ui::{ChoiceList, Select};

/// Selection mode of the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectMode {
    #[default]
    Single,
    Multiple,
}

/// Lifecycle of the option list.
#[derive(Debug, Clone, PartialEq, Default)]
enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Monotonic counter guarding against out-of-order load completions.
///
/// Every new load supersedes all earlier ones; a completion may only apply
/// its result while its generation is still the latest.
#[derive(Debug, Default)]
struct LoadGeneration {
    counter: u64,
}

impl LoadGeneration {
    fn begin(&mut self) -> u64 {
        self.counter += 1;
        self.counter
    }

    fn is_current(&self, generation: u64) -> bool {
        self.counter == generation
    }
}

#[component]
pub fn QueryBasedParameterInput(
    /// Source query feeding the dropdown
    #[prop(into)]
    query_id: Signal<Option<i64>>,
    /// Value held by the containing form
    #[prop(into)]
    value: Signal<ParameterValue>,
    /// Selection mode
    #[prop(optional)]
    mode: SelectMode,
    /// Fired when a selection is made, or when reconciliation moves the
    /// valid value away from what the parent holds
    on_select: Callback<ParameterValue>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let (options, set_options) = signal(Vec::<DropdownOption>::new());
    let (load_state, set_load_state) = signal(LoadState::Idle);
    let (current_value, set_current_value) = signal(ParameterValue::Null);
    let generation = StoredValue::new(LoadGeneration::default());
    let started_query_id = StoredValue::new(None::<i64>);
    let (retry_tick, set_retry_tick) = signal(0u32);

    // load on mount and whenever the source query changes
    Effect::new(move |_| {
        retry_tick.get();
        let Some(id) = query_id.get() else {
            return;
        };
        if started_query_id.get_value() == Some(id) {
            return;
        }
        started_query_id.set_value(Some(id));

        let mut generation_id = 0;
        generation.update_value(|g| generation_id = g.begin());

        set_load_state.set(LoadState::Loading);
        spawn_local(async move {
            let result = api::load_dropdown_values(id).await;
            // a newer load may have started while this one was in flight
            if !generation.with_value(|g| g.is_current(generation_id)) {
                return;
            }
            match result {
                Ok(loaded) => {
                    set_options.set(loaded.clone());
                    set_load_state.set(LoadState::Ready);
                    let parent_value = value.get_untracked();
                    let updated = match mode {
                        SelectMode::Multiple => {
                            ParameterValue::List(reconcile_multi(&parent_value, &loaded))
                        }
                        SelectMode::Single => reconcile_single(&parent_value, &loaded),
                    };
                    set_current_value.set(updated.clone());
                    if updated != parent_value {
                        on_select.run(updated);
                    }
                }
                Err(message) => {
                    log::warn!("dropdown load for query {} failed: {}", id, message);
                    set_load_state.set(LoadState::Failed(message));
                }
            }
        });
    });

    // external value changes re-reconcile against the loaded options
    Effect::new(move |_| {
        let parent_value = value.get();
        let loaded = options.get_untracked();
        let updated = match mode {
            SelectMode::Multiple => ParameterValue::List(reconcile_multi(&parent_value, &loaded)),
            SelectMode::Single => reconcile_single(&parent_value, &loaded),
        };
        set_current_value.set(updated);
    });

    let handle_selection = move |update: SelectionUpdate| {
        let resolved = apply_selection(update, &options.get_untracked());
        on_select.run(ParameterValue::List(resolved));
    };

    let handle_single = move |index: usize| {
        let picked = options
            .get_untracked()
            .get(index)
            .map(|option| option.value.clone());
        if let Some(picked) = picked {
            on_select.run(picked);
        }
    };

    let selected_index = Signal::derive(move || {
        let current = current_value.get();
        options.get().iter().position(|option| option.value == current)
    });
    let selected_values = Signal::derive(move || current_value.get().into_list());

    let retry = move |_| {
        started_query_id.set_value(None);
        set_retry_tick.update(|tick| *tick += 1);
    };

    view! {
        <div class=move || {
            format!("query-based-parameter {}", class.get().unwrap_or_default())
        }>
            {move || match load_state.get() {
                LoadState::Failed(message) => view! {
                    <div class="query-based-parameter__error" title=message>
                        <span>"Failed to load values"</span>
                        <button type="button" class="query-based-parameter__retry" on:click=retry>
                            "Retry"
                        </button>
                    </div>
                }
                .into_any(),
                state => {
                    let disabled = state == LoadState::Loading;
                    match mode {
                        SelectMode::Multiple => view! {
                            <ChoiceList
                                options=options
                                selected=selected_values
                                on_change=Callback::new(handle_selection)
                                disabled=disabled
                            />
                        }
                        .into_any(),
                        SelectMode::Single => view! {
                            <Select
                                options=options
                                selected=selected_index
                                on_change=Callback::new(handle_single)
                                disabled=disabled
                            />
                        }
                        .into_any(),
                    }
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::LoadGeneration;

    #[test]
    fn test_later_load_supersedes_earlier_one() {
        let mut generation = LoadGeneration::default();
        // load A starts, then B is requested before A resolves
        let first = generation.begin();
        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_single_load_stays_current() {
        let mut generation = LoadGeneration::default();
        let only = generation.begin();
        assert!(generation.is_current(only));
    }
}
