use contracts::shared::custom_options::{parse_custom_options, CustomChartOptions};
use leptos::prelude::*;

use crate::shared::components::ui::Textarea;

/// Chart editor fragment for free-form JSON overrides
///
/// Commits on blur. Malformed JSON is flagged inline but still handed to
/// the caller, so typed text is never thrown away.
#[component]
pub fn CustomOptionsSettings(
    /// Current overrides
    #[prop(into)]
    options: Signal<CustomChartOptions>,
    /// Fired with the updated overrides on every commit
    on_options_change: Callback<CustomChartOptions>,
) -> impl IntoView {
    let (data_error, set_data_error) = signal(None::<String>);
    let (layout_error, set_layout_error) = signal(None::<String>);

    let on_data_change = Callback::new(move |raw: String| {
        set_data_error.set(parse_custom_options(&raw).err().map(|e| e.to_string()));
        let mut updated = options.get_untracked();
        updated.custom_data_options_json = Some(raw);
        on_options_change.run(updated);
    });

    let on_layout_change = Callback::new(move |raw: String| {
        set_layout_error.set(parse_custom_options(&raw).err().map(|e| e.to_string()));
        let mut updated = options.get_untracked();
        updated.custom_layout_options_json = Some(raw);
        on_options_change.run(updated);
    });

    view! {
        <div class="visualization-editor__section">
            <Textarea
                label="Custom chart data options (JSON)"
                value=Signal::derive(move || options.get().data_json())
                rows=10
                on_change=on_data_change
                class="visualization-editor__textarea--monospace"
            />
            {move || data_error.get().map(|message| {
                view! { <div class="form__error">{message}</div> }
            })}
        </div>
        <div class="visualization-editor__section">
            <Textarea
                label="Custom chart layout options (JSON)"
                value=Signal::derive(move || options.get().layout_json())
                rows=10
                on_change=on_layout_change
                class="visualization-editor__textarea--monospace"
            />
            {move || layout_error.get().map(|message| {
                view! { <div class="form__error">{message}</div> }
            })}
        </div>
    }
}
