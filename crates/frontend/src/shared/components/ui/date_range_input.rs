use leptos::prelude::*;

use super::date_input::DateInput;

/// Start/end pair of date inputs for range parameters
#[component]
pub fn DateRangeInput(
    /// Range start
    #[prop(into)]
    start: Signal<String>,
    /// Range end
    #[prop(into)]
    end: Signal<String>,
    /// "date" (default) or "datetime-local"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Pick values down to the second
    #[prop(optional)]
    with_seconds: bool,
    /// Callback receiving the full (start, end) pair on every edit
    on_change: Callback<(String, String)>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class=move || format!("date-range {}", additional_class())>
            <DateInput
                value=start
                input_type=input_type
                with_seconds=with_seconds
                on_change=move |picked: String| {
                    on_change.run((picked, end.get_untracked()));
                }
            />
            <span class="date-range__separator">"~"</span>
            <DateInput
                value=end
                input_type=input_type
                with_seconds=with_seconds
                on_change=move |picked: String| {
                    on_change.run((start.get_untracked(), picked));
                }
            />
        </div>
    }
}
