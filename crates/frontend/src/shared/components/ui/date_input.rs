use leptos::prelude::*;

/// Native date/datetime input
///
/// The browser picker handles locale display; values travel as
/// `yyyy-mm-dd` or `yyyy-mm-ddThh:mm[:ss]`.
#[component]
pub fn DateInput(
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// "date" (default) or "datetime-local"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Pick values down to the second
    #[prop(optional)]
    with_seconds: bool,
    /// Callback when the value changes
    on_change: impl Fn(String) + 'static,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let kind = move || input_type.get().unwrap_or_else(|| "date".to_string());
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <input
            type=kind
            class=move || format!("form__input {}", additional_class())
            step=if with_seconds { Some("1") } else { None }
            prop:value=move || value.get()
            on:input=move |ev| {
                on_change(event_target_value(&ev));
            }
        />
    }
}
