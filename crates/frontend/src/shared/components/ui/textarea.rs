use leptos::prelude::*;

/// Textarea with label support
///
/// `on_change` fires when editing ends (native change event), so callers
/// that validate or persist are not hit on every keystroke.
#[component]
pub fn Textarea(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Commit handler, fired when editing ends
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(3);

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">
                    {l}
                </label>
            })}
            <textarea
                class=move || format!("form__textarea {}", additional_class())
                rows=textarea_rows
                disabled=disabled
                prop:value=move || value.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            ></textarea>
        </div>
    }
}
