use contracts::shared::parameters::DropdownOption;
use leptos::prelude::*;

/// Single-select dropdown over externally supplied options
///
/// Options are addressed by position, so values never round-trip through
/// the DOM as strings.
#[component]
pub fn Select(
    /// Available options
    #[prop(into)]
    options: Signal<Vec<DropdownOption>>,
    /// Position of the selected option, if any
    #[prop(into)]
    selected: Signal<Option<usize>>,
    /// Change handler receiving the picked position
    #[prop(optional)]
    on_change: Option<Callback<usize>>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    let handle_change = move |ev: web_sys::Event| {
        use wasm_bindgen::JsCast;
        let Some(target) = ev.target() else {
            return;
        };
        let Ok(select) = target.dyn_into::<web_sys::HtmlSelectElement>() else {
            return;
        };
        if let Ok(index) = select.value().parse::<usize>() {
            if let Some(handler) = on_change {
                handler.run(index);
            }
        }
    };

    view! {
        <div class="form__group">
            <select
                class=move || format!("form__select {}", additional_class())
                disabled=disabled
                on:change=handle_change
            >
                {move || {
                    let items = options.get();
                    if items.is_empty() {
                        view! {
                            <option value="" disabled=true selected=true>
                                "No options available"
                            </option>
                        }
                        .into_any()
                    } else {
                        items
                            .into_iter()
                            .enumerate()
                            .map(|(index, option)| {
                                let is_selected = move || selected.get() == Some(index);
                                view! {
                                    <option value=index.to_string() selected=is_selected>
                                        {option.name}
                                    </option>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </select>
        </div>
    }
}
