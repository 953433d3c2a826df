use contracts::shared::visualization::{resolve_widget_title, Visualization};
use leptos::prelude::*;

/// Widget header label: the visualization's display name next to the name
/// of the query feeding it, subject to the widget title mode.
#[component]
pub fn VisualizationName(
    /// The visualization being titled
    #[prop(into)]
    visualization: Signal<Visualization>,
    /// Name of the query feeding the widget
    #[prop(into)]
    query_name: Signal<String>,
) -> impl IntoView {
    view! {
        {move || {
            let title = resolve_widget_title(&visualization.get(), &query_name.get());
            (
                title.visualization_name.map(|name| {
                    view! { <span class="visualization-name">{name}</span> }
                }),
                title.query_name.map(|name| {
                    view! { <span class="query-name">{name}</span> }
                }),
            )
        }}
    }
}
