//! Demo dashboard page wiring the parameter editors, the widget header,
//! and the chart options editor together the way a dashboard form does.

use contracts::shared::custom_options::CustomChartOptions;
use contracts::shared::parameters::{
    MultiValuesOptions, Parameter, ParameterType, ParameterValue,
};
use contracts::shared::visualization::{
    Visualization, VisualizationKind, VisualizationOptions, WidgetTitleMode,
};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Card};
use uuid::Uuid;

use crate::shared::parameters::ParameterValueInput;
use crate::shared::visualizations::editor::CustomOptionsSettings;
use crate::shared::visualizations::VisualizationName;

fn sample_parameters() -> Vec<Parameter> {
    vec![
        Parameter {
            name: "search".to_string(),
            title: "Search".to_string(),
            ..Default::default()
        },
        Parameter {
            name: "limit".to_string(),
            title: "Limit".to_string(),
            param_type: ParameterType::Number,
            value: ParameterValue::Number(100.0),
            ..Default::default()
        },
        Parameter {
            name: "period".to_string(),
            title: "Period".to_string(),
            param_type: ParameterType::DateRange,
            ..Default::default()
        },
        Parameter {
            name: "regions".to_string(),
            title: "Regions".to_string(),
            param_type: ParameterType::Enum,
            enum_options: "North\nSouth\nEast\nWest".to_string(),
            multi_values_options: Some(MultiValuesOptions::default()),
            ..Default::default()
        },
        Parameter {
            name: "manager".to_string(),
            title: "Manager".to_string(),
            param_type: ParameterType::Query,
            query_id: Some(7),
            ..Default::default()
        },
    ]
}

fn next_title_mode(mode: WidgetTitleMode) -> WidgetTitleMode {
    match mode {
        WidgetTitleMode::Full => WidgetTitleMode::VisualizationOnly,
        WidgetTitleMode::VisualizationOnly => WidgetTitleMode::QueryOnly,
        WidgetTitleMode::QueryOnly => WidgetTitleMode::Hide,
        WidgetTitleMode::Hide => WidgetTitleMode::Full,
    }
}

#[component]
pub fn App() -> impl IntoView {
    let parameters = RwSignal::new(sample_parameters());
    let chart_options = RwSignal::new(CustomChartOptions::default());
    let visualization = RwSignal::new(Visualization {
        id: Uuid::new_v4(),
        kind: VisualizationKind::Chart,
        name: "Revenue by region".to_string(),
        options: VisualizationOptions {
            widget_title: WidgetTitleMode::Full,
        },
    });

    let cycle_title_mode = move |_| {
        visualization.update(|viz| {
            viz.options.widget_title = next_title_mode(viz.options.widget_title);
        });
    };

    view! {
        <div class="demo-page">
            <Card>
                <div class="widget-header">
                    <VisualizationName
                        visualization=Signal::derive(move || visualization.get())
                        query_name=Signal::derive(move || "Regional sales".to_string())
                    />
                    <Button appearance=ButtonAppearance::Secondary on_click=cycle_title_mode>
                        "Cycle title mode"
                    </Button>
                </div>
                <ParameterBar parameters=parameters />
            </Card>
            <Card>
                <CustomOptionsSettings
                    options=Signal::derive(move || chart_options.get())
                    on_options_change=Callback::new(move |updated| chart_options.set(updated))
                />
            </Card>
        </div>
    }
}

#[component]
fn ParameterBar(parameters: RwSignal<Vec<Parameter>>) -> impl IntoView {
    view! {
        <div class="parameter-bar">
            <For
                each=move || 0..parameters.get().len()
                key=|index| *index
                children=move |index| {
                    let parameter = Signal::derive(move || {
                        parameters.get().get(index).cloned().unwrap_or_default()
                    });
                    let value = Signal::derive(move || {
                        parameters
                            .get()
                            .get(index)
                            .map(|p| p.value.clone())
                            .unwrap_or_default()
                    });
                    // the demo form applies proposals immediately
                    let on_select = Callback::new(
                        move |(proposed, dirty): (ParameterValue, bool)| {
                            log::debug!(
                                "parameter #{} changed (dirty: {}): {}",
                                index,
                                dirty,
                                serde_json::to_string(&proposed).unwrap_or_default()
                            );
                            parameters.update(|all| {
                                if let Some(parameter) = all.get_mut(index) {
                                    parameter.value = proposed;
                                    parameter.pending_value = None;
                                }
                            });
                        },
                    );
                    view! {
                        <div class="parameter-bar__item">
                            <label class="form__label">
                                {move || {
                                    parameters
                                        .get()
                                        .get(index)
                                        .map(|p| p.title.clone())
                                        .unwrap_or_default()
                                }}
                            </label>
                            <ParameterValueInput
                                parameter=parameter
                                value=value
                                on_select=on_select
                            />
                        </div>
                    }
                }
            />
        </div>
    }
}
