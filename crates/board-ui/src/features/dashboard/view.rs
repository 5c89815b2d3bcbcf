//! Dashboard page: four independently fetched datasets, one card per chart.

use std::future::Future;
use std::rc::Rc;

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::app::api::ApiCtx;
use crate::app::session::handle_unauthorized;
use crate::components::charts::{
    BarChart, CardState, ChartCard, DonutChart, DualAxisLineChart, StackedAreaChart,
    StackedBarChart,
};
use crate::features::dashboard::logic::{
    MOOD_SERIES, SNACK_BAR_COLOR, TEAM_SERIES, TeamMetric, WORKOUT_SERIES, consumption_amounts,
    consumption_lines, mood_average, mood_rows, snack_values, workout_rows,
};
use crate::services::api::ApiClient;
use crate::services::error::ApiError;

const DATASET_FAILED: &str = "Failed to load chart data.";

enum Dataset<T> {
    Loading,
    Ready(Rc<Vec<T>>),
    Failed(String),
}

impl<T> Clone for Dataset<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Loading => Self::Loading,
            Self::Ready(items) => Self::Ready(Rc::clone(items)),
            Self::Failed(message) => Self::Failed(message.clone()),
        }
    }
}

impl<T> Dataset<T> {
    fn card(&self) -> CardState {
        match self {
            Self::Loading => CardState::Loading,
            Self::Ready(items) if items.is_empty() => CardState::Empty,
            Self::Ready(_) => CardState::Ready,
            Self::Failed(message) => CardState::Failed(message.clone()),
        }
    }

    fn items(&self) -> &[T] {
        match self {
            Self::Ready(items) => items.as_slice(),
            Self::Loading | Self::Failed(_) => &[],
        }
    }
}

#[hook]
fn use_dataset<T, F, Fut>(load: F) -> Dataset<T>
where
    T: 'static,
    F: FnOnce(Rc<ApiClient>) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let api = use_context::<ApiCtx>();
    let state = use_state(|| Dataset::Loading);
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(api) = api {
                    spawn_local(async move {
                        match load(Rc::clone(&api.client)).await {
                            Ok(items) => state.set(Dataset::Ready(Rc::new(items))),
                            Err(err) => {
                                if !handle_unauthorized(&api, &err) {
                                    tracing::warn!(error = %err, "dashboard dataset failed");
                                    state.set(Dataset::Failed(err.user_message(DATASET_FAILED)));
                                }
                            }
                        }
                    });
                }
                || ()
            },
            (),
        );
    }
    (*state).clone()
}

#[function_component(DashboardPage)]
pub(crate) fn dashboard_page() -> Html {
    let mood = use_dataset(|client| async move { client.fetch_mood_trend().await });
    let snacks = use_dataset(|client| async move { client.fetch_snack_brands().await });
    let workouts = use_dataset(|client| async move { client.fetch_workout_trend().await });
    let coffee = use_dataset(|client| async move { client.fetch_coffee_consumption().await });

    let mood_stacked = mood_rows(mood.items());
    let snack_shares = snack_values(snacks.items());
    let workout_stacked = workout_rows(workouts.items());

    html! {
        <section class="dashboard-page">
            <header class="page-header">
                <h2>{"Dashboard"}</h2>
                <p class="muted">{"Overview of weekly trends and preferences."}</p>
            </header>
            <div class="chart-grid">
                <ChartCard
                    title="Weekly Mood Trend (Stacked Bar)"
                    description="Composition of daily employee mood"
                    state={mood.card()}
                >
                    <StackedBarChart
                        labels={mood_stacked.labels}
                        rows={mood_stacked.rows}
                        series={MOOD_SERIES.to_vec()}
                    />
                </ChartCard>
                <ChartCard
                    title="Average Mood Distribution (Donut)"
                    description="Average mood composition over the period"
                    state={mood.card()}
                >
                    <DonutChart values={mood_average(mood.items())} />
                </ChartCard>
                <ChartCard
                    title="Popular Snack Brands (Bar)"
                    description="Market share by brand preference"
                    state={snacks.card()}
                >
                    <BarChart
                        labels={snack_shares.iter().map(|entry| entry.name.clone()).collect::<Vec<_>>()}
                        values={snack_shares.iter().map(|entry| entry.value).collect::<Vec<_>>()}
                        color={SNACK_BAR_COLOR}
                    />
                </ChartCard>
                <ChartCard
                    title="Snack Brand Share (Donut)"
                    description="Brand preference distribution"
                    state={snacks.card()}
                >
                    <DonutChart values={snack_shares} />
                </ChartCard>
                <ChartCard
                    title="Weekly Workout Trend (Stacked Area)"
                    description="Minutes per activity; click a legend entry to hide it"
                    state={workouts.card()}
                >
                    <StackedAreaChart
                        labels={workout_stacked.labels}
                        rows={workout_stacked.rows}
                        series={WORKOUT_SERIES.to_vec()}
                    />
                </ChartCard>
                <ChartCard
                    title="Coffee vs. Team Performance (Dual Axis)"
                    description="Bugs (solid) and productivity (dashed) by cups per day"
                    state={coffee.card()}
                >
                    <DualAxisLineChart
                        labels={consumption_amounts(coffee.items())}
                        series={TEAM_SERIES.to_vec()}
                        left={consumption_lines(coffee.items(), TeamMetric::Bugs)}
                        right={consumption_lines(coffee.items(), TeamMetric::Productivity)}
                        left_label={TeamMetric::Bugs.label()}
                        right_label={TeamMetric::Productivity.label()}
                    />
                </ChartCard>
            </div>
        </section>
    }
}
