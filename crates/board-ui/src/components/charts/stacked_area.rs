use yew::prelude::*;

use super::{legend, view_box, x_labels, y_axis};
use crate::core::charts::{LegendState, PlotArea, nice_ceiling, stacked_area_paths, stacked_max};
use crate::features::dashboard::logic::SeriesSpec;

#[derive(Properties, PartialEq)]
pub(crate) struct StackedAreaChartProps {
    pub labels: Vec<String>,
    pub rows: Vec<Vec<f64>>,
    pub series: Vec<SeriesSpec>,
}

#[function_component(StackedAreaChart)]
pub(crate) fn stacked_area_chart(props: &StackedAreaChartProps) -> Html {
    let legend_state = use_state(LegendState::default);
    let keys: Vec<&str> = props.series.iter().map(|series| series.key).collect();
    let visible = legend_state.mask(&keys);

    let area = PlotArea::default();
    let max = nice_ceiling(stacked_max(&props.rows, &visible));
    let paths = stacked_area_paths(&props.rows, &visible, max, &area);
    let positions: Vec<f64> = (0..props.rows.len())
        .map(|index| area.point_x(index, props.rows.len()))
        .collect();

    let on_toggle = {
        let legend_state = legend_state.clone();
        Callback::from(move |key: &'static str| {
            let mut next = (*legend_state).clone();
            next.toggle(key);
            legend_state.set(next);
        })
    };
    let entries: Vec<_> = props
        .series
        .iter()
        .zip(&visible)
        .map(|(series, shown)| (series.key, series.label.to_string(), series.color, *shown))
        .collect();

    html! {
        <div class="chart-wrap">
            <svg class="chart chart-stacked-area" viewBox={view_box()} role="img">
                {y_axis(&area, max, false)}
                {for paths.iter().zip(&props.series).filter_map(|(path, series)| {
                    path.as_ref().map(|path| html! {
                        <path d={path.clone()} fill={series.color} fill-opacity="0.55"
                            stroke={series.color} stroke-width="1.5">
                            <title>{series.label}</title>
                        </path>
                    })
                })}
                {x_labels(&area, &props.labels, &positions)}
            </svg>
            {legend(&entries, Some(&on_toggle))}
        </div>
    }
}
