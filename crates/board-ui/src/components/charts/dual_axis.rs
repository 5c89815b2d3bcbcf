use yew::prelude::*;

use super::{legend, view_box, x_labels, y_axis};
use crate::core::charts::{PlotArea, line_path, line_points, nice_ceiling};
use crate::features::dashboard::logic::{SeriesSpec, lines_max};

#[derive(Properties, PartialEq)]
pub(crate) struct DualAxisLineChartProps {
    pub labels: Vec<String>,
    pub series: Vec<SeriesSpec>,
    pub left: Vec<Vec<Option<f64>>>,
    pub right: Vec<Vec<Option<f64>>>,
    pub left_label: AttrValue,
    pub right_label: AttrValue,
}

#[function_component(DualAxisLineChart)]
pub(crate) fn dual_axis_line_chart(props: &DualAxisLineChartProps) -> Html {
    let area = PlotArea::default();
    let left_max = nice_ceiling(lines_max(&props.left));
    let right_max = nice_ceiling(lines_max(&props.right));
    let positions: Vec<f64> = (0..props.labels.len())
        .map(|index| area.point_x(index, props.labels.len()))
        .collect();

    let render_lines = |lines: &[Vec<Option<f64>>], max: f64, dashed: bool| -> Html {
        html! {
            <g class={classes!("lines", dashed.then_some("lines-dashed"))}>
            {for lines.iter().zip(&props.series).map(|(values, series)| {
                let points = line_points(values, max, &area);
                html! {
                    <g class="line-series">
                        <path d={line_path(&points)} fill="none" stroke={series.color} stroke-width="2"
                            stroke-dasharray={dashed.then_some("6 4")} />
                        {for points.iter().map(|(x, y)| html! {
                            <circle cx={x.to_string()} cy={y.to_string()} r="3" fill={series.color} />
                        })}
                    </g>
                }
            })}
            </g>
        }
    };

    let mut entries: Vec<_> = props
        .series
        .iter()
        .map(|series| (series.key, format!("{} · {}", series.label, props.left_label), series.color, true))
        .collect();
    entries.extend(props.series.iter().map(|series| {
        (series.key, format!("{} · {} (dashed)", series.label, props.right_label), series.color, true)
    }));

    html! {
        <div class="chart-wrap">
            <svg class="chart chart-dual-axis" viewBox={view_box()} role="img">
                {y_axis(&area, left_max, false)}
                {y_axis(&area, right_max, true)}
                {render_lines(&props.left, left_max, false)}
                {render_lines(&props.right, right_max, true)}
                {x_labels(&area, &props.labels, &positions)}
            </svg>
            {legend(&entries, None)}
        </div>
    }
}
