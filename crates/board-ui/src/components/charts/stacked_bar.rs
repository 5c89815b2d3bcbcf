use yew::prelude::*;

use super::{legend, view_box, x_labels, y_axis};
use crate::core::charts::{PlotArea, nice_ceiling, stacked_bar_segments, stacked_max};
use crate::features::dashboard::logic::SeriesSpec;

#[derive(Properties, PartialEq)]
pub(crate) struct StackedBarChartProps {
    pub labels: Vec<String>,
    pub rows: Vec<Vec<f64>>,
    pub series: Vec<SeriesSpec>,
}

#[function_component(StackedBarChart)]
pub(crate) fn stacked_bar_chart(props: &StackedBarChartProps) -> Html {
    let area = PlotArea::default();
    let visible = vec![true; props.series.len()];
    let max = nice_ceiling(stacked_max(&props.rows, &visible));
    let segments = stacked_bar_segments(&props.rows, &visible, max, &area);
    let centers: Vec<f64> = (0..props.rows.len())
        .map(|index| {
            let (x, width) = area.band(index, props.rows.len());
            x + width / 2.0
        })
        .collect();
    let entries: Vec<_> = props
        .series
        .iter()
        .map(|series| (series.key, series.label.to_string(), series.color, true))
        .collect();

    html! {
        <div class="chart-wrap">
            <svg class="chart chart-stacked-bar" viewBox={view_box()} role="img">
                {y_axis(&area, max, false)}
                {for segments.iter().filter_map(|segment| {
                    let series = props.series.get(segment.series)?;
                    let value = props.rows.get(segment.row)?.get(segment.series)?;
                    let label = props.labels.get(segment.row).cloned().unwrap_or_default();
                    Some(html! {
                        <rect x={segment.rect.x.to_string()} y={segment.rect.y.to_string()}
                            width={segment.rect.width.to_string()} height={segment.rect.height.to_string()}
                            fill={series.color}>
                            <title>{format!("{label} · {}: {value}", series.label)}</title>
                        </rect>
                    })
                })}
                {x_labels(&area, &props.labels, &centers)}
            </svg>
            {legend(&entries, None)}
        </div>
    }
}
