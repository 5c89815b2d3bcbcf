use yew::prelude::*;

use super::{view_box, x_labels, y_axis};
use crate::core::charts::{PlotArea, bar_rects, nice_ceiling};

#[derive(Properties, PartialEq)]
pub(crate) struct BarChartProps {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub color: AttrValue,
}

#[function_component(BarChart)]
pub(crate) fn bar_chart(props: &BarChartProps) -> Html {
    let area = PlotArea::default();
    let max = nice_ceiling(props.values.iter().copied().fold(0.0, f64::max));
    let rects = bar_rects(&props.values, max, &area);
    let centers: Vec<f64> = rects.iter().map(|rect| rect.x + rect.width / 2.0).collect();

    html! {
        <svg class="chart chart-bar" viewBox={view_box()} role="img">
            {y_axis(&area, max, false)}
            {for rects.iter().zip(props.labels.iter().zip(&props.values)).map(|(rect, (label, value))| html! {
                <rect x={rect.x.to_string()} y={rect.y.to_string()}
                    width={rect.width.to_string()} height={rect.height.to_string()}
                    rx="3" fill={props.color.clone()}>
                    <title>{format!("{label}: {value}")}</title>
                </rect>
            })}
            {x_labels(&area, &props.labels, &centers)}
        </svg>
    }
}
