use yew::prelude::*;

use super::legend;
use crate::core::charts::{donut_slices, palette_color};
use crate::features::dashboard::logic::NamedValue;

const SIZE: f64 = 220.0;
const OUTER: f64 = 90.0;
const INNER: f64 = 56.0;

#[derive(Properties, PartialEq)]
pub(crate) struct DonutChartProps {
    pub values: Vec<NamedValue>,
}

#[function_component(DonutChart)]
pub(crate) fn donut_chart(props: &DonutChartProps) -> Html {
    let color = |index: usize| {
        props
            .values
            .get(index)
            .and_then(|entry| entry.color)
            .unwrap_or_else(|| palette_color(index))
    };
    let raw: Vec<f64> = props.values.iter().map(|entry| entry.value).collect();
    let slices = donut_slices(&raw, (SIZE / 2.0, SIZE / 2.0), INNER, OUTER);
    let entries: Vec<_> = props
        .values
        .iter()
        .enumerate()
        .map(|(index, entry)| ("", format!("{} ({})", entry.name, entry.value), color(index), true))
        .collect();

    html! {
        <div class="chart-wrap chart-donut-wrap">
            <svg class="chart chart-donut" viewBox={format!("0 0 {SIZE} {SIZE}")} role="img">
                {for slices.iter().map(|slice| {
                    let name = props.values.get(slice.index).map(|entry| entry.name.clone()).unwrap_or_default();
                    html! {
                        <path d={slice.path.clone()} fill={color(slice.index)}>
                            <title>{format!("{name}: {:.0}%", slice.fraction * 100.0)}</title>
                        </path>
                    }
                })}
            </svg>
            {legend(&entries, None)}
        </div>
    }
}
