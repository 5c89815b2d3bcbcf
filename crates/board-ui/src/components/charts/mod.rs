//! Plain SVG chart components.
//!
//! # Design
//! - Geometry comes from `core::charts`; these components only emit markup.
//! - Each chart sits in a card that renders its own loading and empty states.

mod bar;
mod donut;
mod dual_axis;
mod stacked_area;
mod stacked_bar;

pub(crate) use bar::BarChart;
pub(crate) use donut::DonutChart;
pub(crate) use dual_axis::DualAxisLineChart;
pub(crate) use stacked_area::StackedAreaChart;
pub(crate) use stacked_bar::StackedBarChart;

use yew::prelude::*;

use crate::core::charts::{PlotArea, VIEW_HEIGHT, VIEW_WIDTH, ticks};

const Y_TICKS: usize = 4;

/// Loading state of one dashboard dataset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum CardState {
    Loading,
    Ready,
    Empty,
    Failed(String),
}

#[derive(Properties, PartialEq)]
pub(crate) struct ChartCardProps {
    pub title: AttrValue,
    pub description: AttrValue,
    pub state: CardState,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ChartCard)]
pub(crate) fn chart_card(props: &ChartCardProps) -> Html {
    let body = match &props.state {
        CardState::Loading => html! { <div class="chart-skeleton" aria-busy="true"></div> },
        CardState::Empty => html! { <p class="chart-empty">{"No data available."}</p> },
        CardState::Failed(message) => html! {
            <p class="chart-empty chart-error" role="alert">{message.clone()}</p>
        },
        CardState::Ready => html! { <>{ for props.children.iter() }</> },
    };
    html! {
        <section class="chart-card">
            <header>
                <h3>{props.title.clone()}</h3>
                <p class="muted">{props.description.clone()}</p>
            </header>
            {body}
        </section>
    }
}

pub(crate) fn view_box() -> String {
    format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}")
}

/// Horizontal grid lines with labels on the left (or right) edge.
pub(crate) fn y_axis(area: &PlotArea, max: f64, right: bool) -> Html {
    let (x, anchor) = if right {
        (area.right() + 6.0, "start")
    } else {
        (area.left - 6.0, "end")
    };
    html! {
        <g class="axis axis-y">
            {for ticks(max, Y_TICKS).into_iter().map(|value| {
                let y = area.y(value, max);
                html! {
                    <g>
                        if !right {
                            <line class="grid" x1={area.left.to_string()} x2={area.right().to_string()}
                                y1={y.to_string()} y2={y.to_string()} />
                        }
                        <text x={x.to_string()} y={(y + 4.0).to_string()} text-anchor={anchor}>
                            {format_tick(value)}
                        </text>
                    </g>
                }
            })}
        </g>
    }
}

/// Category labels under the plot, centred on `positions`.
pub(crate) fn x_labels(area: &PlotArea, labels: &[String], positions: &[f64]) -> Html {
    html! {
        <g class="axis axis-x">
            {for labels.iter().zip(positions).map(|(label, x)| html! {
                <text x={x.to_string()} y={(area.bottom() + 18.0).to_string()} text-anchor="middle">
                    {label.clone()}
                </text>
            })}
        </g>
    }
}

/// Legend entries; clickable when `on_toggle` is set.
pub(crate) fn legend(
    entries: &[(&'static str, String, &'static str, bool)],
    on_toggle: Option<&Callback<&'static str>>,
) -> Html {
    html! {
        <ul class="chart-legend">
            {for entries.iter().map(|(key, label, color, visible)| {
                let swatch = format!("background:{color};");
                let class = classes!("legend-entry", (!*visible).then_some("legend-hidden"));
                match on_toggle {
                    Some(on_toggle) => {
                        let on_toggle = on_toggle.clone();
                        let key = *key;
                        html! {
                            <li {class}>
                                <button type="button" aria-pressed={visible.to_string()}
                                    onclick={Callback::from(move |_| on_toggle.emit(key))}>
                                    <span class="swatch" style={swatch}></span>{label.clone()}
                                </button>
                            </li>
                        }
                    }
                    None => html! {
                        <li {class}><span class="swatch" style={swatch}></span>{label.clone()}</li>
                    },
                }
            })}
        </ul>
    }
}

fn format_tick(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
