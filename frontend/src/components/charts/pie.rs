use yew::{html, Component, Context, Html, Properties};

use super::geometry::{arc_path, pie_slices, slice_label_position, slice_labels, Point};
use super::ChartDatum;

const SIZE: f64 = 220.0;
const RADIUS: f64 = 100.0;

#[derive(Properties, PartialEq)]
pub struct PieChartProps {
    pub data: Vec<ChartDatum>,
}

/// Pie with a percentage on each slice and a legend underneath.
pub struct PieChart;

impl Component for PieChart {
    type Message = ();
    type Properties = PieChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PieChart
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let data = &ctx.props().data;
        let values: Vec<f64> = data.iter().map(|d| d.value).collect();
        let slices = pie_slices(&values);
        let labels = slice_labels(&values);
        let center = Point {
            x: SIZE / 2.0,
            y: SIZE / 2.0,
        };

        html! {
            <div class="chart chart-pie">
                <svg viewBox={format!("0 0 {SIZE} {SIZE}")} role="img">
                    { for data.iter().zip(&slices).zip(&labels).filter_map(|((d, s), label)| {
                        label.as_ref().map(|label| (d, s, label))
                    }).map(|(d, s, label)| {
                        let label_at = slice_label_position(center, RADIUS, *s);
                        html! {
                            <g>
                                <path d={arc_path(center, RADIUS, *s)} fill={d.color} stroke="#fff" stroke-width="2">
                                    <title>{ format!("{}: {}", d.label, d.display) }</title>
                                </path>
                                <text
                                    x={format!("{:.1}", label_at.x)}
                                    y={format!("{:.1}", label_at.y)}
                                    class="chart-slice-label"
                                    text-anchor="middle"
                                    dominant-baseline="middle"
                                >
                                    { label.clone() }
                                </text>
                            </g>
                        }
                    }) }
                </svg>
                <ul class="chart-legend">
                    { for data.iter().map(|d| html! {
                        <li>
                            <span class="legend-swatch" style={format!("background:{}", d.color)} />
                            { format!("{} ({})", d.label, d.display) }
                        </li>
                    }) }
                </ul>
            </div>
        }
    }
}
