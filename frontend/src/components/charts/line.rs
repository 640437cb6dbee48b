use yew::{html, Component, Context, Html, Properties};

use super::geometry::{line_points, polyline};
use super::ChartDatum;

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 220.0;
const PADDING: f64 = 28.0;

#[derive(Properties, PartialEq)]
pub struct LineChartProps {
    pub data: Vec<ChartDatum>,
    #[prop_or("#6366f1")]
    pub color: &'static str,
}

/// Line over evenly spaced categories, one marker per point.
pub struct LineChart;

impl Component for LineChart {
    type Message = ();
    type Properties = LineChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        LineChart
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let values: Vec<f64> = props.data.iter().map(|d| d.value).collect();
        let points = line_points(&values, WIDTH, HEIGHT, PADDING);
        let baseline = HEIGHT - PADDING;

        html! {
            <div class="chart chart-line">
                <svg viewBox={format!("0 0 {WIDTH} {HEIGHT}")} role="img">
                    <line
                        x1={PADDING.to_string()} y1={baseline.to_string()}
                        x2={(WIDTH - PADDING).to_string()} y2={baseline.to_string()}
                        class="chart-axis"
                    />
                    <polyline points={polyline(&points)} fill="none" stroke={props.color} stroke-width="3" />
                    { for props.data.iter().zip(&points).map(|(d, p)| html! {
                        <g>
                            <circle cx={format!("{:.1}", p.x)} cy={format!("{:.1}", p.y)} r="4" fill={props.color}>
                                <title>{ format!("{}: {}", d.label, d.display) }</title>
                            </circle>
                            <text x={format!("{:.1}", p.x)} y={format!("{:.1}", HEIGHT - PADDING / 3.0)} text-anchor="middle" class="chart-tick">
                                { d.label.clone() }
                            </text>
                        </g>
                    }) }
                </svg>
            </div>
        }
    }
}
