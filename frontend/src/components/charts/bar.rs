use yew::{html, Component, Context, Html, Properties};

use super::geometry::bar_lengths;
use super::ChartDatum;

const WIDTH: f64 = 400.0;
const HEIGHT: f64 = 220.0;
const AXIS: f64 = 24.0;
const LABEL_GUTTER: f64 = 90.0;
const BAR_GAP: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub data: Vec<ChartDatum>,
    #[prop_or_default]
    pub orientation: Orientation,
}

pub struct BarChart;

impl Component for BarChart {
    type Message = ();
    type Properties = BarChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        BarChart
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let body = match props.orientation {
            Orientation::Vertical => vertical(&props.data),
            Orientation::Horizontal => horizontal(&props.data),
        };

        html! {
            <div class="chart chart-bar">
                <svg viewBox={format!("0 0 {WIDTH} {HEIGHT}")} role="img">
                    { body }
                </svg>
            </div>
        }
    }
}

fn vertical(data: &[ChartDatum]) -> Html {
    let values: Vec<f64> = data.iter().map(|d| d.value).collect();
    let plot_h = HEIGHT - 2.0 * AXIS;
    let heights = bar_lengths(&values, plot_h);
    let slot = WIDTH / data.len().max(1) as f64;
    let bar_w = slot * (1.0 - BAR_GAP);

    html! {
        <>
            <line x1="0" y1={fmt(HEIGHT - AXIS)} x2={fmt(WIDTH)} y2={fmt(HEIGHT - AXIS)} class="chart-axis" />
            { for data.iter().zip(heights).enumerate().map(|(i, (d, h))| {
                let x = slot * i as f64 + (slot - bar_w) / 2.0;
                let y = HEIGHT - AXIS - h;
                html! {
                    <g>
                        <rect x={fmt(x)} y={fmt(y)} width={fmt(bar_w)} height={fmt(h)} fill={d.color} rx="3">
                            <title>{ format!("{}: {}", d.label, d.display) }</title>
                        </rect>
                        <text x={fmt(x + bar_w / 2.0)} y={fmt(y - 4.0)} text-anchor="middle" class="chart-value">
                            { d.display.clone() }
                        </text>
                        <text x={fmt(x + bar_w / 2.0)} y={fmt(HEIGHT - AXIS / 3.0)} text-anchor="middle" class="chart-tick">
                            { d.label.clone() }
                        </text>
                    </g>
                }
            }) }
        </>
    }
}

fn horizontal(data: &[ChartDatum]) -> Html {
    let values: Vec<f64> = data.iter().map(|d| d.value).collect();
    let plot_w = WIDTH - LABEL_GUTTER * 2.0;
    let widths = bar_lengths(&values, plot_w);
    let slot = HEIGHT / data.len().max(1) as f64;
    let bar_h = slot * (1.0 - BAR_GAP);

    html! {
        <>
            <line x1={fmt(LABEL_GUTTER)} y1="0" x2={fmt(LABEL_GUTTER)} y2={fmt(HEIGHT)} class="chart-axis" />
            { for data.iter().zip(widths).enumerate().map(|(i, (d, w))| {
                let y = slot * i as f64 + (slot - bar_h) / 2.0;
                let mid = y + bar_h / 2.0;
                html! {
                    <g>
                        <text x={fmt(LABEL_GUTTER - 6.0)} y={fmt(mid)} text-anchor="end" dominant-baseline="middle" class="chart-tick">
                            { d.label.clone() }
                        </text>
                        <rect x={fmt(LABEL_GUTTER)} y={fmt(y)} width={fmt(w)} height={fmt(bar_h)} fill={d.color} rx="3">
                            <title>{ format!("{}: {}", d.label, d.display) }</title>
                        </rect>
                        <text x={fmt(LABEL_GUTTER + w + 6.0)} y={fmt(mid)} dominant-baseline="middle" class="chart-value">
                            { d.display.clone() }
                        </text>
                    </g>
                }
            }) }
        </>
    }
}

fn fmt(value: f64) -> String {
    format!("{value:.1}")
}
