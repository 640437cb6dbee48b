use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct TileGridProps {
    pub columns: usize,
    pub children: Children,
}

/// Row of equally sized stat tiles; wraps to two columns on narrow screens.
pub struct TileGrid;

impl Component for TileGrid {
    type Message = ();
    type Properties = TileGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        TileGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!("--tile-columns: {};", props.columns);

        html! {
            <div class="tile-grid" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}

/// One figure with its caption.
pub fn stat_tile(icon: Option<&str>, label: &str, value: String, tone: &str) -> Html {
    html! {
        <div class="card stat-tile">
            if let Some(icon) = icon {
                <div class="stat-icon">{ icon.to_string() }</div>
            }
            <div>
                <div class={format!("stat-value {tone}")}>{ value }</div>
                <div class="stat-label">{ label.to_string() }</div>
            </div>
        </div>
    }
}
