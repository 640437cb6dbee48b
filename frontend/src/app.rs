//! Root component: header navigation and the active page.

use yew::{classes, html, Component, Context, Html};

use crate::components::campaigns::list::CampaignList;
use crate::components::dashboard::Dashboard;
use crate::components::news::NewsInspiration;

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Campaigns,
    Dashboard,
    News,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Campaigns, Page::Dashboard, Page::News];

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            Page::Campaigns => "📋 Campaigns",
            Page::Dashboard => "📊 Dashboard",
            Page::News => "📰 News Feed",
        }
    }

    /// Heading of the page banner.
    pub fn title(self) -> &'static str {
        match self {
            Page::Campaigns => "Campaign Tracker",
            Page::Dashboard => "Analytics Dashboard",
            Page::News => "Content Inspiration",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppState {
    pub page: Page,
    pub menu_open: bool,
}

impl AppState {
    /// Switches page and closes the mobile menu. Returns `true` on change.
    pub fn navigate(&mut self, page: Page) -> bool {
        let changed = self.page != page || self.menu_open;
        self.page = page;
        self.menu_open = false;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}

pub enum Msg {
    Navigate(Page),
    ToggleMenu,
}

pub struct App {
    state: AppState,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: AppState::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(page) => self.state.navigate(page),
            Msg::ToggleMenu => {
                self.state.toggle_menu();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let page = self.state.page;
        let nav_button = |target: Page| {
            html! {
                <button
                    class={classes!("nav-btn", (page == target).then_some("active"))}
                    onclick={link.callback(move |_| Msg::Navigate(target))}
                >
                    { target.label() }
                </button>
            }
        };

        html! {
            <div class="app">
                <header class="app-header">
                    <div class="brand">
                        <span class="brand-icon">{ "🚀" }</span>
                        <div>
                            <div class="brand-name">{ "Social Booster" }</div>
                            <div class="brand-sub">{ "Campaign Tracker" }</div>
                        </div>
                    </div>
                    <nav class="nav-desktop">
                        { for Page::ALL.into_iter().map(nav_button) }
                    </nav>
                    <button class="menu-toggle" onclick={link.callback(|_| Msg::ToggleMenu)}>
                        { if self.state.menu_open { "✕" } else { "☰" } }
                    </button>
                </header>
                if self.state.menu_open {
                    <nav class="nav-mobile">
                        { for Page::ALL.into_iter().map(nav_button) }
                    </nav>
                }

                <section class="page-banner">
                    <h1>{ page.title() }</h1>
                </section>

                <main class="page">
                    {
                        match page {
                            Page::Campaigns => html! { <CampaignList /> },
                            Page::Dashboard => html! { <Dashboard /> },
                            Page::News => html! { <NewsInspiration /> },
                        }
                    }
                </main>

                <footer class="app-footer">
                    { "Social Booster Media · Campaign Tracker" }
                </footer>
            </div>
        }
    }
}
