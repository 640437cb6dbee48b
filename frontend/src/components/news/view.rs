use chrono::{DateTime, Utc};
use common::model::news::{NewsArticle, SUGGESTED_QUERIES};
use common::time::time_ago;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::NewsInspiration;

const DESCRIPTION_CHARS: usize = 160;

pub fn view(component: &NewsInspiration, ctx: &Context<NewsInspiration>) -> Html {
    let link = ctx.link();
    let now = now();

    html! {
        <div class="news">
            { search_bar(component, link) }
            { suggestions(component, link) }

            if let Some(mock) = &component.mock {
                <div class="mock-banner">
                    <strong>{ "📰 Showing sample articles." }</strong>
                    { " " }
                    { mock.message.clone().unwrap_or_else(|| "Live news is not configured on the server.".to_string()) }
                </div>
            }

            if component.loading {
                <div class="card loading">{ "Searching headlines…" }</div>
            } else if component.articles.is_empty() {
                <div class="card empty-state">
                    <div class="empty-icon">{ "🔍" }</div>
                    <p>{ format!("No articles found for \"{}\"", component.search.query()) }</p>
                </div>
            } else {
                <div class="news-grid">
                    { for component.articles.iter().map(|a| article_card(component, link, a, now)) }
                </div>
            }

            { help_card() }
        </div>
    }
}

fn now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

fn search_bar(component: &NewsInspiration, link: &Scope<NewsInspiration>) -> Html {
    let oninput = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Input(input.value())
    });
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="card news-search" {onsubmit}>
            <input
                class="input"
                type="search"
                placeholder="Search marketing news…"
                value={component.search.input().to_string()}
                {oninput}
            />
            <button type="submit" class="btn-primary">{ "🔍 Search" }</button>
        </form>
    }
}

fn suggestions(component: &NewsInspiration, link: &Scope<NewsInspiration>) -> Html {
    html! {
        <div class="chip-row">
            { for SUGGESTED_QUERIES.into_iter().map(|q| {
                let active = component.search.query() == q;
                html! {
                    <button
                        class={classes!("chip", active.then_some("chip-active"))}
                        onclick={link.callback(move |_| Msg::Choose(q))}
                    >
                        { q }
                    </button>
                }
            }) }
        </div>
    }
}

fn article_card(
    component: &NewsInspiration,
    link: &Scope<NewsInspiration>,
    article: &NewsArticle,
    now: DateTime<Utc>,
) -> Html {
    let title = article.title_or_default().to_string();
    let copied = component.copy.is_copied(&title);
    let on_copy = {
        let title = title.clone();
        link.callback(move |_| Msg::Copy(title.clone()))
    };
    let published = time_ago(article.published_at.as_deref(), now);

    html! {
        <div class="card news-card">
            <div class="news-meta">
                <span class="badge badge-blue">{ article.source_or_default().to_string() }</span>
                if !published.is_empty() {
                    <span class="news-time">{ published }</span>
                }
            </div>
            <h4 class="news-title">{ title }</h4>
            if let Some(description) = article.short_description(DESCRIPTION_CHARS) {
                <p class="news-description">{ description }</p>
            }
            <div class="news-actions">
                <button class={classes!("btn-secondary", copied.then_some("copied"))} onclick={on_copy}>
                    { if copied { "✅ Copied!" } else { "📋 Copy headline" } }
                </button>
                if let Some(url) = article.link() {
                    <a class="btn-link" href={url.to_string()} target="_blank" rel="noopener noreferrer">
                        { "Read more ↗" }
                    </a>
                }
            </div>
        </div>
    }
}

fn help_card() -> Html {
    html! {
        <div class="card help-card">
            <h3>{ "💡 How to use this" }</h3>
            <ul>
                <li>{ "Search a topic or pick a suggestion to see recent headlines." }</li>
                <li>{ "Copy a headline and use it as a starting point for campaign content." }</li>
                <li>{ "Open the full article to check the angle before you post about it." }</li>
            </ul>
        </div>
    }
}
