use common::error::ApiResult;
use common::model::news::{NewsArticle, NewsResponse};
use common::search::{CopyFeedback, NewsSearch};
use gloo_timers::callback::Timeout;

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

pub struct NewsInspiration {
    pub search: NewsSearch,
    pub articles: Vec<NewsArticle>,
    pub loading: bool,
    /// Set while the shown results are the backend's sample data.
    pub mock: Option<MockNotice>,
    pub copy: CopyFeedback,
    /// Pending debounce; dropping it cancels the timer.
    pub debounce: Option<Timeout>,
    pub loaded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockNotice {
    pub message: Option<String>,
}

impl Default for NewsInspiration {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsInspiration {
    pub fn new() -> Self {
        Self {
            search: NewsSearch::default(),
            articles: Vec::new(),
            loading: true,
            mock: None,
            copy: CopyFeedback::default(),
            debounce: None,
            loaded: false,
        }
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Shows the results for `query`.
    ///
    /// Results are applied even if a newer query was committed meanwhile;
    /// the return value tells whether that happened. A failure shows an empty
    /// result set.
    pub fn finish_fetch(&mut self, query: &str, result: ApiResult<NewsResponse>) -> bool {
        self.loading = false;
        match result {
            Ok(response) => {
                self.mock = response.is_mock().then(|| MockNotice {
                    message: response.message.clone(),
                });
                self.articles = response.articles;
            }
            Err(_) => {
                self.articles.clear();
                self.mock = None;
            }
        }
        query != self.search.query()
    }
}
