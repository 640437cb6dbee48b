use common::error::ApiResult;
use common::model::news::NewsResponse;

pub enum Msg {
    /// Keystroke in the search box.
    Input(String),
    /// The debounce timer with this token fired.
    DebounceElapsed(u64),
    Submit,
    Choose(&'static str),
    Fetch(String),
    Fetched {
        query: String,
        result: ApiResult<NewsResponse>,
    },
    Copy(String),
    Copied(String),
    CopyExpired(u64),
}
