mod confirm_delete;
mod detail;

pub use confirm_delete::confirm_delete_dialog;
pub use detail::detail_dialog;
