pub mod campaigns;
pub mod charts;
pub mod dashboard;
pub mod news;
pub mod shared;
