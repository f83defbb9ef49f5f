pub mod api;
pub mod ui;

pub use ui::details::page::TenderDetailsPage;
pub use ui::list::TenderList;
