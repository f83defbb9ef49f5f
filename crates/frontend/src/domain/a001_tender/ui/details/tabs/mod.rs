pub mod documents;
pub mod history;
pub mod info;

pub use documents::DocumentsTab;
pub use history::HistoryTab;
pub use info::InfoTab;
