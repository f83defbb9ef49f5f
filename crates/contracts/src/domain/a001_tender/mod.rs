pub mod aggregate;
pub mod query;

pub use aggregate::{
    category_label, DocumentSize, HistoryEventKind, TenderCustomer, TenderDetail,
    TenderDocument, TenderHistoryEvent, TenderStatus, TenderSummary, TENDER_CATEGORIES,
};
pub use query::{FilterField, TenderFilters, TenderListQuery};
