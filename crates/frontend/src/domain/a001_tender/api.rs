use contracts::domain::a001_tender::{TenderDetail, TenderListQuery, TenderSummary};
use contracts::shared::pagination::PagedResponse;

use crate::shared::api_utils::{ApiClient, ApiError};

/// Query string of `GET /api/tenders`: page first, then every filter
/// (empty ones included), then the `_ts` cache buster.
pub fn list_query_string(query: &TenderListQuery, cache_buster: i64) -> Result<String, ApiError> {
    let params = serde_qs::to_string(query).map_err(|e| ApiError::Serialize(e.to_string()))?;
    Ok(format!("{}&_ts={}", params, cache_buster))
}

pub async fn fetch_tenders(
    api: &ApiClient,
    query: &TenderListQuery,
) -> Result<PagedResponse<TenderSummary>, ApiError> {
    let cache_buster = js_sys::Date::now() as i64;
    let path = format!("/api/tenders?{}", list_query_string(query, cache_buster)?);
    api.get_json(&path).await
}

/// `None` when the server answers with a `null` body
pub async fn fetch_tender(api: &ApiClient, id: &str) -> Result<Option<TenderDetail>, ApiError> {
    let path = format!("/api/tenders/{}", urlencoding::encode(id));
    api.get_json(&path).await
}
