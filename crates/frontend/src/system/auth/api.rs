use contracts::system::profile::UserProfile;

use crate::shared::api_utils::{ApiClient, ApiError};

/// Get the profile of the signed-in user
pub async fn fetch_current_user(api: &ApiClient) -> Result<UserProfile, ApiError> {
    api.get_json::<UserProfile>("/api/profile").await
}
