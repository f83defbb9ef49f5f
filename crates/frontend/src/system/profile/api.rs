use contracts::system::profile::{ChangePasswordRequest, UpdateProfileRequest, UserProfile};

use crate::shared::api_utils::{ApiClient, ApiError};

/// Save profile fields and notification preferences; returns the updated user
pub async fn update_profile(
    api: &ApiClient,
    request: &UpdateProfileRequest,
) -> Result<UserProfile, ApiError> {
    api.put_json("/api/profile", request).await
}

/// Change password; any 2xx response is success
pub async fn change_password(
    api: &ApiClient,
    request: &ChangePasswordRequest,
) -> Result<(), ApiError> {
    api.put_no_content("/api/profile/password", request).await
}
