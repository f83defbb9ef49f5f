use contracts::system::profile::{
    ChangePasswordRequest, NotificationKind, NotificationPreferences, UpdateProfileRequest,
    UserProfile,
};

use crate::shared::api_utils::ApiError;
use crate::shared::status_message::StatusMessage;

pub const MSG_PROFILE_SAVED: &str = "Профиль успешно обновлен";
pub const MSG_PROFILE_ERROR: &str = "Ошибка при обновлении профиля";
pub const MSG_PASSWORD_MISMATCH: &str = "Пароли не совпадают";
pub const MSG_PASSWORD_CHANGED: &str = "Пароль успешно изменен";
pub const MSG_PASSWORD_ERROR: &str = "Ошибка при изменении пароля";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Profile,
    Notifications,
    Security,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 3] = [Self::Profile, Self::Notifications, Self::Security];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Profile => "Профиль",
            Self::Notifications => "Уведомления",
            Self::Security => "Безопасность",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Profile => "user",
            Self::Notifications => "bell",
            Self::Security => "key",
        }
    }
}

/// Text field of the profile editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    CompanyName,
    Email,
    Phone,
    Address,
    CurrentPassword,
    NewPassword,
    ConfirmPassword,
}

impl ProfileField {
    /// DOM id of the input
    pub fn key(&self) -> &'static str {
        match self {
            Self::CompanyName => "companyName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::CurrentPassword => "currentPassword",
            Self::NewPassword => "newPassword",
            Self::ConfirmPassword => "confirmPassword",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub notification_preferences: NotificationPreferences,
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl ProfileForm {
    /// Copy profile fields and preferences from the user, keeping passwords
    fn load_user(&mut self, user: &UserProfile) {
        self.company_name = user.company_name.clone().unwrap_or_default();
        self.email = user.email.clone().unwrap_or_default();
        self.phone = user.phone.clone().unwrap_or_default();
        self.address = user.address.clone().unwrap_or_default();
        self.notification_preferences = user.notification_preferences.unwrap_or_default();
    }

    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::CompanyName => &self.company_name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Address => &self.address,
            ProfileField::CurrentPassword => &self.current_password,
            ProfileField::NewPassword => &self.new_password,
            ProfileField::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: String) {
        let slot = match field {
            ProfileField::CompanyName => &mut self.company_name,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Address => &mut self.address,
            ProfileField::CurrentPassword => &mut self.current_password,
            ProfileField::NewPassword => &mut self.new_password,
            ProfileField::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value;
    }

    pub fn to_update_request(&self) -> UpdateProfileRequest {
        UpdateProfileRequest {
            company_name: self.company_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            notification_preferences: self.notification_preferences,
        }
    }

    fn clear_passwords(&mut self) {
        self.current_password.clear();
        self.new_password.clear();
        self.confirm_password.clear();
    }
}

/// View state of the profile editor.
///
/// All three forms share one `loading` flag and one status slot. Submit
/// methods return the request to send, or `None` when nothing must be sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileEditorState {
    pub form: ProfileForm,
    pub active_tab: ProfileTab,
    pub loading: bool,
    pub message: StatusMessage,
}

impl ProfileEditorState {
    pub fn new(user: Option<&UserProfile>) -> Self {
        let mut state = Self::default();
        if let Some(user) = user {
            state.form.load_user(user);
        }
        state
    }

    /// Re-initialise from a changed session user. Password fields survive.
    pub fn sync_from_user(&mut self, user: &UserProfile) {
        self.form.load_user(user);
    }

    pub fn select_tab(&mut self, tab: ProfileTab) {
        self.active_tab = tab;
    }

    pub fn set_field(&mut self, field: ProfileField, value: String) {
        self.form.set(field, value);
    }

    pub fn set_notification(&mut self, kind: NotificationKind, enabled: bool) {
        self.form.notification_preferences.set(kind, enabled);
    }

    fn begin(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.message = StatusMessage::None;
        true
    }

    fn begin_update(&mut self) -> Option<UpdateProfileRequest> {
        if !self.begin() {
            return None;
        }
        self.loading = true;
        Some(self.form.to_update_request())
    }

    /// Submit of the "Профиль" tab
    pub fn submit_profile(&mut self) -> Option<UpdateProfileRequest> {
        self.begin_update()
    }

    /// Submit of the "Уведомления" tab; same endpoint, full preferences map
    pub fn submit_notifications(&mut self) -> Option<UpdateProfileRequest> {
        self.begin_update()
    }

    /// Apply the outcome of `PUT /api/profile`. The caller replaces the
    /// session user on success.
    pub fn finish_update(&mut self, result: &Result<UserProfile, ApiError>) {
        self.loading = false;
        self.message = match result {
            Ok(_) => StatusMessage::success(MSG_PROFILE_SAVED),
            Err(e) => {
                log::error!("Error updating profile: {}", e);
                StatusMessage::error(MSG_PROFILE_ERROR)
            }
        };
    }

    /// Submit of the "Безопасность" tab. A confirmation mismatch sets the
    /// error and sends nothing.
    pub fn submit_password(&mut self) -> Option<ChangePasswordRequest> {
        if !self.begin() {
            return None;
        }
        if self.form.new_password != self.form.confirm_password {
            self.message = StatusMessage::error(MSG_PASSWORD_MISMATCH);
            return None;
        }
        self.loading = true;
        Some(ChangePasswordRequest {
            current_password: self.form.current_password.clone(),
            new_password: self.form.new_password.clone(),
        })
    }

    pub fn finish_password_change(&mut self, result: Result<(), ApiError>) {
        self.loading = false;
        self.message = match result {
            Ok(()) => {
                self.form.clear_passwords();
                StatusMessage::success(MSG_PASSWORD_CHANGED)
            }
            Err(e) => {
                log::error!("Error changing password: {}", e);
                StatusMessage::error(MSG_PASSWORD_ERROR)
            }
        };
    }

    pub fn submit_label(&self) -> &'static str {
        match (self.loading, self.active_tab) {
            (true, _) => "Сохранение...",
            (false, ProfileTab::Security) => "Изменить пароль",
            (false, _) => "Сохранить",
        }
    }
}
