use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Настройки уведомлений пользователя.
///
/// Отсутствующий ключ считается включённым.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationPreferences {
    pub email: bool,
    pub browser: bool,
    pub new_tenders: bool,
    pub tender_updates: bool,
    pub price_changes: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email: true,
            browser: true,
            new_tenders: true,
            tender_updates: true,
            price_changes: true,
        }
    }
}

/// Отдельный флаг уведомлений
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Email,
    Browser,
    NewTenders,
    TenderUpdates,
    PriceChanges,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 5] = [
        Self::Email,
        Self::Browser,
        Self::NewTenders,
        Self::TenderUpdates,
        Self::PriceChanges,
    ];

    /// Ключ в JSON и id чекбокса
    pub fn key(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Browser => "browser",
            Self::NewTenders => "newTenders",
            Self::TenderUpdates => "tenderUpdates",
            Self::PriceChanges => "priceChanges",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email-уведомления",
            Self::Browser => "Браузерные уведомления",
            Self::NewTenders => "Новые тендеры",
            Self::TenderUpdates => "Обновления тендеров",
            Self::PriceChanges => "Изменения цен",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            Self::Email => "Получать уведомления на email",
            Self::Browser => "Получать уведомления в браузере",
            Self::NewTenders => "Уведомления о новых тендерах",
            Self::TenderUpdates => "Уведомления об изменениях в тендерах",
            Self::PriceChanges => "Уведомления об изменениях цен",
        }
    }
}

impl NotificationPreferences {
    pub fn get(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::Email => self.email,
            NotificationKind::Browser => self.browser,
            NotificationKind::NewTenders => self.new_tenders,
            NotificationKind::TenderUpdates => self.tender_updates,
            NotificationKind::PriceChanges => self.price_changes,
        }
    }

    pub fn set(&mut self, kind: NotificationKind, enabled: bool) {
        let flag = match kind {
            NotificationKind::Email => &mut self.email,
            NotificationKind::Browser => &mut self.browser,
            NotificationKind::NewTenders => &mut self.new_tenders,
            NotificationKind::TenderUpdates => &mut self.tender_updates,
            NotificationKind::PriceChanges => &mut self.price_changes,
        };
        *flag = enabled;
    }
}

/// Профиль текущего пользователя, как его отдаёт `/api/profile`.
///
/// Прочие поля пользователя (id, ФИО и т.п.) сохраняются в `extra`
/// и возвращаются в сессию без изменений.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_preferences: Option<NotificationPreferences>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    /// Имя для шапки приложения
    pub fn display_name(&self) -> String {
        self.company_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.email.as_deref())
            .unwrap_or("Пользователь")
            .to_string()
    }
}

/// Тело `PUT /api/profile`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub notification_preferences: NotificationPreferences,
}

/// Тело `PUT /api/profile/password`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_preference_keys_are_enabled() {
        let prefs: NotificationPreferences =
            serde_json::from_str(r#"{"email": false, "priceChanges": false}"#).unwrap();
        assert!(!prefs.email);
        assert!(prefs.browser);
        assert!(prefs.new_tenders);
        assert!(prefs.tender_updates);
        assert!(!prefs.price_changes);
    }

    #[test]
    fn test_profile_keeps_unknown_fields() {
        let json = r#"{"id": 5, "companyName": "ООО Ромашка", "first_name": "Иван"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.company_name.as_deref(), Some("ООО Ромашка"));
        assert!(profile.notification_preferences.is_none());
        assert_eq!(profile.extra["id"], 5);

        let back = serde_json::to_value(&profile).unwrap();
        assert_eq!(back["first_name"], "Иван");
        assert_eq!(back["companyName"], "ООО Ромашка");
        assert!(back.get("phone").is_none());
    }

    #[test]
    fn test_update_request_is_camel_case() {
        let req = UpdateProfileRequest {
            company_name: "ООО".to_string(),
            email: "a@b.ru".to_string(),
            phone: String::new(),
            address: String::new(),
            notification_preferences: NotificationPreferences::default(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["companyName"], "ООО");
        assert_eq!(json["notificationPreferences"]["newTenders"], true);
        assert_eq!(json["notificationPreferences"]["tenderUpdates"], true);
    }

    #[test]
    fn test_password_request_has_no_confirmation() {
        let req = ChangePasswordRequest {
            current_password: "old".to_string(),
            new_password: "new".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["currentPassword"], "old");
        assert_eq!(json["newPassword"], "new");
        assert_eq!(json.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_notification_kind_roundtrip_by_key() {
        let mut prefs = NotificationPreferences::default();
        for kind in NotificationKind::ALL {
            prefs.set(kind, false);
            assert!(!prefs.get(kind));
        }
        assert_eq!(NotificationKind::TenderUpdates.key(), "tenderUpdates");
    }
}
