use serde::{Deserialize, Deserializer, Serialize};

/// Статус тендера
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenderStatus {
    Active,
    Completed,
    Cancelled,
}

impl TenderStatus {
    pub const ALL: [TenderStatus; 3] = [Self::Active, Self::Completed, Self::Cancelled];

    /// Код статуса в API
    pub fn code(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Подпись для бейджа статуса
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Активный",
            Self::Completed => "Завершен",
            Self::Cancelled => "Отменен",
        }
    }

    /// Подпись в фильтре списка (множественное число)
    pub fn filter_label(&self) -> &'static str {
        match self {
            Self::Active => "Активные",
            Self::Completed => "Завершенные",
            Self::Cancelled => "Отмененные",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Категории тендеров: код в API и подпись
pub const TENDER_CATEGORIES: [(&str, &str); 4] = [
    ("construction", "Строительство"),
    ("it", "IT"),
    ("services", "Услуги"),
    ("supplies", "Поставки"),
];

/// Подпись категории; неизвестный код выводится как есть
pub fn category_label(code: &str) -> &str {
    match TENDER_CATEGORIES.iter().find(|(c, _)| *c == code) {
        Some((_, label)) => *label,
        None => code,
    }
}

/// Десериализует `null` как значение по умолчанию.
///
/// Сервер отдаёт `null` для незаполненных колонок; `#[serde(default)]`
/// покрывает только отсутствующий ключ.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Элемент списка тендеров
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenderSummary {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    pub status: TenderStatus,
    /// Начальная цена
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    /// Срок подачи заявок (ISO 8601)
    pub submission_deadline: String,
    /// Дата публикации (ISO 8601), есть не у всех серверов
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Заказчик тендера
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TenderCustomer {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub inn: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
}

/// Размер документа: байты или готовая строка от сервера
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentSize {
    Bytes(u64),
    Text(String),
}

/// Документ тендерной документации
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenderDocument {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<DocumentSize>,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub doc_type: String,
    pub url: String,
}

/// Тип события в истории изменений
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryEventKind {
    Status,
    Price,
    #[default]
    #[serde(other)]
    Other,
}

/// Событие истории изменений тендера
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenderHistoryEvent {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: HistoryEventKind,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub date: String,
}

/// Карточка тендера: поля списка плюс требования, заказчик, документы и история
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenderDetail {
    #[serde(flatten)]
    pub summary: TenderSummary,
    #[serde(default, deserialize_with = "null_as_default")]
    pub requirements: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer: TenderCustomer,
    #[serde(default, deserialize_with = "null_as_default")]
    pub documents: Vec<TenderDocument>,
    /// События в порядке получения от сервера
    #[serde(default, deserialize_with = "null_as_default")]
    pub history: Vec<TenderHistoryEvent>,
}

impl TenderDetail {
    pub fn status(&self) -> TenderStatus {
        self.summary.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels() {
        assert_eq!(category_label("it"), "IT");
        assert_eq!(category_label("supplies"), "Поставки");
        assert_eq!(category_label("mining"), "mining");
    }

    #[test]
    fn test_detail_decodes_with_missing_collections() {
        let json = r#"{
            "id": 7,
            "title": "Поставка бумаги",
            "category": "supplies",
            "status": "active",
            "price": 1234.5,
            "submission_deadline": "2025-01-01T12:00:00Z"
        }"#;
        let detail: TenderDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.summary.id, 7);
        assert_eq!(detail.status(), TenderStatus::Active);
        assert!(detail.requirements.is_empty());
        assert!(detail.documents.is_empty());
        assert!(detail.history.is_empty());
        assert_eq!(detail.customer, TenderCustomer::default());
    }

    #[test]
    fn test_history_kind_falls_back_to_other() {
        let json = r#"[
            {"type": "status", "description": "Опубликован", "date": "2024-12-01T09:00:00Z"},
            {"type": "price", "description": "Снижена цена", "date": "2024-12-02T09:00:00Z"},
            {"type": "comment", "description": "Разъяснение", "date": "2024-12-03T09:00:00Z"},
            {"description": "Без типа", "date": "2024-12-04T09:00:00Z"}
        ]"#;
        let events: Vec<TenderHistoryEvent> = serde_json::from_str(json).unwrap();
        let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                HistoryEventKind::Status,
                HistoryEventKind::Price,
                HistoryEventKind::Other,
                HistoryEventKind::Other
            ]
        );
    }

    #[test]
    fn test_document_size_number_or_text() {
        let json = r#"[
            {"name": "ТЗ.pdf", "size": 2048, "type": "pdf", "url": "/files/1"},
            {"name": "Смета.xlsx", "size": "1.2 MB", "type": "xlsx", "url": "/files/2"}
        ]"#;
        let docs: Vec<TenderDocument> = serde_json::from_str(json).unwrap();
        assert_eq!(docs[0].size, Some(DocumentSize::Bytes(2048)));
        assert_eq!(docs[1].size, Some(DocumentSize::Text("1.2 MB".to_string())));
        assert_eq!(docs[1].doc_type, "xlsx");
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let json = r#"{"id": 1, "title": "x", "status": "draft", "submission_deadline": "2025-01-01"}"#;
        assert!(serde_json::from_str::<TenderSummary>(json).is_err());
    }

    #[test]
    fn test_status_codes() {
        let status: TenderStatus = serde_json::from_str(r#""completed""#).unwrap();
        assert_eq!(status, TenderStatus::Completed);
        assert_eq!(status.code(), "completed");
        assert_eq!(TenderStatus::Cancelled.label(), "Отменен");
    }

    #[test]
    fn test_summary_decodes_null_columns() {
        let json = r#"{
            "id": 3,
            "title": "Уборка территории",
            "description": null,
            "category": null,
            "status": "active",
            "price": null,
            "submission_deadline": "2025-01-01T12:00:00Z",
            "created_at": null
        }"#;
        let tender: TenderSummary = serde_json::from_str(json).unwrap();
        assert_eq!(tender.description, "");
        assert_eq!(tender.category, "");
        assert_eq!(tender.price, 0.0);
        assert_eq!(tender.created_at, None);
    }

    #[test]
    fn test_detail_decodes_null_collections() {
        let json = r#"{
            "id": 9,
            "title": "Ремонт кровли",
            "description": null,
            "status": "completed",
            "price": 500000,
            "submission_deadline": "2025-01-01T12:00:00Z",
            "requirements": null,
            "customer": {"name": "ООО Ромашка", "inn": null, "address": null},
            "documents": null,
            "history": [{"type": null, "description": null, "date": "2024-12-01T09:00:00Z"}]
        }"#;
        let detail: TenderDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.summary.price, 500000.0);
        assert!(detail.requirements.is_empty());
        assert!(detail.documents.is_empty());
        assert_eq!(detail.customer.name, "ООО Ромашка");
        assert_eq!(detail.customer.inn, "");
        assert_eq!(detail.history[0].kind, HistoryEventKind::Other);
        assert_eq!(detail.history[0].description, "");
    }

    #[test]
    fn test_detail_null_customer_is_empty() {
        let json = r#"{"id": 1, "title": "x", "status": "active", "submission_deadline": "2025-01-01", "customer": null}"#;
        let detail: TenderDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.customer, TenderCustomer::default());
    }
}
