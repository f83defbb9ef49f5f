use serde::{Deserialize, Serialize};

/// Фильтры списка тендеров. Пустая строка означает «не задано»,
/// отбор выполняет сервер.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TenderFilters {
    pub search: String,
    pub category: String,
    pub status: String,
    pub min_price: String,
    pub max_price: String,
    pub date_from: String,
    pub date_to: String,
}

/// Поле фильтра, которое редактирует пользователь
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Search,
    Category,
    Status,
    MinPrice,
    MaxPrice,
    DateFrom,
    DateTo,
}

impl TenderFilters {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Search => &self.search,
            FilterField::Category => &self.category,
            FilterField::Status => &self.status,
            FilterField::MinPrice => &self.min_price,
            FilterField::MaxPrice => &self.max_price,
            FilterField::DateFrom => &self.date_from,
            FilterField::DateTo => &self.date_to,
        }
    }

    pub fn set(&mut self, field: FilterField, value: String) {
        let slot = match field {
            FilterField::Search => &mut self.search,
            FilterField::Category => &mut self.category,
            FilterField::Status => &mut self.status,
            FilterField::MinPrice => &mut self.min_price,
            FilterField::MaxPrice => &mut self.max_price,
            FilterField::DateFrom => &mut self.date_from,
            FilterField::DateTo => &mut self.date_to,
        };
        *slot = value;
    }

    /// Количество непустых фильтров (для бейджа панели фильтров)
    pub fn active_count(&self) -> usize {
        [
            &self.search,
            &self.category,
            &self.status,
            &self.min_price,
            &self.max_price,
            &self.date_from,
            &self.date_to,
        ]
        .iter()
        .filter(|v| !v.is_empty())
        .count()
    }
}

/// Параметры запроса `GET /api/tenders`.
///
/// Порядок полей совпадает с порядком параметров в строке запроса:
/// сначала номер страницы, затем все фильтры, включая пустые.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenderListQuery {
    pub page: u32,
    pub search: String,
    pub category: String,
    pub status: String,
    pub min_price: String,
    pub max_price: String,
    pub date_from: String,
    pub date_to: String,
}

impl TenderListQuery {
    pub fn new(page: u32, filters: &TenderFilters) -> Self {
        Self {
            page,
            search: filters.search.clone(),
            category: filters.category.clone(),
            status: filters.status.clone(),
            min_price: filters.min_price.clone(),
            max_price: filters.max_price.clone(),
            date_from: filters.date_from.clone(),
            date_to: filters.date_to.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_every_field() {
        let fields = [
            FilterField::Search,
            FilterField::Category,
            FilterField::Status,
            FilterField::MinPrice,
            FilterField::MaxPrice,
            FilterField::DateFrom,
            FilterField::DateTo,
        ];
        let mut filters = TenderFilters::default();
        for (i, field) in fields.iter().enumerate() {
            filters.set(*field, format!("v{}", i));
        }
        for (i, field) in fields.iter().enumerate() {
            assert_eq!(filters.get(*field), format!("v{}", i));
        }
        assert_eq!(filters.active_count(), 7);
    }

    #[test]
    fn test_query_keeps_empty_filters() {
        let mut filters = TenderFilters::default();
        filters.set(FilterField::Category, "it".to_string());
        let query = TenderListQuery::new(3, &filters);
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["page"], 3);
        assert_eq!(json["category"], "it");
        assert_eq!(json["minPrice"], "");
        assert_eq!(json["dateTo"], "");
    }
}
