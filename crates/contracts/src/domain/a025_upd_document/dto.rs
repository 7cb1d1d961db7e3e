//! DTO карточки УПД (ответ GET /api/a025/upd-document/:id)

use serde::{Deserialize, Serialize};

/// Контрагент документа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterpartyRef {
    pub id: String,
    pub name: String,
    /// ИНН
    #[serde(default)]
    pub inn: Option<String>,
}

/// Подразделение документа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubdivisionRef {
    pub id: String,
    pub name: String,
}

/// УПД вместе с контрагентом и подразделением
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdDocumentDetailDto {
    pub id: String,
    pub document_number: String,
    /// YYYY-MM-DD
    pub document_date: String,
    pub counterparty: CounterpartyRef,
    #[serde(default)]
    pub subdivision: Option<SubdivisionRef>,
    #[serde(default)]
    pub total_income: Option<f64>,
    #[serde(default)]
    pub total_expense: Option<f64>,
}

impl UpdDocumentDetailDto {
    pub fn total_income_or_zero(&self) -> f64 {
        self.total_income.unwrap_or(0.0)
    }

    pub fn total_expense_or_zero(&self) -> f64 {
        self.total_expense.unwrap_or(0.0)
    }

    /// Непустой ИНН контрагента
    pub fn counterparty_inn(&self) -> Option<&str> {
        self.counterparty
            .inn
            .as_deref()
            .map(str::trim)
            .filter(|inn| !inn.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_without_optional_fields() {
        let json = r#"{
            "id": "6f1c3a52-9b0e-4d8e-b1a7-0c2f4e5d6a7b",
            "document_number": "УПД-17",
            "document_date": "2024-03-05",
            "counterparty": { "id": "c1", "name": "ООО Ромашка" }
        }"#;
        let dto: UpdDocumentDetailDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.subdivision, None);
        assert_eq!(dto.total_income_or_zero(), 0.0);
        assert_eq!(dto.total_expense_or_zero(), 0.0);
        assert_eq!(dto.counterparty_inn(), None);
    }

    #[test]
    fn test_blank_inn_is_hidden() {
        let dto = UpdDocumentDetailDto {
            id: "1".into(),
            document_number: "1".into(),
            document_date: "2024-03-05".into(),
            counterparty: CounterpartyRef {
                id: "c1".into(),
                name: "ООО Ромашка".into(),
                inn: Some("  ".into()),
            },
            subdivision: None,
            total_income: Some(1500.0),
            total_expense: None,
        };
        assert_eq!(dto.counterparty_inn(), None);
        assert_eq!(dto.total_income_or_zero(), 1500.0);
    }
}
