use serde::{Deserialize, Serialize};

/// Метка типа операции «доход»
pub const TRANSACTION_INCOME: &str = "Доходы";

/// Метка типа операции «расход»
pub const TRANSACTION_EXPENSE: &str = "Расходы";

/// Группа для строк без указанной группы работ
pub const NO_WORK_GROUP: &str = "Без группы";

/// Классификация метки типа операции.
///
/// Метка приходит строкой и на границе не валидируется, поэтому
/// всё, что не «Доходы» и не «Расходы», попадает в `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
    Unknown,
}

impl TransactionKind {
    pub fn from_label(label: &str) -> Self {
        match label {
            TRANSACTION_INCOME => TransactionKind::Income,
            TRANSACTION_EXPENSE => TransactionKind::Expense,
            _ => TransactionKind::Unknown,
        }
    }

    /// Знак, с которым строка входит в итог
    pub fn sign(&self) -> f64 {
        match self {
            TransactionKind::Income => 1.0,
            TransactionKind::Expense => -1.0,
            TransactionKind::Unknown => 0.0,
        }
    }
}

/// Строка приемки, привязанная к УПД
/// (ответ GET /api/a025/upd-document/:id/reception-items)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceptionItemDto {
    pub id: String,
    pub reception_id: String,
    /// Номер приемки, первый уровень группировки
    pub reception_number: String,
    /// Номер позиции внутри приемки
    pub position_number: i32,
    #[serde(default)]
    pub work_group: Option<String>,
    pub item_description: String,
    /// Обслуживаемая единица (оборудование) позиции
    #[serde(default)]
    pub service_description: String,
    #[serde(default)]
    pub inventory_number: Option<String>,
    #[serde(default)]
    pub subdivision_name: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
    pub transaction_type: String,
}

impl ReceptionItemDto {
    pub fn kind(&self) -> TransactionKind {
        TransactionKind::from_label(&self.transaction_type)
    }

    /// Количество; отсутствующее или нулевое считается равным 1
    pub fn effective_quantity(&self) -> f64 {
        match self.quantity {
            Some(q) if q != 0.0 => q,
            _ => 1.0,
        }
    }

    pub fn effective_price(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    /// Сумма строки без знака
    pub fn amount(&self) -> f64 {
        self.effective_quantity() * self.effective_price()
    }

    /// Сумма строки со знаком типа операции
    pub fn signed_amount(&self) -> f64 {
        match self.kind() {
            TransactionKind::Unknown => 0.0,
            kind => kind.sign() * self.amount(),
        }
    }

    pub fn work_group_label(&self) -> &str {
        work_group_label(&self.work_group)
    }
}

/// Метка группы работ; для пустой или отсутствующей: «Без группы»
pub fn work_group_label(work_group: &Option<String>) -> &str {
    match work_group.as_deref() {
        Some(label) if !label.is_empty() => label,
        _ => NO_WORK_GROUP,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rstest::rstest;

    pub(crate) fn item(
        reception: &str,
        position: i32,
        work_group: Option<&str>,
        quantity: Option<f64>,
        price: Option<f64>,
        transaction_type: &str,
    ) -> ReceptionItemDto {
        ReceptionItemDto {
            id: format!("{}-{}-{:?}-{}", reception, position, work_group, transaction_type),
            reception_id: format!("r-{}", reception),
            reception_number: reception.to_string(),
            position_number: position,
            work_group: work_group.map(str::to_string),
            item_description: "Замена подшипника".to_string(),
            service_description: "Электродвигатель АИР 100".to_string(),
            inventory_number: None,
            subdivision_name: None,
            quantity,
            price,
            transaction_type: transaction_type.to_string(),
        }
    }

    #[rstest]
    #[case("Доходы", TransactionKind::Income)]
    #[case("Расходы", TransactionKind::Expense)]
    #[case("доходы", TransactionKind::Unknown)]
    #[case("", TransactionKind::Unknown)]
    #[case("Income", TransactionKind::Unknown)]
    fn test_transaction_kind(#[case] label: &str, #[case] expected: TransactionKind) {
        assert_eq!(TransactionKind::from_label(label), expected);
    }

    #[rstest]
    #[case(Some(3.0), Some(100.0), 300.0)]
    #[case(None, Some(250.0), 250.0)]
    #[case(Some(0.0), Some(250.0), 250.0)]
    #[case(Some(2.0), None, 0.0)]
    #[case(Some(0.5), Some(10.0), 5.0)]
    fn test_amount_defaults(
        #[case] quantity: Option<f64>,
        #[case] price: Option<f64>,
        #[case] expected: f64,
    ) {
        let it = item("П-1", 1, None, quantity, price, "Доходы");
        assert_eq!(it.amount(), expected);
    }

    #[test]
    fn test_signed_amount() {
        assert_eq!(item("П-1", 1, None, Some(2.0), Some(50.0), "Доходы").signed_amount(), 100.0);
        assert_eq!(item("П-1", 1, None, Some(2.0), Some(50.0), "Расходы").signed_amount(), -100.0);
        assert_eq!(item("П-1", 1, None, Some(2.0), Some(50.0), "Прочее").signed_amount(), 0.0);
    }

    #[test]
    fn test_work_group_label() {
        assert_eq!(work_group_label(&None), NO_WORK_GROUP);
        assert_eq!(work_group_label(&Some(String::new())), NO_WORK_GROUP);
        assert_eq!(work_group_label(&Some("Ремонт статора".into())), "Ремонт статора");
    }

    #[test]
    fn test_deserialize_minimal_item() {
        let json = r#"{
            "id": "i1",
            "reception_id": "r1",
            "reception_number": "ПР-0001",
            "position_number": 2,
            "item_description": "Перемотка",
            "transaction_type": "Доходы"
        }"#;
        let it: ReceptionItemDto = serde_json::from_str(json).unwrap();
        assert_eq!(it.work_group, None);
        assert_eq!(it.quantity, None);
        assert_eq!(it.price, None);
        assert_eq!(it.service_description, "");
        assert_eq!(it.kind(), TransactionKind::Income);
    }
}
