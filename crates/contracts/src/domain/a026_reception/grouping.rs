//! Группировка строк УПД: Приемка → Позиция → Группа работ.
//!
//! Порядок ключей на каждом уровне совпадает с порядком первого появления
//! во входном списке, сортировка не выполняется.

use super::item::{ReceptionItemDto, TransactionKind};

/// Группа работ внутри позиции
#[derive(Debug, Clone, PartialEq)]
pub struct WorkGroup {
    pub label: String,
    pub items: Vec<ReceptionItemDto>,
}

impl WorkGroup {
    pub fn income_items(&self) -> Vec<&ReceptionItemDto> {
        self.items_of(TransactionKind::Income)
    }

    pub fn expense_items(&self) -> Vec<&ReceptionItemDto> {
        self.items_of(TransactionKind::Expense)
    }

    fn items_of(&self, kind: TransactionKind) -> Vec<&ReceptionItemDto> {
        self.items.iter().filter(|item| item.kind() == kind).collect()
    }
}

/// Позиция внутри приемки
#[derive(Debug, Clone, PartialEq)]
pub struct PositionGroup {
    pub position_number: i32,
    pub work_groups: Vec<WorkGroup>,
}

impl PositionGroup {
    /// Первая строка позиции; из неё берутся данные заголовка
    pub fn first_item(&self) -> Option<&ReceptionItemDto> {
        self.work_groups.first().and_then(|g| g.items.first())
    }

    pub fn item_count(&self) -> usize {
        self.work_groups.iter().map(|g| g.items.len()).sum()
    }
}

/// Приемка
#[derive(Debug, Clone, PartialEq)]
pub struct ReceptionGroup {
    pub reception_number: String,
    pub positions: Vec<PositionGroup>,
}

impl ReceptionGroup {
    pub fn item_count(&self) -> usize {
        self.positions.iter().map(PositionGroup::item_count).sum()
    }
}

/// Разложить строки по приемкам, позициям и группам работ
pub fn group_items(items: &[ReceptionItemDto]) -> Vec<ReceptionGroup> {
    let mut receptions: Vec<ReceptionGroup> = Vec::new();

    for item in items {
        let reception = match receptions
            .iter()
            .position(|r| r.reception_number == item.reception_number)
        {
            Some(idx) => &mut receptions[idx],
            None => {
                receptions.push(ReceptionGroup {
                    reception_number: item.reception_number.clone(),
                    positions: Vec::new(),
                });
                let last = receptions.len() - 1;
                &mut receptions[last]
            }
        };

        let position = match reception
            .positions
            .iter()
            .position(|p| p.position_number == item.position_number)
        {
            Some(idx) => &mut reception.positions[idx],
            None => {
                reception.positions.push(PositionGroup {
                    position_number: item.position_number,
                    work_groups: Vec::new(),
                });
                let last = reception.positions.len() - 1;
                &mut reception.positions[last]
            }
        };

        let label = item.work_group_label();
        let work_group = match position.work_groups.iter().position(|g| g.label == label) {
            Some(idx) => &mut position.work_groups[idx],
            None => {
                position.work_groups.push(WorkGroup {
                    label: label.to_string(),
                    items: Vec::new(),
                });
                let last = position.work_groups.len() - 1;
                &mut position.work_groups[last]
            }
        };

        work_group.items.push(item.clone());
    }

    receptions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a026_reception::item::tests::item;
    use crate::domain::a026_reception::item::NO_WORK_GROUP;

    #[test]
    fn test_empty_input() {
        assert!(group_items(&[]).is_empty());
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let items = vec![
            item("ПР-2", 5, Some("Разборка"), None, Some(10.0), "Доходы"),
            item("ПР-1", 3, None, None, Some(10.0), "Доходы"),
            item("ПР-2", 1, Some("Сборка"), None, Some(10.0), "Расходы"),
            item("ПР-2", 5, Some("Сборка"), None, Some(10.0), "Доходы"),
            item("ПР-2", 5, Some("Разборка"), None, Some(10.0), "Расходы"),
        ];

        let grouped = group_items(&items);

        let receptions: Vec<&str> = grouped.iter().map(|r| r.reception_number.as_str()).collect();
        assert_eq!(receptions, vec!["ПР-2", "ПР-1"]);

        let positions: Vec<i32> = grouped[0].positions.iter().map(|p| p.position_number).collect();
        assert_eq!(positions, vec![5, 1]);

        let labels: Vec<&str> = grouped[0].positions[0]
            .work_groups
            .iter()
            .map(|g| g.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Разборка", "Сборка"]);
        assert_eq!(grouped[0].positions[0].work_groups[0].items.len(), 2);
    }

    #[test]
    fn test_every_item_lands_in_exactly_one_group() {
        let items = vec![
            item("ПР-1", 1, None, None, None, "Доходы"),
            item("ПР-1", 1, Some(""), None, None, "Расходы"),
            item("ПР-1", 2, Some("Сушка"), None, None, "Прочее"),
            item("ПР-3", 1, Some("Сушка"), None, None, "Доходы"),
        ];

        let grouped = group_items(&items);
        let total: usize = grouped.iter().map(ReceptionGroup::item_count).sum();
        assert_eq!(total, items.len());
    }

    #[test]
    fn test_missing_and_empty_work_group_share_bucket() {
        let items = vec![
            item("ПР-1", 1, None, None, None, "Доходы"),
            item("ПР-1", 1, Some(""), None, None, "Расходы"),
        ];

        let grouped = group_items(&items);
        let groups = &grouped[0].positions[0].work_groups;
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, NO_WORK_GROUP);
        assert_eq!(groups[0].items.len(), 2);
    }

    #[test]
    fn test_same_position_in_different_receptions() {
        let items = vec![
            item("ПР-1", 1, None, None, None, "Доходы"),
            item("ПР-2", 1, None, None, None, "Доходы"),
        ];

        let grouped = group_items(&items);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].positions.len(), 1);
        assert_eq!(grouped[1].positions.len(), 1);
    }

    #[test]
    fn test_income_and_expense_split() {
        let items = vec![
            item("ПР-1", 1, Some("Ремонт"), None, None, "Доходы"),
            item("ПР-1", 1, Some("Ремонт"), None, None, "Расходы"),
            item("ПР-1", 1, Some("Ремонт"), None, None, "Прочее"),
            item("ПР-1", 1, Some("Ремонт"), None, None, "Доходы"),
        ];

        let grouped = group_items(&items);
        let group = &grouped[0].positions[0].work_groups[0];
        assert_eq!(group.items.len(), 4);
        assert_eq!(group.income_items().len(), 2);
        assert_eq!(group.expense_items().len(), 1);
    }

    #[test]
    fn test_first_item_of_position() {
        let mut first = item("ПР-1", 7, Some("Б"), None, None, "Доходы");
        first.service_description = "Насос К 80-50".to_string();
        let items = vec![first, item("ПР-1", 7, Some("А"), None, None, "Доходы")];

        let grouped = group_items(&items);
        let position = &grouped[0].positions[0];
        assert_eq!(
            position.first_item().map(|i| i.service_description.as_str()),
            Some("Насос К 80-50")
        );
        assert_eq!(position.item_count(), 2);
    }
}
