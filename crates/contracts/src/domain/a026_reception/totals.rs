//! Итоговые суммы по строкам УПД

use super::item::{ReceptionItemDto, TransactionKind};

/// Итог документа: доходы со знаком «+», расходы со знаком «−».
/// Строки с нераспознанным типом операции не учитываются.
pub fn calculate_total(items: &[ReceptionItemDto]) -> f64 {
    items.iter().map(ReceptionItemDto::signed_amount).sum()
}

/// Разбивка итога по типам операций
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ItemTotals {
    pub income: f64,
    pub expense: f64,
    /// Количество строк с нераспознанным типом операции
    pub ignored_count: usize,
}

impl ItemTotals {
    pub fn net(&self) -> f64 {
        self.income - self.expense
    }
}

pub fn summarize(items: &[ReceptionItemDto]) -> ItemTotals {
    items.iter().fold(ItemTotals::default(), |mut acc, item| {
        match item.kind() {
            TransactionKind::Income => acc.income += item.amount(),
            TransactionKind::Expense => acc.expense += item.amount(),
            TransactionKind::Unknown => acc.ignored_count += 1,
        }
        acc
    })
}
