//! Приемки и их строки, связанные с УПД
//!
//! - item.rs: строка приемки (DTO) и классификация типа операции
//! - grouping.rs: группировка Приемка → Позиция → Группа работ
//! - totals.rs: итоговые суммы по строкам

pub mod grouping;
pub mod item;
pub mod totals;

pub use grouping::{group_items, PositionGroup, ReceptionGroup, WorkGroup};
pub use item::{work_group_label, ReceptionItemDto, TransactionKind, NO_WORK_GROUP};
pub use totals::{calculate_total, summarize, ItemTotals};
