//! Tab labels - заголовки табов.

use contracts::domain::a025_upd_document::UpdDocument;
use contracts::domain::common::AggregateRoot;

/// Возвращает читаемый заголовок таба для данного ключа. Fallback: пустая строка.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match UpdDocument::id_from_tab_key(key) {
        Some(_) => UpdDocument::element_name(),
        None => "",
    }
}
