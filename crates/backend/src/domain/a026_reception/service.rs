use super::repository;
use anyhow::Result;
use contracts::domain::a026_reception::{summarize, ReceptionItemDto};
use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::shared::data::db::get_connection;

/// Строки приемок, связанные с УПД
pub async fn list_linked_items(upd_document_id: Uuid) -> Result<Vec<ReceptionItemDto>> {
    list_linked_items_in(get_connection(), upd_document_id).await
}

pub async fn list_linked_items_in<C: ConnectionTrait>(
    db: &C,
    upd_document_id: Uuid,
) -> Result<Vec<ReceptionItemDto>> {
    let items = repository::list_by_upd_document_in(db, upd_document_id).await?;

    let totals = summarize(&items);
    if totals.ignored_count > 0 {
        tracing::warn!(
            "UPD {}: {} reception item(s) with unknown transaction type are excluded from totals",
            upd_document_id,
            totals.ignored_count
        );
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support::{memory_db, UPD_ID};
    use contracts::domain::a026_reception::calculate_total;

    #[tokio::test]
    async fn test_linked_items_total() {
        let db = memory_db().await;
        let items = list_linked_items_in(&db, Uuid::parse_str(UPD_ID).unwrap())
            .await
            .unwrap();

        assert_eq!(items.len(), 3);
        // 1200 + 2 * 2000 - 1 * 900
        assert_eq!(calculate_total(&items), 4300.0);
    }
}
