use anyhow::Result;
use contracts::domain::a026_reception::ReceptionItemDto;
use sea_orm::{ConnectionTrait, DbBackend, QueryResult, Statement};
use uuid::Uuid;

/// Строки приемок, привязанные к УПД.
/// Подразделение берётся из шапки приемки.
const LINKED_ITEMS_SQL: &str = "SELECT i.id, i.reception_id, r.reception_no AS reception_number, \
     i.position_number, i.work_group, i.item_description, i.service_description, \
     i.inventory_number, s.description AS subdivision_name, \
     i.quantity, i.price, i.transaction_type \
     FROM a026_reception_item i \
     JOIN a026_reception r ON r.id = i.reception_id AND r.is_deleted = 0 \
     LEFT JOIN a027_subdivision s ON s.id = r.subdivision_id AND s.is_deleted = 0 \
     WHERE i.upd_document_id = ? AND i.is_deleted = 0 \
     ORDER BY r.reception_date, r.reception_no, i.position_number, i.rowid";

fn row_to_item(row: &QueryResult) -> Result<ReceptionItemDto> {
    let position_number: i64 = row.try_get("", "position_number")?;
    Ok(ReceptionItemDto {
        id: row.try_get("", "id")?,
        reception_id: row.try_get("", "reception_id")?,
        reception_number: row.try_get("", "reception_number")?,
        position_number: i32::try_from(position_number)?,
        work_group: row.try_get("", "work_group")?,
        item_description: row.try_get("", "item_description")?,
        service_description: row.try_get("", "service_description")?,
        inventory_number: row.try_get("", "inventory_number")?,
        subdivision_name: row.try_get("", "subdivision_name")?,
        quantity: row.try_get("", "quantity")?,
        price: row.try_get("", "price")?,
        transaction_type: row.try_get("", "transaction_type")?,
    })
}

pub async fn list_by_upd_document_in<C: ConnectionTrait>(
    db: &C,
    upd_document_id: Uuid,
) -> Result<Vec<ReceptionItemDto>> {
    let rows = db
        .query_all(Statement::from_sql_and_values(
            DbBackend::Sqlite,
            LINKED_ITEMS_SQL,
            [upd_document_id.to_string().into()],
        ))
        .await?;

    rows.iter().map(row_to_item).collect()
}
