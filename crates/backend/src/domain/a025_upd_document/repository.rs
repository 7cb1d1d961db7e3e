use anyhow::Result;
use chrono::Utc;
use contracts::domain::a025_upd_document::{
    CounterpartyRef, SubdivisionRef, UpdDocument, UpdDocumentId,
};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbBackend, EntityTrait, QueryFilter, Statement};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a025_upd_document")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub document_no: String,
    pub document_date: String,
    pub counterparty_id: String,
    pub subdivision_id: Option<String>,
    pub total_income: Option<f64>,
    pub total_expense: Option<f64>,
    pub is_deleted: bool,
    pub is_posted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for UpdDocument {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            is_posted: m.is_posted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        UpdDocument {
            base: BaseAggregate::with_metadata(
                UpdDocumentId::new(uuid),
                m.code,
                m.description,
                m.comment,
                metadata,
            ),
            document_no: m.document_no,
            document_date: m.document_date,
            counterparty_id: m.counterparty_id,
            subdivision_id: m.subdivision_id,
            total_income: m.total_income,
            total_expense: m.total_expense,
        }
    }
}

/// Документ по ID; помеченные на удаление не возвращаются
pub async fn get_by_id_in<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<Option<UpdDocument>> {
    let model = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(db)
        .await?;
    Ok(model.map(|m| m.into()))
}

pub async fn get_counterparty_ref_in<C: ConnectionTrait>(
    db: &C,
    counterparty_id: &str,
) -> Result<Option<CounterpartyRef>> {
    let stmt = Statement::from_sql_and_values(
        DbBackend::Sqlite,
        "SELECT id, description, inn FROM a003_counterparty WHERE id = ? AND is_deleted = 0",
        [counterparty_id.into()],
    );
    let Some(row) = db.query_one(stmt).await? else {
        return Ok(None);
    };
    Ok(Some(CounterpartyRef {
        id: row.try_get("", "id")?,
        name: row.try_get("", "description")?,
        inn: row.try_get("", "inn")?,
    }))
}

pub async fn get_subdivision_ref_in<C: ConnectionTrait>(
    db: &C,
    subdivision_id: &str,
) -> Result<Option<SubdivisionRef>> {
    let stmt = Statement::from_sql_and_values(
        DbBackend::Sqlite,
        "SELECT id, description FROM a027_subdivision WHERE id = ? AND is_deleted = 0",
        [subdivision_id.into()],
    );
    let Some(row) = db.query_one(stmt).await? else {
        return Ok(None);
    };
    Ok(Some(SubdivisionRef {
        id: row.try_get("", "id")?,
        name: row.try_get("", "description")?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support::{
        memory_db, DELETED_UPD_ID, UPD_ID, UPD_WITHOUT_REFS_ID,
    };

    #[tokio::test]
    async fn test_get_by_id_reads_document() {
        let db = memory_db().await;
        let doc = get_by_id_in(&db, Uuid::parse_str(UPD_ID).unwrap())
            .await
            .unwrap()
            .expect("document");

        assert_eq!(doc.to_string_id(), UPD_ID);
        assert_eq!(doc.document_no, "УПД-17");
        assert_eq!(doc.document_date, "2024-03-05");
        assert_eq!(doc.counterparty_id, "cp-1");
        assert_eq!(doc.subdivision_id.as_deref(), Some("sd-1"));
        assert_eq!(doc.total_income, Some(5200.0));
        assert_eq!(doc.total_expense, Some(900.0));
        assert_eq!(doc.base.metadata.version, 0);
        assert!(!doc.base.metadata.is_deleted);
    }

    #[tokio::test]
    async fn test_get_by_id_skips_deleted() {
        let db = memory_db().await;
        let doc = get_by_id_in(&db, Uuid::parse_str(DELETED_UPD_ID).unwrap())
            .await
            .unwrap();
        assert!(doc.is_none());
    }

    #[tokio::test]
    async fn test_get_by_id_unknown() {
        let db = memory_db().await;
        let doc = get_by_id_in(&db, Uuid::new_v4()).await.unwrap();
        assert!(doc.is_none());
    }

    #[tokio::test]
    async fn test_document_without_refs() {
        let db = memory_db().await;
        let doc = get_by_id_in(&db, Uuid::parse_str(UPD_WITHOUT_REFS_ID).unwrap())
            .await
            .unwrap()
            .expect("document");
        assert_eq!(doc.subdivision_id, None);
        assert_eq!(doc.total_income, None);
        assert!(get_counterparty_ref_in(&db, &doc.counterparty_id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_counterparty_and_subdivision_refs() {
        let db = memory_db().await;

        let counterparty = get_counterparty_ref_in(&db, "cp-1").await.unwrap().unwrap();
        assert_eq!(counterparty.name, "ООО «Электроремонт»");
        assert_eq!(counterparty.inn.as_deref(), Some("7701234567"));

        let subdivision = get_subdivision_ref_in(&db, "sd-1").await.unwrap().unwrap();
        assert_eq!(subdivision.name, "Цех №3");
    }
}
