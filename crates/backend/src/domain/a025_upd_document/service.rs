use super::repository;
use anyhow::Result;
use contracts::domain::a025_upd_document::{CounterpartyRef, UpdDocument, UpdDocumentDetailDto};
use contracts::domain::common::AggregateRoot;
use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::shared::data::db::get_connection;

/// Карточка УПД вместе с контрагентом и подразделением
pub async fn get_detail(id: Uuid) -> Result<Option<UpdDocumentDetailDto>> {
    get_detail_in(get_connection(), id).await
}

pub async fn get_detail_in<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
) -> Result<Option<UpdDocumentDetailDto>> {
    let Some(doc) = repository::get_by_id_in(db, id).await? else {
        return Ok(None);
    };

    let counterparty = match repository::get_counterparty_ref_in(db, &doc.counterparty_id).await? {
        Some(counterparty) => counterparty,
        None => {
            tracing::warn!(
                "{} {}: counterparty {} not found",
                UpdDocument::element_name(),
                doc.document_no,
                doc.counterparty_id
            );
            CounterpartyRef {
                id: doc.counterparty_id.clone(),
                name: String::new(),
                inn: None,
            }
        }
    };

    let subdivision = match doc.subdivision_id.as_deref() {
        Some(subdivision_id) => repository::get_subdivision_ref_in(db, subdivision_id).await?,
        None => None,
    };

    Ok(Some(UpdDocumentDetailDto {
        id: doc.to_string_id(),
        document_number: doc.document_no,
        document_date: doc.document_date,
        counterparty,
        subdivision,
        total_income: doc.total_income,
        total_expense: doc.total_expense,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support::{memory_db, UPD_ID, UPD_WITHOUT_REFS_ID};

    #[tokio::test]
    async fn test_get_detail_full() {
        let db = memory_db().await;
        let dto = get_detail_in(&db, Uuid::parse_str(UPD_ID).unwrap())
            .await
            .unwrap()
            .expect("detail");

        assert_eq!(dto.id, UPD_ID);
        assert_eq!(dto.document_number, "УПД-17");
        assert_eq!(dto.counterparty.name, "ООО «Электроремонт»");
        assert_eq!(dto.counterparty_inn(), Some("7701234567"));
        assert_eq!(dto.subdivision.as_ref().map(|s| s.name.as_str()), Some("Цех №3"));
        assert_eq!(dto.total_income_or_zero(), 5200.0);
        assert_eq!(dto.total_expense_or_zero(), 900.0);
    }

    #[tokio::test]
    async fn test_get_detail_with_missing_refs() {
        let db = memory_db().await;
        let dto = get_detail_in(&db, Uuid::parse_str(UPD_WITHOUT_REFS_ID).unwrap())
            .await
            .unwrap()
            .expect("detail");

        assert_eq!(dto.counterparty.id, "cp-missing");
        assert_eq!(dto.counterparty.name, "");
        assert_eq!(dto.subdivision, None);
        assert_eq!(dto.total_income, None);
    }

    #[tokio::test]
    async fn test_get_detail_not_found() {
        let db = memory_db().await;
        assert!(get_detail_in(&db, Uuid::new_v4()).await.unwrap().is_none());
    }
}
