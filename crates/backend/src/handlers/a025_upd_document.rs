use axum::{extract::Path, Json};
use contracts::domain::a025_upd_document::UpdDocumentDetailDto;
use contracts::domain::a026_reception::ReceptionItemDto;
use uuid::Uuid;

use crate::domain::{a025_upd_document, a026_reception};

/// GET /api/a025/upd-document/:id
pub async fn get_by_id(
    Path(id): Path<String>,
) -> Result<Json<UpdDocumentDetailDto>, axum::http::StatusCode> {
    let uuid = Uuid::parse_str(&id).map_err(|_| axum::http::StatusCode::BAD_REQUEST)?;
    match a025_upd_document::service::get_detail(uuid).await {
        Ok(Some(doc)) => Ok(Json(doc)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to get UPD document {}: {}", id, e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/a025/upd-document/:id/reception-items
pub async fn get_reception_items(
    Path(id): Path<String>,
) -> Result<Json<Vec<ReceptionItemDto>>, axum::http::StatusCode> {
    let uuid = Uuid::parse_str(&id).map_err(|_| axum::http::StatusCode::BAD_REQUEST)?;
    match a026_reception::service::list_linked_items(uuid).await {
        Ok(items) => Ok(Json(items)),
        Err(e) => {
            tracing::error!("Failed to list reception items for UPD {}: {}", id, e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
