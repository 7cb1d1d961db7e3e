use axum::{routing::get, Router};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // A025 УПД (только чтение)
        // ========================================
        .route(
            "/api/a025/upd-document/:id",
            get(handlers::a025_upd_document::get_by_id),
        )
        .route(
            "/api/a025/upd-document/:id/reception-items",
            get(handlers::a025_upd_document::get_reception_items),
        )
}
