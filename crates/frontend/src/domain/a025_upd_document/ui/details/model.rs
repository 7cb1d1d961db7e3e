use crate::shared::api_utils::api_base;
use contracts::domain::a025_upd_document::UpdDocumentDetailDto;
use contracts::domain::a026_reception::ReceptionItemDto;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Текст ошибки для отсутствующего (или удалённого) документа
pub const DOCUMENT_NOT_FOUND: &str = "УПД не найден";

/// Документ вместе со строками приемок
pub type UpdDocumentData = (UpdDocumentDetailDto, Vec<ReceptionItemDto>);

/// 404 означает, что документа нет (или он удалён)
fn check_status(status: u16) -> Result<(), String> {
    match status {
        200 => Ok(()),
        404 => Err(DOCUMENT_NOT_FOUND.to_string()),
        status => Err(format!("Server error: {}", status)),
    }
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch: {}", e))?;

    check_status(response.status())?;

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    serde_json::from_str(&text).map_err(|e| format!("Failed to parse: {}", e))
}

pub async fn fetch_document(id: &str) -> Result<UpdDocumentDetailDto, String> {
    let url = format!("{}/api/a025/upd-document/{}", api_base(), id);
    get_json(&url).await
}

pub async fn fetch_linked_items(id: &str) -> Result<Vec<ReceptionItemDto>, String> {
    let url = format!("{}/api/a025/upd-document/{}/reception-items", api_base(), id);
    get_json(&url).await
}

/// Оба запроса параллельно; ошибка любого из них отменяет результат целиком
pub async fn fetch_all(id: &str) -> Result<UpdDocumentData, String> {
    futures::future::try_join(fetch_document(id), fetch_linked_items(id)).await
}
