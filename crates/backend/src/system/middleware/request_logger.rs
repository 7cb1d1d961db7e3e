use axum::body::to_bytes;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, Uri};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;
use std::time::Duration;

use crate::shared::format::format_number;

/// Middleware для логирования HTTP запросов
///
/// Выводит в консоль:
/// - Timestamp (MSK, UTC+3)
/// - Длительность (ms)
/// - Размер ответа (форматированный)
/// - Статус код
/// - Метод и путь
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!("Failed to read response body for {}: {}", uri.path(), e);
            println!(
                "{}",
                format_line(start.elapsed(), None, parts.status, &method, &uri)
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    println!(
        "{}",
        format_line(start.elapsed(), Some(bytes.len()), parts.status, &method, &uri)
    );

    Response::from_parts(parts, Body::from(bytes))
}

/// Строка лога: голубое время для 200, коричневое для остальных
fn format_line(
    duration: Duration,
    size: Option<usize>,
    status: StatusCode,
    method: &Method,
    uri: &Uri,
) -> String {
    let timestamp = Utc::now() + chrono::Duration::hours(3);
    let color_code = if status == StatusCode::OK { "36" } else { "33" };
    let size = size.map(format_number).unwrap_or_else(|| "error".to_string());

    format!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        timestamp.format("%H:%M:%S"),
        duration.as_millis(),
        size,
        status.as_u16(),
        method,
        uri.path()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_ok() {
        let uri: Uri = "/api/a025/upd-document/1?x=1".parse().unwrap();
        let line = format_line(
            Duration::from_millis(12),
            Some(12345),
            StatusCode::OK,
            &Method::GET,
            &uri,
        );
        assert!(line.starts_with("\x1b[36m"));
        assert!(line.contains("12.345"));
        assert!(line.contains("200"));
        assert!(line.ends_with("/api/a025/upd-document/1"));
    }

    #[test]
    fn test_format_line_not_found() {
        let uri: Uri = "/api/a025/upd-document/missing".parse().unwrap();
        let line = format_line(
            Duration::from_millis(1),
            None,
            StatusCode::NOT_FOUND,
            &Method::GET,
            &uri,
        );
        assert!(line.starts_with("\x1b[33m"));
        assert!(line.contains("error"));
        assert!(line.contains("404"));
    }
}
