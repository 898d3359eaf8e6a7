use axum::body::{Body, HttpBody};
use axum::http::{header, Request, Response};
use axum::middleware::Next;

use crate::shared::format::format_size;

fn response_size(response: &Response<Body>) -> Option<u64> {
    response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .or_else(|| response.body().size_hint().exact())
}

/// Middleware для логирования HTTP запросов
///
/// Пишет длительность, размер, статус, метод и путь.
/// Тело ответа не буферизуется: размер берётся из Content-Length.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response<Body> {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let size = response_size(&response)
        .map(format_size)
        .unwrap_or_else(|| "-".to_string());
    let status = response.status().as_u16();
    let elapsed_ms = start.elapsed().as_millis();

    if response.status().is_success() || response.status().is_redirection() {
        tracing::info!("{:>5}ms | {:>9} | {} {:>6} {}", elapsed_ms, size, status, method, path);
    } else {
        tracing::warn!("{:>5}ms | {:>9} | {} {:>6} {}", elapsed_ms, size, status, method, path);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_logger_passes_response_through() {
        let app = Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(axum::middleware::from_fn(request_logger));

        let response = app
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(response_size(&response), Some(4));
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"pong");
    }
}
