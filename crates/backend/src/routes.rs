use axum::{middleware, routing::get, Router};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

use crate::system::middleware::request_logger::request_logger;

/// Роутер статического хоста SPA
///
/// Любой путь без файла в dist отдаёт index.html, чтобы прямые ссылки
/// (/inventory, /pos, ...) загружали приложение, а маршрут разбирал фронтенд.
pub fn build_router(dist_dir: &Path) -> Router {
    let spa = ServeDir::new(dist_dir).fallback(ServeFile::new(dist_dir.join("index.html")));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .fallback_service(spa)
        .layer(middleware::from_fn(request_logger))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn get_text(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn dist() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>app</html>").unwrap();
        std::fs::write(dir.path().join("styles.css"), "body {}").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_health() {
        let dir = dist();
        let (status, body) = get_text(build_router(dir.path()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_static_file() {
        let dir = dist();
        let (status, body) = get_text(build_router(dir.path()), "/styles.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body {}");
    }

    #[tokio::test]
    async fn test_deep_link_falls_back_to_index() {
        let dir = dist();
        for uri in ["/inventory", "/pos", "/settings", "/reports"] {
            let (status, body) = get_text(build_router(dir.path()), uri).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert_eq!(body, "<html>app</html>");
        }
    }

    #[tokio::test]
    async fn test_missing_dist_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let (status, _) = get_text(build_router(&dir.path().join("absent")), "/pos").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
