//! Embedded frontend assets.
//!
//! In release mode the files under public/ are embedded into the binary
//! at compile time; in debug mode rust-embed reads them from disk.

use axum::{
    body::Body,
    http::{StatusCode, Uri, header},
    response::Response,
};
use rust_embed::RustEmbed;

/// Embedded frontend assets (HTML, CSS, JS)
#[derive(RustEmbed)]
#[folder = "public/"]
#[include = "*.html"]
#[include = "*.css"]
#[include = "*.js"]
struct FrontendAssets;

/// Serve embedded frontend assets with fallback routing.
///
/// Registered as the router fallback, so it only sees paths no API route
/// matched. Exact file matches are served with their own content type;
/// everything else falls back to index.html with status 200.
pub async fn serve_frontend(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    // Root path → index.html
    let asset_path = if path.is_empty() { "index.html" } else { path };

    match FrontendAssets::get(asset_path) {
        Some(content) => {
            let mime = mime_guess::from_path(asset_path).first_or_octet_stream();

            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, mime.as_ref())
                .header(header::CACHE_CONTROL, "public, max-age=31536000")
                .body(Body::from(content.data))
                .unwrap()
        }
        // Fallback document for unknown paths
        None => match FrontendAssets::get("index.html") {
            Some(index) => Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, "text/html")
                .header(header::CACHE_CONTROL, "no-cache")
                .body(Body::from(index.data))
                .unwrap(),
            None => Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .body(Body::from("Frontend assets not found"))
                .unwrap(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn root_serves_index_html() {
        let uri = "/".parse().unwrap();
        let response = serve_frontend(uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn exact_asset_match_gets_own_content_type() {
        let uri = "/style.css".parse().unwrap();
        let response = serve_frontend(uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/css"));
    }

    #[tokio::test]
    async fn unknown_path_falls_back_to_index() {
        let uri = "/no/such/page".parse().unwrap();
        let response = serve_frontend(uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }
}
