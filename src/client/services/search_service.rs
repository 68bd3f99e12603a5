//! HTTP client for the two backend calls the flow sequences: image upload
//! and product search.

use anyhow::{anyhow, Context};
use reqwest::multipart;

use crate::client::config::ClientConfig;
use crate::client::models::api::{
    MarketplaceResults, ProductInfo, SearchRequest, SearchResponse, UploadResponse,
};
use crate::client::services::image_intake::ImagePayload;

pub struct SearchService {
    http: reqwest::Client,
    base_url: String,
}

impl SearchService {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_base_url(config.api_base_url.clone())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Sends the image as multipart field `image` and returns the
    /// server-assigned filename.
    ///
    /// Error statuses are not short-circuited: the backend returns 4xx/5xx
    /// with a JSON body whose `error` field carries the message to surface.
    pub async fn upload_image(&self, payload: ImagePayload) -> anyhow::Result<String> {
        let part = multipart::Part::bytes(payload.bytes)
            .file_name(payload.file_name.clone())
            .mime_str(&payload.mime)
            .context("invalid image MIME type")?;
        let form = multipart::Form::new().part("image", part);

        log::info!(
            "uploading {} to {}/api/upload",
            payload.file_name,
            self.base_url
        );
        let response = self
            .http
            .post(format!("{}/api/upload", self.base_url))
            .multipart(form)
            .send()
            .await
            .context("upload request failed")?;
        let body: UploadResponse = response
            .json()
            .await
            .context("invalid upload response")?;

        if body.success {
            body.filename
                .ok_or_else(|| anyhow!("upload succeeded without a filename"))
        } else {
            Err(anyhow!(body
                .error
                .unwrap_or_else(|| "Upload failed".to_string())))
        }
    }

    /// Asks the backend to analyze the uploaded image and returns the
    /// marketplace result set and product metadata. A successful response
    /// without results normalizes to an empty set.
    pub async fn search_products(
        &self,
        filename: &str,
    ) -> anyhow::Result<(MarketplaceResults, Option<ProductInfo>)> {
        log::info!("searching products for {}", filename);
        let response = self
            .http
            .post(format!("{}/api/search", self.base_url))
            .json(&SearchRequest {
                filename: filename.to_string(),
            })
            .send()
            .await
            .context("search request failed")?;
        let body: SearchResponse = response
            .json()
            .await
            .context("invalid search response")?;

        if body.success {
            Ok((
                body.marketplace_results.unwrap_or_default(),
                body.product_info,
            ))
        } else {
            Err(anyhow!(body
                .error
                .unwrap_or_else(|| "Search failed".to_string())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Multipart;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn payload() -> ImagePayload {
        ImagePayload {
            file_name: "shoe.jpg".to_string(),
            mime: "image/jpeg".to_string(),
            bytes: vec![0xff, 0xd8, 0xff],
        }
    }

    async fn echo_upload(mut multipart: Multipart) -> Json<Value> {
        // Mirrors the backend contract: the image arrives as field `image`.
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some("image") => {
                let filename = field.file_name().unwrap_or("unnamed").to_string();
                Json(json!({ "success": true, "filename": filename }))
            }
            _ => Json(json!({ "success": false, "error": "No image file provided" })),
        }
    }

    #[tokio::test]
    async fn upload_sends_image_field_and_returns_filename() {
        let base = serve(Router::new().route("/api/upload", post(echo_upload))).await;
        let service = SearchService::with_base_url(base);

        let filename = service.upload_image(payload()).await.unwrap();
        assert_eq!(filename, "shoe.jpg");
    }

    #[tokio::test]
    async fn upload_surfaces_server_reported_error() {
        let base = serve(Router::new().route(
            "/api/upload",
            post(|| async { Json(json!({ "success": false, "error": "too large" })) }),
        ))
        .await;
        let service = SearchService::with_base_url(base);

        let err = service.upload_image(payload()).await.unwrap_err();
        assert_eq!(err.to_string(), "too large");
    }

    #[tokio::test]
    async fn upload_reads_error_body_on_http_error_status() {
        // The backend answers 413 with a JSON error body and no `success`.
        let base = serve(Router::new().route(
            "/api/upload",
            post(|| async {
                (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    Json(json!({ "error": "File too large. Maximum size is 16MB." })),
                )
            }),
        ))
        .await;
        let service = SearchService::with_base_url(base);

        let err = service.upload_image(payload()).await.unwrap_err();
        assert_eq!(err.to_string(), "File too large. Maximum size is 16MB.");
    }

    #[tokio::test]
    async fn upload_failure_without_message_gets_fallback() {
        let base = serve(Router::new().route(
            "/api/upload",
            post(|| async { Json(json!({ "success": false })) }),
        ))
        .await;
        let service = SearchService::with_base_url(base);

        let err = service.upload_image(payload()).await.unwrap_err();
        assert_eq!(err.to_string(), "Upload failed");
    }

    #[tokio::test]
    async fn search_returns_results_and_product_info() {
        let base = serve(Router::new().route(
            "/api/search",
            post(|Json(req): Json<Value>| async move {
                assert_eq!(req["filename"], "abc.jpg");
                Json(json!({
                    "success": true,
                    "marketplace_results": {
                        "marketplace_searches": [
                            {"id": 1, "name": "X", "estimated_results": 50, "search_url": "https://x"}
                        ]
                    },
                    "product_info": {"product_name": "Shoe", "product_type": "Footwear", "brand": "Acme"}
                }))
            }),
        ))
        .await;
        let service = SearchService::with_base_url(base);

        let (results, product_info) = service.search_products("abc.jpg").await.unwrap();
        assert_eq!(results.marketplace_searches.len(), 1);
        assert_eq!(results.marketplace_searches[0].name, "X");
        assert_eq!(product_info.unwrap().brand, "Acme");
    }

    #[tokio::test]
    async fn search_without_results_normalizes_to_empty_set() {
        let base = serve(Router::new().route(
            "/api/search",
            post(|| async { Json(json!({ "success": true })) }),
        ))
        .await;
        let service = SearchService::with_base_url(base);

        let (results, product_info) = service.search_products("abc.jpg").await.unwrap();
        assert!(results.marketplace_searches.is_empty());
        assert!(product_info.is_none());
    }

    #[tokio::test]
    async fn search_surfaces_server_reported_error() {
        let base = serve(Router::new().route(
            "/api/search",
            post(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "File not found" })),
                )
            }),
        ))
        .await;
        let service = SearchService::with_base_url(base);

        let err = service.search_products("gone.jpg").await.unwrap_err();
        assert_eq!(err.to_string(), "File not found");
    }

    #[tokio::test]
    async fn network_failure_is_reported_as_request_failure() {
        // Nothing listens here; the request itself must fail.
        let service = SearchService::with_base_url("http://127.0.0.1:1");

        let err = service.upload_image(payload()).await.unwrap_err();
        assert!(err.to_string().contains("upload request failed"));
    }
}
