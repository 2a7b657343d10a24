//! Client for the metadata service's `GET /api/info` endpoint.

use crate::api::InfoSource;
use crate::lookup::{LookupError, LookupRequest, LookupResult};
use anyhow::Context;
use std::sync::Arc;

#[derive(Debug)]
struct Inner {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Clone)]
pub struct MetadataClient {
    inner: Arc<Inner>,
}

impl MetadataClient {
    const USER_AGENT: &'static str = concat!("ytscraper/", env!("CARGO_PKG_VERSION"));

    /// No local timeout: a hung request is bounded only by the transport.
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(Self::USER_AGENT)
            .build()
            .context("build reqwest client")?;

        Ok(Self {
            inner: Arc::new(Inner {
                http,
                base_url: base_url.trim().trim_end_matches('/').to_string(),
            }),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub fn info_url(&self, request: &LookupRequest) -> String {
        format!("{}/api/info?{}", self.inner.base_url, request.query_string())
    }

    pub async fn lookup(&self, request: &LookupRequest) -> Result<LookupResult, LookupError> {
        let url = self.info_url(request);
        tracing::debug!(%url, intent = %request.intent, "GET /api/info");

        let response = self.inner.http.get(&url).send().await.map_err(|e| {
            tracing::warn!(error = %e, "metadata service unreachable");
            LookupError::Transport {
                detail: e.to_string(),
            }
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            tracing::warn!(error = %e, %status, "response body interrupted");
            LookupError::Transport {
                detail: e.to_string(),
            }
        })?;

        if !status.is_success() {
            let err = LookupError::from_failure_body(status.as_u16(), &body);
            tracing::info!(%status, message = %err, "metadata service refused lookup");
            return Err(err);
        }

        parse_result(&body)
    }
}

impl InfoSource for MetadataClient {
    async fn fetch(&self, request: &LookupRequest) -> Result<LookupResult, LookupError> {
        self.lookup(request).await
    }
}

/// Decode a 2xx body. Anything without a known `type` is malformed.
pub fn parse_result(body: &[u8]) -> Result<LookupResult, LookupError> {
    serde_json::from_slice::<LookupResult>(body).map_err(|e| {
        tracing::warn!(error = %e, "unexpected success payload");
        LookupError::Malformed {
            detail: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::{Intent, Metric, Resolution};
    use axum::{Json, Router, extract::Query, http::StatusCode, routing::get};
    use serde_json::{Value, json};
    use std::collections::HashMap;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    /// Echoes the received query back inside a video payload.
    async fn echo(Query(q): Query<HashMap<String, String>>) -> Json<Value> {
        Json(json!({
            "type": "video",
            "title": q.get("url"),
            "uploader": q.get("type"),
            "views": q.get("resolution"),
        }))
    }

    #[tokio::test]
    async fn test_query_reaches_service_intact() {
        let base = serve(Router::new().route("/api/info", get(echo))).await;
        let client = MetadataClient::new(&format!("{base}/")).unwrap();

        let url = "https://youtube.com/watch?v=abc&list=xyz#t=3";
        let req = LookupRequest::new(url, Intent::DownloadLookup)
            .with_resolution(Some(Resolution::P1080));
        let LookupResult::Video(v) = client.lookup(&req).await.unwrap() else {
            panic!("expected video");
        };
        assert_eq!(v.title.as_deref(), Some(url));
        assert_eq!(v.uploader.as_deref(), Some("downloader"));
        assert_eq!(v.views, Some(Metric::Text("1080".into())));
    }

    #[tokio::test]
    async fn test_success_payload() {
        let router = Router::new().route(
            "/api/info",
            get(|| async {
                Json(json!({"type": "video", "title": "T", "uploader": "U", "views": "1M"}))
            }),
        );
        let client = MetadataClient::new(&serve(router).await).unwrap();
        let req = LookupRequest::new("https://youtube.com/watch?v=abc", Intent::VideoLookup);
        let result = client.lookup(&req).await.unwrap();
        assert!(matches!(result, LookupResult::Video(ref v) if v.title.as_deref() == Some("T")));
    }

    #[tokio::test]
    async fn test_service_error_message() {
        let router = Router::new().route(
            "/api/info",
            get(|| async { (StatusCode::NOT_FOUND, Json(json!({"error": "private video"}))) }),
        );
        let client = MetadataClient::new(&serve(router).await).unwrap();
        let req = LookupRequest::new("https://youtube.com/watch?v=abc", Intent::DownloadLookup);
        let err = client.lookup(&req).await.unwrap_err();
        assert_eq!(
            err,
            LookupError::Service {
                status: 404,
                message: "private video".into()
            }
        );
    }

    #[tokio::test]
    async fn test_service_error_without_json_body() {
        let router = Router::new().route(
            "/api/info",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let client = MetadataClient::new(&serve(router).await).unwrap();
        let err = client
            .lookup(&LookupRequest::new("x", Intent::VideoLookup))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), LookupError::SERVICE_FALLBACK);
    }

    #[tokio::test]
    async fn test_unknown_type_is_malformed() {
        let router = Router::new().route(
            "/api/info",
            get(|| async { Json(json!({"type": "playlist", "entries": []})) }),
        );
        let client = MetadataClient::new(&serve(router).await).unwrap();
        let err = client
            .lookup(&LookupRequest::new("x", Intent::VideoLookup))
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::Malformed { .. }));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = MetadataClient::new(&format!("http://{addr}")).unwrap();
        let err = client
            .lookup(&LookupRequest::new("x", Intent::ChannelLookup))
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::Transport { .. }));
    }

    #[test]
    fn test_info_url() {
        let client = MetadataClient::new("http://localhost:5000/").unwrap();
        let req = LookupRequest::new("a b", Intent::ChannelLookup);
        assert_eq!(
            client.info_url(&req),
            "http://localhost:5000/api/info?url=a%20b&type=channel"
        );
    }
}
