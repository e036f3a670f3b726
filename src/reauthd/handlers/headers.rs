use axum::{
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::IntoResponse,
};
use std::fmt::Write;
use tracing::instrument;

#[utoipa::path(
    get,
    path= "/headers",
    responses (
        (status = 200, description = "Inbound request headers, one per line"),
    ),
    tag = "headers",
)]
// axum handler for headers
#[instrument(skip(headers))]
pub async fn headers(headers: HeaderMap) -> impl IntoResponse {
    let body = headers
        .iter()
        .fold(String::new(), |mut acc, (name, value)| {
            // never echo credentials back to the client
            let value = if *name == AUTHORIZATION {
                "<redacted>"
            } else {
                value.to_str().unwrap_or_default()
            };

            if writeln!(acc, "{name}: {value}").is_err() {
                return acc;
            }
            acc
        });

    (StatusCode::OK, body)
}

#[cfg(test)]
mod tests {
    use super::headers;
    use anyhow::Result;
    use axum::{
        body::to_bytes,
        http::{header::AUTHORIZATION, HeaderMap, HeaderValue, StatusCode},
        response::IntoResponse,
    };

    #[tokio::test]
    async fn headers_returns_lines() -> Result<()> {
        let mut header_map = HeaderMap::new();
        header_map.insert("x-one", HeaderValue::from_static("one"));
        header_map.insert("x-two", HeaderValue::from_static("two"));

        let response = headers(header_map).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await?;
        let body_text = String::from_utf8(body.to_vec())?;

        assert!(body_text.contains("x-one: one"));
        assert!(body_text.contains("x-two: two"));
        Ok(())
    }

    #[tokio::test]
    async fn headers_redacts_authorization() -> Result<()> {
        let mut header_map = HeaderMap::new();
        header_map.insert(AUTHORIZATION, HeaderValue::from_static("Basic Ym9iOnB3"));

        let response = headers(header_map).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await?;
        let body_text = String::from_utf8(body.to_vec())?;

        assert!(body_text.contains("authorization: <redacted>"));
        assert!(!body_text.contains("Ym9iOnB3"));
        Ok(())
    }

    #[tokio::test]
    async fn headers_empty_returns_blank_body() -> Result<()> {
        let response = headers(HeaderMap::new()).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await?;
        let body_text = String::from_utf8(body.to_vec())?;

        assert!(body_text.is_empty());
        Ok(())
    }
}
