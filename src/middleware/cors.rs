// cors.rs
use super::{Chain, Stage};
use async_trait::async_trait;
use axum::{
    extract::Request,
    http::{
        HeaderValue,
        header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_ORIGIN},
    },
    response::Response,
};

const ALLOWED_HEADERS: &str = "Origin, X-Requested-With, Content-Type, Accept";

/// Lets browser clients on any origin read every response.
pub struct Cors;

#[async_trait]
impl Stage for Cors {
    async fn handle(&self, request: Request, next: Chain<'_>) -> Response {
        let mut response = next.run(request).await;

        let headers = response.headers_mut();
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
        headers.insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        );

        response
    }
}
