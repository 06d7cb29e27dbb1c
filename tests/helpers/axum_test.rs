// ABOUTME: Minimal axum router test client built on tower's oneshot
// ABOUTME: Builds requests with JSON or form bodies and decodes buffered responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

use axum::body::{to_bytes, Body, Bytes};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tower::ServiceExt;

/// Request builder that drives a router directly, without binding a socket
pub struct AxumTestRequest {
    method: Method,
    uri: String,
    headers: Vec<(String, String)>,
    body: Body,
}

impl AxumTestRequest {
    /// Start building a GET request
    pub fn get(uri: &str) -> Self {
        Self::new(Method::GET, uri)
    }

    /// Start building a POST request
    pub fn post(uri: &str) -> Self {
        Self::new(Method::POST, uri)
    }

    fn new(method: Method, uri: &str) -> Self {
        Self {
            method,
            uri: uri.to_owned(),
            headers: Vec::new(),
            body: Body::empty(),
        }
    }

    /// Add a request header
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    /// Attach a JSON body and matching content type
    pub fn json<T: Serialize>(mut self, payload: &T) -> Self {
        self.headers
            .push((CONTENT_TYPE.to_string(), "application/json".to_owned()));
        self.body = Body::from(serde_json::to_vec(payload).unwrap());
        self
    }

    /// Attach a form encoded body and matching content type
    pub fn form<T: Serialize>(mut self, payload: &T) -> Self {
        self.headers.push((
            CONTENT_TYPE.to_string(),
            "application/x-www-form-urlencoded".to_owned(),
        ));
        self.body = Body::from(serde_urlencoded::to_string(payload).unwrap());
        self
    }

    /// Attach a raw body with an explicit content type
    pub fn body(mut self, content_type: &str, body: &str) -> Self {
        self.headers
            .push((CONTENT_TYPE.to_string(), content_type.to_owned()));
        self.body = Body::from(body.to_owned());
        self
    }

    /// Send the request through the router and buffer the response
    pub async fn send(self, router: Router) -> TestResponse {
        let mut builder = Request::builder().method(self.method).uri(self.uri);
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let request = builder.body(self.body).unwrap();

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Buffered response with decoding helpers
pub struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl TestResponse {
    /// Response status code
    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    /// A response header value, if present and valid UTF-8
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).unwrap()
    }

    /// The body as UTF-8 text
    pub fn text(&self) -> String {
        String::from_utf8(self.body.to_vec()).unwrap()
    }
}
