//! HTTP response handling.
//!
//! [`Response`] is what a [`Transport`](crate::Transport) hands back: status,
//! headers and the raw body bytes, untouched.

use std::collections::HashMap;

use bytes::Bytes;

use crate::StatusClass;

/// HTTP response with status, headers, and body.
#[derive(Debug, Clone)]
pub struct Response<B = Bytes> {
    status: u16,
    headers: HashMap<String, String>,
    body: B,
}

impl<B> Response<B> {
    /// Creates a new response.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, String>, body: B) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Classification of the status code.
    #[must_use]
    pub const fn status_class(&self) -> StatusClass {
        StatusClass::of(self.status)
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name, ignoring ASCII case.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Response body.
    #[must_use]
    pub const fn body(&self) -> &B {
        &self.body
    }

    /// Consume into body.
    #[must_use]
    pub fn into_body(self) -> B {
        self.body
    }

    /// Consume into (status, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (u16, HashMap<String, String>, B) {
        (self.status, self.headers, self.body)
    }

    /// Status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.status_class(), StatusClass::Success)
    }
}

impl Response<Bytes> {
    /// Deserialize the response body as JSON.
    ///
    /// # Errors
    ///
    /// Returns a path-aware decoding error if deserialization fails.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, crate::JsonError> {
        crate::from_json(&self.body)
    }

    /// Get the response body as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_basic() {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());

        let response = Response::new(200, headers, Bytes::from(r#"{"id":1}"#));

        assert_eq!(response.status(), 200);
        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert!(response.is_success());
    }

    #[test]
    fn response_status_class() {
        let response = Response::new(301, HashMap::new(), Bytes::new());
        assert_eq!(response.status_class(), StatusClass::Redirection);

        let response = Response::new(422, HashMap::new(), Bytes::new());
        assert_eq!(response.status_class(), StatusClass::ClientError);
        assert!(!response.is_success());
    }

    #[test]
    fn response_json() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct Todo {
            id: u64,
            title: String,
        }

        let body = Bytes::from(r#"{"id":1,"title":"a"}"#);
        let response = Response::new(200, HashMap::new(), body);

        let todo: Todo = response.json().expect("deserialize");
        assert_eq!(
            todo,
            Todo {
                id: 1,
                title: "a".to_string()
            }
        );
    }

    #[test]
    fn response_text_lossy() {
        let response = Response::new(500, HashMap::new(), Bytes::from("oops"));
        assert_eq!(response.text_lossy(), "oops");
    }
}
