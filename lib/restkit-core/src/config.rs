//! Resource client configuration.

use std::collections::HashMap;
use std::time::Duration;

use url::Url;

use crate::request::set_header;
use crate::{ConfigError, Failure, Resource, ResourceId};

/// Identity field name used when none is configured.
pub const DEFAULT_ID_FIELD: &str = "id";

/// Configuration of a [`ResourceClient`](crate::ResourceClient).
///
/// Fixed at construction and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Prefix for every endpoint path.
    pub base_url: Url,
    /// Headers sent with every request, under per-call headers.
    pub default_headers: HashMap<String, String>,
    /// Exchange timeout handed to the transport. `None` keeps the transport default.
    pub timeout: Option<Duration>,
    /// Name of the server-assigned identity field.
    pub id_field: String,
}

impl ClientConfig {
    /// Configuration with defaults for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed or cannot be a base.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ConfigError> {
        Self::builder(base_url).build()
    }

    /// Create a new configuration builder.
    #[must_use]
    pub fn builder(base_url: impl AsRef<str>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            base_url: base_url.as_ref().to_string(),
            default_headers: HashMap::new(),
            timeout: None,
            id_field: None,
        }
    }

    /// URL of `/{collection}` or `/{collection}/{id}` under the base URL.
    ///
    /// The collection may span several segments (`users/1/todos`); the id is
    /// always exactly one percent-encoded segment.
    pub fn endpoint(&self, collection: &str, id: Option<&ResourceId>) -> Result<Url, Failure> {
        let segments = collection
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>();
        if segments.is_empty() {
            return Err(Failure::invalid_request("collection name must not be empty"));
        }
        if let Some(segment) = segments.iter().find(|segment| is_dot_segment(segment)) {
            return Err(Failure::invalid_request(format!(
                "collection path must not contain `{segment}` segments"
            )));
        }
        if let Some(id) = id
            && (id.is_empty() || is_dot_segment(id))
        {
            return Err(Failure::invalid_request(format!(
                "resource id `{id}` is not a valid path segment"
            )));
        }

        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| Failure::invalid_request("base URL cannot be a base"))?;
            path.pop_if_empty().extend(segments);
            if let Some(id) = id {
                path.push(id.as_str());
            }
        }
        Ok(url)
    }

    /// Identity of a resource under the configured identity field.
    #[must_use]
    pub fn identity(&self, resource: &Resource) -> Option<ResourceId> {
        resource.id_field(&self.id_field)
    }
}

fn is_dot_segment(segment: &str) -> bool {
    segment == "." || segment == ".."
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    base_url: String,
    default_headers: HashMap<String, String>,
    timeout: Option<Duration>,
    id_field: Option<String>,
}

impl ClientConfigBuilder {
    /// Add a header sent with every request.
    ///
    /// A later header replaces an earlier one whose name differs only in case.
    #[must_use]
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        set_header(&mut self.default_headers, name.into(), value.into());
        self
    }

    /// Set the exchange timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the identity field name (default `id`).
    #[must_use]
    pub fn id_field(mut self, field: impl Into<String>) -> Self {
        self.id_field = Some(field.into());
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or cannot be a base, or if
    /// the identity field name is empty.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let base_url = Url::parse(&self.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::CannotBeABase(self.base_url));
        }
        let id_field = self
            .id_field
            .unwrap_or_else(|| DEFAULT_ID_FIELD.to_string());
        if id_field.is_empty() {
            return Err(ConfigError::EmptyIdField);
        }
        Ok(ClientConfig {
            base_url,
            default_headers: self.default_headers,
            timeout: self.timeout,
            id_field,
        })
    }
}

/// Per-call options layered over the [`ClientConfig`].
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    /// Headers for this call; they override default headers of the same name.
    pub headers: HashMap<String, String>,
    /// Timeout for this call; overrides the configured timeout.
    pub timeout: Option<Duration>,
}

impl CallOptions {
    /// Options with no extra header and no timeout override.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header for this call, replacing one of the same name in any case.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        set_header(&mut self.headers, name.into(), value.into());
        self
    }

    /// Set the timeout for this call.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;
    use crate::FailureKind;

    fn config(base_url: &str) -> ClientConfig {
        ClientConfig::new(base_url).expect("valid config")
    }

    #[test]
    fn default_config() {
        let config = config("https://jsonplaceholder.typicode.com");
        check!(config.id_field == "id");
        check!(config.timeout.is_none());
        check!(config.default_headers.is_empty());
    }

    #[test]
    fn builder_overrides() {
        let_assert!(
            Ok(config) = ClientConfig::builder("https://api.example.com")
                .default_header("X-Client", "restkit")
                .timeout(Duration::from_secs(5))
                .id_field("uuid")
                .build()
        );

        check!(config.default_headers.get("X-Client").map(String::as_str) == Some("restkit"));
        check!(config.timeout == Some(Duration::from_secs(5)));
        check!(config.id_field == "uuid");
    }

    #[test]
    fn builder_rejects_bad_base_urls() {
        let_assert!(Err(ConfigError::InvalidUrl(_)) = ClientConfig::new("not a url"));
        let_assert!(Err(ConfigError::CannotBeABase(_)) = ClientConfig::new("mailto:someone@example.com"));
        let_assert!(
            Err(ConfigError::EmptyIdField) = ClientConfig::builder("https://api.example.com")
                .id_field("")
                .build()
        );
    }

    #[test]
    fn endpoint_shapes() {
        let config = config("https://jsonplaceholder.typicode.com");

        let_assert!(Ok(url) = config.endpoint("todos", None));
        check!(url.as_str() == "https://jsonplaceholder.typicode.com/todos");

        let_assert!(Ok(url) = config.endpoint("todos", Some(&ResourceId::from(10_u64))));
        check!(url.as_str() == "https://jsonplaceholder.typicode.com/todos/10");
    }

    #[test]
    fn endpoint_keeps_base_path() {
        for base in ["https://api.example.com/v1", "https://api.example.com/v1/"] {
            let_assert!(Ok(url) = config(base).endpoint("/users/1/todos/", None));
            check!(url.as_str() == "https://api.example.com/v1/users/1/todos");
        }
    }

    #[test]
    fn endpoint_encodes_id_as_one_segment() {
        let config = config("https://api.example.com");
        let_assert!(Ok(url) = config.endpoint("files", Some(&ResourceId::from("a/b c"))));
        check!(url.as_str() == "https://api.example.com/files/a%2Fb%20c");
    }

    #[test]
    fn endpoint_rejects_invalid_segments() {
        let config = config("https://api.example.com");
        for (collection, id) in [("", None), ("//", None), ("../admin", None), ("todos", Some(""))] {
            let id = id.map(ResourceId::from);
            let_assert!(Err(failure) = config.endpoint(collection, id.as_ref()));
            check!(failure.kind() == FailureKind::InvalidRequest);
        }
    }

    #[test]
    fn headers_differing_in_case_keep_the_last() {
        for _ in 0..20 {
            let_assert!(
                Ok(config) = ClientConfig::builder("https://api.example.com")
                    .default_header("X-A", "upper")
                    .default_header("x-a", "lower")
                    .build()
            );
            check!(config.default_headers.len() == 1);
            check!(config.default_headers.get("x-a").map(String::as_str) == Some("lower"));

            let options = CallOptions::new().header("x-b", "first").header("X-B", "second");
            check!(options.headers.len() == 1);
            check!(options.headers.get("X-B").map(String::as_str) == Some("second"));
        }
    }

    #[test]
    fn identity_reads_the_configured_field() {
        let_assert!(
            Ok(config) = ClientConfig::builder("https://api.example.com")
                .id_field("uuid")
                .build()
        );
        let serde_json::Value::Object(attributes) = serde_json::json!({"uuid": "7f3a", "id": 1}) else {
            unreachable!()
        };
        let resource = Resource::new(attributes);

        check!(config.identity(&resource) == Some(ResourceId::from("7f3a")));
        check!(resource.id() == Some(ResourceId::from(1_u64)));
    }

    #[test]
    fn call_options_builder() {
        let options = CallOptions::new()
            .header("X-Request-Id", "abc")
            .timeout(Duration::from_millis(250));
        check!(options.headers.len() == 1);
        check!(options.timeout == Some(Duration::from_millis(250)));
    }
}
