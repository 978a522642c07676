use std::time::Duration;

use serde::Deserialize;

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    /// Origins allowed to call the API; credentials need an explicit list
    #[serde(default)]
    pub origins: AnyOrArray,
    #[serde(default = "default_methods")]
    pub methods: AnyOrArray,
    /// Request headers the frontend may send
    #[serde(default)]
    pub headers: AnyOrArray,
    /// Response headers readable from frontend scripts
    #[serde(default)]
    pub expose_headers: Vec<String>,
    /// Send `access-control-allow-credentials: true`
    #[serde(default)]
    pub credentials: bool,
    /// Preflight cache lifetime in seconds
    #[serde(default)]
    pub max_age: Option<u64>,
}

/// `"*"` or an explicit list; a `"*"` anywhere widens the list to `Any`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawAnyOrArray")]
pub enum AnyOrArray {
    #[default]
    Any,
    List(Vec<String>),
}

impl AnyOrArray {
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

/// Shapes accepted on the wire
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAnyOrArray {
    One(String),
    Many(Vec<String>),
}

impl From<RawAnyOrArray> for AnyOrArray {
    fn from(raw: RawAnyOrArray) -> Self {
        let values = match raw {
            RawAnyOrArray::One(value) => vec![value],
            RawAnyOrArray::Many(values) => values,
        };

        if values.iter().any(|value| value == "*") {
            Self::Any
        } else {
            Self::List(values)
        }
    }
}

impl CorsConfig {
    /// Preflight cache lifetime, if configured
    pub fn max_age_duration(&self) -> Option<Duration> {
        self.max_age.map(Duration::from_secs)
    }
}

/// Methods a browser frontend needs for a JSON API
fn default_methods() -> AnyOrArray {
    AnyOrArray::List(
        ["GET", "HEAD", "PUT", "PATCH", "POST", "DELETE"]
            .into_iter()
            .map(str::to_owned)
            .collect(),
    )
}
