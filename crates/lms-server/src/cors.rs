use http::header::HeaderName;
use http::{HeaderValue, Method};
use lms_config::{AnyOrArray, CorsConfig};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Build a Tower CORS layer from configuration
///
/// # Errors
///
/// Returns an error naming the first origin, method, or header that is not
/// a valid HTTP value
pub fn cors_layer(config: &CorsConfig) -> anyhow::Result<CorsLayer> {
    let mut layer = CorsLayer::new();

    // Wildcards cannot be combined with credentials; mirror the request instead
    layer = match &config.origins {
        AnyOrArray::Any if config.credentials => {
            anyhow::bail!("CORS credentials require an explicit origins list")
        }
        AnyOrArray::Any => layer.allow_origin(AllowOrigin::any()),
        AnyOrArray::List(origins) => layer.allow_origin(parse_all::<HeaderValue>("origin", origins)?),
    };

    layer = match &config.methods {
        AnyOrArray::Any if config.credentials => layer.allow_methods(AllowMethods::mirror_request()),
        AnyOrArray::Any => layer.allow_methods(AllowMethods::any()),
        AnyOrArray::List(methods) => layer.allow_methods(parse_all::<Method>("method", methods)?),
    };

    layer = match &config.headers {
        AnyOrArray::Any if config.credentials => layer.allow_headers(AllowHeaders::mirror_request()),
        AnyOrArray::Any => layer.allow_headers(AllowHeaders::any()),
        AnyOrArray::List(headers) => layer.allow_headers(parse_all::<HeaderName>("header", headers)?),
    };

    if !config.expose_headers.is_empty() {
        layer = layer.expose_headers(parse_all::<HeaderName>("exposed header", &config.expose_headers)?);
    }

    if config.credentials {
        layer = layer.allow_credentials(true);
    }

    if let Some(duration) = config.max_age_duration() {
        layer = layer.max_age(duration);
    }

    Ok(layer)
}

fn parse_all<T>(what: &str, values: &[String]) -> anyhow::Result<Vec<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    values
        .iter()
        .map(|value| {
            value
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid CORS {what} `{value}`: {e}"))
        })
        .collect()
}
