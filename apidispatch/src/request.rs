//! Turns an [`Endpoint`] into a concrete [`TransportRequest`].

use reqwest::header::{HeaderName, HeaderValue};
use serde_json::Value;
use url::Url;

use crate::{
    endpoint::{Encoding, Endpoint, Method, Parameters},
    Error,
};

/// A fully resolved HTTP request, ready for a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

/// Builds the transport request for an endpoint. Performs no I/O.
///
/// Fails with [`Error::InvalidRequest`] when the endpoint declines to
/// produce a request or carries a header that cannot be sent, and with
/// [`Error::InvalidUrl`] when its scheme, host and path do not form an
/// absolute URL. The path is taken literally: `?` and `#` in it are
/// percent-encoded rather than starting a query or fragment.
pub fn build(endpoint: &impl Endpoint) -> Result<TransportRequest, Error> {
    if !endpoint.is_derivable() {
        tracing::error!("Endpoint produced no request");
        return Err(Error::InvalidRequest);
    }

    let mut url = base_url(&endpoint.scheme(), &endpoint.host(), &endpoint.path())?;
    let mut body = None;

    match (endpoint.parameters(), endpoint.encoding()) {
        (Some(params), Encoding::Query) if !params.is_empty() => add_to_url(&params, &mut url),
        (Some(params), Encoding::JsonBody) => {
            let bytes = serde_json::to_vec(&params).map_err(|e| {
                tracing::error!("Failed to encode JSON body: {}", e);
                Error::InvalidRequest
            })?;
            body = Some(bytes);
        }
        _ => {}
    }

    let headers = endpoint
        .headers()
        .map(|headers| headers.into_vec())
        .unwrap_or_default();
    check_headers(&headers)?;

    Ok(TransportRequest {
        method: endpoint.method(),
        url,
        headers,
        body,
    })
}

fn base_url(scheme: &str, host: &str, path: &str) -> Result<Url, Error> {
    if scheme.is_empty() || host.is_empty() || path.is_empty() {
        tracing::error!("Incomplete URL: scheme={:?} host={:?} path={:?}", scheme, host, path);
        return Err(Error::InvalidUrl);
    }
    let origin = format!("{}://{}", scheme, host);
    let mut url = Url::parse(&origin).map_err(|e| {
        tracing::error!("Invalid URL constructed from {}: {}", origin, e);
        Error::InvalidUrl
    })?;
    // Anything in the host string beyond an authority would change the target.
    let host_only = !url.cannot_be_a_base()
        && url.host_str().is_some_and(|h| !h.is_empty())
        && matches!(url.path(), "" | "/")
        && url.query().is_none()
        && url.fragment().is_none()
        && url.username().is_empty()
        && url.password().is_none();
    if !host_only {
        tracing::error!("Host is not a bare authority: {:?}", host);
        return Err(Error::InvalidUrl);
    }
    if path.starts_with('/') {
        url.set_path(path);
    } else {
        url.set_path(&format!("/{}", path));
    }
    Ok(url)
}

/// Appends the parameters as query pairs. Arrays expand to one pair per
/// element; an empty array contributes nothing.
fn add_to_url(params: &Parameters, url: &mut Url) {
    let mut encoded = Vec::new();
    for (key, value) in params.iter() {
        match value {
            Value::Array(items) => {
                for item in items {
                    encoded.push((key, query_value(item)));
                }
            }
            other => encoded.push((key, query_value(other))),
        }
    }
    if encoded.is_empty() {
        return;
    }
    let mut pairs = url.query_pairs_mut();
    for (key, value) in &encoded {
        pairs.append_pair(key, value);
    }
}

/// Rejects header names and values that cannot go on the wire.
fn check_headers(headers: &[(String, String)]) -> Result<(), Error> {
    for (name, value) in headers {
        if HeaderName::from_bytes(name.as_bytes()).is_err() {
            tracing::error!("Invalid header name: {:?}", name);
            return Err(Error::InvalidRequest);
        }
        if HeaderValue::from_str(value).is_err() {
            tracing::error!("Invalid value for header {}", name);
            return Err(Error::InvalidRequest);
        }
    }
    Ok(())
}

fn query_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::endpoint::{EndpointDescriptor, Headers};

    fn markets() -> EndpointDescriptor {
        EndpointDescriptor::new(Method::Get, "api.coingecko.com", "/api/v3/coins/markets")
    }

    #[test]
    fn query_parameters_follow_insertion_order() {
        let request = build(
            &markets()
                .with_parameter("vs_currency", "usd")
                .with_parameter("per_page", 10)
                .with_parameter("sparkline", false),
        )
        .unwrap();

        insta::assert_snapshot!(
            request.url.to_string(),
            @"https://api.coingecko.com/api/v3/coins/markets?vs_currency=usd&per_page=10&sparkline=false"
        );
        assert!(request.body.is_none());
    }

    #[test]
    fn query_values_are_url_encoded() {
        let request = build(&markets().with_parameter("q", "a b&c=d")).unwrap();
        let pairs: Vec<_> = request.url.query_pairs().into_owned().collect();
        assert_eq!(pairs, vec![("q".to_string(), "a b&c=d".to_string())]);
    }

    #[test]
    fn arrays_expand_to_repeated_pairs() {
        let request = build(
            &markets()
                .with_parameter("ids", json!(["bitcoin", "ethereum"]))
                .with_parameter("empty", Value::Null),
        )
        .unwrap();
        insta::assert_snapshot!(
            request.url.query().unwrap(),
            @"ids=bitcoin&ids=ethereum&empty="
        );
    }

    #[test]
    fn no_parameters_means_no_query_string() {
        let request = build(&markets()).unwrap();
        assert_eq!(request.url.query(), None);

        let request = build(&markets().with_parameters(Parameters::new())).unwrap();
        assert_eq!(request.url.query(), None);
    }

    #[test]
    fn json_body_encoding_moves_parameters_into_the_body() {
        let request = build(
            &EndpointDescriptor::new(Method::Post, "example.com", "/orders")
                .with_parameter("symbol", "BTC")
                .with_parameter("qty", 2)
                .with_encoding(Encoding::JsonBody),
        )
        .unwrap();

        assert_eq!(request.url.as_str(), "https://example.com/orders");
        assert_eq!(
            request.body.as_deref(),
            Some(br#"{"symbol":"BTC","qty":2}"#.as_slice())
        );
        assert!(request.headers.is_empty());
    }

    #[test]
    fn headers_are_copied_verbatim() {
        let request = build(
            &markets().with_headers(
                Headers::new()
                    .with("x-cg-demo-api-key", "k")
                    .with("Accept", "application/json"),
            ),
        )
        .unwrap();
        assert_eq!(
            request.headers,
            vec![
                ("x-cg-demo-api-key".to_string(), "k".to_string()),
                ("Accept".to_string(), "application/json".to_string()),
            ]
        );
    }

    #[test]
    fn missing_leading_slash_is_added() {
        let request =
            build(&EndpointDescriptor::new(Method::Get, "example.com", "v1/ping")).unwrap();
        assert_eq!(request.url.path(), "/v1/ping");
    }

    #[test]
    fn empty_or_malformed_parts_are_invalid_urls() {
        let cases = [
            EndpointDescriptor::new(Method::Get, "", "/x"),
            EndpointDescriptor::new(Method::Get, "example.com", ""),
            EndpointDescriptor::new(Method::Get, "exa mple.com", "/x"),
            EndpointDescriptor::new(Method::Get, "example.com:notaport", "/x"),
            EndpointDescriptor::new(Method::Get, "example.com", "/x").with_scheme(""),
        ];
        for endpoint in cases {
            assert_eq!(build(&endpoint), Err(Error::InvalidUrl), "{:?}", endpoint);
        }
    }

    #[test]
    fn host_must_be_a_bare_authority() {
        for host in [
            "example.com/evil",
            "example.com?x=",
            "example.com#frag",
            "user@example.com",
            "user:secret@example.com",
        ] {
            let endpoint = EndpointDescriptor::new(Method::Get, host, "/api/v3/ping");
            assert_eq!(build(&endpoint), Err(Error::InvalidUrl), "host {:?}", host);
        }
    }

    #[test]
    fn host_with_port_is_accepted() {
        let request =
            build(&EndpointDescriptor::new(Method::Get, "127.0.0.1:8080", "/ping")).unwrap();
        assert_eq!(request.url.as_str(), "https://127.0.0.1:8080/ping");
    }

    #[test]
    fn query_and_fragment_characters_stay_in_the_path() {
        let request = build(
            &EndpointDescriptor::new(Method::Get, "example.com", "/search?q=1#top")
                .with_parameter("k", "v"),
        )
        .unwrap();
        insta::assert_snapshot!(request.url.path(), @"/search%3Fq=1%23top");
        assert_eq!(request.url.query(), Some("k=v"));
        assert_eq!(request.url.fragment(), None);
    }

    #[test]
    fn empty_array_leaves_no_query_string() {
        let request = build(&markets().with_parameter("ids", json!([]))).unwrap();
        assert_eq!(request.url.query(), None);
        assert_eq!(
            request.url.as_str(),
            "https://api.coingecko.com/api/v3/coins/markets"
        );
    }

    #[test]
    fn unsendable_headers_are_invalid_requests() {
        let bad_name = markets().with_header("bad header", "v");
        assert_eq!(build(&bad_name), Err(Error::InvalidRequest));

        let bad_value = markets().with_header("x-note", "line\nbreak");
        assert_eq!(build(&bad_value), Err(Error::InvalidRequest));
    }

    struct Retired;

    impl Endpoint for Retired {
        fn method(&self) -> Method {
            Method::Get
        }
        fn host(&self) -> String {
            "example.com".to_string()
        }
        fn path(&self) -> String {
            "/retired".to_string()
        }
        fn is_derivable(&self) -> bool {
            false
        }
    }

    #[test]
    fn underivable_endpoint_is_an_invalid_request() {
        assert_eq!(build(&Retired), Err(Error::InvalidRequest));
    }
}
