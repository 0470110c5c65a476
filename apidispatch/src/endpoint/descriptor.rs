use serde_json::Value;
use url::Url;

use crate::Error;

use super::{Encoding, Endpoint, Headers, Method, Parameters};

/// A plain endpoint value, assembled with builder methods.
///
/// ```
/// use apidispatch::{EndpointDescriptor, Method};
///
/// let endpoint = EndpointDescriptor::new(Method::Get, "api.coingecko.com", "/api/v3/coins/markets")
///     .with_header("accept", "application/json")
///     .with_parameter("vs_currency", "usd")
///     .with_parameter("per_page", 10);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EndpointDescriptor {
    pub method: Method,
    pub scheme: String,
    pub host: String,
    pub path: String,
    pub headers: Option<Headers>,
    pub parameters: Option<Parameters>,
    pub encoding: Encoding,
}

impl EndpointDescriptor {
    /// Creates an `https` endpoint with no headers or parameters.
    pub fn new(method: Method, host: &str, path: &str) -> Self {
        Self {
            method,
            scheme: "https".to_string(),
            host: host.to_string(),
            path: path.to_string(),
            headers: None,
            parameters: None,
            encoding: Encoding::Query,
        }
    }

    /// Splits an absolute URL into scheme, host (with port) and path. Any
    /// query pairs become string parameters in their original order.
    pub fn parse(method: Method, url: &str) -> Result<Self, Error> {
        let url = Url::parse(url).map_err(|e| {
            tracing::error!("Invalid endpoint URL {}: {}", url, e);
            Error::InvalidUrl
        })?;
        let host = match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{}:{}", host, port),
            (Some(host), None) => host.to_string(),
            (None, _) => return Err(Error::InvalidUrl),
        };
        let mut endpoint = Self::new(method, &host, url.path()).with_scheme(url.scheme());
        for (key, value) in url.query_pairs() {
            endpoint = endpoint.with_parameter(&key, value.into_owned());
        }
        Ok(endpoint)
    }

    pub fn with_scheme(mut self, scheme: &str) -> Self {
        self.scheme = scheme.to_string();
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.get_or_insert_with(Headers::new).push(name, value);
        self
    }

    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Sets a parameter, replacing the value of an existing key in place.
    pub fn with_parameter(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.parameters
            .get_or_insert_with(Parameters::new)
            .insert(key, value);
        self
    }

    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = Some(parameters);
        self
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }
}

impl Endpoint for EndpointDescriptor {
    fn method(&self) -> Method {
        self.method
    }
    fn scheme(&self) -> String {
        self.scheme.clone()
    }
    fn host(&self) -> String {
        self.host.clone()
    }
    fn path(&self) -> String {
        self.path.clone()
    }
    fn headers(&self) -> Option<Headers> {
        self.headers.clone()
    }
    fn parameters(&self) -> Option<Parameters> {
        self.parameters.clone()
    }
    fn encoding(&self) -> Encoding {
        self.encoding
    }
}
