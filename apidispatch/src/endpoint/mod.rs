//! Endpoint descriptors: the immutable description of one API call.

mod descriptor;
pub use self::descriptor::EndpointDescriptor;
mod params;
pub use self::params::{Headers, Parameters};

use std::str::FromStr;

/// HTTP method of an endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "PATCH" => Ok(Method::Patch),
            "DELETE" => Ok(Method::Delete),
            "HEAD" => Ok(Method::Head),
            "OPTIONS" => Ok(Method::Options),
            _ => Err(()),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
            Method::Head => reqwest::Method::HEAD,
            Method::Options => reqwest::Method::OPTIONS,
        }
    }
}

/// Where an endpoint's parameters travel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Encoding {
    /// URL-encoded query string. This is the default.
    #[default]
    Query,
    /// A JSON object in the request body.
    JsonBody,
}

/// Shared contract for every endpoint an application can call.
///
/// Applications typically implement this on an enum with one case per
/// concrete endpoint, or use [`EndpointDescriptor`] directly. The request
/// builder only reads these accessors and never looks at the concrete type.
pub trait Endpoint {
    fn method(&self) -> Method;

    /// URL scheme. Defaults to `https`.
    fn scheme(&self) -> String {
        "https".to_string()
    }

    /// Host, optionally with a port (`api.example.com`, `127.0.0.1:8080`).
    fn host(&self) -> String;

    /// Absolute path of the resource. Must not be empty.
    fn path(&self) -> String;

    fn headers(&self) -> Option<Headers> {
        None
    }

    fn parameters(&self) -> Option<Parameters> {
        None
    }

    fn encoding(&self) -> Encoding {
        Encoding::Query
    }

    /// Returns `false` when the current case cannot produce a request.
    fn is_derivable(&self) -> bool {
        true
    }
}

impl<E: Endpoint + ?Sized> Endpoint for &E {
    fn method(&self) -> Method {
        (**self).method()
    }
    fn scheme(&self) -> String {
        (**self).scheme()
    }
    fn host(&self) -> String {
        (**self).host()
    }
    fn path(&self) -> String {
        (**self).path()
    }
    fn headers(&self) -> Option<Headers> {
        (**self).headers()
    }
    fn parameters(&self) -> Option<Parameters> {
        (**self).parameters()
    }
    fn encoding(&self) -> Encoding {
        (**self).encoding()
    }
    fn is_derivable(&self) -> bool {
        (**self).is_derivable()
    }
}
