//! Service endpoint URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated service endpoint URL.
///
/// This type ensures the URL is absolute, uses HTTPS (or HTTP for
/// localhost), and has no trailing slash, so method URLs can be built by
/// appending `/{method}`.
///
/// # Example
///
/// ```
/// use quarry_core::Endpoint;
///
/// let entry = Endpoint::new("https://login.example.com/services/rpc/").unwrap();
/// assert_eq!(entry.method_url("login"),
///            "https://login.example.com/services/rpc/login");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Endpoint(Url);

impl Endpoint {
    /// Create a new endpoint from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::Endpoint {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the URL a given RPC method is posted to.
    pub fn method_url(&self, method: &str) -> String {
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}", base, method)
    }

    /// Returns the URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::Endpoint {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]");

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(InvalidInputError::Endpoint {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::Endpoint {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Endpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Endpoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for Endpoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Endpoint::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let endpoint = Endpoint::new("https://na1.example.com/services/rpc").unwrap();
        assert_eq!(endpoint.host(), Some("na1.example.com"));
    }

    #[test]
    fn valid_localhost_http() {
        let endpoint = Endpoint::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(endpoint.host(), Some("127.0.0.1"));
    }

    #[test]
    fn method_url_construction() {
        let endpoint = Endpoint::new("https://na1.example.com/services/rpc").unwrap();
        assert_eq!(
            endpoint.method_url("queryMore"),
            "https://na1.example.com/services/rpc/queryMore"
        );
    }

    #[test]
    fn method_url_ignores_trailing_slash() {
        let endpoint = Endpoint::new("https://na1.example.com/").unwrap();
        assert_eq!(endpoint.method_url("login"), "https://na1.example.com/login");
    }

    #[test]
    fn invalid_http_non_localhost() {
        assert!(Endpoint::new("http://login.example.com").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(Endpoint::new("/services/rpc").is_err());
    }

    #[test]
    fn deserialize_validates() {
        let ok: Result<Endpoint, _> = serde_json::from_str(r#""https://a.example.com""#);
        assert!(ok.is_ok());
        let bad: Result<Endpoint, _> = serde_json::from_str(r#""ftp://a.example.com""#);
        assert!(bad.is_err());
    }
}
