use std::{fmt, net::Ipv6Addr};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    error::SubmitError,
    utils::{DEFAULT_HOST, DEFAULT_PORT, EVALUATE_PATH},
};

/// Address of the evaluation API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerEndpoint {
    pub host: String,
    pub port: u16,
    #[serde(default = "default_path")]
    pub path: String,
}

fn default_path() -> String {
    EVALUATE_PATH.to_string()
}

impl Default for ServerEndpoint {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

impl ServerEndpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            path: default_path(),
        }
    }

    pub fn url(&self) -> Result<Url, SubmitError> {
        let url = self.to_string();
        Url::parse(&url).map_err(|source| SubmitError::InvalidUrl { url, source })
    }
}

impl fmt::Display for ServerEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slash = if self.path.starts_with('/') { "" } else { "/" };
        if self.host.parse::<Ipv6Addr>().is_ok() {
            write!(f, "http://[{}]:{}{}{}", self.host, self.port, slash, self.path)
        } else {
            write!(f, "http://{}:{}{}{}", self.host, self.port, slash, self.path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_is_local_evaluate() {
        let endpoint = ServerEndpoint::default();
        assert_eq!(
            endpoint.to_string(),
            "http://localhost:8080/api/v1/evaluate"
        );
        assert_eq!(
            endpoint.url().unwrap().as_str(),
            "http://localhost:8080/api/v1/evaluate"
        );
    }

    #[test]
    fn custom_host_and_port() {
        let endpoint = ServerEndpoint::new("10.0.0.5", 9090);
        assert_eq!(
            endpoint.url().unwrap().as_str(),
            "http://10.0.0.5:9090/api/v1/evaluate"
        );
    }

    #[test]
    fn ipv6_host_is_bracketed() {
        let endpoint = ServerEndpoint::new("::1", 8080);
        assert_eq!(
            endpoint.url().unwrap().as_str(),
            "http://[::1]:8080/api/v1/evaluate"
        );
    }

    #[test]
    fn path_without_leading_slash() {
        let endpoint = ServerEndpoint {
            path: "evaluate".to_string(),
            ..ServerEndpoint::new("example.org", 8000)
        };
        assert_eq!(endpoint.to_string(), "http://example.org:8000/evaluate");
    }

    #[test]
    fn path_defaults_when_deserialized() {
        let endpoint: ServerEndpoint =
            serde_json::from_str(r#"{"host":"127.0.0.1","port":3000}"#).unwrap();
        assert_eq!(endpoint.path, EVALUATE_PATH);
    }

    #[test]
    fn bad_host_is_invalid_url() {
        let endpoint = ServerEndpoint::new("not a host", 8080);
        assert!(matches!(
            endpoint.url(),
            Err(SubmitError::InvalidUrl { .. })
        ));
    }
}
