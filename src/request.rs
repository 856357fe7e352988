//! The launch request descriptor handed over by the HTTP layer.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::parameters::ParameterValue;
use crate::util;

const DEFAULT_PROTOCOL: &str = "https";

/// An inbound LTI launch as seen after transport and body decoding.
///
/// `url` may be a full URL (`https://tool.example/launch`) or just the
/// request path (`/launch`); a path is joined onto `protocol` and `host`
/// when a host is known, anything else is signed verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaunchRequest {
    #[serde(default = "default_protocol")]
    pub protocol: String,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub body: HashMap<String, String>,
}

fn default_protocol() -> String {
    DEFAULT_PROTOCOL.to_string()
}

impl Default for LaunchRequest {
    fn default() -> Self {
        LaunchRequest {
            protocol: default_protocol(),
            host: None,
            url: None,
            method: String::new(),
            body: HashMap::new(),
        }
    }
}

impl LaunchRequest {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        LaunchRequest {
            protocol: default_protocol(),
            host: None,
            url: Some(url.into()),
            method: method.into(),
            body: HashMap::new(),
        }
    }

    /// Build a request from a form-urlencoded body.
    pub fn from_form(method: impl Into<String>, url: impl Into<String>, form: &str) -> Self {
        let mut request = LaunchRequest::new(method, url);
        request.body = util::form_to_hashmap(form);
        request
    }

    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = protocol.into();
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn param<'a>(
        mut self,
        key: impl Into<String>,
        value: impl Into<ParameterValue<'a>>,
    ) -> Self {
        self.body.insert(key.into(), value.into().into_string());
        self
    }

    /// Resolve the URL the launch was sent to.
    pub fn launch_url(&self) -> Result<Cow<'_, str>> {
        let url = match self.url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => return Err(Error::MissingUrl),
        };
        match self.host.as_deref() {
            Some(host) if !host.is_empty() && !self.protocol.is_empty() && url.starts_with('/') => {
                Ok(Cow::Owned(format!("{}://{}{}", self.protocol, host, url)))
            }
            _ => Ok(Cow::Borrowed(url)),
        }
    }
}
