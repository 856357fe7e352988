use chrono::Utc;
use std::collections::HashMap;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::parameters::ParameterValue;
use crate::request::LaunchRequest;
use crate::signature;
use crate::values::*;

/// Signs launch parameters the way an LTI tool consumer does.
pub struct LaunchSigner {
    oauth_consumer_key: String,
    oauth_nonce: String,
    oauth_version: OAuthVersion,
    oauth_timestamp: Option<i64>,
    oauth_token: Option<String>,
    parameters: HashMap<String, String>,
}

/// A signed launch body, ready to be posted to the tool.
#[derive(Clone, Debug, PartialEq)]
pub struct SignedLaunch {
    pub signature: String,
    pub nonce: String,
    pub timestamp: i64,
    /// Every body parameter, `oauth_signature` included.
    pub parameters: HashMap<String, String>,
}

impl SignedLaunch {
    pub fn into_request(
        self,
        http_method: impl Into<String>,
        url: impl Into<String>,
    ) -> LaunchRequest {
        let mut request = LaunchRequest::new(http_method, url);
        request.body = self.parameters;
        request
    }
}

impl LaunchSigner {
    /// Constructor of LaunchSigner with OAuth consumer_key.
    pub fn new<K: Into<String>>(consumer_key: K) -> Self {
        // set with default values.
        LaunchSigner {
            oauth_consumer_key: consumer_key.into(),
            oauth_nonce: format!("{}", Uuid::new_v4()),
            oauth_version: OAuthVersion::Default,
            oauth_timestamp: None,
            oauth_token: None,
            parameters: HashMap::new(),
        }
    }

    pub fn oauth_nonce(&mut self, nonce: impl Into<String>) -> &mut LaunchSigner {
        self.oauth_nonce = nonce.into();
        self
    }

    pub fn oauth_version(&mut self, version: Option<&str>) -> &mut LaunchSigner {
        self.oauth_version = version.into();
        self
    }

    pub fn oauth_timestamp(&mut self, timestamp: i64) -> &mut LaunchSigner {
        self.oauth_timestamp = Some(timestamp);
        self
    }

    pub fn oauth_token(&mut self, token: impl Into<String>) -> &mut LaunchSigner {
        self.oauth_token = Some(token.into());
        self
    }

    pub fn add_param<'a>(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParameterValue<'a>>,
    ) -> &mut LaunchSigner {
        self.parameters.insert(key.into(), value.into().into_string());
        self
    }

    /// Sign the launch for `http_method` and `url` with the HMAC key `secret`.
    ///
    /// `secret` is used verbatim; see [`signature::signing_key`] to derive it
    /// from consumer and token secrets.
    pub fn sign(&self, http_method: &str, url: &str, secret: &str) -> Result<SignedLaunch> {
        if http_method.is_empty() {
            return Err(Error::MissingMethod);
        }
        if url.is_empty() {
            return Err(Error::MissingUrl);
        }

        // build authorization basic parameters
        let timestamp = self
            .oauth_timestamp
            .unwrap_or_else(|| Utc::now().timestamp());
        let mut parameters = self.parameters.clone();
        let basic_params = vec![
            (OAUTH_PARAM_KEY_CONSUMER_KEY, Some(self.oauth_consumer_key.clone())),
            (OAUTH_PARAM_KEY_NONCE, Some(self.oauth_nonce.clone())),
            (
                OAUTH_PARAM_KEY_SIGNATURE_METHOD,
                Some(OAUTH_VALUE_SIGMETHOD_HMACSHA1.to_string()),
            ),
            (OAUTH_PARAM_KEY_TIMESTAMP, Some(timestamp.to_string())),
            (OAUTH_PARAM_KEY_VERSION, self.oauth_version.clone().into()),
            (OAUTH_PARAM_KEY_TOKEN, self.oauth_token.clone()),
        ];
        // trim None value
        for (k, v) in basic_params {
            if let Some(v) = v {
                parameters.insert(k.to_string(), v);
            }
        }

        let base = signature::base_string(
            http_method,
            url,
            parameters.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        );
        let signature = signature::sign_base_string(secret, &base)?;
        tracing::debug!(
            consumer_key = %self.oauth_consumer_key,
            parameters = parameters.len(),
            "signed launch"
        );
        parameters.insert(OAUTH_PARAM_KEY_SIGNATURE.to_string(), signature.clone());

        Ok(SignedLaunch {
            signature,
            nonce: self.oauth_nonce.clone(),
            timestamp,
            parameters,
        })
    }
}
