//! Verification of signed LTI launch requests.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::request::LaunchRequest;
use crate::signature;
use crate::values::{OAUTH_PARAM_KEY_CONSUMER_KEY, OAUTH_PARAM_KEY_SIGNATURE};

/// Check that `request` was signed with `secret` and left untouched.
///
/// Every failure, malformed request or forged signature alike, is `false`.
pub fn validate(secret: &str, request: &LaunchRequest) -> bool {
    verify(secret, request).is_ok()
}

/// Like [`validate`], but reports why verification failed.
pub fn verify(secret: &str, request: &LaunchRequest) -> Result<()> {
    let supplied = match request.body.get(OAUTH_PARAM_KEY_SIGNATURE) {
        Some(signature) => signature,
        None => {
            tracing::debug!(method = %request.method, "launch request has no oauth_signature");
            return Err(Error::MissingSignature);
        }
    };
    let base = signature_base_string(request).map_err(|e| {
        tracing::debug!(
            method = %request.method,
            error = %e,
            "cannot rebuild signature base string"
        );
        e
    })?;
    let expected = signature::sign_base_string(secret, &base)?;

    if signature::signatures_match(&expected, supplied) {
        Ok(())
    } else {
        tracing::debug!(
            method = %request.method,
            url = ?request.url,
            parameters = request.body.len(),
            "oauth signature mismatch"
        );
        Err(Error::SignatureMismatch)
    }
}

/// The canonical string a consumer must have signed for `request`.
pub fn signature_base_string(request: &LaunchRequest) -> Result<String> {
    if request.method.is_empty() {
        return Err(Error::MissingMethod);
    }
    let url = request.launch_url()?;
    Ok(signature::base_string(
        &request.method,
        &url,
        request.body.iter().map(|(k, v)| (k.as_str(), v.as_str())),
    ))
}

/// A consumer's credentials, as loaded from tool configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ConsumerCredentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    #[serde(default)]
    pub token_secret: Option<String>,
}

impl ConsumerCredentials {
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        ConsumerCredentials {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            token_secret: None,
        }
    }

    pub fn signing_key(&self) -> String {
        signature::signing_key(&self.consumer_secret, self.token_secret.as_deref())
    }
}

/// Reusable validator bound to one signing key.
///
/// Immutable once built, so a single instance can be shared between
/// request handlers.
#[derive(Clone, Debug)]
pub struct LtiValidator {
    key: String,
    consumer_key: Option<String>,
}

impl LtiValidator {
    /// Validator that uses `secret` verbatim as the HMAC key.
    pub fn new(secret: impl Into<String>) -> Self {
        LtiValidator {
            key: secret.into(),
            consumer_key: None,
        }
    }

    /// Validator for a configured consumer.
    ///
    /// Requests must also carry the matching `oauth_consumer_key`.
    pub fn from_credentials(credentials: &ConsumerCredentials) -> Self {
        LtiValidator {
            key: credentials.signing_key(),
            consumer_key: Some(credentials.consumer_key.clone()),
        }
    }

    pub fn validate(&self, request: &LaunchRequest) -> bool {
        self.verify(request).is_ok()
    }

    pub fn verify(&self, request: &LaunchRequest) -> Result<()> {
        if let Some(expected) = &self.consumer_key {
            let matches = request
                .body
                .get(OAUTH_PARAM_KEY_CONSUMER_KEY)
                .map_or(false, |k| k == expected);
            if !matches {
                tracing::debug!(consumer_key = %expected, "launch from an unexpected consumer");
                return Err(Error::ConsumerKeyMismatch);
            }
        }
        verify(&self.key, request)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::signer::LaunchSigner;
    use std::collections::HashMap;

    const SECRET: &str = "xx55$$1";
    const URL: &str = "http://localhost.dev/test";

    fn app_data() -> Vec<(&'static str, &'static str)> {
        vec![
            ("third", "^$last_!data"),
            ("first", "some data"),
            ("second", "--some*data"),
        ]
    }

    fn signed_request() -> LaunchRequest {
        let mut request = LaunchRequest::new("POST", URL);
        for (k, v) in app_data() {
            request = request.param(k, v);
        }
        let base = signature_base_string(&request).unwrap();
        let sig = signature::sign_base_string(SECRET, &base).unwrap();
        request.param(OAUTH_PARAM_KEY_SIGNATURE, sig)
    }

    fn photos_request() -> LaunchRequest {
        LaunchRequest::new("GET", "http://photos.example.net/photos")
            .param("oauth_consumer_key", "dpf43f3p2l4k3l03")
            .param("oauth_token", "nnch734d00sl2jdk")
            .param("oauth_nonce", "kllo9940pd9333jh")
            .param("oauth_timestamp", "1191242096")
            .param("oauth_signature_method", "HMAC-SHA1")
            .param("oauth_signature", "tR3+Ty81lMeYAr/Fid0kMTYa/WM=")
            .param("oauth_version", "1.0")
            .param("size", "original")
            .param("file", "vacation.jpg")
    }

    #[test]
    fn test_validates_signature_and_data() {
        assert!(validate(SECRET, &signed_request()));
    }

    #[test]
    fn test_wrong_secret() {
        let request = signed_request();
        assert!(!validate("wrong secret", &request));
        assert_eq!(verify("wrong secret", &request), Err(Error::SignatureMismatch));
    }

    #[test]
    fn test_wrong_signature() {
        let request = signed_request().param(OAUTH_PARAM_KEY_SIGNATURE, "bad signature");
        assert!(!validate(SECRET, &request));
    }

    #[test]
    fn test_tampered_body() {
        let mut removed = signed_request();
        removed.body.remove("first");
        assert!(!validate(SECRET, &removed));

        let added = signed_request().param("fourth", "extra");
        assert!(!validate(SECRET, &added));

        let mutated = signed_request().param("second", "--some*dat");
        assert!(!validate(SECRET, &mutated));

        let mut method = signed_request();
        method.method = "GET".into();
        assert!(!validate(SECRET, &method));

        let mut url = signed_request();
        url.url = Some("http://localhost.dev/other".into());
        assert!(!validate(SECRET, &url));
    }

    #[test]
    fn test_method_case_is_normalized() {
        let mut request = signed_request();
        request.method = "post".into();
        assert!(validate(SECRET, &request));
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let signed = signed_request();
        let mut entries = signed.body.iter().collect::<Vec<_>>();
        entries.sort();
        entries.reverse();
        let mut reordered = LaunchRequest::new("POST", URL);
        reordered.body = entries
            .into_iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect::<HashMap<String, String>>();
        assert_eq!(
            signature_base_string(&reordered).unwrap(),
            signature_base_string(&signed).unwrap()
        );
        assert!(validate(SECRET, &reordered));
    }

    #[test]
    fn test_known_vector() {
        let secret = "kd94hf93k423kf44&pfkkdhi9sl3r4s00";
        assert!(validate(secret, &photos_request()));
    }

    #[test]
    fn test_missing_url_fails_closed() {
        let mut request = signed_request();
        request.url = None;
        assert!(!validate(SECRET, &request));
        assert_eq!(verify(SECRET, &request), Err(Error::MissingUrl));
    }

    #[test]
    fn test_unparsable_url_is_signed_verbatim() {
        let urls = [
            "http://localhost.dev/test",
            "http://local host/test",
            "localhost.dev/test",
            "urn:lti:launch",
        ];
        for url in urls.iter() {
            let mut request = LaunchRequest::new("POST", *url).param("a", "b c");
            let base = signature_base_string(&request).unwrap();
            let sig = signature::sign_base_string("s", &base).unwrap();
            request = request.param(OAUTH_PARAM_KEY_SIGNATURE, sig);
            assert_eq!(verify("s", &request), Ok(()), "{}", url);
        }
    }

    #[test]
    fn test_path_url_is_rebuilt_from_host() {
        let mut request = signed_request();
        request.url = Some("/test".into());
        request.protocol = "http".into();
        request.host = Some("localhost.dev".into());
        assert!(validate(SECRET, &request));
    }

    #[test]
    fn test_malformed_requests_are_false() {
        let mut no_method = signed_request();
        no_method.method = String::new();
        assert_eq!(verify(SECRET, &no_method), Err(Error::MissingMethod));

        let mut no_signature = signed_request();
        no_signature.body.remove(OAUTH_PARAM_KEY_SIGNATURE);
        assert_eq!(verify(SECRET, &no_signature), Err(Error::MissingSignature));

        assert!(!validate(SECRET, &LaunchRequest::default()));
        assert!(!validate("", &LaunchRequest::new("POST", URL)));
    }

    #[test]
    fn test_empty_signature_never_matches() {
        let request = signed_request().param(OAUTH_PARAM_KEY_SIGNATURE, "");
        assert!(!validate(SECRET, &request));
    }

    #[test]
    fn test_validator_from_credentials() {
        let credentials: ConsumerCredentials = serde_json::from_str(
            r#"{
                "consumer_key": "dpf43f3p2l4k3l03",
                "consumer_secret": "kd94hf93k423kf44",
                "token_secret": "pfkkdhi9sl3r4s00"
            }"#,
        )
        .unwrap();
        let validator = LtiValidator::from_credentials(&credentials);
        assert!(validator.validate(&photos_request()));

        let other = photos_request().param("oauth_consumer_key", "someone-else");
        assert_eq!(validator.verify(&other), Err(Error::ConsumerKeyMismatch));

        let consumer_only = LtiValidator::from_credentials(&ConsumerCredentials::new(
            "dpf43f3p2l4k3l03",
            "kd94hf93k423kf44",
        ));
        assert!(!consumer_only.validate(&photos_request()));
    }

    #[test]
    fn test_validator_with_raw_secret() {
        let validator = LtiValidator::new(SECRET);
        assert!(validator.validate(&signed_request()));
        assert!(!LtiValidator::new("nope").validate(&signed_request()));
    }

    #[test]
    fn test_round_trip_with_signer() {
        let samples: Vec<Vec<(&str, &str)>> = vec![
            vec![],
            app_data(),
            vec![("resource_link_id", "88391-e1919-bb3456"), ("user_id", "0ae836b9")],
            vec![("lis_person_name_full", "Jane Q. Public"), ("custom_note", "a+b=c&d ☃")],
        ];
        for (i, params) in samples.into_iter().enumerate() {
            let secret = format!("secret-{}", i);
            let mut signer = LaunchSigner::new("consumer");
            for (k, v) in &params {
                signer.add_param(*k, *v);
            }
            let request = signer
                .sign("POST", URL, &secret)
                .unwrap()
                .into_request("POST", URL);
            assert!(validate(&secret, &request), "sample {}", i);
            assert!(!validate(&format!("{}x", secret), &request), "sample {}", i);
        }
    }
}
