pub const OAUTH_VALUE_VERSION: &str = "1.0";

pub const OAUTH_VALUE_SIGMETHOD_HMACSHA1: &str = "HMAC-SHA1";

pub const OAUTH_PARAM_KEY_CONSUMER_KEY: &str = "oauth_consumer_key";
pub const OAUTH_PARAM_KEY_NONCE: &str = "oauth_nonce";
pub const OAUTH_PARAM_KEY_SIGNATURE: &str = "oauth_signature";
pub const OAUTH_PARAM_KEY_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub const OAUTH_PARAM_KEY_TIMESTAMP: &str = "oauth_timestamp";
pub const OAUTH_PARAM_KEY_TOKEN: &str = "oauth_token";
pub const OAUTH_PARAM_KEY_VERSION: &str = "oauth_version";

/// Version parameter sent with a signed launch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OAuthVersion {
    None,
    Default,
    Custom(String),
}

impl From<Option<&str>> for OAuthVersion {
    fn from(value: Option<&str>) -> Self {
        match value {
            Some(OAUTH_VALUE_VERSION) => OAuthVersion::Default,
            Some(item) => OAuthVersion::Custom(item.to_string()),
            None => OAuthVersion::None,
        }
    }
}

impl From<OAuthVersion> for Option<String> {
    fn from(version: OAuthVersion) -> Self {
        match version {
            OAuthVersion::None => None,
            OAuthVersion::Default => Some(OAUTH_VALUE_VERSION.to_string()),
            OAuthVersion::Custom(s) => Some(s),
        }
    }
}
