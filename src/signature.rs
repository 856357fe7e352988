//! OAuth 1.0a HMAC-SHA1 signature primitives.
//!
//! The base string follows RFC 5849 §3.4.1 as LTI tool consumers build it:
//! every value is encoded, the `key=value` pairs are sorted and joined with
//! `&`, and the joined string is encoded once more as a single component.

use hmac::{Hmac, Mac};
use sha1::Sha1;
use subtle::ConstantTimeEq;

use crate::encoder_oauth1::{encode, percent_encode_cow};
use crate::error::{Error, Result};
use crate::values::OAUTH_PARAM_KEY_SIGNATURE;

type HmacSha1 = Hmac<Sha1>;

/// Build the signature base string for a method, launch URL and body.
///
/// Any `oauth_signature` entry in `params` is skipped. Keys are taken as
/// they are; only values are encoded before sorting.
pub fn base_string<'a, I>(http_method: &str, url: &str, params: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut pairs = params
        .into_iter()
        .filter(|(k, _)| *k != OAUTH_PARAM_KEY_SIGNATURE)
        .map(|(k, v)| format!("{}={}", k, percent_encode_cow(v)))
        .collect::<Vec<String>>();
    // sort by the whole pair, so signer and verifier agree regardless of body order
    pairs.sort();
    let param_str = pairs.join("&");

    format!(
        "{}&{}&{}",
        http_method.to_ascii_uppercase(),
        encode(url),
        encode(&param_str)
    )
}

/// Derive the HMAC key from consumer and token secrets (RFC 5849 §3.4.2).
pub fn signing_key(consumer_secret: &str, token_secret: Option<&str>) -> String {
    format!(
        "{}&{}",
        encode(consumer_secret),
        encode(token_secret.unwrap_or(""))
    )
}

/// `base64(HMAC-SHA1(key, base_string))`.
pub fn sign_base_string(key: &str, base_string: &str) -> Result<String> {
    let mut mac = HmacSha1::new_varkey(key.as_bytes()).map_err(|_| Error::InvalidKey)?;
    mac.input(base_string.as_bytes());
    let hash = mac.result().code();
    Ok(base64::encode(&hash))
}

/// Compare two signatures without short-circuiting on the first differing byte.
pub fn signatures_match(expected: &str, supplied: &str) -> bool {
    expected.as_bytes().ct_eq(supplied.as_bytes()).into()
}
