use percent_encoding::{utf8_percent_encode, AsciiSet, PercentEncode};
use std::borrow::Cow;

// https://tools.ietf.org/html/rfc5849#section-3.6
// * ALPHA, DIGIT, '-', '.', '_', '~' MUST NOT be encoded.
// * All other characters MUST be encoded.
// * The two hexadecimal characters used to represent encoded
//   characters MUST be uppercase.
const TARGETS_FOR_SIGN: &AsciiSet = &percent_encoding::NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a value for an OAuth signature base string.
///
/// Space becomes `%20` (never `+`), and non-ASCII characters are encoded
/// byte-by-byte from their UTF-8 form.
pub fn encode(value: &str) -> String {
    percent_encode(value).to_string()
}

pub(crate) fn percent_encode_cow<'a, T: Into<Cow<'a, str>>>(input: T) -> Cow<'a, str> {
    match input.into() {
        Cow::Borrowed(r) => Cow::from(percent_encode(r)),
        Cow::Owned(v) => Cow::from(percent_encode(&v).to_string()),
    }
}

fn percent_encode(input: &str) -> PercentEncode<'_> {
    utf8_percent_encode(input, TARGETS_FOR_SIGN)
}
