use std::collections::HashMap;
use url::form_urlencoded;

/// Decode an `application/x-www-form-urlencoded` body into a flat map.
///
/// `+` decodes to a space; a repeated key keeps its last value.
pub fn form_to_hashmap(form: &str) -> HashMap<String, String> {
    form_urlencoded::parse(form.trim_start_matches('?').as_bytes())
        .filter(|(k, _)| !k.is_empty())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}
