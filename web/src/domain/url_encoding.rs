//! URL component encoding for module identifiers and redirect targets.
//!
//! Both helpers follow `encodeURIComponent`: everything except ASCII
//! alphanumerics and `- _ . ! ~ * ' ( )` is percent-encoded as UTF-8. Each
//! helper then keeps one extra character literal.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Module ids are `name@category`; the `@` stays readable.
const MODULE_UUID: &AsciiSet = &URI_COMPONENT.remove(b'@');

/// Redirect targets keep their path separators and nothing else.
const REDIRECT_PATH: &AsciiSet = &URI_COMPONENT.remove(b'/');

/// Encode a module identifier for use as one path or query component.
///
/// # Examples
/// ```
/// use barforge_web::domain::url_encoding::encode_module_uuid;
///
/// assert_eq!(encode_module_uuid("cpu temp@system"), "cpu%20temp@system");
/// ```
#[must_use]
pub fn encode_module_uuid(value: &str) -> String {
    utf8_percent_encode(value, MODULE_UUID).to_string()
}

/// Encode a post-login redirect target.
///
/// Query delimiters stay encoded, so a target such as `/modules?sort=new`
/// becomes an opaque path and cannot smuggle parameters or hosts.
///
/// # Examples
/// ```
/// use barforge_web::domain::url_encoding::clean_redirect_url;
///
/// assert_eq!(clean_redirect_url("/modules?sort=new"), "/modules%3Fsort%3Dnew");
/// ```
#[must_use]
pub fn clean_redirect_url(url: &str) -> String {
    utf8_percent_encode(url, REDIRECT_PATH).to_string()
}
