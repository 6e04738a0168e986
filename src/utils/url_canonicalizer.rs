//! URL validation and canonicalization.
//!
//! The canonical form is what the short code is derived from, so every spelling
//! of the same address must collapse to one string: the scheme prefix (in any
//! of its slash variants) and a single trailing slash are removed.
//!
//! Only `http` and `https` URLs are accepted. Other schemes that parse as URLs
//! (`ftp:`, `file:`, `mailto:`, `javascript:`) are rejected on purpose, since
//! every mapping ends up as a browser redirect target.

use url::Url;

/// Schemes accepted by [`validate`].
const SUPPORTED_SCHEMES: &[&str] = &["http", "https"];

/// Scheme prefixes removed by [`canonicalize`], in match order.
///
/// Longer variants of a scheme come first so `http://` is never mistaken for
/// `http:` followed by a path.
///
/// Matching is case-sensitive. `HTTP://x.com` passes [`validate`] but keeps its
/// prefix here, so it derives a different code than `http://x.com`. Codes
/// already issued depend on this, so do not lowercase before matching.
const SCHEME_PREFIXES: &[&str] = &["http://", "http:/", "http:", "https://", "https:/", "https:"];

/// Checks whether `input` is a well-formed http(s) URL.
///
/// Slash-less forms such as `http:example.com` are accepted; the URL grammar
/// treats them as `http://example.com/`. A missing or unknown scheme is
/// rejected.
///
/// # Examples
///
/// ```ignore
/// assert!(validate("https://www.imdb.com"));
/// assert!(validate("http:imdb.com"));
/// assert!(!validate("www.imdb.com"));
/// assert!(!validate("htt://www.imdb.com"));
/// ```
pub fn validate(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => SUPPORTED_SCHEMES.contains(&url.scheme()),
        Err(_) => false,
    }
}

/// Reduces a URL to its canonical host-and-path form.
///
/// At most one scheme prefix is stripped (first match in [`SCHEME_PREFIXES`]
/// wins), then at most one trailing `/`. Inputs shorter than a prefix are left
/// alone and an empty string stays empty.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(canonicalize("http://www.imdb.com/"), "www.imdb.com");
/// assert_eq!(canonicalize("https:/www.imdb.com"), "www.imdb.com");
/// assert_eq!(canonicalize("www.imdb.com"), "www.imdb.com");
/// ```
pub fn canonicalize(input: &str) -> String {
    let without_scheme = SCHEME_PREFIXES
        .iter()
        .find_map(|prefix| input.strip_prefix(prefix))
        .unwrap_or(input);

    without_scheme
        .strip_suffix('/')
        .unwrap_or(without_scheme)
        .to_string()
}
