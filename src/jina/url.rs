//! Input classification: absolute http(s) URL or free-text query.

use reqwest::Url;

/// Returns `true` when `input` is an absolute `http`/`https` URL with a
/// non-empty authority.
///
/// Never fails: anything the parser rejects is simply not a URL, including
/// embedded spaces, out-of-range ports and an empty host before a port. The
/// authority must be written out (`scheme://host`), so forms the WHATWG
/// parser would repair such as `http:example.com` or `http:///path` are
/// treated as queries.
pub fn is_valid_url(input: &str) -> bool {
    let Ok(url) = Url::parse(input) else {
        return false;
    };

    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }

    if url.host_str().is_none_or(str::is_empty) {
        return false;
    }

    has_explicit_authority(input)
}

fn has_explicit_authority(input: &str) -> bool {
    let Some((_, rest)) = input.trim().split_once(':') else {
        return false;
    };
    let Some(rest) = rest.strip_prefix("//") else {
        return false;
    };
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    !authority.is_empty()
}
