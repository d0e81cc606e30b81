use crate::helpers::{find_authority_end, find_pathname_end, find_scheme_end, find_userinfo_end};
use crate::url_object::UrlObject;
use memchr::memchr;

// Every split below is a single left-to-right scan over its input; the fixed
// order of the splits, not any individual scan, is the behavioral contract.
// All significant delimiters are ASCII, so the byte positions returned by the
// scans are always valid UTF-8 boundaries and slicing cannot panic.

/// Split the protocol from an href. The protocol keeps its trailing ':' and
/// drops the "//"; the remainder starts after the "//". Without a scheme
/// pattern the whole input is handed on untouched.
fn split_protocol(href: &str) -> (Option<&str>, &str) {
    match find_scheme_end(href) {
        Some(pos) => (Some(&href[..=pos]), &href[pos + 3..]),
        None => (None, href),
    }
}

/// Split credentials from the authority remainder: everything before the
/// first '@', unless a '/' comes first.
fn split_auth(rest: &str) -> (Option<&str>, &str) {
    match find_userinfo_end(rest) {
        Some(pos) => (Some(&rest[..pos]), &rest[pos + 1..]),
        None => (None, rest),
    }
}

/// Split the hostname from the authority remainder. Terminates at '/', '?'
/// or '#'; the terminator stays with the remainder.
fn split_hostname(rest: &str) -> (&str, &str) {
    match find_authority_end(rest) {
        Some(pos) => (&rest[..pos], &rest[pos..]),
        None => (rest, ""),
    }
}

/// Split host and port at the first ':' of the hostname. The port is absent
/// without a ':' and empty when the ':' is the final character.
fn split_host_port(hostname: &str) -> (&str, Option<&str>) {
    match memchr(b':', hostname.as_bytes()) {
        Some(pos) => (&hostname[..pos], Some(&hostname[pos + 1..])),
        None => (hostname, None),
    }
}

/// An empty remainder becomes the root path.
fn into_path(rest: &str) -> &str {
    if rest.is_empty() { "/" } else { rest }
}

/// The pathname is the path up to the first '?' or '#'.
fn split_pathname(path: &str) -> &str {
    match find_pathname_end(path) {
        Some(pos) => &path[..pos],
        None => path,
    }
}

/// Split the hash from the path. The hash runs from the first '#' to the end
/// of the path and swallows anything behind it, including a '?'; the left
/// side is returned so search/query can only be cut from there.
fn split_hash(path: &str) -> (Option<&str>, &str) {
    match memchr(b'#', path.as_bytes()) {
        Some(pos) => (Some(&path[pos..]), &path[..pos]),
        None => (None, path),
    }
}

/// The search runs from the first '?' of the hash-stripped path to its end.
fn split_search(rest: &str) -> &str {
    match memchr(b'?', rest.as_bytes()) {
        Some(pos) => &rest[pos..],
        None => "",
    }
}

/// The query is the search with its leading '?' stripped.
fn split_query(search: &str) -> &str {
    match memchr(b'?', search.as_bytes()) {
        Some(pos) => &search[pos + 1..],
        None => "",
    }
}

/// Decompose an href into its components. Accepts any input and never fails;
/// malformed or partial addresses yield a best-effort record.
pub(crate) fn parse(href: &str) -> UrlObject<'_> {
    let (protocol, rest) = split_protocol(href);

    // No scheme means no authority: the whole input is a path candidate.
    let (auth, host, hostname, port, rest) = if protocol.is_some() {
        let (auth, rest) = split_auth(rest);
        let (hostname, rest) = split_hostname(rest);
        let (host, port) = split_host_port(hostname);
        (auth, Some(host), Some(hostname), port, rest)
    } else {
        (None, None, None, None, rest)
    };

    let path = into_path(rest);
    let pathname = split_pathname(path);
    let (hash, rest) = split_hash(path);
    let search = split_search(rest);
    let query = split_query(search);

    UrlObject {
        href,
        protocol,
        auth,
        host,
        hostname,
        port,
        path,
        pathname,
        hash,
        search,
        query,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_protocol() {
        assert_eq!(split_protocol("rest://host/p"), (Some("rest:"), "host/p"));
        assert_eq!(split_protocol("no-scheme/path"), (None, "no-scheme/path"));
        // A ':' not followed by "//" never starts an authority
        assert_eq!(split_protocol("host:8080/p"), (None, "host:8080/p"));
        // Degenerate scheme: the ':' alone qualifies when "//" follows
        assert_eq!(split_protocol("://host"), (Some(":"), "host"));
        // The protocol extends to the first qualifying ':'
        assert_eq!(split_protocol("a:b://c"), (Some("a:b:"), "c"));
    }

    #[test]
    fn test_split_auth() {
        assert_eq!(split_auth("user:pw@host/p"), (Some("user:pw"), "host/p"));
        assert_eq!(split_auth("host/a@b"), (None, "host/a@b"));
        assert_eq!(split_auth("@host"), (Some(""), "host"));
        // '?' does not end the credential scan
        assert_eq!(split_auth("u?x@host"), (Some("u?x"), "host"));
    }

    #[test]
    fn test_split_hostname() {
        assert_eq!(split_hostname("host:80/p?q"), ("host:80", "/p?q"));
        assert_eq!(split_hostname("host?q"), ("host", "?q"));
        assert_eq!(split_hostname("host#f"), ("host", "#f"));
        assert_eq!(split_hostname("host"), ("host", ""));
        assert_eq!(split_hostname(""), ("", ""));
    }

    #[test]
    fn test_split_host_port() {
        assert_eq!(split_host_port("host:80"), ("host", Some("80")));
        assert_eq!(split_host_port("host"), ("host", None));
        // Trailing ':' gives an empty, but present, port
        assert_eq!(split_host_port("host:"), ("host", Some("")));
        assert_eq!(split_host_port(""), ("", None));
    }

    #[test]
    fn test_into_path() {
        assert_eq!(into_path(""), "/");
        assert_eq!(into_path("/p"), "/p");
        assert_eq!(into_path("?q"), "?q");
    }

    #[test]
    fn test_split_hash_takes_trailing_search() {
        let (hash, rest) = split_hash("/p#f?not-a-query");
        assert_eq!(hash, Some("#f?not-a-query"));
        assert_eq!(rest, "/p");
        // Search only sees the text left of the hash
        assert_eq!(split_search(rest), "");
    }

    #[test]
    fn test_split_search_and_query() {
        assert_eq!(split_search("/p?a=1&b=2"), "?a=1&b=2");
        assert_eq!(split_search("/p"), "");
        assert_eq!(split_query("?a=1&b=2"), "a=1&b=2");
        assert_eq!(split_query(""), "");
        // Only the leading '?' is stripped
        assert_eq!(split_query("?a=1?b=2"), "a=1?b=2");
    }
}
