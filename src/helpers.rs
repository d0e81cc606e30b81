use memchr::{memchr2, memchr3, memchr_iter};

/// Find the scheme terminator: the first ':' immediately followed by "//".
/// Returns the byte index of the ':'.
/// Optimization: Uses SIMD-accelerated memchr to hop between ':' candidates
/// instead of walking every byte.
pub fn find_scheme_end(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    memchr_iter(b':', bytes).find(|&pos| bytes[pos + 1..].starts_with(b"//"))
}

/// Find the userinfo terminator: the first '@', unless a '/' occurs before
/// it. A '/' showing up first means the '@' sits inside the path and the
/// authority carries no credentials. '?' and '#' do not stop this scan.
pub fn find_userinfo_end(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    match memchr2(b'/', b'@', bytes) {
        Some(pos) if bytes[pos] == b'@' => Some(pos),
        _ => None,
    }
}

/// Find the end of the authority: the first '/', '?' or '#'.
pub fn find_authority_end(input: &str) -> Option<usize> {
    memchr3(b'/', b'?', b'#', input.as_bytes())
}

/// Find where the pathname stops: the first '?' or '#'.
pub fn find_pathname_end(input: &str) -> Option<usize> {
    memchr2(b'?', b'#', input.as_bytes())
}
