//! Line canonicalization for hosts-format block-lists.
//!
//! Raw block-list lines arrive in wildly different shapes: bare hostnames,
//! `127.0.0.1`-style hosts entries, trailing comments, irregular spacing.
//! [`canonicalize`] collapses all of them into a single comparable form,
//! `"<dotted-quad> <hostname>"`, so the merge can operate on exact string
//! equality.

use regex::Regex;
use std::sync::LazyLock;

/// Trailing comment: first `#` (with any preceding whitespace) to end of line.
static COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*#.*$").unwrap());

/// Any run of two or more whitespace characters.
static MULTI_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s\s+").unwrap());

/// Leading dotted-quad followed by whitespace. Shape only, no range validation.
static LEADING_ADDR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+\.\d+\s").unwrap());

/// Dotted-quad mapped to another dotted-quad (address-to-address entry).
static ADDR_TO_ADDR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+\.\d+\s\d+\.\d+\.\d+\.\d+").unwrap());

/// Null-route target all canonical records point at.
pub const NULL_ROUTE: &str = "0.0.0.0";

/// Normalize one raw block-list line into a canonical record.
///
/// Returns `None` for lines that carry no usable rule: comments, blank
/// lines, IPv6/DNS-rewrite syntax (`::`), and address-to-address mappings.
/// Loopback-style entries (`127.0.0.1 host`) are rewritten to the null
/// route, and bare hostnames gain an implicit `0.0.0.0 ` prefix.
///
/// The output is a fixed point: canonicalizing a canonical record returns
/// it unchanged.
pub fn canonicalize(raw: &str) -> Option<String> {
    let line = raw.trim();

    if line.starts_with('#') {
        return None;
    }
    // `::` is checked on the raw trimmed line, before comment stripping.
    // A commented-out IPv6 entry is therefore dropped too; better to drop
    // than to mis-parse.
    if line.contains("::") {
        return None;
    }

    let line = COMMENT.replace(line, "");
    if line.is_empty() {
        return None;
    }

    let line = MULTI_SPACE.replace_all(&line, " ");

    let mut line = line.into_owned();
    if let Some(rest) = line.strip_prefix("127.0.0.1 ") {
        line = format!("{NULL_ROUTE} {rest}");
    }

    if !LEADING_ADDR.is_match(&line) {
        line = format!("{NULL_ROUTE} {line}");
    }

    // Address-to-address entries cannot be merged with hostname rules and
    // are treated as noise.
    if ADDR_TO_ADDR.is_match(&line) {
        return None;
    }

    Some(line)
}
