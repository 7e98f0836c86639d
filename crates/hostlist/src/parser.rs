//! Host line grammar: `[login@]hostname[:port]`.

use crate::host::DEFAULT_PORT;

/// Login, hostname and port resolved from one host line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub login: Option<&'a str>,
    pub hostname: &'a str,
    pub port: u16,
}

/// Parses a sanitized, non-label host line.
///
/// The first `:` ends the host part; everything after it is port text. Within
/// the host part the first `@` separates the login from the hostname, and any
/// further `@` stays in the hostname. Without an `@` the login falls back to
/// `default_login`.
///
/// Returns `None` when the hostname comes out empty (`user@`, `:22`).
pub fn parse_line<'a>(
    line: &'a str,
    default_login: Option<&'a str>,
) -> Option<ParsedLine<'a>> {
    let (host_part, port_text) = match line.split_once(':') {
        Some((host_part, port)) => (host_part, Some(port)),
        None => (line, None),
    };

    let (login, hostname) = match host_part.split_once('@') {
        Some((login, hostname)) => (Some(login), hostname),
        None => (default_login, host_part),
    };

    if hostname.is_empty() {
        return None;
    }

    Some(ParsedLine {
        login,
        hostname,
        port: resolve_port(port_text.map_or(0, parse_numeral)),
    })
}

/// Parses the leading decimal numeral of `text`, reduced modulo 2^16.
///
/// Accepts an optional leading `-` and stops at the first non-digit. Text with
/// no digits yields 0.
fn parse_numeral(text: &str) -> u16 {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u16, |acc, d| acc.wrapping_mul(10).wrapping_add(u16::from(d - b'0')));

    if negative { value.wrapping_neg() } else { value }
}

/// 0 means "not given".
fn resolve_port(port: u16) -> u16 {
    if port == 0 { DEFAULT_PORT } else { port }
}
