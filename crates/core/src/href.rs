use crate::error::{Error, Result};

/// What a link's `href` points at, as far as a renderer cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HrefKind {
    /// `scheme://host/...`
    Absolute,
    /// `/path` on this site
    RootRelative,
    /// `mailto:` address
    MailTo,
    /// Anything else that is not blank, e.g. `blog` or `./about`
    Relative,
    Empty,
}

impl HrefKind {
    /// Whether the link leaves the site (opened in a new tab by most themes)
    pub fn is_external(self) -> bool {
        matches!(self, HrefKind::Absolute | HrefKind::MailTo)
    }
}

/// Classify an href string without validating it
pub fn classify(href: &str) -> HrefKind {
    let href = href.trim();

    if href.is_empty() {
        return HrefKind::Empty;
    }
    if href.starts_with("//") {
        // Protocol-relative URLs still point at another host
        return HrefKind::Absolute;
    }
    if href.starts_with('/') {
        return HrefKind::RootRelative;
    }
    if href
        .get(..7)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("mailto:"))
    {
        return HrefKind::MailTo;
    }
    if split_scheme(href).is_some() {
        return HrefKind::Absolute;
    }

    HrefKind::Relative
}

/// Split `scheme://rest` into its two halves.
///
/// Scheme follows RFC 3986: a letter, then letters, digits, `+`, `-` or `.`.
fn split_scheme(href: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = href.split_once("://")?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        return None;
    }
    Some((scheme, rest))
}

/// Check that `value` is a well-formed absolute web URL.
///
/// Accepts `http` and `https` URLs with a non-empty host and no whitespace.
/// `field_name` is included in the error message.
///
/// ```text
/// check_absolute_url("https://bwrg3r.github.io/", "site.href")  → Ok(())
/// check_absolute_url("/blog", "site.href")                       → Err("... not an absolute URL ...")
/// check_absolute_url("ftp://example.com", "site.href")           → Err("... scheme ...")
/// ```
pub fn check_absolute_url(value: &str, field_name: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidData(format!(
            "Empty URL in '{}' field",
            field_name
        )));
    }

    if value.chars().any(char::is_whitespace) {
        return Err(Error::InvalidData(format!(
            "URL in '{}' contains whitespace: '{}'",
            field_name, value
        )));
    }

    let Some((scheme, rest)) = split_scheme(value) else {
        return Err(Error::InvalidData(format!(
            "'{}' is not an absolute URL: '{}'. Expected e.g. https://example.com/",
            field_name, value
        )));
    };

    if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
        return Err(Error::InvalidData(format!(
            "Unsupported scheme '{}' in '{}': '{}'. Use http or https",
            scheme, field_name, value
        )));
    }

    // Authority ends at the first path, query or fragment delimiter
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_port = authority.rsplit('@').next().unwrap_or_default();
    let (host, port) = if let Some(bracketed) = host_port.strip_prefix('[') {
        // IPv6 literal, e.g. [::1]:8080
        match bracketed.split_once(']') {
            Some((host, tail)) => (host, tail.strip_prefix(':').unwrap_or(tail)),
            None => ("", ""),
        }
    } else {
        host_port.split_once(':').unwrap_or((host_port, ""))
    };

    if !port.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidData(format!(
            "Invalid port in '{}': '{}'",
            field_name, value
        )));
    }

    if host.is_empty() {
        return Err(Error::InvalidData(format!(
            "Missing host in '{}': '{}'",
            field_name, value
        )));
    }

    Ok(())
}
