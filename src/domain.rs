use thiserror::Error;
use url::{Host, ParseError, Url};

#[derive(Debug, Error)]
pub enum HostError {
    #[error("invalid URL: {0}")]
    Parse(#[from] ParseError),

    #[error("URL has no host")]
    MissingHost,
}

/// Returns the lowercased host of `raw`. IPv6 hosts come back without their
/// brackets.
///
/// Scheme-relative URLs (`//cdn.example.de/x`) are read as `http`, and an
/// unparseable port is ignored since only the host is needed.
pub fn extract_hostname(raw: &str) -> Result<String, HostError> {
    let url = parse_lenient(raw)?;

    match url.host() {
        Some(Host::Domain(domain)) if !domain.is_empty() => Ok(domain.to_ascii_lowercase()),
        Some(Host::Ipv4(addr)) => Ok(addr.to_string()),
        Some(Host::Ipv6(addr)) => Ok(addr.to_string()),
        _ => Err(HostError::MissingHost),
    }
}

fn parse_lenient(raw: &str) -> Result<Url, ParseError> {
    match Url::parse(raw) {
        Err(ParseError::RelativeUrlWithoutBase) if raw.starts_with("//") => {
            parse_lenient(&format!("http:{}", raw))
        }
        Err(ParseError::InvalidPort) => match strip_port(raw) {
            Some(stripped) => Url::parse(&stripped),
            None => Err(ParseError::InvalidPort),
        },
        other => other,
    }
}

/// Removes the `:port` suffix from the authority of `raw`.
fn strip_port(raw: &str) -> Option<String> {
    let start = raw.find("//")? + 2;
    let end = raw[start..]
        .find(|c| matches!(c, '/' | '?' | '#'))
        .map_or(raw.len(), |i| start + i);
    let authority = &raw[start..end];

    let host_start = authority.rfind('@').map_or(0, |i| i + 1);
    let host_port = &authority[host_start..];
    let colon = host_port.rfind(':')?;
    if host_port.rfind(']').is_some_and(|bracket| bracket > colon) {
        return None;
    }

    let colon = start + host_start + colon;
    Some(format!("{}{}", &raw[..colon], &raw[end..]))
}

/// Naive registrable domain: the last two labels of `hostname`.
///
/// This does not consult the public suffix list, so `example.co.uk` yields
/// `co.uk`. A single-label host is returned unchanged.
pub fn main_domain(hostname: &str) -> String {
    let labels: Vec<&str> = hostname.split('.').collect();
    if labels.len() >= 2 {
        labels[labels.len() - 2..].join(".")
    } else {
        hostname.to_string()
    }
}
