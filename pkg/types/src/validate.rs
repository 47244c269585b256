use anyhow::{Result, bail};
use pkg_constants::cluster::MAX_NAME_LEN;
use std::fmt;

/// What a validated name identifies; used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Namespace,
    Service,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameKind::Namespace => write!(f, "namespace"),
            NameKind::Service => write!(f, "service"),
        }
    }
}

/// Validate a namespace or service name as the views key on it.
///
/// Rules: lowercase `[a-z0-9-]`, at most `MAX_NAME_LEN` chars, no
/// leading/trailing hyphens. Qualified hosts such as
/// `reviews.tutorial.svc.cluster.local` are rejected with a hint, since
/// metric labels carry that form but views are keyed by the short name.
pub fn validate_name(kind: NameKind, name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("{} name must not be empty", kind);
    }
    if name.len() > MAX_NAME_LEN {
        bail!(
            "{} name '{}' exceeds {} characters (got {})",
            kind,
            name,
            MAX_NAME_LEN,
            name.len()
        );
    }
    if let Some((short, _)) = name.split_once('.') {
        bail!(
            "{} name '{}' is a qualified host, use the short name '{}'",
            kind,
            name,
            short
        );
    }
    if name.starts_with('-') || name.ends_with('-') {
        bail!("{} name '{}' must not start or end with a hyphen", kind, name);
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        bail!(
            "{} name '{}' must contain only lowercase letters, digits, and hyphens [a-z0-9-]",
            kind,
            name
        );
    }
    Ok(())
}
