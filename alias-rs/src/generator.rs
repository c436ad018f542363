//! Alias generation
//!
//! Produces randomized, non-guessable alias addresses. Generation is pure:
//! no state is kept and no collision check is made against previously
//! issued aliases.

use uuid::Uuid;

/// Length of the generated local part (hex characters)
const LOCAL_PART_LEN: usize = 12;

/// Sentinel domain value meaning "pick the configured default"
const RANDOM_DOMAIN: &str = "random";

/// A generated alias address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    /// Generated local part (left of the `@`)
    pub local_part: String,
    /// Domain part (right of the `@`)
    pub domain: String,
}

impl Alias {
    /// Full address, `local_part@domain`
    pub fn address(&self) -> String {
        format!("{}@{}", self.local_part, self.domain)
    }
}

/// Generate a new alias for the given domain.
///
/// The requested domain wins unless it is empty or the literal `"random"`,
/// in which case the configured default is used. Returns `None` when
/// neither resolves to a usable domain — the only failure mode.
pub fn generate_alias(requested: Option<&str>, default_domain: &str) -> Option<Alias> {
    let domain = resolve_domain(requested, default_domain)?;

    let id = Uuid::new_v4().simple().to_string();
    let local_part = id[..LOCAL_PART_LEN].to_string();

    Some(Alias { local_part, domain })
}

fn resolve_domain(requested: Option<&str>, default_domain: &str) -> Option<String> {
    match requested.map(str::trim) {
        Some(d) if !d.is_empty() && d != RANDOM_DOMAIN => Some(d.to_string()),
        _ => {
            let d = default_domain.trim();
            if d.is_empty() {
                None
            } else {
                Some(d.to_string())
            }
        }
    }
}
