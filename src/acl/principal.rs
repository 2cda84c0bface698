use serde::{Deserialize, Serialize};

/// Semantic bucket for a security principal. `Other` is "recognized but not
/// tracked": it only feeds the filesystem-layer other-write signal and never
/// appears in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrincipalCategory {
    Other,
    Everyone,
    AuthenticatedUsers,
    Users,
    Admins,
}

const SID_EVERYONE: &str = "S-1-1-0";
const SID_AUTHENTICATED_USERS: &str = "S-1-5-11";
const SID_BUILTIN_USERS: &str = "S-1-5-32-545";
const SID_BUILTIN_ADMINS: &str = "S-1-5-32-544";

impl PrincipalCategory {
    /// Categorize a principal by SID first (stable), then by display name.
    ///
    /// Domain Users/Admins are matched by RID suffix (-513/-512) without
    /// verifying the issuing domain; a differently-scoped SID that happens
    /// to end in those digits is misclassified. Known approximation, kept.
    pub fn categorize(sid: Option<&str>, name: Option<&str>) -> Self {
        if let Some(sid) = sid.map(str::trim).filter(|s| !s.is_empty()) {
            if sid == SID_EVERYONE {
                return Self::Everyone;
            }
            if sid == SID_AUTHENTICATED_USERS {
                return Self::AuthenticatedUsers;
            }
            if sid == SID_BUILTIN_USERS {
                return Self::Users;
            }
            if sid == SID_BUILTIN_ADMINS {
                return Self::Admins;
            }
            if sid.ends_with("-513") {
                return Self::Users;
            }
            if sid.ends_with("-512") {
                return Self::Admins;
            }
        }

        if let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) {
            if eq_or_suffix(name, "Everyone") {
                return Self::Everyone;
            }
            if eq_or_suffix(name, "Authenticated Users") {
                return Self::AuthenticatedUsers;
            }
            if name.eq_ignore_ascii_case("BUILTIN\\Users") || has_suffix(name, "\\Domain Users") {
                return Self::Users;
            }
            if name.eq_ignore_ascii_case("BUILTIN\\Administrators")
                || has_suffix(name, "\\Domain Admins")
            {
                return Self::Admins;
            }
        }

        Self::Other
    }
}

fn eq_or_suffix(name: &str, bare: &str) -> bool {
    name.eq_ignore_ascii_case(bare) || has_suffix(name, &format!("\\{bare}"))
}

fn has_suffix(name: &str, suffix: &str) -> bool {
    // Byte-wise compare: slicing the &str could land inside a multibyte
    // character for non-ASCII display names. Suffixes are ASCII-only.
    let name = name.as_bytes();
    let suffix = suffix.as_bytes();
    name.len() >= suffix.len() && name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}
