use serde::{Deserialize, Serialize};

/// A single point on the normalized permission scale.
///
/// `None < Read < Write < Change < Full` by grant strength. `Deny` sits
/// outside the scale: it records that an explicit deny-write entry was seen
/// and dominates every other value in both [`max`](PermissionLevel::max) and
/// [`min`](PermissionLevel::min).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PermissionLevel {
    None,
    Read,
    Write,
    Change,
    Full,
    Deny,
}

impl PermissionLevel {
    fn rank(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Read => 1,
            Self::Write => 2,
            Self::Change => 3,
            Self::Full => 4,
            // Never compared numerically; max/min short-circuit first.
            Self::Deny => u8::MAX,
        }
    }

    /// The more permissive of two levels. Deny dominates.
    pub fn max(self, other: Self) -> Self {
        if self == Self::Deny || other == Self::Deny {
            return Self::Deny;
        }
        if self.rank() >= other.rank() {
            self
        } else {
            other
        }
    }

    /// The more restrictive of two levels. Deny dominates.
    pub fn min(self, other: Self) -> Self {
        if self == Self::Deny || other == Self::Deny {
            return Self::Deny;
        }
        if self.rank() <= other.rank() {
            self
        } else {
            other
        }
    }

    /// Collapse an allow maximum against a seen deny-write entry.
    /// An explicit deny overrides any allow, whatever its level.
    pub fn merge_allow_deny(allow_max: Self, has_deny_write: bool) -> Self {
        if has_deny_write {
            Self::Deny
        } else {
            allow_max
        }
    }

    /// Whether this level grants write capability. Deny is an active block,
    /// not a grant, so it is not write-capable.
    pub fn is_write(self) -> bool {
        matches!(self, Self::Write | Self::Change | Self::Full)
    }

    /// Lenient parse used at the serialization boundary; unknown text
    /// degrades to `None` rather than failing.
    pub fn from_str_lenient(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "READ" => Self::Read,
            "WRITE" => Self::Write,
            "CHANGE" => Self::Change,
            "FULL" => Self::Full,
            "DENY" => Self::Deny,
            _ => Self::None,
        }
    }
}

impl std::fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "NONE"),
            Self::Read => write!(f, "READ"),
            Self::Write => write!(f, "WRITE"),
            Self::Change => write!(f, "CHANGE"),
            Self::Full => write!(f, "FULL"),
            Self::Deny => write!(f, "DENY"),
        }
    }
}
