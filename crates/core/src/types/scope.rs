//! Tenant scope selection.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use super::TenantId;

/// Wire spelling of the "every tenant" scope.
pub const ALL_SCOPE: &str = "all";

/// Which tenants' records are visible.
///
/// Serialized as the bare string: `"all"` or the tenant id. Any id is
/// accepted, including ones that match no tenant; such a scope simply
/// produces empty views.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Scope {
    /// Every tenant's records.
    #[default]
    All,
    /// Only records belonging to this tenant.
    Tenant(TenantId),
}

impl Scope {
    /// Parse a scope from its wire form. Never fails.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        if s == ALL_SCOPE {
            Self::All
        } else {
            Self::Tenant(TenantId::new(s))
        }
    }

    /// Whether a record owned by `tenant` is visible under this scope.
    #[must_use]
    pub fn includes(&self, tenant: &TenantId) -> bool {
        match self {
            Self::All => true,
            Self::Tenant(id) => id == tenant,
        }
    }

    /// The selected tenant, or `None` for [`Scope::All`].
    #[must_use]
    pub const fn tenant(&self) -> Option<&TenantId> {
        match self {
            Self::All => None,
            Self::Tenant(id) => Some(id),
        }
    }

    /// Whether this is the "every tenant" scope.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_SCOPE),
            Self::Tenant(id) => write!(f, "{id}"),
        }
    }
}

impl FromStr for Scope {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for Scope {
    fn from(value: String) -> Self {
        if value == ALL_SCOPE {
            Self::All
        } else {
            Self::Tenant(TenantId::from(value))
        }
    }
}

impl From<Scope> for String {
    fn from(scope: Scope) -> Self {
        match scope {
            Scope::All => ALL_SCOPE.to_owned(),
            Scope::Tenant(id) => id.into_inner(),
        }
    }
}

impl From<TenantId> for Scope {
    fn from(id: TenantId) -> Self {
        Self::Tenant(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all() {
        assert_eq!(Scope::default(), Scope::All);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Scope::parse("all"), Scope::All);
        assert_eq!(Scope::parse("c2"), Scope::Tenant(TenantId::new("c2")));
        // Case-sensitive: only the exact keyword selects every tenant.
        assert_eq!(Scope::parse("ALL"), Scope::Tenant(TenantId::new("ALL")));
    }

    #[test]
    fn test_includes() {
        let c1 = TenantId::new("c1");
        let c2 = TenantId::new("c2");
        assert!(Scope::All.includes(&c1));
        assert!(Scope::from(c1.clone()).includes(&c1));
        assert!(!Scope::from(c1).includes(&c2));
    }

    #[test]
    fn test_serde_bare_string() {
        assert_eq!(serde_json::to_string(&Scope::All).unwrap(), "\"all\"");
        let scope: Scope = serde_json::from_str("\"c3\"").unwrap();
        assert_eq!(scope.tenant().map(TenantId::as_str), Some("c3"));
    }
}
