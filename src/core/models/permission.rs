use crate::core::errors::{AccordError, Result};

/// Named permissions gating the acceptance ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    /// Required to read which agreements a subject accepted.
    AgreementAccess,
    /// Required to record an acceptance.
    AgreementAccept,
}

/// Registration entry for a permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionInfo {
    pub permission: Permission,
    pub id: &'static str,
    pub label: &'static str,
    pub comment: &'static str,
}

/// Every permission known to Accord. Role definitions may only
/// reference ids listed here.
pub const PERMISSIONS: &[PermissionInfo] = &[
    PermissionInfo {
        permission: Permission::AgreementAccess,
        id: "AGREEMENT_ACCESS",
        label: "Access Agreement",
        comment: "Required to access an Agreement.",
    },
    PermissionInfo {
        permission: Permission::AgreementAccept,
        id: "AGREEMENT_ACCEPT",
        label: "Accept Agreement",
        comment: "Required to accept an Agreement.",
    },
];

impl Permission {
    /// Look up the registration entry for this permission.
    pub fn info(self) -> &'static PermissionInfo {
        match self {
            Self::AgreementAccess => &PERMISSIONS[0],
            Self::AgreementAccept => &PERMISSIONS[1],
        }
    }

    /// Stable identifier, e.g. `AGREEMENT_ACCEPT`.
    pub fn id(self) -> &'static str {
        self.info().id
    }

    /// Parse a permission id as written in `config.toml`.
    pub fn from_id(id: &str) -> Result<Self> {
        PERMISSIONS
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.permission)
            .ok_or_else(|| AccordError::InvalidConfig {
                detail: format!(
                    "Unknown permission '{id}'. Known permissions: {}",
                    PERMISSIONS
                        .iter()
                        .map(|p| p.id)
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            })
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
