//! User roles mirrored from the identity provider into `profiles.role`.

use crate::error::CoreError;

/// Role attached to every profile. Stored as TEXT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    SalesManager,
    SalesRep,
    Customer,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::SalesManager => "sales_manager",
            Self::SalesRep => "sales_rep",
            Self::Customer => "customer",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "admin" => Ok(Self::Admin),
            "sales_manager" => Ok(Self::SalesManager),
            "sales_rep" => Ok(Self::SalesRep),
            "customer" => Ok(Self::Customer),
            other => Err(CoreError::Validation(format!("unknown role: {other}"))),
        }
    }

    /// Staff roles may view analytics and internal dashboards.
    pub fn is_staff(self) -> bool {
        matches!(self, Self::Admin | Self::SalesManager | Self::SalesRep)
    }

    /// Managers may see financials and delete inventory.
    pub fn is_manager(self) -> bool {
        matches!(self, Self::Admin | Self::SalesManager)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staff_and_manager_checks() {
        assert!(Role::Admin.is_manager());
        assert!(Role::SalesManager.is_manager());
        assert!(!Role::SalesRep.is_manager());
        assert!(Role::SalesRep.is_staff());
        assert!(!Role::Customer.is_staff());
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!(Role::parse("root").is_err());
        assert_eq!(Role::parse("sales_rep").unwrap(), Role::SalesRep);
    }
}
