//! Status enums for the entities that carry a lifecycle.
//!
//! Statuses are stored as TEXT in the database (CHECK-constrained in the
//! migration) and travel on the wire as the same snake_case strings, so each
//! enum is string-backed with `as_str` / `parse` helpers rather than a
//! lookup-table id.

use crate::error::CoreError;

macro_rules! define_str_enum {
    (
        $(#[$meta:meta])*
        $name:ident : $label:literal {
            $( $variant:ident = $s:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $variant ),+
        }

        impl $name {
            /// The canonical wire/database string for this status.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $s ),+
                }
            }

            /// Parse a wire/database string, rejecting unknown values.
            pub fn parse(s: &str) -> Result<Self, CoreError> {
                match s {
                    $( $s => Ok(Self::$variant), )+
                    other => Err(CoreError::Validation(format!(
                        concat!("unknown ", $label, " status: {}"),
                        other
                    ))),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

define_str_enum! {
    /// Lifecycle of a property listing.
    PropertyStatus : "property" {
        Available = "available",
        Reserved = "reserved",
        Sold = "sold",
        Maintenance = "maintenance",
    }
}

define_str_enum! {
    /// Lifecycle of an individual unit within a property.
    UnitStatus : "unit" {
        Available = "available",
        Reserved = "reserved",
        Sold = "sold",
    }
}

define_str_enum! {
    /// Lifecycle of a reservation.
    ReservationStatus : "reservation" {
        Pending = "pending",
        Confirmed = "confirmed",
        Cancelled = "cancelled",
        Completed = "completed",
    }
}

define_str_enum! {
    /// Deposit state attached to a reservation.
    DepositStatus : "deposit" {
        Unpaid = "unpaid",
        Paid = "paid",
        Refunded = "refunded",
    }
}

define_str_enum! {
    /// CRM pipeline state of a lead.
    LeadStatus : "lead" {
        New = "new",
        Contacted = "contacted",
        Qualified = "qualified",
        Converted = "converted",
        Lost = "lost",
    }
}

define_str_enum! {
    /// Lifecycle of an invoice.
    InvoiceStatus : "invoice" {
        Draft = "draft",
        Open = "open",
        Paid = "paid",
        Void = "void",
    }
}
