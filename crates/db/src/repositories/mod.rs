//! Per-table repositories. Each is a stateless struct of associated
//! functions taking the pool (or a transaction) explicitly.

pub mod activity_repo;
pub mod analytics_repo;
pub mod customer_repo;
pub mod invoice_repo;
pub mod lead_repo;
pub mod profile_repo;
pub mod property_repo;
pub mod property_unit_repo;
pub mod reservation_repo;
pub mod session_repo;

pub use activity_repo::ActivityRepo;
pub use analytics_repo::{AnalyticsRepo, LeadStats, StatusCount};
pub use customer_repo::CustomerRepo;
pub use invoice_repo::InvoiceRepo;
pub use lead_repo::LeadRepo;
pub use profile_repo::ProfileRepo;
pub use property_repo::PropertyRepo;
pub use property_unit_repo::PropertyUnitRepo;
pub use reservation_repo::ReservationRepo;
pub use session_repo::SessionRepo;
