//! Party Domain - business partners and report preferences
//!
//! A party owns an ordered collection of alternative report associations:
//! party-scoped mappings from a registered target model to a preferred
//! report template. Invoice report resolution projects these associations
//! when an invoice's party changes.

pub mod alternative_report;
pub mod error;
pub mod party;
pub mod ports;

pub use alternative_report::AlternativeReportAssociation;
pub use error::PartyError;
pub use party::Party;
pub use ports::PartyPort;
