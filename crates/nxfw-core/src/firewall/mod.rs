//! Sonatype Repository Firewall (IQ Server) integration.
//!
//! - [`FirewallClient`] talks to IQ Server
//! - [`Coordinates`] turns the loosely typed coordinate maps of the
//!   quarantine listing into per-format identities
//! - [`reconcile`] decides whether a blocked download was quarantined, and
//!   under which policy

mod client;
mod coordinates;
mod model;
mod reconcile;

pub use client::{FirewallClient, QuarantineSource};
pub use coordinates::Coordinates;
pub use model::{ComponentIdentifier, QuarantineList, QuarantinedComponent};
pub use reconcile::{evaluate, reconcile, QuarantineQuery, QuarantineStatus};
