//! Package identities and the policy classifications they are expected to trigger.

mod identity;
mod policy;

pub use identity::Package;
pub use policy::{PolicyName, Severity};
