//! Format driver trait.

use crate::package::Package;

/// Trait for package format drivers
///
/// Implementations are stateless and every method is a pure function of its
/// arguments: no I/O happens while building URLs or labels.
pub trait PackageFormat: Send + Sync {
    /// Repository format key as reported by Nexus Repository (`maven2`, `npm`, ...)
    fn name(&self) -> &'static str;

    /// Human-readable name for menus
    fn display_name(&self) -> &'static str;

    /// Test packages, in report order
    fn packages(&self) -> &'static [Package];

    /// Proxy download URL for a package.
    ///
    /// Returns an empty string when the package name cannot be mapped onto the
    /// format's layout.
    fn build_url(&self, base_url: &str, repo_name: &str, pkg: &Package) -> String;

    /// Label for console output. Cosmetic only.
    fn format_label(&self, pkg: &Package) -> String;
}
