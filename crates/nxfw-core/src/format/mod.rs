//! Package format drivers.
//!
//! One driver per proxy repository format:
//! - Cargo, Conda, CRAN (R), Docker, Go modules, HuggingFace
//! - Maven, npm, NuGet, PyPI
//!
//! Each driver owns its catalog of test packages and knows how its format
//! lays out download paths under `{base}/repository/{repo}/`.

mod cargo;
mod conda;
mod cran;
mod docker;
mod driver;
mod golang;
mod huggingface;
mod maven;
mod npm;
mod nuget;
mod pypi;
mod registry;

pub use cargo::CargoFormat;
pub use conda::CondaFormat;
pub use cran::CranFormat;
pub use docker::{docker_label, DockerFormat};
pub use driver::PackageFormat;
pub use golang::GolangFormat;
pub use huggingface::HuggingFaceFormat;
pub use maven::{split_maven_name, MavenFormat};
pub use npm::NpmFormat;
pub use nuget::NuGetFormat;
pub use pypi::PyPiFormat;
pub use registry::FormatRegistry;
