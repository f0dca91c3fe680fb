//! Lookup of format drivers by repository format key.

use super::{
    CargoFormat, CondaFormat, CranFormat, DockerFormat, GolangFormat, HuggingFaceFormat,
    MavenFormat, NpmFormat, NuGetFormat, PackageFormat, PyPiFormat,
};
use crate::error::{CheckError, Result};

static BUILTIN_FORMATS: &[&dyn PackageFormat] = &[
    &CargoFormat,
    &CondaFormat,
    &CranFormat,
    &DockerFormat,
    &GolangFormat,
    &HuggingFaceFormat,
    &MavenFormat,
    &NpmFormat,
    &NuGetFormat,
    &PyPiFormat,
];

/// The set of formats offered to the user
#[derive(Clone)]
pub struct FormatRegistry {
    formats: Vec<&'static dyn PackageFormat>,
}

impl FormatRegistry {
    pub fn new(formats: Vec<&'static dyn PackageFormat>) -> Self {
        Self { formats }
    }

    /// Registry with every built-in format
    pub fn builtin() -> Self {
        Self::new(BUILTIN_FORMATS.to_vec())
    }

    pub fn formats(&self) -> &[&'static dyn PackageFormat] {
        &self.formats
    }

    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    /// Find a driver by its repository format key
    pub fn get(&self, key: &str) -> Result<&'static dyn PackageFormat> {
        let key = key.trim();
        self.formats
            .iter()
            .copied()
            .find(|format| format.name() == key)
            .ok_or_else(|| CheckError::UnknownFormat(key.to_string()))
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.formats.iter().map(|format| format.name()).collect()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
