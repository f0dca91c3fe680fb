//! Interactive prompts, used for values not given on the command line.

use anyhow::{bail, Context, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use nxfw_core::{FormatRegistry, PackageFormat, RepositorySummary};

use crate::config::normalize_url;

pub fn select_format(registry: &FormatRegistry) -> Result<&'static dyn PackageFormat> {
    let items: Vec<&str> = registry.formats().iter().map(|f| f.display_name()).collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select package format")
        .items(&items)
        .default(0)
        .interact_opt()
        .context("Failed to show selection prompt")?;

    match selection {
        Some(idx) => Ok(registry.formats()[idx]),
        None => bail!("No package format selected"),
    }
}

pub fn select_repository(repositories: &[RepositorySummary], format: &str) -> Result<String> {
    if let [only] = repositories {
        return Ok(only.name.clone());
    }

    let items: Vec<&str> = repositories.iter().map(|r| r.name.as_str()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Select {} proxy repository", format))
        .items(&items)
        .default(0)
        .interact_opt()
        .context("Failed to show selection prompt")?;

    match selection {
        Some(idx) => Ok(repositories[idx].name.clone()),
        None => bail!("No repository selected"),
    }
}

pub fn input_url(prompt: &str) -> Result<String> {
    let url: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .validate_with(|input: &String| normalize_url(input).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;
    normalize_url(&url)
}

pub fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(true)
        .interact()?)
}
