mod banner;
mod config;
mod output;
mod progress;
mod prompt;
mod report;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use nxfw_core::config::{ENV_NEXUS_URL, ENV_NXIQ_URL};
use nxfw_core::{
    AuthConfig, FirewallClient, FormatRegistry, HttpClient, NexusClient, PackageFormat,
    PolicyChecker,
};
use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use config::{normalize_url, resolve, NxfwConfig};
use output::Output;
use progress::ProgressManager;
use report::ConsoleReporter;

#[derive(Parser, Debug)]
#[command(name = "nxfw-policy-tester")]
#[command(version)]
#[command(about = "Check that Sonatype Repository Firewall quarantines known-bad packages")]
#[command(after_help = "Credentials are read from NEXUS_USERNAME / NEXUS_PASSWORD \
    (and optionally NXIQ_USERNAME / NXIQ_PASSWORD).")]
struct Args {
    /// Package format to check (e.g. npm, maven2, pypi)
    #[arg(short, long, value_name = "FORMAT")]
    format: Option<String>,

    /// Proxy repository to check against
    #[arg(short, long, value_name = "NAME")]
    repository: Option<String>,

    /// Nexus Repository URL
    #[arg(long, value_name = "URL")]
    nexus_url: Option<String>,

    /// IQ Server URL (discovered from Nexus Repository when omitted)
    #[arg(long, value_name = "URL")]
    iq_url: Option<String>,

    /// Do not ask for confirmation
    #[arg(short, long)]
    yes: bool,

    /// Exit with a non-zero status unless every package behaved as expected
    #[arg(long)]
    strict: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// List the supported package formats and exit
    #[arg(long)]
    list_formats: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run() -> Result<i32> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut output = Output::new();
    output.set_json_mode(args.output == OutputFormat::Json);
    let registry = FormatRegistry::builtin();

    if args.list_formats {
        list_formats(&output, &registry)?;
        return Ok(0);
    }

    banner::print_banner(&output);

    let file_config = match NxfwConfig::load_from_cwd()? {
        Some((path, config)) => {
            output.info(&format!("Using configuration from {}", path.display()));
            config
        }
        None => NxfwConfig::default(),
    };

    let auth = AuthConfig::from_env().context(
        "Set credentials first, e.g. export NEXUS_USERNAME='your_username' NEXUS_PASSWORD='your_password'",
    )?;

    let interactive = !args.yes && std::io::stdin().is_terminal();
    let env = |name: &str| std::env::var(name).ok();

    let format: &'static dyn PackageFormat = match &args.format {
        Some(key) => registry.get(key)?,
        None if interactive => prompt::select_format(&registry)?,
        None => bail!("--format is required in non-interactive mode"),
    };

    let nexus_url = match resolve(
        args.nexus_url.as_deref(),
        &env,
        ENV_NEXUS_URL,
        file_config.nexus.url.as_deref(),
    ) {
        Some(url) => normalize_url(&url)?,
        None if interactive => prompt::input_url("Sonatype Nexus Repository URL")?,
        None => bail!("--nexus-url is required in non-interactive mode"),
    };
    let iq_url = resolve(
        args.iq_url.as_deref(),
        &env,
        ENV_NXIQ_URL,
        file_config.iq.url.as_deref(),
    )
    .map(|url| normalize_url(&url))
    .transpose()?;

    let http_config = file_config.http_client_config();
    let nexus_http = Arc::new(HttpClient::with_config(
        http_config.clone().with_credentials(auth.nexus.clone()),
    )?);
    let iq_http = Arc::new(HttpClient::with_config(
        http_config.with_credentials(auth.iq.clone()),
    )?);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| anyhow::anyhow!("Failed to create async runtime: {}", e))?;

    runtime.block_on(execute(
        &args,
        &output,
        format,
        interactive,
        nexus_url,
        iq_url,
        nexus_http,
        iq_http,
    ))
}

#[allow(clippy::too_many_arguments)]
async fn execute(
    args: &Args,
    output: &Output,
    format: &'static dyn PackageFormat,
    interactive: bool,
    nexus_url: String,
    iq_url: Option<String>,
    nexus_http: Arc<HttpClient>,
    iq_http: Arc<HttpClient>,
) -> Result<i32> {
    let progress = ProgressManager::new(!output.is_json() && std::io::stderr().is_terminal());

    let spinner = progress.create_spinner("Connecting to Nexus Repository...");
    let nexus = NexusClient::connect(nexus_http.clone(), nexus_url.as_str()).await;
    spinner.finish_and_clear();
    let nexus = nexus.context("Failed to authenticate with Nexus Repository, check credentials and URL")?;
    output.success("Successfully authenticated with Nexus Repository");

    let iq_url = match iq_url {
        Some(url) => url,
        None => nexus
            .connected_iq_url()
            .await
            .context("No IQ Server URL given and none configured in Nexus Repository")?,
    };

    let spinner = progress.create_spinner("Connecting to IQ Server...");
    let firewall = FirewallClient::connect(iq_http, iq_url.as_str()).await;
    spinner.finish_and_clear();
    let firewall = firewall.context("Failed to authenticate with IQ Server")?;
    output.success("Successfully authenticated with IQ Server");

    let repository = match &args.repository {
        Some(name) => nexus.proxy_repository(format.name(), name).await?.name,
        None => {
            let proxies = nexus.proxy_repositories(format.name()).await?;
            if interactive {
                prompt::select_repository(&proxies, format.name())?
            } else if let [only] = proxies.as_slice() {
                only.name.clone()
            } else {
                bail!(
                    "{} {} proxy repositories found, choose one with --repository",
                    proxies.len(),
                    format.name()
                );
            }
        }
    };

    report::print_configuration(output, nexus.base_url(), firewall.base_url(), format, &repository);

    if interactive && !prompt::confirm("Proceed with checking packages?")? {
        output.writeln("Check cancelled.");
        return Ok(0);
    }

    let cancel = Arc::new(AtomicBool::new(false));
    let flag = cancel.clone();
    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            if interrupt(&flag) {
                log::warn!("Interrupted again, exiting");
                std::process::exit(130);
            }
            log::warn!("Interrupted, finishing current package (Ctrl-C again to exit)");
        }
    });

    let checker = PolicyChecker::new(
        nexus_http,
        Arc::new(firewall),
        nexus.base_url(),
        repository,
        nexus.repo_host()?,
    )
    .with_cancellation(cancel);

    output.section("Checking Packages");
    let mut reporter = ConsoleReporter::new(output, &progress);
    let run = checker.check_all(format, &mut reporter).await;
    let summary = run.summary();

    if output.is_json() {
        output.json(&serde_json::json!({
            "summary": &summary,
            "results": &run.results,
        }))?;
    } else {
        report::print_summary(output, &summary);
    }

    if run.cancelled {
        return Ok(130);
    }
    if args.strict && !summary.all_expected() {
        return Ok(1);
    }
    Ok(0)
}

/// Record a Ctrl-C. Returns true when the run was already interrupted.
fn interrupt(flag: &AtomicBool) -> bool {
    flag.swap(true, Ordering::SeqCst)
}

fn list_formats(output: &Output, registry: &FormatRegistry) -> Result<()> {
    if output.is_json() {
        let formats: Vec<_> = registry
            .formats()
            .iter()
            .map(|f| {
                serde_json::json!({
                    "key": f.name(),
                    "name": f.display_name(),
                    "packages": f.packages().len(),
                })
            })
            .collect();
        return output.json(&formats);
    }

    for format in registry.formats() {
        println!(
            "{:<12} {:<12} {} packages",
            format.name(),
            format.display_name(),
            format.packages().len()
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}
