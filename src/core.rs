use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::cli::{Action, Args};
use crate::client::{FetchResponse, RequestClient};
use crate::config::{discover_config_files, root_dir, Catalog, Settings};
use crate::context::Environment;
use crate::errors::{Result, TurlError};
use crate::logging::{self, LogSink};
use crate::signals;
use crate::status::ExitStatus;
use crate::tui::{run_tui, App};

/// How often a running request checks the interrupt flag
const INTERRUPT_POLL: Duration = Duration::from_millis(50);

/// Main entry point for the CLI.
///
/// Handles argument parsing, logging and configuration loading, then
/// dispatches to the selected action (list, resolve, run or the TUI).
pub fn run(args: Vec<String>, mut env: Environment) -> ExitStatus {
    if let Some(name) = args.first() {
        if let Some(basename) = std::path::Path::new(name).file_stem() {
            env.program_name = basename.to_string_lossy().to_string();
        }
    }

    let parsed = match Args::try_parse_from(&args) {
        Ok(args) => args,
        Err(e) => {
            e.print().ok();
            return if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion {
                ExitStatus::Success
            } else {
                ExitStatus::Error
            };
        }
    };

    let sink = LogSink::select(parsed.log_file.clone(), parsed.action() == Action::Tui);
    if let Err(e) = logging::init(parsed.verbose, parsed.log_format, sink) {
        eprintln!("Warning: {}", e);
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => return handle_error(TurlError::Io(e)),
    };

    match runtime.block_on(program(parsed, env)) {
        Ok(status) => status,
        Err(e) => handle_error(e),
    }
}

pub async fn program(args: Args, env: Environment) -> Result<ExitStatus> {
    debug!(?args, "Parsed arguments");

    let root = root_dir(&env, args.root.as_deref());
    let settings = load_settings(&args, root.as_ref().ok())?;
    let catalog = load_catalog(&args, root)?;

    match args.action() {
        Action::List => {
            print_catalog(&catalog)?;
            Ok(ExitStatus::Success)
        }
        Action::Resolve { name, explain } => {
            print_resolved(&catalog, args.group.as_deref(), name, explain)?;
            Ok(ExitStatus::Success)
        }
        Action::Run { name } => {
            let client = RequestClient::new(&settings.client)?;
            run_request(&catalog, &client, args.group.as_deref(), name).await
        }
        Action::Tui => {
            if !env.stdout_isatty {
                return Err(TurlError::Terminal(format!(
                    "stdout is not a terminal; try {} --list",
                    env.program_name
                )));
            }
            let client = RequestClient::new(&settings.client)?;
            run_tui(App::new(catalog), client).await?;
            Ok(ExitStatus::Success)
        }
    }
}

/// Settings from `turl.toml`, with CLI overrides applied
fn load_settings(args: &Args, root: Option<&PathBuf>) -> Result<Settings> {
    let mut settings = match root {
        Some(root) => Settings::load(root)?,
        None => Settings::default(),
    };

    if let Some(secs) = args.timeout {
        let timeout = Duration::try_from_secs_f64(secs)
            .ok()
            .filter(|t| !t.is_zero())
            .ok_or_else(|| TurlError::Argument(format!("Invalid timeout: {}", secs)))?;
        settings.client.timeout = timeout;
    }

    Ok(settings)
}

/// Load the files given with `--file`, or every file found in the root
fn load_catalog(args: &Args, root: Result<PathBuf>) -> Result<Catalog> {
    let files = if args.files.is_empty() {
        discover_config_files(&root?)?
    } else {
        args.files.clone()
    };

    let catalog = Catalog::load(&files);
    info!(
        sources = catalog.sources().len(),
        failures = catalog.failures().len(),
        "Loaded catalog"
    );

    // The TUI reports failures in its status line
    if args.action() != Action::Tui {
        for failure in catalog.failures() {
            eprintln!("Warning: skipped {}: {}", failure.path.display(), failure.error);
        }
    }

    Ok(catalog)
}

fn print_catalog(catalog: &Catalog) -> Result<()> {
    let mut out = io::stdout().lock();

    for source in catalog.sources() {
        match source.path {
            Some(ref path) => writeln!(out, "{} ({})", source.display_name(), path.display())?,
            None => writeln!(out, "{}", source.display_name())?,
        }
        for (group_name, group) in &source.config.endpoints {
            writeln!(out, "  {}", group_name)?;
            for (request_name, request) in &group.requests {
                writeln!(
                    out,
                    "    {:<24} {:<7} {}",
                    request_name,
                    request.method(),
                    request.url_template
                )?;
            }
        }
    }

    Ok(())
}

fn print_resolved(catalog: &Catalog, group: Option<&str>, name: &str, explain: bool) -> Result<()> {
    let resolved = catalog.resolve_by_name(group, name)?;
    let mut out = io::stdout().lock();

    writeln!(out, "{}", resolved.url)?;
    if explain {
        for (variable, binding) in resolved.bindings.iter() {
            writeln!(out, "  {} = {} ({})", variable, binding.value, binding.scope)?;
        }
    }

    Ok(())
}

/// Resolve a request by name and send it
pub async fn resolve_and_fetch(
    catalog: &Catalog,
    client: &RequestClient,
    group: Option<&str>,
    name: &str,
    cancel: &CancellationToken,
) -> Result<FetchResponse> {
    let resolved = catalog.resolve_by_name(group, name)?;
    info!(group = %resolved.group, request = %resolved.name, url = %resolved.url, "Resolved request");
    client.send(&resolved, cancel).await
}

async fn run_request(
    catalog: &Catalog,
    client: &RequestClient,
    group: Option<&str>,
    name: &str,
) -> Result<ExitStatus> {
    let cancel = CancellationToken::new();
    let watcher = tokio::spawn(cancel_on_interrupt(cancel.clone()));

    let result = resolve_and_fetch(catalog, client, group, name, &cancel).await;
    watcher.abort();

    match result {
        Ok(response) => {
            eprintln!("{} {}", response.method, response.url);
            eprintln!("{}", response.status_line());
            if !response.is_success() {
                warn!(status = response.status, "Non-success response");
            }
            let mut out = io::stdout().lock();
            writeln!(out, "{}", response.display_body())?;
            Ok(ExitStatus::Success)
        }
        Err(TurlError::Cancelled) => Ok(ExitStatus::Interrupted),
        Err(e) => Err(e),
    }
}

/// Cancel `cancel` once Ctrl+C has been pressed
async fn cancel_on_interrupt(cancel: CancellationToken) {
    loop {
        if signals::was_interrupted() {
            cancel.cancel();
            return;
        }
        tokio::select! {
            _ = cancel.cancelled() => return,
            _ = tokio::time::sleep(INTERRUPT_POLL) => {}
        }
    }
}

fn handle_error(error: TurlError) -> ExitStatus {
    eprintln!("Error: {}", error);

    // All errors return the same exit code (1) following Unix conventions
    ExitStatus::Error
}
