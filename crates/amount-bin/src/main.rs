//! `amountfmt` entrypoint.
//!
//! Feeds each stdin line to an amount field as the field's current text (one
//! line per keystroke state) and prints the submission value and display
//! string, optionally followed by the render key of every display glyph.
use anyhow::Result;
use clap::Parser;
use core_config::load_from;
use core_field::{AmountField, FieldOptions};
use core_locale::{LocaleFormat, LocaleOptions};
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Once;
use std::time::Instant;
use tracing::{info, trace};
use tracing_appender::non_blocking::WorkerGuard;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "amountfmt", version, about = "Locale-aware amount formatter")]
struct Args {
    /// Locale tag (overrides the config file).
    #[arg(long)]
    locale: Option<String>,
    /// ISO 4217 currency code (overrides the config file).
    #[arg(long)]
    currency: Option<String>,
    /// Maximum fraction digits (defaults to the currency's minor units, else 2).
    #[arg(long = "max-fraction-digits")]
    max_fraction_digits: Option<u8>,
    /// Configuration file path (overrides discovery of `amountfmt.toml`).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the render key of each display glyph.
    #[arg(long)]
    keys: bool,
    /// Write logs to this file instead of stderr.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn configure_logging(log_file: Option<&Path>) -> Option<WorkerGuard> {
    let filter = tracing_subscriber::EnvFilter::from_default_env();
    match log_file {
        Some(path) => {
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
            let dir = dir.unwrap_or_else(|| Path::new("."));
            let name = path.file_name().map(|n| n.to_os_string())?;
            let file_appender = tracing_appender::rolling::never(dir, name);
            let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(nb_writer)
                .try_init()
                .ok()
                .map(|_| guard)
        }
        None => {
            // Global subscriber may already be installed; nothing to keep alive.
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .try_init();
            None
        }
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

/// Config file values with CLI flags layered on top.
fn locale_options(args: &Args, config: &core_config::Config) -> LocaleOptions {
    let mut opts = config.file.locale.options();
    if let Some(tag) = &args.locale {
        opts.locale = tag.clone();
    }
    if let Some(code) = &args.currency {
        opts.currency = Some(code.clone());
    }
    if let Some(digits) = args.max_fraction_digits {
        opts.maximum_fraction_digits = Some(digits);
    }
    opts
}

fn run(args: Args) -> Result<()> {
    let config = load_from(args.config.clone())?;
    let format: LocaleFormat = locale_options(&args, &config).build()?;
    info!(
        target: "runtime.startup",
        locale = format.locale(),
        currency = format.currency(),
        maximum_fraction_digits = format.maximum_fraction_digits(),
        config_override = args.config.is_some(),
        "bootstrap_complete"
    );

    let mut field = AmountField::new(FieldOptions {
        debounce: config.debounce(),
        ..FieldOptions::new(format)
    });
    field.hydrate();

    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());
    let mut lines = 0usize;
    for line in stdin.lock().lines() {
        let line = line?;
        let outcome = field.on_type(&line, Instant::now());
        writeln!(out, "{}\t{}", outcome.submission, outcome.amount.as_string)?;
        if args.keys {
            let separators = *field.separators();
            let keys: Vec<String> = core_keys::keyed_glyphs(&outcome.amount.as_string, &separators)
                .into_iter()
                .map(|g| g.render_key())
                .collect();
            writeln!(out, "\t{}", keys.join(" "))?;
        }
        lines += 1;
    }
    out.flush()?;
    trace!(target: "runtime", lines, "input_exhausted");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = configure_logging(args.log_file.as_deref());
    install_panic_hook();
    info!(target: "runtime", "startup");
    run(args)
}
