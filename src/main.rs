//! MedScreen - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::Path;

use medscreen::cli::{Args, Commands, Verbosity};
use medscreen::config::Config;
use medscreen::doctor::Doctor;
use medscreen::execution;
use medscreen::repl::{DisplayManager, ScreenSession};
use medscreen::{Domain, ModelRegistry};

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let models_dir = args
        .models_dir
        .clone()
        .unwrap_or_else(|| config.models_dir());

    match &args.command {
        Some(Commands::Domains) => {
            show_domains();
            Ok(())
        }
        Some(Commands::Config) => {
            show_config(&config, &models_dir);
            Ok(())
        }
        Some(Commands::Doctor) => run_doctor(&models_dir),
        Some(Commands::Predict { domain, values }) => {
            run_predict(&args, &models_dir, domain, values)
        }
        Some(Commands::Start) | None => run_interactive(&args, &config, &models_dir),
    }
}

/// Load the registry; a failure here is fatal by design
fn load_registry(models_dir: &Path, quiet: bool) -> Result<ModelRegistry> {
    let display = DisplayManager::new();
    let spinner = if quiet {
        None
    } else {
        Some(display.start_loading("Loading models..."))
    };

    let registry = ModelRegistry::load(models_dir).with_context(|| {
        format!(
            "Startup failed: could not load models from {}",
            models_dir.display()
        )
    });

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    registry
}

/// Interactive session: banner, menu loop, goodbye
fn run_interactive(args: &Args, config: &Config, models_dir: &Path) -> Result<()> {
    let registry = load_registry(models_dir, args.verbosity() == Verbosity::Quiet)?;

    let mut session = ScreenSession::new()?;
    session.set_verbose(matches!(
        args.verbosity(),
        Verbosity::Verbose | Verbosity::VeryVerbose
    ));

    if config.ui.show_banner && args.verbosity() != Verbosity::Quiet {
        session.show_welcome(clap::crate_version!());
    }

    session.run(&registry)
}

/// One-shot prediction from argv, sharing the interactive path's execution
fn run_predict(args: &Args, models_dir: &Path, domain: &str, values: &[String]) -> Result<()> {
    let domain = Domain::parse(domain).with_context(|| {
        format!("Unknown domain '{domain}'. Expected diabetes, heart, or parkinsons.")
    })?;

    let registry = load_registry(models_dir, true)?;
    let display = DisplayManager::new();

    let record = execution::run_screening(&registry, domain, values, &display)?;
    display.show_debug(
        &format!("{} screening took {}ms", domain, record.duration_ms),
        args.verbosity() != Verbosity::Quiet && args.verbose > 0,
    );

    if !record.success {
        std::process::exit(1);
    }
    Ok(())
}

/// Artifact diagnostics; exit code mirrors overall health
fn run_doctor(models_dir: &Path) -> Result<()> {
    let doctor = Doctor::new(models_dir.to_path_buf());
    let checks = doctor.run_diagnostics();
    Doctor::display_results(&checks);

    if !Doctor::overall_status(&checks) {
        std::process::exit(1);
    }
    Ok(())
}

/// List every domain with its ordered input fields
fn show_domains() {
    for domain in Domain::ALL {
        println!("\n{}", domain.title().bold().cyan());
        println!("{}", "-".repeat(40).cyan());
        for (i, label) in domain.field_labels().iter().enumerate() {
            println!("  {:>2}. {}", (i + 1).to_string().cyan(), label);
        }
    }
    println!();
}

/// Display the effective configuration
fn show_config(config: &Config, models_dir: &Path) {
    println!("\n{}", "MedScreen Configuration".bold().cyan());
    println!("{}", "-".repeat(40).cyan());
    match Config::config_path() {
        Ok(path) => println!("  Config file:  {}", path.display()),
        Err(_) => println!("  Config file:  (unavailable)"),
    }
    println!("  Models dir:   {}", models_dir.display());
    println!("  Show banner:  {}", config.ui.show_banner);
    println!();
}
