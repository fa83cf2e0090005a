// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::path::Path;

use sort_priority::build::{read_manifest, resolve_config, run_build, BuildError, BuildOptions};
use sort_priority::logging::init_tracing;
use sort_priority::{ProcessorConfig, SettingsForm, SortDirection, WeightResolver};

mod cli;
use cli::display::{
    error_line, pad_right, row, section_bot, section_mid, section_top, source_badge, themed,
    weight_value, BOLD, GREEN,
};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.log.verbose, cli.log.log_level.as_deref(), cli.log.log_json)
    {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    let result = match cli.command {
        Commands::Index {
            input,
            output,
            config,
            sort,
        } => run_index(&input, &output, config, sort.as_deref()),
        Commands::Settings { input, config } => show_settings(&input, config),
        Commands::Resolve { bundle, config } => resolve(bundle.as_deref(), config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{}", error_line(&e));
        std::process::exit(1);
    }
}

fn run_index(
    input: &str,
    output: &str,
    config_path: Option<std::path::PathBuf>,
    sort: Option<&str>,
) -> Result<(), String> {
    let sort = sort.map(str::parse::<SortDirection>).transpose()?;
    let options = BuildOptions { config_path, sort };

    let summary = run_build(input, output, &options).map_err(|e| e.to_string())?;

    eprintln!();
    eprintln!("{}", themed(GREEN, &[BOLD], "✅ Build complete"));
    eprintln!(
        "   {} documents │ {} weighted │ {} skipped",
        summary.documents, summary.stats.weighted, summary.stats.skipped
    );
    for (weight, count) in &summary.stats.histogram {
        eprintln!("   weight {:>4} │ {} items", weight, count);
    }
    eprintln!("  ✓ {}", summary.output_file.display());
    Ok(())
}

fn show_settings(input: &str, config_path: Option<std::path::PathBuf>) -> Result<(), String> {
    let load = || -> Result<_, BuildError> {
        let manifest = read_manifest(Path::new(input))?;
        let options = BuildOptions {
            config_path,
            sort: None,
        };
        let config = resolve_config(&manifest, &options)?;
        Ok((manifest, config))
    };
    let (manifest, config) = load().map_err(|e| e.to_string())?;

    let form = SettingsForm::build(&manifest.index, &config);

    section_top(&format!("SORT PRIORITY · {}", manifest.index.id));
    row(&format!(
        " Default weight: {}   Entity type: {}",
        weight_value(form.default_weight, 0),
        config.entity_type
    ));
    section_mid("BUNDLES");
    if form.rows.is_empty() {
        row(" (no bundles)");
    }
    for r in &form.rows {
        row(&format!(
            " {} {} {} {}",
            pad_right(&r.bundle, 16),
            pad_right(&r.label, 22),
            weight_value(r.weight, 4),
            source_badge(r.configured)
        ));
    }
    section_bot();
    Ok(())
}

fn resolve(bundle: Option<&str>, config_path: Option<&Path>) -> Result<(), String> {
    let config = match config_path {
        Some(path) => ProcessorConfig::from_path(path).map_err(|e| e.to_string())?,
        None => ProcessorConfig::default(),
    };
    let weight = WeightResolver::new(&config).resolve(bundle);
    println!("{}", weight);
    Ok(())
}
