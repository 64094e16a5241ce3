use std::io;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use casemap_cli::pipeline::{resolve, suggest};
use casemap_cli::report::{
    render_validation, resolution_table, suggestion_table, suggestions_json,
};
use casemap_ingest::{
    load_mapping_config, load_target_values, read_import_csv, save_mapping_config,
    write_import_csv,
};
use casemap_map::validate_mappings;
use casemap_model::MappingConfig;

use crate::cli::{ResolveArgs, SuggestArgs, ValidateArgs};

pub fn run_suggest(args: &SuggestArgs) -> Result<()> {
    let _span = info_span!("suggest", field = args.field.as_str()).entered();

    let batch = read_import_csv(&args.input).context("read import csv")?;
    let targets = load_target_values(&args.targets).context("load picklists")?;
    let base = match &args.config {
        Some(path) => load_mapping_config(path).context("load mapping config")?,
        None => MappingConfig::default(),
    };

    let outcome = suggest(&batch, &args.column, args.field, &targets, base)?;
    info!(
        rows = batch.records.len(),
        distinct = outcome.distinct,
        "suggested mappings"
    );

    if let Some(output) = &args.output {
        save_mapping_config(output, &outcome.config).context("write mapping config")?;
        info!(path = %output.display(), "wrote mapping config");
    }

    if args.json {
        println!(
            "{}",
            suggestions_json(&outcome.suggestions).context("serialize suggestions")?
        );
    } else {
        println!("{}", suggestion_table(outcome.field, &outcome.suggestions));
    }
    Ok(())
}

/// Returns whether the config is valid.
pub fn run_validate(args: &ValidateArgs) -> Result<bool> {
    let config = load_mapping_config(&args.config).context("load mapping config")?;
    let targets = load_target_values(&args.targets).context("load picklists")?;
    let result = validate_mappings(&config, &targets);
    println!("{}", render_validation(&result));
    Ok(result.is_valid)
}

/// Returns false when validation errors blocked the import.
pub fn run_resolve(args: &ResolveArgs) -> Result<bool> {
    let _span = info_span!("resolve", input = %args.input.display()).entered();

    let mut batch = read_import_csv(&args.input).context("read import csv")?;
    let config = load_mapping_config(&args.config).context("load mapping config")?;
    let targets = load_target_values(&args.targets).context("load picklists")?;

    let outcome = resolve(
        &mut batch,
        &config,
        &targets,
        &args.columns(),
        args.unmapped_action,
    )?;
    if outcome.is_blocked() || outcome.validation.has_warnings() {
        eprintln!("{}", render_validation(&outcome.validation));
    }
    if outcome.is_blocked() {
        warn!(
            errors = outcome.validation.errors.len(),
            "mapping config has errors; import blocked"
        );
        return Ok(false);
    }

    match &args.output {
        Some(path) => {
            write_import_csv(path, &batch).context("write resolved csv")?;
            info!(path = %path.display(), rows = batch.records.len(), "wrote resolved csv");
        }
        None => batch
            .write_to(io::stdout().lock())
            .context("write resolved csv")?,
    }

    eprintln!("{}", resolution_table(&outcome.reports));
    for report in &outcome.reports {
        if !report.to_create.is_empty() {
            eprintln!(
                "{} values to create: {}",
                report.field,
                report.to_create.join(", ")
            );
        }
    }
    Ok(true)
}
