use std::io;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use scrub_core::CleaningSession;
use scrub_ingest::{read_dataset, write_view};
use scrub_model::{EngineOptions, OutputFormat};
use tracing::{info, info_span};

use scrub_cli::config::resolve_options;
use scrub_cli::shell::{default_export_path, run_shell};
use scrub_cli::summary::{
    render_dates, render_history, render_outcome, render_preview, render_quality,
    render_row_counts, render_suggestions, render_values,
};

use crate::cli::{CleanArgs, Cli, Command, FilterArgs, PreviewArgs, ProfileArgs, ValuesArgs};

pub fn run(cli: &Cli) -> Result<()> {
    let working_dir = std::env::current_dir().context("resolve working directory")?;
    let options = resolve_options(cli.config.as_deref(), &working_dir)?;
    match &cli.command {
        Command::Profile(args) => run_profile(args, options),
        Command::Suggest(args) => {
            let session = open_session(&args.file, options)?;
            println!("{}", render_suggestions(&session.suggestions()));
            Ok(())
        }
        Command::Dates(args) => {
            let session = open_session(&args.file, options)?;
            println!("{}", render_dates(session.date_columns()));
            Ok(())
        }
        Command::Values(args) => run_values(args, options),
        Command::Preview(args) => run_preview(args, options),
        Command::Clean(args) => run_clean(args, options),
        Command::Session(args) => {
            let mut session = open_session(&args.file, options)?;
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            run_shell(&mut session, &args.file, stdin.lock(), &mut stdout)
        }
    }
}

fn open_session(path: &Path, options: EngineOptions) -> Result<CleaningSession> {
    let dataset = read_dataset(path).with_context(|| format!("load {}", path.display()))?;
    Ok(CleaningSession::new(dataset, options))
}

fn apply_filter(session: &mut CleaningSession, filter: &FilterArgs) -> Result<()> {
    if let Some((column, start, end)) = filter.request() {
        session
            .set_filter(column, start, end)
            .context("apply date filter")?;
    }
    Ok(())
}

fn run_profile(args: &ProfileArgs, options: EngineOptions) -> Result<()> {
    let mut session = open_session(&args.input.file, options)?;
    apply_filter(&mut session, &args.filter)?;
    println!("{}", render_quality(&session.quality_report()));
    println!("{}", render_row_counts(session.row_counts()));
    Ok(())
}

fn run_values(args: &ValuesArgs, options: EngineOptions) -> Result<()> {
    let mut session = open_session(&args.input.file, options)?;
    apply_filter(&mut session, &args.filter)?;
    let values = session.column_values(&args.column)?;
    println!("{}", render_values(&values));
    Ok(())
}

fn run_preview(args: &PreviewArgs, options: EngineOptions) -> Result<()> {
    let mut session = open_session(&args.input.file, options)?;
    apply_filter(&mut session, &args.filter)?;
    let rows = args.rows.unwrap_or(session.options().preview_rows);
    let preview = session.preview_rows(rows);
    println!("{}", render_preview(&preview));
    println!("{}", render_row_counts(session.row_counts()));
    Ok(())
}

fn run_clean(args: &CleanArgs, options: EngineOptions) -> Result<()> {
    let source = &args.input.file;
    let clean_span = info_span!("clean", file = %source.display());
    let _clean_guard = clean_span.enter();
    let start = Instant::now();

    let format: OutputFormat = args.format.map_or(options.export.format, Into::into);
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_export_path(source, format, &options.export.suffix));

    let mut session = open_session(source, options)?;
    for id in &args.apply {
        let outcome = session
            .apply(id)
            .with_context(|| format!("apply {id}"))?;
        println!("{}", render_outcome(&outcome));
    }
    if args.all {
        let outcome = session.apply_all().context("apply all suggestions")?;
        println!("{}", render_outcome(&outcome));
    }
    apply_filter(&mut session, &args.filter)?;

    println!("History:");
    println!("{}", render_history(&session.history_labels()));
    println!("{}", render_row_counts(session.row_counts()));

    if args.dry_run {
        println!("Dry run: nothing written");
        return Ok(());
    }
    let view = session.view();
    write_view(&view, format, &output)
        .with_context(|| format!("export {}", output.display()))?;
    info!(
        output = %output.display(),
        rows = view.len(),
        steps = session.history_labels().len(),
        duration_ms = start.elapsed().as_millis(),
        "clean complete"
    );
    println!("Exported {} rows to {}", view.len(), output.display());
    Ok(())
}
