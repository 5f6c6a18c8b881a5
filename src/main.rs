use clap::Parser;
use cover_analyzer::config::load_config_or_default;
use cover_analyzer::logging::{init_logging, new_run_id, RunSpan};
use cover_analyzer::*;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cover-analyzer")]
#[command(about = "Reads archive identifiers on stdin and writes an HTML cover usefulness report to stdout")]
#[command(version = "0.1.0")]
struct Cli {
    /// Classification strategy
    #[arg(short, long, value_enum, default_value = "edge")]
    strategy: Strategy,

    /// Configuration file (TOML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write identifiers that should use their title page (edge strategy)
    #[arg(long)]
    title_page_ids: Option<PathBuf>,

    /// Also write every result as JSON
    #[arg(long)]
    results_json: Option<PathBuf>,

    /// Write the effective configuration to this file (.json or TOML) and exit
    #[arg(long)]
    dump_config: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config_or_default(cli.config.as_deref());
    if let Some(path) = cli.dump_config {
        config.save_to_file(&path)?;
        eprintln!("Configuration written to {}", path.display());
        return Ok(());
    }

    let _log_guard = init_logging(&config.logging, cli.verbose)?;

    let classifier = cli.strategy.build(&config.classifier);
    let source = HttpImageSource::new(&config.fetch);
    let driver = Driver::new(&source, classifier.as_ref());

    let run = RunSpan::new(new_run_id(), classifier.name());
    let _entered = run.span().clone().entered();

    let mut progress = Progress::new(io::stderr());
    progress.start()?;

    let report = if classifier.records_title_pages() {
        let path = cli
            .title_page_ids
            .unwrap_or_else(|| config.report.title_page_ids_file.clone());
        let mut list = TitlePageList::create(&path)?;
        let report = driver.run(io::stdin().lock(), &mut progress, Some(&mut list));
        let recorded = list.len();
        list.finish()?;
        tracing::info!(path = %path.display(), recorded, "Title page list written");
        report?
    } else {
        driver.run(io::stdin().lock(), &mut progress, None::<&mut TitlePageList<io::Sink>>)?
    };

    let renderer = HtmlRenderer::new(source.urls().clone(), &config.report.title);
    let mut stdout = io::stdout().lock();
    renderer.write(&report, &mut stdout)?;
    stdout.flush()?;

    if let Some(path) = cli.results_json {
        save_results_json(&report, &path)?;
    }

    tracing::info!(
        useful = report.count(Decision::Useful),
        not_useful = report.count(Decision::NotUseful),
        not_found = report.count(Decision::PlaceholderNotFound),
        errors = report.count(Decision::FetchError),
        "Report rendered"
    );
    run.finish(report.rows().len());

    progress.done()?;
    Ok(())
}
