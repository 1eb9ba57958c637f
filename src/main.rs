// Entry point: load the CSV once, compute every view, assemble the four
// tabs and hand them to the terminal preview and the optional exporters.
use anyhow::{Context, Result};
use ict_dashboard::cli::Args;
use ict_dashboard::{build_dashboard, loader, output, util, Labels};
use tracing::{debug, error, info};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::FmtSubscriber;

/// `RUST_LOG` wins over the `-v`/`-q` level when set.
fn init_logging(args: &Args) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(args.log_level()).into())
        .from_env_lossy();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let (data, load_report) = loader::load(&args.data)
        .with_context(|| format!("Failed to load {}", args.data.display()))?;
    info!(
        "Processing dataset... ({} rows, {} recognized columns)",
        util::format_int(load_report.total_rows),
        load_report.columns.len()
    );
    debug!("Ignored columns: {:?}", load_report.ignored_columns);

    let labels = Labels::for_language(args.lang);
    let dashboard = build_dashboard(&data, labels);

    output::print_dashboard(&dashboard, args.preview_rows);

    if let Some(path) = &args.json {
        output::write_json(path, &dashboard)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    if let Some(dir) = &args.export_dir {
        output::export_views(dir, &dashboard.views)
            .with_context(|| format!("Failed to export views to {}", dir.display()))?;
    }
    Ok(())
}

fn main() {
    let args = Args::parse_args();
    if let Err(e) = init_logging(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
    debug!("Arguments: {:?}", args);

    if let Err(e) = run(&args) {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
