use clap::Parser;
use proxyprint::{
    LayoutConfig, POINTS_PER_INCH, PipelineConfig, PipelineError, Placement, ProxyPipeline,
    RunReport, ScryfallClient,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Turn a decklist into a print-ready PDF of proxy card images.
#[derive(Parser, Debug)]
#[command(name = "proxyprint", version)]
struct Cli {
    /// Path to the decklist text file ("4 Lightning Bolt", "3x Mountain", ...).
    decklist: PathBuf,

    /// Output PDF path.
    #[arg(short, long, default_value = "proxies.pdf")]
    output: PathBuf,

    /// Card shrink factor; the default leaves 5% cut tolerance.
    #[arg(long, default_value_t = 0.95)]
    scale: f32,

    /// Page margin in inches.
    #[arg(long, default_value_t = 0.5)]
    margin: f32,

    /// Center the card grid on the page instead of anchoring it at the margin.
    #[arg(long)]
    centered: bool,

    /// Abort on the first lookup failure instead of skipping the card.
    #[arg(long)]
    strict: bool,

    /// More diagnostics on stderr; repeat for debug output.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(&cli) {
        Ok(report) => {
            for diagnostic in &report.diagnostics {
                eprintln!("{diagnostic}");
            }
            println!(
                "{} cards requested, {} images placed on {} page(s), {} skipped -> {}",
                report.requested,
                report.placed,
                report.pages,
                report.skipped,
                cli.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<RunReport, PipelineError> {
    let decklist = std::fs::read_to_string(&cli.decklist)?;

    let config = PipelineConfig {
        layout: LayoutConfig {
            scale: cli.scale,
            margin: cli.margin * POINTS_PER_INCH,
            placement: if cli.centered {
                Placement::Centered
            } else {
                Placement::MarginAnchored
            },
            ..LayoutConfig::default()
        },
        strict_lookup: cli.strict,
    };

    let resolver = ScryfallClient::new()?;
    ProxyPipeline::new(config).generate_to_file(&decklist, &resolver, &cli.output)
}
