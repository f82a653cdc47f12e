use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use payroute::application::batch::route_all;
use payroute::domain::ports::RouteSinkBox;
use payroute::interfaces::csv::request_reader::RequestReader;
use payroute::interfaces::csv::route_writer::RouteWriter;
use payroute::interfaces::json::trace_writer::TraceWriter;
use payroute::interfaces::text::trace_renderer::TraceRenderer;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// Input columns plus the chosen route
    Csv,
    /// One JSON object per request with the full trace
    Json,
    /// Human-readable trace
    Text,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payment requests CSV file
    input: PathBuf,

    /// Output format written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = RequestReader::new(file);

    let stdout = io::stdout();
    let mut sink: RouteSinkBox = match cli.format {
        OutputFormat::Csv => Box::new(RouteWriter::new(stdout.lock())),
        OutputFormat::Json => Box::new(TraceWriter::new(stdout.lock())),
        OutputFormat::Text => Box::new(TraceRenderer::new(stdout.lock())),
    };

    route_all(reader.requests(), sink.as_mut()).into_diagnostic()?;

    Ok(())
}
