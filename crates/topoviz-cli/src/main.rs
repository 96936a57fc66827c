use std::env;
use std::ffi::OsString;
use std::str::FromStr;
use topoviz::layout::Algorithm;
use topoviz::{PipelineOptions, ResolvedPaths, render_file, resolve_paths};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Config(String),
    Topoviz(topoviz::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Config(msg) => write!(f, "configuration error: {msg}"),
            CliError::Topoviz(err) => write!(f, "{err}"),
        }
    }
}

impl From<topoviz::Error> for CliError {
    fn from(value: topoviz::Error) -> Self {
        Self::Topoviz(value)
    }
}

fn usage() -> &'static str {
    "topoviz\n\
\n\
USAGE:\n\
  topoviz [<topology_file>] [<svg_file>]\n\
\n\
NOTES:\n\
  - <topology_file> defaults to topology.graphml, <svg_file> to graph.svg.\n\
  - The output format follows the <svg_file> extension: svg, png, jpg/jpeg or pdf.\n\
\n\
ENVIRONMENT:\n\
  TOPOVIZ_LAYOUT  lgl (default), fr, circle, grid, random, auto\n\
  TOPOVIZ_SEED    layout seed (default 0)\n\
  TOPOVIZ_LOG     tracing filter (default warn)\n\
"
}

struct Config {
    layout: String,
    seed: u64,
    log: String,
}

impl Config {
    fn from_env() -> Self {
        let layout = env::var("TOPOVIZ_LAYOUT").unwrap_or_else(|_| "lgl".to_string());

        let seed = env::var("TOPOVIZ_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0);

        let log = env::var("TOPOVIZ_LOG").unwrap_or_else(|_| "warn".to_string());

        Self { layout, seed, log }
    }

    fn pipeline(&self) -> Result<PipelineOptions, CliError> {
        let layout = Algorithm::from_str(&self.layout)
            .map_err(|err| CliError::Config(err.to_string()))?
            .with_seed(self.seed);
        Ok(PipelineOptions {
            layout,
            ..Default::default()
        })
    }
}

fn parse_args(argv: &[OsString]) -> Result<ResolvedPaths, CliError> {
    if argv
        .iter()
        .skip(1)
        .any(|a| a.as_os_str() == "-h" || a.as_os_str() == "--help")
    {
        return Err(CliError::Usage(usage()));
    }
    Ok(resolve_paths(argv))
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(paths: ResolvedPaths, config: &Config) -> Result<(), CliError> {
    let options = config.pipeline()?;
    tracing::info!(
        input = %paths.input.display(),
        output = %paths.output.display(),
        layout = options.layout.name(),
        "rendering topology"
    );
    render_file(&paths.input, &paths.output, &options)?;
    Ok(())
}

fn main() {
    let paths = match parse_args(&env::args_os().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let config = Config::from_env();
    init_tracing(&config.log);

    if let Err(err) = run(paths, &config) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
