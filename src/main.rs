use clap::Parser;
use pka_reader::{run, Options};
use std::io;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "pka-reader", version, about = "Extract the password hash stored in a PKA file")]
struct Cli {
    /// Path to PKA
    #[arg(long)]
    pka: PathBuf,

    /// Be verbose
    #[arg(short, long)]
    verbose: bool,

    /// Path where to save XML
    #[arg(long)]
    xml: Option<PathBuf>,
}

impl From<Cli> for Options {
    fn from(cli: Cli) -> Self {
        Options {
            pka: cli.pka,
            verbose: cli.verbose,
            xml: cli.xml,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = Options::from(Cli::parse());
    let stdout = io::stdout();

    if let Err(e) = run(&options, &mut stdout.lock()) {
        eprintln!("ERROR: Failed to extract password hash from PKA file");
        eprintln!("  {}", e);
        std::process::exit(1);
    }
}
