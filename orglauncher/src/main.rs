use clap::Parser;
use std::env;

#[derive(Debug, Parser)]
#[command(version, about = "launcher for the organizing script")]
pub struct Cli {
    #[arg(short = 'v', long = "verbose", action= clap::ArgAction::Count, help="verbose level")]
    verbose: u8,
    #[command(flatten)]
    launcher: launcher::Launcher,
}

fn main() -> anyhow::Result<()> {
    let matches = Cli::parse();

    match matches.verbose {
        1 => env::set_var("RUST_LOG", "info"),
        2 => env::set_var("RUST_LOG", "debug"),
        3 => env::set_var("RUST_LOG", "trace"),
        _ => {
            if env::var("RUST_LOG").is_err() {
                env::set_var("RUST_LOG", "warn")
            }
        }
    }

    pretty_env_logger::init();

    matches.launcher.run()?;

    Ok(())
}
