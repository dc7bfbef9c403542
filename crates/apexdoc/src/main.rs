use clap::Parser;
use colored::Colorize;
use std::io;
use std::process::ExitCode;

use apexdoc::*;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => return report(&e),
    };

    if let Err(e) = logging::init(&config) {
        eprintln!("{} failed to initialize logging: {e:#}", "warning:".yellow().bold());
    }

    match execute(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

fn execute(cli: &Cli, config: &Config) -> Result<()> {
    let path: QueryPath = cli.path.parse()?;
    let resolver = Resolver::load(&config.toc_path, config.resolver_settings())?;
    let opener = SystemOpener::new(config.browser.clone());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    app::run(&resolver, &path, cli.mode(), &mut out, &opener)
}

fn report(error: &ApexDocError) -> ExitCode {
    tracing::debug!(?error, "Command failed");
    eprintln!("{} {error}", "error:".red().bold());
    ExitCode::from(error.exit_code())
}
