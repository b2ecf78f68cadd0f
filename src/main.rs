use anyhow::Context;
use clap::{CommandFactory, Parser};
use std::io::Write;
use typ_tmpl::cli::Cli;
use typ_tmpl::{commands, exit_codes, logging, version, AppBuilder, Settings};

fn main() {
    logging::init();

    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            tracing::debug!(error = ?err, "fatal");
            eprintln!("Error: {:#}", err);
            std::process::exit(exit_codes::FAILURE);
        }
    }
}

/// Run the command, then flush stdout before `process::exit` skips destructors
fn run() -> anyhow::Result<i32> {
    let code = execute()?;
    std::io::stdout().flush().context("flush stdout")?;
    Ok(code)
}

fn execute() -> anyhow::Result<i32> {
    let cli = Cli::parse();
    let settings = Settings::load().context("load settings")?;

    if cli.version {
        println!("{}", version::version_line(&settings.app_name));
        return Ok(exit_codes::OK);
    }

    let Some(command) = cli.command else {
        Cli::command().print_help().context("print help")?;
        return Ok(exit_codes::OK);
    };

    let ctx = AppBuilder::new(settings)
        .build()
        .context("initialize application")?;

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    commands::run(&ctx, &command, &mut stdout.lock(), &mut stderr.lock())
}
