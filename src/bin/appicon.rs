use std::process::ExitCode;

use clap::Parser;

/// Compose `app_icon.png` onto a 1024x1024 transparent canvas and write
/// `assets/icons/app_icon.png`.
#[derive(Parser, Debug)]
#[command(name = "appicon", version, about)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    match appicon::process_icon(&appicon::IconJob::default()) {
        Ok(report) => {
            for line in report.summary_lines() {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
