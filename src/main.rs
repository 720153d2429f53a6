use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use indicatif::{ProgressBar, ProgressFinish, ProgressStyle};
use tokio::runtime::Runtime;
use tokio::signal;

use mrweb::cli::{Cli, Command, CommandFactory, Parser};
use mrweb::config::Config;
use mrweb::logger::init_cli_logger;
use mrweb::Client;

const SPINNER_FINISH_MODE: ProgressFinish = ProgressFinish::AndClear;
const SPINNER_TICK_SECS: f32 = 0.1;

#[inline]
fn build_spinner() -> ProgressBar {
    ProgressBar::new_spinner()
        .with_finish(SPINNER_FINISH_MODE)
        .with_style(
            ProgressStyle::with_template("{spinner:.blue} {msg}")
                .unwrap()
                // For more spinners check out the cli-spinners project:
                // https://github.com/sindresorhus/cli-spinners/blob/master/spinners.json
                // NOTE: use `ascii` only, because cmd/powershell maybe not support unicode.
                .tick_strings(&[".  ", ".. ", "...", " ..", "  .", "   "]),
        )
}

#[inline]
async fn async_main(config: Config, command: Command) -> anyhow::Result<()> {
    let client = Client::from_config(&config).context("failed to build the MrWeb client")?;

    let spinner = build_spinner();
    spinner.set_message(format!("Waiting for {}", client.base_url()));
    spinner.enable_steady_tick(Duration::from_secs_f32(SPINNER_TICK_SECS));
    let output = command.run(&client).await;
    spinner.finish_and_clear();

    output.context("the MrWeb API call failed")?.print()
}

fn main() -> anyhow::Result<ExitCode> {
    // here, if parse fails, the program will be `abort`ed, and no `Drop` will be called,
    // but it's okay, because we don't need to clean up anything.
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let config = cli.config().context("failed to load the config")?;
    let mut command = cli.command;
    // the editor blocks, so ask for missing queries before the runtime starts
    if let Err(err) = command.fill_query_from_editor(&mut Cli::command()) {
        let _ = err.print();
        return Ok(ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1)));
    }

    let runtime = Runtime::new().context("failed to build tokio runtime")?;
    runtime.block_on(async {
        tokio::select! {
            result = async_main(config, command) => {result},
            result = signal::ctrl_c() => {
                result.context("failed to listen for ctrl-c signal")?;
                eprintln!("Ctrl-C received, exiting...");
                Ok(())
            },
        }
    })?;

    Ok(ExitCode::SUCCESS)
}
