mod cli;
mod command;
mod command_result;
mod commands;
mod logging;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;
use std::process::ExitCode;

#[cfg(test)]
mod tests;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> ExitCode {
    let mut cli = Cli::parse();
    logging::init(cli.verbose);

    let Some(command) = cli.cmd.take() else {
        return match cli.run_default().await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e:#}");
                ExitCode::FAILURE
            },
        };
    };

    let result = command.run(cli).await;
    if let Some(stdout) = result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}");
    }
    result.exit_code
}
