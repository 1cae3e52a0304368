pub(crate) mod round_trip;

use crate::Cli;
use crate::CommandResult;
pub(crate) use round_trip::RoundTripCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    /// Parses and prints GraphQL files, reporting any file that does not
    /// print back byte for byte.
    RoundTrip(Box<RoundTripCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::RoundTrip(cmd) => cmd.run(cli).await
        }
    }
}
