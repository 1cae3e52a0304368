//! Tests for command-line argument parsing.

use crate::commands::CommandEnum;
use crate::Cli;
use clap::Parser;
use std::path::PathBuf;

/// No sub-command is allowed; `main` prints help in that case.
#[test]
fn parses_without_subcommand() {
    let cli = Cli::try_parse_from(["graphql", "-v"]).unwrap();
    assert!(cli.verbose);
    assert!(cli.cmd.is_none());
}

/// `round-trip` requires at least one path.
#[test]
fn round_trip_requires_paths() {
    assert!(Cli::try_parse_from(["graphql", "round-trip"]).is_err());
}

/// Extensions are comma-delimited and paths are positional.
#[test]
fn round_trip_parses_exts_and_paths() {
    let cli = Cli::try_parse_from([
        "graphql",
        "round-trip",
        "--graphql-file-exts",
        "gql,.graphqls",
        "a.gql",
        "schemas/",
    ]).unwrap();

    let Some(CommandEnum::RoundTrip(cmd)) = cli.cmd else {
        panic!("expected the round-trip command");
    };
    let dbg = format!("{cmd:?}");
    assert!(dbg.contains("\"gql\""), "{dbg}");
    assert!(dbg.contains("\".graphqls\""), "{dbg}");
    assert!(dbg.contains(&format!("{:?}", PathBuf::from("schemas/"))), "{dbg}");
}
