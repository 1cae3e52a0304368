use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_lossless::GraphQLLosslessError;
use libgraphql_lossless::ParseInput;
use rayon::prelude::IntoParallelRefIterator;
use rayon::prelude::ParallelIterator;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct RoundTripCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which should print back unchanged.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// What happened to a single file.
#[derive(Debug)]
pub(crate) enum FileOutcome {
    Unchanged,

    /// The printed text differs from the file, first at `offset`.
    Changed {
        offset: usize,
    },

    Failed(anyhow::Error),
}

#[inherent::inherent]
impl RunnableCommand for RoundTripCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let graphql_file_exts = normalize_file_exts(&self.graphql_file_exts);

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut walk_errors: Vec<anyhow::Error> = vec![];
        let mut num_skipped_files = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        walk_errors.push(e.into());
                        continue
                    },
                };

                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue
                }
                if !has_graphql_ext(entry_path, &graphql_file_exts) {
                    log::trace!("Skipping non-graphql file: {entry_path:#?}.");
                    num_skipped_files += 1;
                    continue
                }
                match std::fs::canonicalize(entry_path) {
                    Ok(canonical) => file_paths.push(canonical),
                    Err(e) => walk_errors.push(
                        anyhow::Error::new(e)
                            .context(format!("canonicalizing {entry_path:#?}")),
                    ),
                }
            }
        }

        // A single file argument is taken at its word, whatever its
        // extension.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to round-trip {first_arg_path:#?} even though it \
                doesn't match any of the --graphql-file-exts ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path.to_owned());
            num_skipped_files = 0;
        }

        if !walk_errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors while collecting GraphQL files: {walk_errors:#?}",
                output_utils::RED_X,
            ));
        }

        log::debug!(
            "Found {} GraphQL files to round-trip.",
            file_paths.len(),
        );

        let num_files = file_paths.len();
        let outcomes = match tokio::task::spawn_blocking(
            move || round_trip_files(file_paths)
        ).await {
            Ok(outcomes) => outcomes,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Round-trip worker failed: {e}",
                output_utils::RED_X,
            )),
        };

        let mut report = vec![];
        for (path, outcome) in &outcomes {
            match outcome {
                FileOutcome::Unchanged => (),
                FileOutcome::Changed { offset } => report.push(format!(
                    "  * {}: printed text differs from the file at byte \
                    offset {offset}.",
                    path.display(),
                )),
                FileOutcome::Failed(e) => report.push(format!(
                    "  * {}: {e:#}",
                    path.display(),
                )),
            }
        }

        if report.is_empty() {
            CommandResult::stdout(format_args!(
                concat!(
                    "{} All GraphQL files round-tripped unchanged:\n",
                    "  * Round-tripped {} files.\n",
                    "  * Skipped {} non-graphql files.",
                ),
                output_utils::GREEN_CHECK,
                num_files,
                num_skipped_files,
            ))
        } else {
            CommandResult::stderr(format_args!(
                "{} {} of {} GraphQL files did not round-trip:\n{}",
                output_utils::RED_X,
                report.len(),
                num_files,
                report.join("\n"),
            ))
        }
    }
}

/// Strips any leading `.` so `graphql` and `.graphql` both match what
/// [`Path::extension`] returns.
pub(crate) fn normalize_file_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| ext.trim_start_matches('.').to_owned())
        .filter(|ext| !ext.is_empty())
        .collect()
}

fn has_graphql_ext(path: &Path, graphql_file_exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| graphql_file_exts.contains(ext.to_string_lossy().as_ref()))
        .unwrap_or(false)
}

fn round_trip_files(file_paths: Vec<PathBuf>) -> Vec<(PathBuf, FileOutcome)> {
    file_paths
        .par_iter()
        .map(|path| {
            let outcome = match round_trip_file(path) {
                Ok(outcome) => outcome,
                Err(e) => FileOutcome::Failed(e),
            };
            (path.to_owned(), outcome)
        })
        .collect()
}

fn round_trip_file(path: &Path) -> anyhow::Result<FileOutcome> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    log::trace!("Round-tripping {path:#?} ({} bytes).", source.len());
    Ok(round_trip_source(&source, path)?)
}

/// Parses and prints `source`, comparing the output with the input.
pub(crate) fn round_trip_source(
    source: &str,
    path: &Path,
) -> Result<FileOutcome, GraphQLLosslessError> {
    let document = libgraphql_lossless::parse_source(
        ParseInput::new(source).with_path(path),
    )?;
    let printed = libgraphql_lossless::print(&document);
    Ok(match first_difference(source, &printed) {
        Some(offset) => FileOutcome::Changed { offset },
        None => FileOutcome::Unchanged,
    })
}

/// Byte offset of the first byte at which `a` and `b` differ, or `None`
/// when they are equal.
pub(crate) fn first_difference(a: &str, b: &str) -> Option<usize> {
    if a == b {
        return None;
    }
    let common = a.bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    Some(common)
}
