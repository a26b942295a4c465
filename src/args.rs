//! Code to parse the command line using `clap`. `listdiff` takes no operands:
//! the command line exists for `--help` and `--version`, and anything else is
//! an error.

use clap::Parser;

/// Parse the command line, exiting with a usage message if it isn't empty
/// (apart from `--help` or `--version`, which print and exit successfully).
pub fn parsed() {
    CliArgs::parse();
}

#[derive(Debug, Parser)]
#[command(name = "listdiff", version)]
/// Write the lines of the full list that don't appear in the exclusion list.
///
/// Paths default to french-names.txt (full list), french-names-0.txt
/// (exclusion list) and french-names-1.txt (output), and can be changed with
/// the LISTDIFF_FULL_LIST, LISTDIFF_EXCLUSION_LIST and LISTDIFF_OUTPUT
/// environment variables. Set RUST_LOG to change what is logged to stderr.
struct CliArgs {}
