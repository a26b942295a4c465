//! The three file paths a run works with. They are fixed values, optionally
//! replaced through the environment; there are no command line options.
use std::{env, ffi::OsString, path::PathBuf};

/// Default full list
pub const FULL_LIST: &str = "french-names.txt";
/// Default exclusion list
pub const EXCLUSION_LIST: &str = "french-names-0.txt";
/// Default output
pub const OUTPUT: &str = "french-names-1.txt";

/// Where to read the two lists from and where to write the result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Lines that may be written
    pub full_list: PathBuf,
    /// Lines that suppress matching lines of `full_list`
    pub exclusion_list: PathBuf,
    /// Created or truncated, then filled with the surviving lines
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            full_list: PathBuf::from(FULL_LIST),
            exclusion_list: PathBuf::from(EXCLUSION_LIST),
            output: PathBuf::from(OUTPUT),
        }
    }
}

impl Config {
    /// The default paths, each replaced by `LISTDIFF_FULL_LIST`,
    /// `LISTDIFF_EXCLUSION_LIST` or `LISTDIFF_OUTPUT` if that variable is set
    /// and non-empty.
    #[must_use]
    pub fn from_env() -> Self {
        Config::from_lookup(|name| env::var_os(name))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        let path = |name: &str, default: PathBuf| match lookup(name) {
            Some(value) if !value.is_empty() => PathBuf::from(value),
            _ => default,
        };
        let Config { full_list, exclusion_list, output } = Config::default();
        Config {
            full_list: path("LISTDIFF_FULL_LIST", full_list),
            exclusion_list: path("LISTDIFF_EXCLUSION_LIST", exclusion_list),
            output: path("LISTDIFF_OUTPUT", output),
        }
    }
}
