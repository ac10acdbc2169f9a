//! [`CliOptions`] for parsed `clap` matches.
//!
//! Only arguments whose value came from the command line count as detected;
//! defaults and environment fallbacks configured on the `clap` command are
//! ignored so they cannot outrank configuration files.

use clap::parser::ValueSource;
use clap::{ArgMatches, Command};

use super::CliOptions;

/// A `clap` command paired with the matches it produced.
///
/// The command tells flags apart from options taking values: a flag such
/// as `--verbose` carries no value of its own, so the composer falls back
/// to the option's default.
///
/// ```rust
/// use clap::{Arg, ArgAction, Command};
/// use config_tree::{ClapOptions, CliOptions};
///
/// let command = Command::new("app")
///     .arg(Arg::new("port").long("port"))
///     .arg(Arg::new("verbose").long("verbose").action(ArgAction::SetTrue));
/// let matches = command.clone().get_matches_from(["app", "--verbose", "--port", "80"]);
/// let cli = ClapOptions::new(&command, &matches);
/// assert_eq!(cli.detected_options(), ["verbose", "port"]);
/// assert_eq!(cli.option_value("port").as_deref(), Some("80"));
/// assert_eq!(cli.option_value("verbose"), None);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ClapOptions<'a> {
    command: &'a Command,
    matches: &'a ArgMatches,
}

impl<'a> ClapOptions<'a> {
    /// Pair `matches` with the `command` that parsed them.
    #[must_use]
    pub const fn new(command: &'a Command, matches: &'a ArgMatches) -> Self {
        Self { command, matches }
    }

    fn takes_values(&self, name: &str) -> bool {
        self.command
            .get_arguments()
            .find(|arg| arg.get_id() == name)
            .is_some_and(|arg| arg.get_action().takes_values())
    }
}

impl CliOptions for ClapOptions<'_> {
    fn detected_options(&self) -> Vec<String> {
        let mut detected: Vec<(usize, String)> = self
            .matches
            .ids()
            .filter(|id| self.matches.value_source(id.as_str()) == Some(ValueSource::CommandLine))
            .map(|id| {
                let position = self.matches.index_of(id.as_str()).unwrap_or(usize::MAX);
                (position, id.as_str().to_owned())
            })
            .collect();
        detected.sort();
        detected.into_iter().map(|(_, name)| name).collect()
    }

    fn option_value(&self, name: &str) -> Option<String> {
        if !self.takes_values(name) {
            return None;
        }
        let mut raw = self.matches.try_get_raw(name).ok().flatten()?;
        raw.next().map(|value| value.to_string_lossy().into_owned())
    }
}
