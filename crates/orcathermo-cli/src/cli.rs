use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "orcathermo - Collect thermochemistry results from ORCA output files into a CSV dataset.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Name of the ORCA output files to collect (e.g., orca.out).
    #[arg(value_name = "FILENAME")]
    pub filename: String,

    /// Directory searched recursively for matching files.
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Reference temperature in Kelvin [default: 298.15].
    /// Values that cannot be parsed fall back to the default with a notice.
    #[arg(value_name = "TEMPERATURE")]
    pub temperature: Option<String>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path of the CSV dataset. Overrides the output template of the config file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also extract and print the IR spectrum (mode, frequency, intensity) of every file.
    #[arg(long)]
    pub ir_spectrum: bool,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output, including missing-field warnings
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_arguments_are_parsed_in_order() {
        let cli = Cli::parse_from(["orcathermo", "orca.out", "runs", "310"]);
        assert_eq!(cli.filename, "orca.out");
        assert_eq!(cli.root, PathBuf::from("runs"));
        assert_eq!(cli.temperature.as_deref(), Some("310"));
        assert!(!cli.ir_spectrum);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn temperature_is_optional_and_kept_as_text() {
        let cli = Cli::parse_from(["orcathermo", "orca.out", "."]);
        assert_eq!(cli.temperature, None);

        let cli = Cli::parse_from(["orcathermo", "orca.out", ".", "warm"]);
        assert_eq!(cli.temperature.as_deref(), Some("warm"));
    }

    #[test]
    fn flags_and_options() {
        let cli = Cli::parse_from([
            "orcathermo",
            "-vv",
            "--ir-spectrum",
            "-o",
            "out.csv",
            "-c",
            "thermo.toml",
            "orca.out",
            "runs",
        ]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.ir_spectrum);
        assert_eq!(cli.output, Some(PathBuf::from("out.csv")));
        assert_eq!(cli.config, Some(PathBuf::from("thermo.toml")));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["orcathermo", "-q", "-v", "orca.out", "."]);
        assert!(result.is_err());
    }
}
