//! Command line interface.

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use vgsales_config::ImageFormat;
use vgsales_data::{FilterOptions, FilterSelection};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "vgsales-dashboard", author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level, overriding the configured one
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Dashboard interactions.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the year bounds, available platforms and genres, and presets
    Options,

    /// Print the chart datasets for a selection as JSON
    Aggregate {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Write the dashboard page and its charts
    Render {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Output directory, overriding the configured one
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Chart image format, overriding the configured one
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
    },
}

/// Sidebar state given on the command line.
///
/// Omitted flags keep the initial widget values. A multiselect flag given
/// without values clears that multiselect.
#[derive(ClapArgs, Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionArgs {
    /// First release year (defaults to the earliest in the data)
    #[arg(long)]
    pub from: Option<i32>,

    /// Last release year (defaults to the latest in the data)
    #[arg(long)]
    pub to: Option<i32>,

    /// Comma separated platforms
    #[arg(long, value_delimiter = ',', num_args = 0..)]
    pub platforms: Option<Vec<String>>,

    /// Comma separated genres
    #[arg(long, value_delimiter = ',', num_args = 0..)]
    pub genres: Option<Vec<String>>,
}

impl SelectionArgs {
    /// Resolves the flags against the sidebar options.
    pub fn resolve(&self, options: &FilterOptions) -> FilterSelection {
        options.resolve(
            self.from,
            self.to,
            self.platforms.as_deref().map(non_blank),
            self.genres.as_deref().map(non_blank),
        )
    }
}

fn non_blank(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Chart image format flag.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    /// PNG files next to the page
    Png,
    /// SVG inlined into the page
    Svg,
}

impl From<FormatArg> for ImageFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Png => Self::Png,
            FormatArg::Svg => Self::Svg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use vgsales_common::test_utils::sales_fixtures;
    use vgsales_common::YearRange;
    use vgsales_data::SalesTable;

    fn selection_of(args: &[&str]) -> SelectionArgs {
        let parsed = Args::try_parse_from(args).unwrap();
        match parsed.command {
            Command::Aggregate { selection, .. } | Command::Render { selection, .. } => selection,
            Command::Options => panic!("expected a selection command"),
        }
    }

    fn options() -> FilterOptions {
        let table = SalesTable::new(sales_fixtures::mixed_catalog());
        FilterOptions::from_table(
            &table,
            &["PS2".to_string(), "X360".to_string()],
            &["Action".to_string(), "Sports".to_string()],
        )
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_absent_flags_keep_defaults() {
        let selection = selection_of(&["vgsales-dashboard", "aggregate"]).resolve(&options());

        assert_eq!(selection, options().default_selection());
    }

    #[test]
    fn test_list_flags_split_on_commas() {
        let args = selection_of(&[
            "vgsales-dashboard",
            "render",
            "--from",
            "2004",
            "--platforms",
            "Wii,PS3",
        ]);

        assert_eq!(args.platforms, Some(vec!["Wii".to_string(), "PS3".to_string()]));
        let selection = args.resolve(&options());
        assert_eq!(selection.years, YearRange::new(2004, 2010));
        assert!(selection.platforms.contains("Wii"));
        assert!(selection.genres.contains("Action"));
    }

    #[test]
    fn test_flag_without_values_clears_selection() {
        let args = selection_of(&["vgsales-dashboard", "aggregate", "--genres"]);

        assert_eq!(args.genres, Some(Vec::new()));
        assert!(args.resolve(&options()).genres.is_empty());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "vgsales-dashboard",
            "options",
            "--config",
            "dash.yaml",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.config, Some(PathBuf::from("dash.yaml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }
}
