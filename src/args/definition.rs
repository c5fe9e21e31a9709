//! Command-line argument definition.

use clap::Parser;

/// Lectern - search a course catalog and build schedule tables in the terminal
#[derive(Parser, Debug)]
#[command(name = "lectern")]
#[command(version)]
#[command(about = "Search a course catalog and build schedule tables in the terminal", long_about = None)]
pub struct Args {
    /// Open the search dialog for this table on start
    #[arg(short, long)]
    pub table: Option<String>,

    /// Pre-select a day label (e.g. 월), with --table or --search
    #[arg(long)]
    pub day: Option<String>,

    /// Pre-select a time slot (1-24), with --table or --search
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=24))]
    pub time: Option<u8>,

    /// Catalog base: an http(s) URL or a local directory (overrides settings.conf)
    #[arg(long)]
    pub catalog: Option<String>,

    /// Print lectures matching QUERY and exit instead of starting the TUI
    #[arg(short, long)]
    pub search: Option<String>,

    /// Credits filter for --search (prefix match on the published credits)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    pub credits: Option<u8>,

    /// Grade filter for --search (repeatable)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
    pub grade: Vec<u8>,

    /// Major filter for --search (repeatable, exact match)
    #[arg(long)]
    pub major: Vec<String>,

    /// Result page to print for --search (100 rows per page)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// What: Dialog pre-selection requested on the command line.
    ///
    /// Output:
    /// - `Some` when `--table` is given; day and time ride along.
    #[must_use]
    pub fn preselect(&self) -> Option<crate::state::SearchInfo> {
        self.table.as_ref().map(|table_id| crate::state::SearchInfo {
            table_id: table_id.clone(),
            day: self.day.clone(),
            time: self.time,
        })
    }

    /// What: Filter options for `--search` mode.
    #[must_use]
    pub fn search_options(&self) -> crate::state::SearchOption {
        crate::state::SearchOption {
            query: self.search.clone().unwrap_or_default(),
            credits: self.credits,
            grades: self.grade.clone(),
            days: self.day.iter().cloned().collect(),
            times: self.time.into_iter().collect(),
            majors: self.major.clone(),
        }
    }
}
