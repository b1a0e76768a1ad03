use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand, ValueEnum};
use shelf::model::{SearchField, YEAR_MAX, YEAR_MIN};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
}

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("SHELF_GIT_HASH");
    const GIT_DATE: &str = env!("SHELF_GIT_DATE");
    const IS_RELEASE: &str = env!("SHELF_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "shelf",
    bin_name = "shelf",
    version = get_version(),
    disable_help_subcommand = true
)]
#[command(about = "Personal library catalog for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Library file to use instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Parses the process arguments. Top-level `--help` prints the grouped help;
/// subcommands keep clap's own rendering.
pub fn parse() -> Cli {
    let matches: ArgMatches = Cli::command()
        .override_help(get_grouped_help())
        .get_matches();
    Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Catalog,
    Data,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Catalog => "Catalog Commands:",
            CommandGroup::Data => "Data Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "add" | "remove" | "search" | "list" | "stats" => Some(CommandGroup::Catalog),
            "import" | "export" | "titles" => Some(CommandGroup::Data),
            "config" | "exit" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[CommandGroup::Catalog, CommandGroup::Data, CommandGroup::Misc]
    }
}

pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("shelf {version}\n"));
    output.push_str("Personal library catalog for the command line\n");
    output.push('\n');
    output.push_str("Usage: shelf [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("  -f, --file <PATH>  Library file to use instead of the configured one\n");
    output.push_str("  -v, --verbose      Verbose output (debug logging on stderr)\n");
    output.push_str("  -h, --help         Print help\n");
    output.push_str("  -V, --version      Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a command by name, falling back to the grouped help.
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name || subcmd.get_all_aliases().any(|alias| alias == name) {
            print!("{}", subcmd.render_help());
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Catalog(CatalogCommands),

    #[command(flatten)]
    Data(DataCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReadAnswer {
    Yes,
    No,
}

impl ReadAnswer {
    pub fn is_read(self) -> bool {
        self == ReadAnswer::Yes
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SearchBy {
    Title,
    Author,
}

impl From<SearchBy> for SearchField {
    fn from(by: SearchBy) -> Self {
        match by {
            SearchBy::Title => SearchField::Title,
            SearchBy::Author => SearchField::Author,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum CatalogCommands {
    /// Add a book to the library
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Title words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        /// Author name
        #[arg(short, long, default_value = "")]
        author: String,

        /// Publication year
        #[arg(
            short,
            long,
            value_parser = clap::value_parser!(i32).range(YEAR_MIN as i64..=YEAR_MAX as i64)
        )]
        year: i32,

        /// Genre
        #[arg(short, long, default_value = "")]
        genre: String,

        /// Whether you have read it
        #[arg(short, long, value_enum, default_value = "yes")]
        read: ReadAnswer,
    },

    /// Remove every book with the given title
    #[command(alias = "rm", display_order = 2)]
    Remove {
        /// Title words (joined with spaces, matched exactly)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Search by title or author (case-insensitive)
    #[command(alias = "s", display_order = 3)]
    Search {
        /// Search words (joined with spaces); empty matches everything
        #[arg(num_args = 0..)]
        query: Vec<String>,

        /// Field to search
        #[arg(short, long, value_enum, default_value = "title")]
        by: SearchBy,
    },

    /// List all books
    #[command(alias = "ls", display_order = 4)]
    List {
        /// One aligned line per book
        #[arg(short, long)]
        compact: bool,
    },

    /// Show reading statistics
    #[command(display_order = 5)]
    Stats,
}

#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Import books from JSON files or directories
    #[command(display_order = 20)]
    Import {
        /// Paths to JSON files or directories
        #[arg(required = true, num_args = 1..)]
        paths: Vec<String>,
    },

    /// Export the catalog to a tar.gz archive (or a single file with --single-file)
    #[command(display_order = 21)]
    Export {
        /// Export to one file with this name (.md markdown, .json JSON, otherwise text)
        #[arg(long, value_name = "NAME")]
        single_file: Option<String>,

        /// Directory to write into (defaults to the current directory)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Print every title, one per line
    #[command(display_order = 22)]
    Titles,
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (library-file or color)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Say goodbye (the library is saved after every change)
    #[command(display_order = 31)]
    Exit,

    /// Print help for shelf or a subcommand
    #[command(display_order = 32)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },

    /// Generate shell completions
    #[command(hide = true, display_order = 33)]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },

    /// Output book titles for shell completion (hidden)
    #[command(hide = true, name = "__complete-titles", display_order = 34)]
    CompleteTitles,
}
