use crate::models::TimeUnit;
use clap::{Parser, Subcommand};

/// Command-line interface definition for Progchek
/// CLI application to track tasks across projects with deadlines
#[derive(Parser)]
#[command(
    name = "progchek",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple task tracker CLI: organize tasks into projects, with deadlines, CSV export, and an offline asset cache",
    long_about = None
)]
pub struct Cli {
    /// Override store path (useful for tests or custom store)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the store and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage projects
    Project {
        #[arg(long = "add", value_name = "NAME", help = "Create a project and make it active")]
        add: Option<String>,

        #[arg(
            long = "rename",
            num_args = 2,
            value_names = ["ID", "NAME"],
            help = "Rename a project"
        )]
        rename: Option<Vec<String>>,

        #[arg(long = "del", value_name = "ID", help = "Delete a project and its tasks")]
        del: Option<String>,

        #[arg(long = "list", help = "List projects with task counts")]
        list: bool,
    },

    /// Select the active project
    Use {
        /// Project id to make active
        id: Option<String>,

        #[arg(long = "all", help = "Switch to the aggregate all-tasks view")]
        all: bool,
    },

    /// Add a task
    Add {
        /// Task title
        title: String,

        #[arg(long = "desc", help = "Task description")]
        desc: Option<String>,

        /// Time remaining until the deadline
        #[arg(long = "in", value_name = "N", help = "Time remaining (in --unit units)")]
        time: i64,

        #[arg(long = "unit", value_enum, help = "Unit for --in (default from config)")]
        unit: Option<TimeUnit>,

        #[arg(long = "project", value_name = "ID", help = "Target project (default: active)")]
        project: Option<String>,
    },

    /// Edit a task
    Edit {
        /// Task id
        id: String,

        #[arg(long = "title")]
        title: Option<String>,

        #[arg(long = "desc")]
        desc: Option<String>,

        /// New time remaining; re-derives the deadline from now
        #[arg(long = "in", value_name = "N")]
        time: Option<i64>,

        #[arg(long = "unit", value_enum)]
        unit: Option<TimeUnit>,
    },

    /// Toggle a task's completion flag
    Done {
        /// Task id
        id: String,
    },

    /// Duplicate a task within its project
    Dup {
        /// Task id
        id: String,
    },

    /// Delete a task, or clear completed tasks
    Del {
        /// Task id
        id: Option<String>,

        #[arg(long = "completed", help = "Clear all completed tasks in the active view")]
        completed: bool,
    },

    /// List tasks in the active view
    List {
        #[arg(long = "all", help = "List tasks from all projects")]
        all: bool,

        #[arg(long = "project", value_name = "ID", help = "List one project's tasks")]
        project: Option<String>,

        #[arg(long = "details", help = "Show task descriptions")]
        details: bool,
    },

    /// Export all projects and tasks as CSV
    Export {
        #[arg(long, value_name = "FILE", help = "Output file (default: progchek_data.csv)")]
        file: Option<String>,
    },

    /// Manage the offline asset cache
    Cache {
        #[arg(long = "precache", help = "Fetch and store the app shell (install step)")]
        precache: bool,

        #[arg(long = "prune", help = "Delete cache buckets from older versions (activate step)")]
        prune: bool,

        #[arg(long = "info", help = "Show cache buckets and entry counts")]
        info: bool,
    },

    /// Fetch a URL through the offline cache policy
    Fetch {
        /// URL to fetch
        url: String,

        #[arg(long = "navigate", help = "Treat the request as a navigation")]
        navigate: bool,
    },
}
