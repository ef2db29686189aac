//! gradebook CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "gradebook", version, about = "Student grade tracker")]
struct Cli {
    /// Roster file path
    #[arg(long, global = true, default_value = "grades.txt")]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a student to the roster
    Add {
        /// Student name
        #[arg(long)]
        name: String,

        /// Roll number
        #[arg(long)]
        roll: u32,
    },

    /// Add or overwrite subject marks for a student
    Marks {
        /// Roll number of the student
        #[arg(long)]
        roll: u32,

        /// Subject/mark pairs, e.g. "Math:95 Science:82.5"
        #[arg(value_parser = commands::parse_subject_mark, required = true, num_args = 1..)]
        marks: Vec<(String, f64)>,
    },

    /// List every student with averages and grades
    List {
        /// Output format: text, table, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show the top performer
    Topper {
        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Interactive menu loop
    Shell,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gradebook=info".parse().unwrap())
                .add_directive("gradebook_core=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    tracing::debug!("using roster file {}", cli.file.display());

    let result = match cli.command {
        Commands::Add { name, roll } => commands::add::execute(cli.file, name, roll),
        Commands::Marks { roll, marks } => commands::marks::execute(cli.file, roll, marks),
        Commands::List { format } => commands::list::execute(cli.file, &format),
        Commands::Topper { format } => commands::topper::execute(cli.file, &format),
        Commands::Shell => commands::shell::execute(cli.file),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
