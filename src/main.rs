use std::process;

use clap::{Parser, Subcommand};

use projsnap::cli::{
    handle_create_command, handle_init_command, handle_list_command, handle_load_command,
};
use projsnap::display;

#[derive(Parser)]
#[command(
    name = "projsnap",
    version,
    about = "Create, browse and restore project backups",
    long_about = "projsnap archives the current project directory into timestamped \
                  ZIP snapshots, skipping dependency caches, build output and other \
                  configured noise, and restores any snapshot back in place."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the current directory for backup management
    Init,

    /// Create a new project backup
    Create {
        /// Backup name (optional)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Browse existing backups
    List {
        /// Print a plain table instead of the interactive list
        #[arg(long)]
        plain: bool,
    },

    /// Restore a backup into the current directory
    Load {
        /// Backup name to load (skips the interactive list)
        #[arg(short, long)]
        name: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{}", display::error(&format!("{err:#}")));
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let current_dir = std::env::current_dir()?;

    match cli.command {
        Commands::Init => handle_init_command(&current_dir),
        Commands::Create { name } => handle_create_command(&current_dir, name.as_deref()),
        Commands::List { plain } => handle_list_command(&current_dir, plain),
        Commands::Load { name, force } => {
            handle_load_command(&current_dir, name.as_deref(), force)
        }
    }
}
