//! prompt-notes: organize reusable AI prompts into named notes
//!
//! Notes live in a local SQLite key-value store under an identity-derived
//! key; signing in keeps a collection separate from the shared local one.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

mod app;
mod auth;
mod commands;
mod config;
mod notes;

use app::App;
use auth::ProfileProvider;
use notes::LocalStore;

#[derive(Parser)]
#[command(name = "prompt-notes")]
#[command(about = "Local notebook for reusable AI prompts", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all notes in the active collection
    List {
        /// Show the full note id for each entry
        #[arg(long)]
        with_id: bool,

        /// Sort by: name, updated, prompts (default: updated)
        #[arg(long, short, default_value = "updated")]
        sort: String,

        /// Reverse sort order
        #[arg(long, short)]
        reverse: bool,

        /// Limit number of results
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show one note with all of its prompts
    Show {
        /// Note id, id prefix, or exact title
        note: String,
    },

    /// Create a new note
    New {
        /// Note title
        #[arg(long, short)]
        title: Option<String>,

        /// Prompt content to add (repeatable)
        #[arg(long, short)]
        prompt: Vec<String>,
    },

    /// Edit an existing note
    Edit {
        /// Note id, id prefix, or exact title
        note: String,

        /// New note title
        #[arg(long, short)]
        title: Option<String>,

        /// Prompt content to append (repeatable)
        #[arg(long, short)]
        add: Vec<String>,

        /// Retitle a prompt: PROMPT=TITLE (repeatable)
        #[arg(long, value_parser = parse_assignment)]
        retitle: Vec<(String, String)>,

        /// Replace a prompt's content: PROMPT=CONTENT (repeatable)
        #[arg(long, value_parser = parse_assignment)]
        set: Vec<(String, String)>,

        /// Remove a prompt by position, id, or title (repeatable)
        #[arg(long)]
        remove: Vec<String>,

        /// Show what would be saved without making changes
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Print a prompt's content for piping to the clipboard
    Copy {
        /// Note id, id prefix, or exact title
        note: String,

        /// Prompt position (1-based), id, or title
        prompt: String,
    },

    /// Sign in with a local profile
    Login {
        /// Display name (prompts if omitted)
        #[arg(long)]
        name: Option<String>,

        /// Email address (prompts if omitted)
        #[arg(long)]
        email: Option<String>,
    },

    /// Sign out of the current profile
    Logout,

    /// Show the current session and active storage key
    Whoami,
}

/// Parse a PROMPT=VALUE argument
fn parse_assignment(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((reference, value)) => Ok((reference.to_string(), value.to_string())),
        None => Err(format!("expected PROMPT=VALUE, got: {}", s)),
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("prompt_notes=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let storage =
        LocalStore::open(config::notes_db_path()?).context("Failed to open the notes database")?;

    let provider = match &cli.command {
        Commands::Login { name, email } => ProfileProvider::new(config::profile_path()?)
            .with_identity(name.clone(), email.clone()),
        _ => ProfileProvider::new(config::profile_path()?),
    };

    let mut app = App::open(provider, storage);

    match cli.command {
        Commands::List {
            with_id,
            sort,
            reverse,
            limit,
        } => {
            let options = commands::list::ListOptions {
                with_id,
                sort,
                reverse,
                limit,
            };
            println!("{}", commands::list::execute(app.store().notes(), options));
        }

        Commands::Show { note } => {
            println!("{}", commands::show::execute(app.store().notes(), &note)?);
        }

        Commands::New { title, prompt } => {
            let options = commands::new::NewOptions {
                title,
                prompts: prompt,
            };
            commands::new::execute(&mut app, options)?;
        }

        Commands::Edit {
            note,
            title,
            add,
            retitle,
            set,
            remove,
            dry_run,
        } => {
            if dry_run {
                println!("{}", "(DRY-RUN MODE - no changes will be made)".blue());
            }
            let options = commands::edit::EditOptions {
                title,
                add,
                retitle,
                set,
                remove,
                dry_run,
            };
            commands::edit::execute(&mut app, &note, options)?;
        }

        Commands::Copy { note, prompt } => {
            print!(
                "{}",
                commands::copy::execute(app.store().notes(), &note, &prompt)?
            );
        }

        Commands::Login { .. } => {
            commands::login::sign_in(&mut app);
        }

        Commands::Logout => {
            commands::login::sign_out(&mut app);
        }

        Commands::Whoami => {
            println!("{}", commands::login::whoami(&app));
        }
    }

    Ok(())
}
