//! CLI administration tool for todo-api.
//!
//! Works directly against the configured PostgreSQL database, without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List todos, optionally only completed / open ones
//! cargo run --bin admin -- todo list
//! cargo run --bin admin -- todo list --completed false
//!
//! # Add and complete a todo
//! cargo run --bin admin -- todo add "buy milk"
//! cargo run --bin admin -- todo done 1
//!
//! # Delete a todo
//! cargo run --bin admin -- todo delete 1
//!
//! # Database tools
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL` or `DB_*`).

use todo_api::config::{Config, StoreBackend, mask_connection_string};
use todo_api::domain::entities::{NewTodo, UpdateTodo};
use todo_api::domain::repositories::TodoRepository;
use todo_api::infrastructure::persistence::{MIGRATOR, PgTodoRepository};
use todo_api::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing todo-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage todos
    Todo {
        #[command(subcommand)]
        action: TodoAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Todo management subcommands.
#[derive(Subcommand)]
enum TodoAction {
    /// List todos
    List {
        /// Only show todos with this completion status
        #[arg(short, long)]
        completed: Option<bool>,
    },

    /// Add a new todo
    Add {
        /// Todo text
        text: String,
    },

    /// Mark a todo as completed
    Done {
        /// Todo ID
        id: i32,
    },

    /// Delete a todo
    Delete {
        /// Todo ID
        id: i32,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    config.store_backend = StoreBackend::Postgres;
    config.validate()?;

    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Todo { action } => handle_todo_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &config).await?,
    }

    Ok(())
}

/// Dispatches todo management commands.
async fn handle_todo_action(action: TodoAction, pool: &PgPool) -> Result<()> {
    let repo = PgTodoRepository::new(Arc::new(pool.clone()));

    match action {
        TodoAction::List { completed } => list_todos(&repo, completed).await?,
        TodoAction::Add { text } => add_todo(&repo, text).await?,
        TodoAction::Done { id } => complete_todo(&repo, id).await?,
        TodoAction::Delete { id, yes } => delete_todo(&repo, id, yes).await?,
    }

    Ok(())
}

/// Lists todos as a table.
///
/// ```text
///   ID    Done  Todo
///   ──────────────────────────────────────────
///   1     [x]   buy milk
///   2     [ ]   walk the dog
/// ```
async fn list_todos(repo: &PgTodoRepository, completed: Option<bool>) -> Result<()> {
    println!("{}", "Todos".bright_blue().bold());
    println!();

    let todos = repo
        .list(completed)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list todos: {}", e))?;

    if todos.is_empty() {
        println!("{}", "  No todos found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<5} {}",
        "ID".bright_white().bold(),
        "Done".bright_white().bold(),
        "Todo".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());

    for todo in &todos {
        let mark = if todo.completed {
            "[x]".green()
        } else {
            "[ ]".normal()
        };

        println!(
            "  {:<5} {:<5} {}",
            todo.id.to_string().bright_black(),
            mark,
            todo.text.cyan()
        );
    }

    println!();
    println!("  Total: {}", todos.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn add_todo(repo: &PgTodoRepository, text: String) -> Result<()> {
    let affected = repo
        .create(NewTodo::new(text))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to add todo: {}", e))?;

    println!("{} ({} row)", "Todo added".green().bold(), affected);
    Ok(())
}

async fn complete_todo(repo: &PgTodoRepository, id: i32) -> Result<()> {
    let todo = repo
        .find_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Todo not found")?;

    if todo.completed {
        println!("{}", "This todo is already completed".yellow());
        return Ok(());
    }

    let affected = repo
        .update(
            id,
            UpdateTodo {
                text: todo.text,
                completed: true,
            },
        )
        .await
        .map_err(|e| anyhow::anyhow!("Failed to update todo: {}", e))?;

    if affected == 0 {
        anyhow::bail!("Todo {id} disappeared before it could be updated");
    }

    println!("{}", "Todo completed".green().bold());
    Ok(())
}

/// Deletes a todo after confirmation (default: No).
async fn delete_todo(repo: &PgTodoRepository, id: i32, skip_confirm: bool) -> Result<()> {
    let todo = repo
        .find_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Todo not found")?;

    println!("  Todo: {}", todo.text.cyan());
    println!("  ID:   {}", todo.id.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this todo?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let affected = repo
        .delete(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete todo: {}", e))?;

    if affected == 0 {
        println!("{}", "Todo was already deleted".yellow());
    } else {
        println!("{}", "Todo deleted".green().bold());
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            let repo = PgTodoRepository::new(Arc::new(pool.clone()));
            repo.ping()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            let url = config.database_url.as_deref().unwrap_or_default();
            println!(
                "{} {}",
                "Database connection OK:".green().bold(),
                mask_connection_string(url)
            );
        }
        DbAction::Migrate => {
            MIGRATOR
                .run(pool)
                .await
                .context("Failed to apply migrations")?;
            println!("{}", "Migrations applied".green().bold());
        }
    }

    Ok(())
}
