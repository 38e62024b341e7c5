//! DoIt - to-do list
//!
//! CLI entry point: load the task store, apply one action, print the result.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{debug, info};

use doit::chart;
use doit::cli::{Cli, Command, to_index};
use doit::config::Config;
use doit::{FileStorage, Priority, Task, TaskStore, TaskView};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("doit")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // CLI --log-level > config file > INFO
    let level = match cli_log_level.or(config_log_level).map(str::to_uppercase).as_deref() {
        Some("TRACE") => tracing::Level::TRACE,
        Some("DEBUG") => tracing::Level::DEBUG,
        Some("INFO") | None => tracing::Level::INFO,
        Some("WARN") | Some("WARNING") => tracing::Level::WARN,
        Some("ERROR") => tracing::Level::ERROR,
        Some(other) => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", other);
            tracing::Level::INFO
        }
    };

    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("doit.log"))
        .context("Failed to open log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    let storage_path = cli.data.clone().unwrap_or_else(|| config.storage.path.clone());

    let storage = FileStorage::open(&storage_path)
        .context(format!("Failed to open storage at {}", storage_path.display()))?;
    let mut store = TaskStore::load(storage);

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command.unwrap_or(Command::List {
        completed: false,
        important: false,
    }) {
        Command::Add {
            description,
            date,
            priority,
        } => cmd_add(&mut store, &description.join(" "), date, priority),
        Command::List { completed, important } => {
            let view = if completed {
                TaskView::Completed
            } else if important {
                TaskView::Important
            } else {
                TaskView::All
            };
            cmd_list(&store, view);
            Ok(())
        }
        Command::Complete { position } => cmd_complete(&mut store, position, config.chart.width),
        Command::Star { position } => cmd_star(&mut store, position),
        Command::Delete { position } => cmd_delete(&mut store, position),
        Command::Theme { theme } => {
            let theme = match theme {
                Some(theme) => {
                    store.set_theme(theme.is_dark())?;
                    theme
                }
                None => store.toggle_theme()?,
            };
            println!("{} Theme: {}", "✓".green(), theme.to_string().cyan());
            Ok(())
        }
        Command::Stats => {
            cmd_stats(&store, config.chart.width);
            Ok(())
        }
    }
}

fn cmd_add(
    store: &mut TaskStore<FileStorage>,
    description: &str,
    date: Option<chrono::NaiveDate>,
    priority: Priority,
) -> Result<()> {
    match store.add_task(description, date, priority)? {
        Some(id) => {
            if let Some(position) = store.position_of(&id)
                && let Some(task) = store.get(position)
            {
                println!(
                    "{} Added #{}: {} {}",
                    "✓".green(),
                    position + 1,
                    task.title(),
                    id.short().dimmed()
                );
            }
        }
        None => {
            eprintln!("{} Task not added: a description and --date are required", "!".yellow());
        }
    }
    Ok(())
}

fn cmd_complete(store: &mut TaskStore<FileStorage>, position: usize, width: usize) -> Result<()> {
    let index = to_index(position).ok_or_else(|| eyre::eyre!("No task at position {}", position))?;
    match store.toggle_completed(index)? {
        Some(true) => println!("{} Completed #{}", "✓".green(), position),
        Some(false) => println!("{} Reopened #{}", "↺".yellow(), position),
        None => return Err(eyre::eyre!("No task at position {}", position)),
    }
    println!("{}", chart::gauge(store.completion_ratio(), width));
    Ok(())
}

fn cmd_star(store: &mut TaskStore<FileStorage>, position: usize) -> Result<()> {
    let index = to_index(position).ok_or_else(|| eyre::eyre!("No task at position {}", position))?;
    match store.toggle_important(index)? {
        Some(true) => println!("{} Starred #{}", "★".yellow(), position),
        Some(false) => println!("{} Unstarred #{}", "☆".dimmed(), position),
        None => return Err(eyre::eyre!("No task at position {}", position)),
    }
    Ok(())
}

fn cmd_delete(store: &mut TaskStore<FileStorage>, position: usize) -> Result<()> {
    let index = to_index(position).ok_or_else(|| eyre::eyre!("No task at position {}", position))?;
    let removed = store
        .delete_task(index)?
        .ok_or_else(|| eyre::eyre!("No task at position {}", position))?;
    println!("{} Deleted: {}", "✓".green(), removed.title());
    Ok(())
}

fn cmd_list(store: &TaskStore<FileStorage>, view: TaskView) {
    let rows: Vec<(usize, &Task)> = store.view(view).collect();

    println!("{} ({} theme)", view.to_string().bold(), store.theme());
    if rows.is_empty() {
        println!("No tasks found");
        return;
    }

    for (index, task) in rows {
        let check = if task.completed { "[x]".green() } else { "[ ]".normal() };
        let star = if task.important { "★".yellow() } else { " ".normal() };
        let title = if task.completed {
            task.title().dimmed()
        } else {
            task.title().normal()
        };
        println!(
            "{:>3}. {} {} {}  {}",
            index + 1,
            check,
            star,
            title,
            task.due_date.to_string().cyan()
        );
    }
}

fn cmd_stats(store: &TaskStore<FileStorage>, width: usize) {
    let ratio = store.completion_ratio();
    println!("Tasks: {}", store.len());
    println!("  Completed: {}", store.completed_count());
    println!("  Pending: {}", store.pending_count());
    println!("  Important: {}", store.important_tasks().count());
    println!("{}", chart::gauge(ratio, width));
    println!("{}", chart::conic_gradient(ratio).dimmed());
}
