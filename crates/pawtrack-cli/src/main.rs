//! PawTrack CLI - Pet-care reminders from the terminal
//!
//! Talks to a PawTrack server and keeps a snapshot of the reminder list so
//! the day view still renders when the server is unreachable.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Confirm, Input, Password};
use std::collections::HashMap;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use pawtrack::{
    dates_around, day_counts, Category, DayClock, Frequency, JsonFilePersistence, NewPet, Reminder,
    ReminderDraft, ReminderPatch, ReminderStore, TimeSlot,
};

use api::PawTrackClient;
use config::Config;

type Store = ReminderStore<PawTrackClient>;

#[derive(Parser)]
#[command(name = "pawtrack")]
#[command(about = "PawTrack CLI - Pet-care reminders", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Login and store API key
    Login {
        /// API key (will prompt if not provided)
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Show or change configuration
    Config {
        /// Server base URL
        #[arg(long)]
        base_url: Option<String>,
        /// Minutes east of UTC where calendar days begin (e.g. 540)
        #[arg(long, allow_hyphen_values = true)]
        utc_offset: Option<i32>,
        /// Pet used when --pet is omitted
        #[arg(long)]
        default_pet: Option<Uuid>,
    },

    /// Manage pets
    Pet {
        #[command(subcommand)]
        action: PetAction,
    },

    /// Manage reminders
    Reminder {
        #[command(subcommand)]
        action: ReminderAction,
    },

    /// Show one day's reminders grouped by time slot
    Day {
        /// Day to show (YYYY-MM-DD), today by default
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// Only this pet
        #[arg(short, long)]
        pet: Option<Uuid>,
        /// Only this category (general, lifestyle, health)
        #[arg(short, long)]
        category: Option<Category>,
        /// Show every pet and category, ignoring saved selections
        #[arg(long)]
        all: bool,
    },

    /// Show completion stats
    Stats {
        /// Day to count (YYYY-MM-DD), today by default
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
}

#[derive(Subcommand)]
enum PetAction {
    /// Add a new pet
    Add {
        /// Pet name
        name: String,
        /// Kind of animal (e.g., "Dog", "Cat")
        #[arg(short = 't', long = "type")]
        pet_type: String,
        /// Owner name
        #[arg(short, long)]
        owner: String,
        #[arg(short, long)]
        breed: Option<String>,
        #[arg(short, long)]
        age: Option<u32>,
    },
    /// List all pets
    List,
    /// Remove a pet and its reminders
    Remove {
        id: Uuid,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ReminderAction {
    /// Add a reminder (prompts for missing title and start)
    Add {
        /// Reminder title
        title: Option<String>,
        #[arg(short, long)]
        pet: Option<Uuid>,
        /// general, lifestyle or health
        #[arg(short, long, default_value = "general")]
        category: Category,
        /// Start date-time (e.g., 2025-03-01T08:00)
        #[arg(short, long)]
        start: Option<String>,
        /// daily, weekly, monthly or custom
        #[arg(short, long, default_value = "daily")]
        frequency: Frequency,
        /// morning, afternoon, evening or night (derived from the start hour if omitted)
        #[arg(long)]
        slot: Option<TimeSlot>,
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List reminders
    List {
        /// Only this pet
        #[arg(short, long)]
        pet: Option<Uuid>,
    },
    /// Edit a reminder
    Edit {
        id: Uuid,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        pet: Option<Uuid>,
        #[arg(long)]
        category: Option<Category>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        frequency: Option<Frequency>,
        #[arg(long)]
        slot: Option<TimeSlot>,
        /// Drop the explicit slot and derive it from the start time again
        #[arg(long, conflicts_with = "slot")]
        derived_slot: bool,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Remove a reminder
    Remove {
        id: Uuid,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Flip a reminder between pending and completed
    Toggle { id: Uuid },
    /// Mark a reminder completed
    Complete { id: Uuid },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Login { key } => cmd_login(key).await,
        Commands::Config { base_url, utc_offset, default_pet } => {
            cmd_config(base_url, utc_offset, default_pet)
        }
        Commands::Pet { action } => cmd_pet(action).await,
        Commands::Reminder { action } => cmd_reminder(action).await,
        Commands::Day { date, pet, category, all } => cmd_day(date, pet, category, all).await,
        Commands::Stats { date } => cmd_stats(date).await,
    }
}

// ============================================
// Helpers
// ============================================

fn client(config: &Config) -> PawTrackClient {
    PawTrackClient::new(&config.base_url, config.api_key.as_deref())
}

/// Store backed by the server, primed from the last snapshot.
///
/// A failed refresh is reported but not fatal: the snapshot is shown instead.
async fn open_store(config: &Config) -> Result<Store> {
    let persistence = JsonFilePersistence::new(Config::store_path()?);
    let mut store = ReminderStore::new(client(config), config.clock()?).with_persistence(persistence);

    restore_snapshot(&mut store);

    if let Err(e) = store.fetch().await {
        eprintln!(
            "{} {} (showing saved reminders)",
            "⚠".yellow(),
            e.to_string().dimmed()
        );
    }

    Ok(store)
}

/// Load the saved snapshot; an unreadable one is reported and left behind
fn restore_snapshot(store: &mut Store) -> bool {
    match store.restore() {
        Ok(found) => found,
        Err(e) => {
            eprintln!(
                "{} {} (starting from an empty list)",
                "⚠".yellow(),
                format!("Could not read saved reminders: {}", e).dimmed()
            );
            false
        }
    }
}

/// Pet names by id; empty when the server is unreachable
async fn pet_names(config: &Config) -> HashMap<Uuid, String> {
    client(config)
        .list_pets()
        .await
        .map(|pets| pets.into_iter().map(|p| (p.id, p.name)).collect())
        .unwrap_or_default()
}

fn short_id(id: Uuid) -> String {
    id.to_string()[..8].to_string()
}

fn status_mark(reminder: &Reminder) -> colored::ColoredString {
    if reminder.is_completed() {
        "✓".green()
    } else {
        "○".dimmed()
    }
}

fn print_reminder(reminder: &Reminder, pets: &HashMap<Uuid, String>, clock: &DayClock) {
    let pet = pets
        .get(&reminder.pet_id)
        .cloned()
        .unwrap_or_else(|| short_id(reminder.pet_id));
    let streak = if reminder.streak > 0 {
        format!(" 🔥{}", reminder.streak).yellow().to_string()
    } else {
        String::new()
    };

    println!(
        "    {} {} {} {} [{}]{}",
        status_mark(reminder),
        clock.local(&reminder.start_date).format("%H:%M").to_string().dimmed(),
        reminder.title.bold(),
        pet.cyan(),
        reminder.category,
        streak
    );
    println!(
        "      {} · {}",
        short_id(reminder.id).dimmed(),
        reminder.frequency.to_string().dimmed()
    );
}

fn confirm(prompt: String, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .context("Failed to read confirmation")
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_login(key: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    let api_key = match key {
        Some(k) => k,
        None => Password::new()
            .with_prompt("API Key")
            .interact()
            .context("Failed to read API key")?,
    };

    let client = PawTrackClient::new(&config.base_url, Some(&api_key));
    print!("Testing connection... ");

    match client.health().await {
        Ok(true) => {}
        Ok(false) => {
            println!("{}", "Failed".red());
            bail!("PawTrack API at {} is not healthy", config.base_url);
        }
        Err(e) => {
            println!("{}", "Failed".red());
            bail!("Could not reach PawTrack API at {}: {}", config.base_url, e);
        }
    }

    // Health is public; the key is only checked by an authenticated call
    match client.list_pets().await {
        Ok(_) => println!("{}", "OK".green()),
        Err(e) => {
            println!("{}", "Failed".red());
            bail!("Authenticated request failed: {}", e);
        }
    }

    config.set_api_key(api_key);
    config.save()?;

    println!("{} API key saved to {:?}", "✓".green(), Config::config_path()?);

    Ok(())
}

fn cmd_config(
    base_url: Option<String>,
    utc_offset: Option<i32>,
    default_pet: Option<Uuid>,
) -> Result<()> {
    let mut config = Config::load()?;

    if base_url.is_some() || utc_offset.is_some() || default_pet.is_some() {
        if let Some(url) = base_url {
            config.base_url = url;
        }
        if let Some(minutes) = utc_offset {
            config.utc_offset_minutes = minutes;
            config.clock()?;
        }
        if default_pet.is_some() {
            config.default_pet = default_pet;
        }
        config.save()?;
        println!("{} Configuration saved", "✓".green());
    }

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Store: {:?}", Config::store_path()?);
    println!("  Base URL: {}", config.base_url);
    println!(
        "  API Key: {}",
        if config.api_key.is_some() { "Set".green() } else { "Not set".red() }
    );
    println!(
        "  Default Pet: {}",
        config
            .default_pet
            .map(|id| id.to_string())
            .unwrap_or_else(|| "None".to_string())
            .cyan()
    );
    println!("  UTC Offset: {:+} minutes", config.utc_offset_minutes);

    Ok(())
}

async fn cmd_pet(action: PetAction) -> Result<()> {
    let mut config = Config::load()?;
    let client = client(&config);

    match action {
        PetAction::Add { name, pet_type, owner, breed, age } => {
            let pet = client
                .create_pet(&NewPet { name, pet_type, breed, age, owner })
                .await?;

            println!("{} Pet '{}' added ({})", "✓".green(), pet.name.cyan(), pet.id);

            if config.default_pet.is_none() {
                config.default_pet = Some(pet.id);
                config.save()?;
                println!("  {}", "Set as default pet".dimmed());
            }
        }

        PetAction::List => {
            let pets = client.list_pets().await?;

            if pets.is_empty() {
                println!("No pets yet.");
                println!("\n{}", "Add one with:".dimmed());
                println!("  pawtrack pet add <name> --type Dog --owner <you>");
                return Ok(());
            }

            println!("{}", "Pets:".bold());
            for pet in pets {
                let is_default = config.default_pet == Some(pet.id);
                let default_marker = if is_default { " (default)".green().to_string() } else { String::new() };
                let details = match (&pet.breed, pet.age) {
                    (Some(breed), Some(age)) => format!("{}, {} y", breed, age),
                    (Some(breed), None) => breed.clone(),
                    (None, Some(age)) => format!("{} y", age),
                    (None, None) => String::new(),
                };

                println!(
                    "  {} {} {} {} · {}{}",
                    pet.id.to_string().dimmed(),
                    pet.name.cyan().bold(),
                    pet.pet_type,
                    details.dimmed(),
                    pet.owner,
                    default_marker
                );
            }
        }

        PetAction::Remove { id, yes } => {
            if !confirm(format!("Remove pet {} and all its reminders?", id), yes)? {
                println!("Cancelled.");
                return Ok(());
            }

            client.delete_pet(id).await?;

            if config.default_pet == Some(id) {
                config.default_pet = None;
                config.save()?;
            }
            println!("{} Pet removed", "✓".green());
        }
    }

    Ok(())
}

async fn cmd_reminder(action: ReminderAction) -> Result<()> {
    let config = Config::load()?;
    let mut store = open_store(&config).await?;

    match action {
        ReminderAction::Add { title, pet, category, start, frequency, slot, notes } => {
            let title = match title {
                Some(t) => t,
                None => Input::new()
                    .with_prompt("Title")
                    .interact_text()
                    .context("Failed to read input")?,
            };
            let start = match start {
                Some(s) => s,
                None => Input::new()
                    .with_prompt("Start (YYYY-MM-DDTHH:MM)")
                    .interact_text()
                    .context("Failed to read input")?,
            };

            let draft = ReminderDraft {
                title: Some(title),
                pet_id: pet.or(config.default_pet),
                category: Some(category),
                notes,
                start_date: Some(start),
                frequency: Some(frequency),
                time_slot: slot,
            };
            let reminder = store.add(draft).await?;

            println!(
                "{} Reminder '{}' added for {} ({})",
                "✓".green(),
                reminder.title.cyan(),
                store.clock().local(&reminder.start_date).format("%Y-%m-%d %H:%M"),
                reminder.effective_time_slot(store.clock())
            );
        }

        ReminderAction::List { pet } => {
            let pets = pet_names(&config).await;
            let mut reminders: Vec<&Reminder> = store
                .state()
                .reminders
                .iter()
                .filter(|r| pet.map_or(true, |id| r.pet_id == id))
                .collect();
            reminders.sort_by_key(|r| r.start_date);

            if reminders.is_empty() {
                println!("No reminders found.");
                return Ok(());
            }

            println!("{}", "Reminders:".bold());
            for reminder in reminders {
                println!(
                    "  {}",
                    store
                        .clock()
                        .local(&reminder.start_date)
                        .format("%Y-%m-%d")
                        .to_string()
                        .dimmed()
                );
                print_reminder(reminder, &pets, store.clock());
            }
        }

        ReminderAction::Edit {
            id,
            title,
            pet,
            category,
            start,
            frequency,
            slot,
            derived_slot,
            notes,
        } => {
            let start_date = start
                .map(|s| store.clock().parse_instant(&s))
                .transpose()?;
            let patch = ReminderPatch {
                title,
                pet_id: pet,
                category,
                notes,
                start_date,
                frequency,
                time_slot: if derived_slot { Some(None) } else { slot.map(Some) },
            };
            if patch.is_empty() {
                bail!("Nothing to change. Pass at least one of --title, --pet, --category, --start, --frequency, --slot, --derived-slot, --notes");
            }

            let reminder = store.update(id, patch).await?;
            println!("{} Reminder '{}' updated", "✓".green(), reminder.title.cyan());
        }

        ReminderAction::Remove { id, yes } => {
            let label = store
                .find(id)
                .map(|r| r.title.clone())
                .unwrap_or_else(|| id.to_string());
            if !confirm(format!("Remove reminder '{}'?", label), yes)? {
                println!("Cancelled.");
                return Ok(());
            }

            if store.delete(id).await? {
                println!("{} Reminder removed", "✓".green());
            } else {
                println!("{} Reminder was already gone", "✓".yellow());
            }
        }

        ReminderAction::Toggle { id } => {
            let reminder = store.toggle_complete(id).await?;
            println!(
                "{} '{}' is now {} (streak {})",
                status_mark(&reminder),
                reminder.title.cyan(),
                reminder.status,
                reminder.streak
            );
        }

        ReminderAction::Complete { id } => {
            let reminder = store.complete(id).await?;
            println!(
                "{} '{}' completed (streak {})",
                "✓".green(),
                reminder.title.cyan(),
                reminder.streak
            );
        }
    }

    Ok(())
}

async fn cmd_day(
    date: Option<NaiveDate>,
    pet: Option<Uuid>,
    category: Option<Category>,
    all: bool,
) -> Result<()> {
    let config = Config::load()?;
    let mut store = open_store(&config).await?;

    if let Some(date) = date {
        store.set_selected_date(date);
    }
    if all {
        store.set_selected_pet(None);
        store.set_selected_category(None);
    } else {
        if pet.is_some() {
            store.set_selected_pet(pet);
        } else if store.state().selected_pet.is_none() && config.default_pet.is_some() {
            store.set_selected_pet(config.default_pet);
        }
        if category.is_some() {
            store.set_selected_category(category);
        }
    }

    let pets = pet_names(&config).await;
    let query = store.query();
    let clock = *store.clock();

    // Calendar strip
    let strip = day_counts(
        &store.state().reminders,
        &query,
        &dates_around(query.date, 3),
        &clock,
    );
    let strip: Vec<String> = strip
        .into_iter()
        .map(|(day, count)| {
            let label = format!("{} {}({})", day.format("%a"), day.format("%d"), count);
            if day == query.date {
                label.bold().underline().to_string()
            } else {
                label.dimmed().to_string()
            }
        })
        .collect();
    println!("{}", strip.join("  "));

    let filter = match (query.pet_id, query.category) {
        (Some(pet_id), Some(cat)) => format!(
            " · {} · {}",
            pets.get(&pet_id).cloned().unwrap_or_else(|| short_id(pet_id)),
            cat
        ),
        (Some(pet_id), None) => format!(
            " · {}",
            pets.get(&pet_id).cloned().unwrap_or_else(|| short_id(pet_id))
        ),
        (None, Some(cat)) => format!(" · {}", cat),
        (None, None) => String::new(),
    };
    println!("\n{}{}", query.date.format("%A, %B %-d %Y").to_string().bold(), filter.cyan());

    let grouped = store.grouped();
    if grouped.is_empty() {
        println!("\n  No reminders for this day.");
        return Ok(());
    }

    for (slot, reminders) in grouped.iter() {
        if reminders.is_empty() {
            continue;
        }
        println!(
            "\n  {} {}",
            slot.to_string().bold(),
            format!("{}/{} done", grouped.completed_in(slot), reminders.len()).dimmed()
        );
        for reminder in reminders {
            print_reminder(reminder, &pets, &clock);
        }
    }

    Ok(())
}

async fn cmd_stats(date: Option<NaiveDate>) -> Result<()> {
    let config = Config::load()?;
    let store = open_store(&config).await?;

    let date = date.unwrap_or_else(|| store.clock().today());
    let stats = store.stats_for(date);

    let rate = stats.completion_rate.to_string();
    let rate = if stats.completion_rate >= 80 {
        rate.green()
    } else if stats.completion_rate >= 40 {
        rate.yellow()
    } else {
        rate.red()
    };

    println!("{} {}", "Stats for".bold(), date.format("%Y-%m-%d").to_string().cyan());
    println!("  Completed: {}/{}", stats.completed, stats.total);
    println!("  Completion rate: {}%", rate);
    println!("  Best streak: {} 🔥", store.best_streak());

    Ok(())
}
