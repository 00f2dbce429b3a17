use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::catalog::RebrickableClient;
use crate::store::FileRecordStore;
use crate::tracker::Tracker;
use crate::utils::{
    format_path_with_tilde, get_api_key, get_catalog_base_url, get_data_dir, sanitize_line,
    truncate_line,
};

const NAME_WIDTH: usize = 48;

#[derive(Parser)]
#[command(name = "brick-tracker")]
#[command(version = "0.1.0")]
#[command(about = "Track parts collected for LEGO sets and find which sets still need a part", long_about = None)]
pub struct Cli {
    /// Directory holding set files (overrides BRICK_TRACKER_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a set from the catalog and start tracking it
    Create {
        /// Catalog set number, e.g. 6020-1
        set_id: String,
    },
    /// List tracked sets with their progress
    List,
    /// Show a set's part and sticker lines
    Show { set_id: String },
    /// Record how many of one part line you have
    SetHave {
        set_id: String,
        /// Line number as shown by `show`
        index: usize,
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    /// Replace a set's notes
    Notes { set_id: String, text: String },
    /// Find parts still needed across all incomplete sets
    Search {
        /// Words that must all match a part's id, name, category or color
        #[arg(required = true, num_args = 1..)]
        terms: Vec<String>,
    },
    /// Show statistics about tracked sets
    Stats,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = &cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => get_data_dir()?,
    };
    let mut tracker = Tracker::new(FileRecordStore::new(&data_dir));

    match command {
        Commands::Create { set_id } => create(&mut tracker, set_id)?,
        Commands::List => list(&tracker)?,
        Commands::Show { set_id } => show(&tracker, set_id)?,
        Commands::SetHave { set_id, index, value } => set_have(&mut tracker, set_id, *index, *value)?,
        Commands::Notes { set_id, text } => {
            tracker.set_notes(set_id, text)?;
            println!("Updated notes for {}", sanitize_line(set_id));
        }
        Commands::Search { terms } => search(&tracker, &terms.join(" "))?,
        Commands::Stats => show_stats(&tracker, &data_dir)?,
    }

    Ok(())
}

fn create(tracker: &mut Tracker<FileRecordStore>, set_id: &str) -> Result<()> {
    let api_key = get_api_key()?;
    let client = RebrickableClient::new(&get_catalog_base_url(), &api_key)?;

    let record = tracker
        .create_collection(&client, set_id)
        .with_context(|| format!("Failed to create set {}", sanitize_line(set_id)))?;

    println!(
        "Created {}: {} ({} part lines, {} sticker lines)",
        sanitize_line(&record.id),
        sanitize_line(&record.name),
        record.parts.len(),
        record.stickers.len()
    );
    Ok(())
}

fn list(tracker: &Tracker<FileRecordStore>) -> Result<()> {
    let summaries = tracker.summaries()?;
    if summaries.is_empty() {
        println!("No sets tracked yet. Add one with `brick-tracker create <SET_ID>`.");
        return Ok(());
    }

    for summary in summaries {
        let status = if summary.completed { " [complete]" } else { "" };
        println!(
            "{:<12} {:<width$} {:>5}/{:<5}{}",
            sanitize_line(&summary.id),
            truncate_line(&summary.name, NAME_WIDTH),
            summary.parts_found,
            summary.total_needed,
            status,
            width = NAME_WIDTH
        );
    }
    Ok(())
}

fn show(tracker: &Tracker<FileRecordStore>, set_id: &str) -> Result<()> {
    let record = tracker.get_collection(set_id)?;

    let year = record.year.map(|y| format!(", {}", y)).unwrap_or_default();
    println!("{} ({}{})", sanitize_line(&record.name), sanitize_line(&record.id), year);
    println!(
        "Progress: {}/{} parts found{}",
        record.parts_found,
        record.total_needed(),
        if record.completed { " [complete]" } else { "" }
    );
    if !record.notes.is_empty() {
        println!("Notes: {}", sanitize_line(&record.notes));
    }

    println!();
    println!("Parts:");
    for (index, part) in record.parts.iter().enumerate() {
        let marker = if part.is_satisfied() { '*' } else { ' ' };
        println!(
            "{}{:>4}  {:<14} {:<24} {:>4}/{:<4} {}",
            marker,
            index,
            truncate_line(&part.part_id, 14),
            truncate_line(&part.color, 24),
            part.have,
            part.need,
            truncate_line(&part.name, NAME_WIDTH)
        );
    }

    if !record.stickers.is_empty() {
        println!();
        println!("Stickers:");
        for sticker in &record.stickers {
            println!(
                "       {:<14} {:<24} x{:<8} {}",
                truncate_line(&sticker.part_id, 14),
                truncate_line(&sticker.color, 24),
                sticker.quantity,
                truncate_line(&sticker.name, NAME_WIDTH)
            );
        }
    }
    Ok(())
}

fn set_have(
    tracker: &mut Tracker<FileRecordStore>,
    set_id: &str,
    index: usize,
    value: i64,
) -> Result<()> {
    let record = tracker.set_have(set_id, index, value)?;
    let part = &record.parts[index];

    println!(
        "{} #{} {} {}: {}/{}",
        sanitize_line(&record.id),
        index,
        sanitize_line(&part.part_id),
        sanitize_line(&part.color),
        part.have,
        part.need
    );
    if record.completed {
        println!("Set {} is complete!", sanitize_line(&record.id));
    }
    Ok(())
}

fn search(tracker: &Tracker<FileRecordStore>, query: &str) -> Result<()> {
    let results = tracker.find_needed(query)?;
    let query = sanitize_line(query);

    if results.is_empty() {
        println!("No needed parts match \"{}\"", query);
        return Ok(());
    }

    println!("{} needed part(s) match \"{}\":", results.len(), query);
    for aggregate in results {
        let sets: Vec<String> = aggregate.sets_needing.iter().map(|s| sanitize_line(s)).collect();
        println!(
            "  {:<14} {:<24} need {:<4} {} [{}]  sets: {}",
            truncate_line(aggregate.part_id(), 14),
            truncate_line(aggregate.color(), 24),
            aggregate.total_needed,
            truncate_line(&aggregate.name, NAME_WIDTH),
            sanitize_line(&aggregate.category),
            sets.join(", ")
        );
    }
    Ok(())
}

fn show_stats(tracker: &Tracker<FileRecordStore>, data_dir: &Path) -> Result<()> {
    let summaries = tracker.summaries()?;

    let completed = summaries.iter().filter(|s| s.completed).count();
    let found: u64 = summaries.iter().map(|s| s.parts_found).sum();
    let needed: u64 = summaries.iter().map(|s| s.total_needed).sum();

    println!("Brick Tracker Statistics");
    println!("========================");
    println!("Tracked sets: {}", summaries.len());
    println!("  Completed: {}", completed);
    println!("  In progress: {}", summaries.len() - completed);
    println!("Parts found: {} of {}", found, needed);
    println!();
    println!("Data directory: {}", format_path_with_tilde(data_dir));

    Ok(())
}
