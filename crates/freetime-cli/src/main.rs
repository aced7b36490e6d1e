//! `freetime` CLI — edit a weekly availability schedule from the command line.
//!
//! The schedule lives in a JSON file (`availability.json` by default, or
//! `--schedule` / `FREETIME_SCHEDULE`). Every editing command loads it, applies one
//! change through the slot engine, and writes it back. Rejected changes leave the
//! file untouched and exit non-zero.
//!
//! ## Usage
//!
//! ```sh
//! # First slot of a day: choose a wake-up time
//! freetime add monday              # lists wake-up choices
//! freetime wake-up monday 07:00    # Monday = [00:00-07:00]
//!
//! # Further slots start 30 minutes after the previous one ends
//! freetime add monday              # Monday += [07:30-08:00]
//! freetime options monday 1 --field end
//! freetime set monday 1 end 09:00
//! freetime remove monday 1
//!
//! # Inspect and export
//! freetime show
//! freetime export -o week.json
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use slot_engine::display::{describe, format_12_hour};
use slot_engine::{
    AddOutcome, DaySchedule, DayState, ScheduleEditor, SlotField, TimeOfDay, Weekday,
    WeeklySchedule,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "freetime", version, about = "Declare your weekly free time")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Schedule file to read and update
    #[arg(
        long,
        global = true,
        env = "FREETIME_SCHEDULE",
        default_value = "availability.json"
    )]
    schedule: PathBuf,

    /// Log engine decisions (overridden by FREETIME_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show slots with their grid layout
    Show {
        /// Limit output to one day
        day: Option<Weekday>,
    },
    /// Add a slot 30 minutes after the day's last one
    Add { day: Weekday },
    /// Set the wake-up time of a day with no slots
    WakeUp { day: Weekday, time: TimeOfDay },
    /// Change the start or end of a slot
    Set {
        day: Weekday,
        index: usize,
        field: SlotField,
        time: TimeOfDay,
    },
    /// Remove a slot
    Remove { day: Weekday, index: usize },
    /// List the times a slot boundary may take (wake-up choices when INDEX is omitted)
    Options {
        day: Weekday,
        index: Option<usize>,
        /// Which boundary to list choices for [default: start]
        #[arg(long)]
        field: Option<SlotField>,
        /// Start to assume when listing end choices (defaults to the slot's start)
        #[arg(long)]
        start: Option<TimeOfDay>,
    },
    /// Print the whole schedule as JSON
    Export {
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut editor = ScheduleEditor::from_schedule(load_schedule(&cli.schedule)?);

    match cli.command {
        Commands::Show { day } => {
            let days = match day {
                Some(day) => vec![day],
                None => Weekday::ALL.to_vec(),
            };
            for day in days {
                print_day(day, editor.day(day));
            }
        }
        Commands::Add { day } => match editor.add_slot(day).context("Failed to add slot")? {
            AddOutcome::AwaitingWakeUp => {
                println!("{day} has no slots yet. When do you wake up?");
                for time in editor.wake_up_times(day) {
                    println!("  {time}  ({})", format_12_hour(time));
                }
                println!("Then run: freetime wake-up {day} HH:MM");
            }
            AddOutcome::Added(slot) => {
                save_schedule(&cli.schedule, editor.export_schedule())?;
                println!("Added {day} slot {}: {slot}", editor.day(day).len() - 1);
            }
        },
        Commands::WakeUp { day, time } => {
            if editor.state(day) == DayState::Empty {
                editor.add_slot(day)?;
            }
            let slot = editor
                .set_wake_up_time(day, time)
                .context("Failed to set wake-up time")?;
            save_schedule(&cli.schedule, editor.export_schedule())?;
            println!("Set {day} wake-up slot: {slot}");
        }
        Commands::Set {
            day,
            index,
            field,
            time,
        } => {
            check_index(day, editor.day(day), index)?;
            let slot = editor
                .update_slot(day, index, field, time)
                .with_context(|| format!("Failed to set {field} of {day} slot {index}"))?;
            save_schedule(&cli.schedule, editor.export_schedule())?;
            println!("Updated {day} slot {index}: {slot}");
        }
        Commands::Remove { day, index } => {
            check_index(day, editor.day(day), index)?;
            let slot = editor.remove_slot(day, index);
            save_schedule(&cli.schedule, editor.export_schedule())?;
            println!("Removed {day} slot {index}: {slot}");
        }
        Commands::Options {
            day,
            index,
            field,
            start,
        } => {
            let choices = match (index, field.unwrap_or(SlotField::Start)) {
                (None, _) => {
                    if field.is_some() || start.is_some() {
                        bail!("--field and --start need a slot INDEX; without one, wake-up times are listed");
                    }
                    editor.wake_up_times(day)
                }
                (Some(index), SlotField::Start) => {
                    if start.is_some() {
                        bail!("--start only applies to --field end");
                    }
                    check_index(day, editor.day(day), index)?;
                    editor.legal_start_times(day, index)
                }
                (Some(index), SlotField::End) => {
                    check_index(day, editor.day(day), index)?;
                    let start = start.unwrap_or(editor.day(day).slots()[index].start);
                    editor.legal_end_times(day, index, start)
                }
            };
            for time in choices {
                println!("{time}");
            }
        }
        Commands::Export { output } => {
            let json = editor
                .export_schedule()
                .to_json_pretty()
                .context("Failed to serialize schedule")?;
            match output {
                Some(path) => std::fs::write(&path, json)
                    .with_context(|| format!("Failed to write file: {}", path.display()))?,
                None => println!("{json}"),
            }
        }
    }

    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("FREETIME_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Read the schedule file. A missing file is an empty week.
fn load_schedule(path: &Path) -> Result<WeeklySchedule> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no schedule file, starting empty");
        return Ok(WeeklySchedule::new());
    }
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    WeeklySchedule::from_json(&json)
        .with_context(|| format!("Failed to load schedule: {}", path.display()))
}

fn save_schedule(path: &Path, schedule: &WeeklySchedule) -> Result<()> {
    let json = schedule
        .to_json_pretty()
        .context("Failed to serialize schedule")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write file: {}", path.display()))
}

fn check_index(day: Weekday, schedule: &DaySchedule, index: usize) -> Result<()> {
    if index >= schedule.len() {
        bail!(
            "{} has no slot {} (it has {} slot(s))",
            day,
            index,
            schedule.len()
        );
    }
    Ok(())
}

fn print_day(day: Weekday, schedule: &DaySchedule) {
    println!("{day}");
    if schedule.is_empty() {
        println!("  (no slots)");
        return;
    }
    for (index, slot) in schedule.slots().iter().enumerate() {
        let layout = slot.layout();
        println!(
            "  [{}] {}  {}  (top {}px, height {}px)",
            index,
            slot,
            describe(slot),
            layout.top,
            layout.height
        );
    }
}
