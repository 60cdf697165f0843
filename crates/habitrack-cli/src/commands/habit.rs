use chrono::NaiveDate;
use clap::Subcommand;
use habitrack_core::{AppClock, Clock, DaySnapshot, Event, HabitTracker};

use super::{print_json, CmdResult, Context};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Add a new habit
    Add {
        /// Habit name (must be unique)
        name: String,
    },
    /// Delete a habit and its history
    Delete {
        /// Habit name
        name: String,
    },
    /// List habits with completion and streak on the current app date
    List,
    /// Mark a habit done
    Done {
        /// Habit name
        name: String,
        /// Day to mark (YYYY-MM-DD); defaults to the current app date
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Clear a habit's completion
    Undo {
        /// Habit name
        name: String,
        /// Day to clear (YYYY-MM-DD); defaults to the current app date
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Flip a habit's completion
    Toggle {
        /// Habit name
        name: String,
        /// Day to flip (YYYY-MM-DD); defaults to the current app date
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Print a habit's current streak
    Streak {
        /// Habit name
        name: String,
        /// Reference day (YYYY-MM-DD); defaults to the current app date
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

/// Resolve the day an action applies to.
fn target_date<C: Clock>(clock: &AppClock<C>, date: Option<NaiveDate>) -> Result<NaiveDate, String> {
    match date {
        Some(date) if date > clock.real_today() => {
            Err(format!("cannot use {date}: it is after today"))
        }
        Some(date) => Ok(date),
        None => Ok(clock.current()),
    }
}

fn require_habit(ctx: &Context, tracker: &HabitTracker, name: &str) {
    if tracker.get(name).is_none() {
        ctx.refuse(&Event::HabitMissing {
            name: name.to_string(),
        });
    }
}

fn completion_event(tracker: &HabitTracker, name: &str, date: NaiveDate) -> Event {
    Event::CompletionChanged {
        name: name.to_string(),
        date,
        completed: tracker.is_complete_on(name, date),
        streak: tracker.current_streak(name, date),
    }
}

pub fn run(action: HabitAction, ctx: &Context) -> CmdResult {
    let file = ctx.habit_file();
    let mut tracker = file.load()?;
    let clock = ctx.load_clock();

    match action {
        HabitAction::Add { name } => {
            let name = name.trim();
            if !tracker.add(name)? {
                ctx.refuse(&Event::HabitExists {
                    name: name.to_string(),
                });
            }
            file.save(&tracker)?;
            ctx.emit(&Event::HabitAdded {
                name: name.to_string(),
            })?;
        }
        HabitAction::Delete { name } => {
            require_habit(ctx, &tracker, &name);
            tracker.delete(&name);
            file.save(&tracker)?;
            ctx.emit(&Event::HabitDeleted { name })?;
        }
        HabitAction::List => {
            let snapshot = DaySnapshot::capture(&clock, &tracker);
            if ctx.json {
                print_json(&snapshot)?;
            } else {
                print!("{}", ctx.render_snapshot(&snapshot));
            }
        }
        HabitAction::Done { name, date } => {
            let date = target_date(&clock, date)?;
            require_habit(ctx, &tracker, &name);
            tracker.mark_complete(&name, date);
            file.save(&tracker)?;
            ctx.emit(&completion_event(&tracker, &name, date))?;
        }
        HabitAction::Undo { name, date } => {
            let date = target_date(&clock, date)?;
            require_habit(ctx, &tracker, &name);
            tracker.mark_incomplete(&name, date);
            file.save(&tracker)?;
            ctx.emit(&completion_event(&tracker, &name, date))?;
        }
        HabitAction::Toggle { name, date } => {
            let date = target_date(&clock, date)?;
            require_habit(ctx, &tracker, &name);
            tracker.toggle(&name, date);
            file.save(&tracker)?;
            ctx.emit(&completion_event(&tracker, &name, date))?;
        }
        HabitAction::Streak { name, date } => {
            let date = target_date(&clock, date)?;
            require_habit(ctx, &tracker, &name);
            let streak = tracker.current_streak(&name, date);
            if ctx.json {
                print_json(&serde_json::json!({ "name": name, "date": date, "streak": streak }))?;
            } else {
                println!("{streak}");
            }
        }
    }
    Ok(())
}
