pub mod config;
pub mod date;
pub mod habit;

use std::path::PathBuf;

use habitrack_core::snapshot::format_date;
use habitrack_core::{AppClock, Config, DaySnapshot, Event, HabitFile, SessionFile};
use serde::Serialize;

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Everything a command needs from the environment.
pub struct Context {
    pub dir: PathBuf,
    pub config: Config,
    pub json: bool,
}

impl Context {
    pub fn habit_file(&self) -> HabitFile {
        HabitFile::new(self.config.habits_path(&self.dir))
    }

    pub fn session_file(&self) -> SessionFile {
        SessionFile::new(self.config.session_path(&self.dir))
    }

    /// The app clock as the previous invocation left it.
    pub fn load_clock(&self) -> AppClock {
        let mut clock = AppClock::system();
        self.session_file().restore(&mut clock);
        clock
    }

    fn format_date(&self, date: chrono::NaiveDate) -> String {
        format_date(date, &self.config.display.date_format)
    }

    /// Print the outcome of an action, as JSON or as a line of text.
    pub fn emit(&self, event: &Event) -> CmdResult {
        if self.json {
            print_json(event)
        } else {
            println!("{}", self.describe(event));
            Ok(())
        }
    }

    /// Report a refused action and exit with status 1.
    pub fn refuse(&self, event: &Event) -> ! {
        if self.json {
            if let Ok(json) = serde_json::to_string_pretty(event) {
                println!("{json}");
            }
        } else {
            eprintln!("error: {}", self.describe(event));
        }
        std::process::exit(1);
    }

    pub fn describe(&self, event: &Event) -> String {
        match event {
            Event::HabitAdded { name } => format!("added '{name}'"),
            Event::HabitExists { name } => format!("habit '{name}' already exists"),
            Event::HabitDeleted { name } => format!("deleted '{name}'"),
            Event::HabitMissing { name } => format!("no habit named '{name}'"),
            Event::CompletionChanged {
                name,
                date,
                completed,
                streak,
            } => {
                let mark = if *completed { "done" } else { "not done" };
                format!("{name}: {mark} on {} (streak {streak})", self.format_date(*date))
            }
            Event::AppDateChanged {
                date,
                is_today,
                can_advance,
            } => self.date_header(*date, *is_today, *can_advance),
        }
    }

    fn date_header(&self, date: chrono::NaiveDate, is_today: bool, can_advance: bool) -> String {
        let mut header = self.format_date(date);
        if is_today {
            header.push_str("  [today]");
        } else if can_advance {
            header.push_str("  [past]");
        }
        header
    }

    pub fn render_snapshot(&self, snapshot: &DaySnapshot) -> String {
        let mut out = self.date_header(snapshot.date, snapshot.is_today, snapshot.can_advance);
        out.push('\n');
        if snapshot.habits.is_empty() {
            out.push_str("No habits yet. Add one with `habit add <name>`.\n");
            return out;
        }
        let width = snapshot
            .habits
            .iter()
            .map(|h| h.name.chars().count())
            .max()
            .unwrap_or(0);
        for habit in &snapshot.habits {
            let check = if habit.completed { 'x' } else { ' ' };
            out.push_str(&format!(
                "  [{check}] {:<width$}  🔥 {}\n",
                habit.name, habit.streak
            ));
        }
        out
    }
}

pub fn print_json<T: Serialize>(value: &T) -> CmdResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
