use chrono::NaiveDate;
use clap::Subcommand;
use habitrack_core::snapshot::date_event;

use super::{CmdResult, Context};

#[derive(Subcommand)]
pub enum DateAction {
    /// Print the current app date
    Show,
    /// Move one day forward (never past today)
    Next,
    /// Move one day back
    Prev,
    /// Return to today
    Today,
    /// Jump to a date (YYYY-MM-DD); future dates become today
    Set {
        date: NaiveDate,
    },
}

pub fn run(action: DateAction, ctx: &Context) -> CmdResult {
    let mut clock = ctx.load_clock();

    let changed = match action {
        DateAction::Show => false,
        DateAction::Next => {
            clock.advance();
            true
        }
        DateAction::Prev => {
            clock.rewind();
            true
        }
        DateAction::Today => {
            clock.reset();
            true
        }
        DateAction::Set { date } => {
            clock.set(date);
            true
        }
    };

    if changed {
        ctx.session_file().save(&clock)?;
    }
    ctx.emit(&date_event(&clock))
}
