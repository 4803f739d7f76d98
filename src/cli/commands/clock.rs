//! `in`, `out` and `punch`.

use crate::cli::commands::context::{open_sheet, resolve_employee};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::entries::PunchOutcome;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::formatting::fmt_hours;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let sheet = open_sheet(cli, cfg)?;

    match &cli.command {
        Commands::In { employee } => {
            let emp = resolve_employee(&sheet, employee)?;
            let entry = sheet
                .clock_in(&emp.id)
                .ok_or_else(|| AppError::AlreadyClockedIn(emp.name.clone()))?;

            success(format!(
                "{} clocked in at {} on {} (entry {})",
                emp.name,
                entry.clock_in_str(),
                entry.date_str(),
                entry.id
            ));
        }

        Commands::Out { employee } => {
            let emp = resolve_employee(&sheet, employee)?;
            let open = sheet
                .find_open_entry(&emp.id)
                .ok_or_else(|| AppError::NotClockedIn(emp.name.clone()))?;

            let entry = sheet
                .clock_out(&open.id)
                .ok_or_else(|| AppError::EntryNotFound(open.id.clone()))?;

            success(format!(
                "{} clocked out at {} ({} → {}, {})",
                emp.name,
                entry.clock_out_str(),
                entry.clock_in_str(),
                entry.clock_out_str(),
                fmt_hours(sheet.calc_hours(&entry))
            ));
        }

        Commands::Punch { pin } => match sheet.punch(pin.trim()) {
            PunchOutcome::ClockedIn { name, entry } => {
                success(format!("Welcome {}! Clocked in at {}", name, entry.clock_in_str()));
            }
            PunchOutcome::ClockedOut { name, entry } => {
                success(format!(
                    "Goodbye {}! Clocked out at {} ({})",
                    name,
                    entry.clock_out_str(),
                    fmt_hours(sheet.calc_hours(&entry))
                ));
            }
            PunchOutcome::Rejected { name } => return Err(AppError::AlreadyClockedIn(name)),
            PunchOutcome::UnknownPin => return Err(AppError::UnknownPin),
        },

        _ => {}
    }

    Ok(())
}
