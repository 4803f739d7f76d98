use crate::cli::commands::context::open_sheet;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::time_entry::EntryUpdate;
use crate::ui::messages::{info, success, warning};
use crate::utils::formatting::fmt_hours;
use crate::utils::time::parse_optional_time;

/// Manual correction of a time entry.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Edit {
        entry,
        clock_in,
        clock_out,
        reopen,
    } = &cli.command
    else {
        return Ok(());
    };

    let update = EntryUpdate {
        clock_in: parse_optional_time(clock_in.as_ref())?,
        clock_out: if *reopen {
            Some(None)
        } else {
            parse_optional_time(clock_out.as_ref())?.map(Some)
        },
    };

    if update.clock_in.is_none() && update.clock_out.is_none() {
        info("Nothing to do: specify --in, --out or --reopen.");
        return Ok(());
    }

    let sheet = open_sheet(cli, cfg)?;

    if *reopen
        && let Some(current) = sheet.entry(entry)
        && sheet
            .find_open_entry(&current.employee_id)
            .is_some_and(|open| open.id != current.id)
    {
        let name = sheet
            .employee(&current.employee_id)
            .map(|e| e.name)
            .unwrap_or(current.employee_id);
        return Err(AppError::AlreadyClockedIn(name));
    }

    let updated = sheet
        .update_entry(entry, update)
        .ok_or_else(|| AppError::EntryNotFound(entry.clone()))?;

    if let Some(out) = updated.clock_out
        && out < updated.clock_in
    {
        warning("Clock-out is earlier than clock-in: counted as a shift over midnight.");
    }

    success(format!(
        "Entry {} on {}: {} → {} ({})",
        updated.id,
        updated.date_str(),
        updated.clock_in_str(),
        updated.clock_out_str(),
        fmt_hours(sheet.calc_hours(&updated))
    ));

    Ok(())
}
