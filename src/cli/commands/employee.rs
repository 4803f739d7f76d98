use crate::cli::commands::context::{
    Sheet, open_sheet, resolve_employee, validate_name, validate_pin, validate_rate,
};
use crate::cli::parser::{Cli, Commands, EmployeeAction};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::employee::EmployeeUpdate;
use crate::ui::messages::{info, success, warning};
use crate::utils::formatting::fmt_money;
use crate::utils::table::{Column, Table};
use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

fn warn_if_pin_taken(sheet: &Sheet, pin: &str, own_id: Option<&str>) {
    if let Some(other) = sheet.find_by_pin(pin)
        && Some(other.id.as_str()) != own_id
    {
        warning(format!(
            "PIN {} is already used by {}; the PIN pad will pick the first match.",
            pin, other.name
        ));
    }
}

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Employee { action } = &cli.command else {
        return Ok(());
    };

    let sheet = open_sheet(cli, cfg)?;

    match action {
        EmployeeAction::Add { name, rate, pin } => {
            let name = validate_name(name)?;
            let rate = validate_rate(rate)?;
            let pin = pin.as_deref().map(validate_pin).transpose()?;

            if let Some(p) = &pin {
                warn_if_pin_taken(&sheet, p, None);
            }

            let emp = sheet
                .add_employee_with_pin(&name, rate, pin)
                .ok_or(AppError::InvalidName)?;

            success(format!(
                "Added {} ({}/h) with id {}",
                emp.name,
                fmt_money(&cfg.currency, emp.hourly_rate),
                emp.id
            ));
        }

        EmployeeAction::Edit {
            employee,
            name,
            rate,
            pin,
            clear_pin,
        } => {
            let emp = resolve_employee(&sheet, employee)?;

            let update = EmployeeUpdate {
                name: name.as_deref().map(validate_name).transpose()?,
                hourly_rate: rate.as_deref().map(validate_rate).transpose()?,
                pin: if *clear_pin {
                    Some(None)
                } else {
                    pin.as_deref().map(validate_pin).transpose()?.map(Some)
                },
            };

            if update.is_empty() {
                info("Nothing to do: specify --name, --rate, --pin or --clear-pin.");
                return Ok(());
            }

            if let Some(Some(p)) = &update.pin {
                warn_if_pin_taken(&sheet, p, Some(&emp.id));
            }

            let updated = sheet
                .update_employee(&emp.id, update)
                .ok_or_else(|| AppError::EmployeeNotFound(emp.id.clone()))?;

            success(format!(
                "Updated {}: {} at {}/h",
                updated.id,
                updated.name,
                fmt_money(&cfg.currency, updated.hourly_rate)
            ));
        }

        EmployeeAction::Del { employee, yes } => {
            let emp = resolve_employee(&sheet, employee)?;

            let prompt = format!(
                "Delete {} and ALL of their time entries? This action is irreversible.",
                emp.name
            );
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            sheet.delete_employee(&emp.id);
            success(format!("{} and their time entries have been deleted.", emp.name));
        }

        EmployeeAction::List => {
            let employees = sheet.employees();
            if employees.is_empty() {
                info("No employees yet. Add one with `rtimeclock employee add <name> <rate>`.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::left("ID"),
                Column::left("NAME"),
                Column::right("RATE"),
                Column::left("PIN"),
            ]);
            for e in &employees {
                table.add_row(vec![
                    e.id.clone(),
                    e.name.clone(),
                    fmt_money(&cfg.currency, e.hourly_rate),
                    if e.pin.is_some() { "set" } else { "-" }.to_string(),
                ]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}
