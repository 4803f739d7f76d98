use crate::cli::commands::context::{open_sheet, resolve_employee, resolve_range};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::fmt_hours;
use crate::utils::table::{Column, Table};
use std::collections::HashMap;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::List { range, employee } = &cli.command else {
        return Ok(());
    };

    let sheet = open_sheet(cli, cfg)?;
    let spec = resolve_range(range.as_ref(), cfg)?;
    let dr = spec.resolve(sheet.today());

    let only = employee
        .as_deref()
        .map(|who| resolve_employee(&sheet, who))
        .transpose()?;

    let names: HashMap<String, String> = sheet
        .employees()
        .into_iter()
        .map(|e| (e.id, e.name))
        .collect();

    let mut entries = sheet.entries_in_range(&dr);
    if let Some(emp) = &only {
        entries.retain(|e| e.employee_id == emp.id);
    }
    entries.sort_by(|a, b| (a.date, a.clock_in).cmp(&(b.date, b.clock_in)));

    header(format!("{} ({})", spec.label(), dr));

    if entries.is_empty() {
        info("No time entries in this range.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::left("ID"),
        Column::left("DATE"),
        Column::left("EMPLOYEE"),
        Column::left("IN"),
        Column::left("OUT"),
        Column::right("HOURS"),
    ]);

    for e in &entries {
        let hours = fmt_hours(sheet.calc_hours(e));
        table.add_row(vec![
            e.id.clone(),
            e.date_str(),
            names
                .get(&e.employee_id)
                .cloned()
                .unwrap_or_else(|| e.employee_id.clone()),
            e.clock_in_str(),
            e.clock_out_str(),
            if e.is_open() {
                format!("{} (open)", hours)
            } else {
                hours
            },
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
