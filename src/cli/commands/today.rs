use crate::cli::commands::context::open_sheet;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::status::EmployeeStatus;
use crate::ui::messages::{header, info, status_badge};
use crate::utils::formatting::{fmt_hours, fmt_money};
use crate::utils::table::{Column, Table};

/// Status board: who is working right now and how long they worked today.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let sheet = open_sheet(cli, cfg)?;
    let employees = sheet.employees();

    if employees.is_empty() {
        info("No employees yet. Add one with `rtimeclock employee add <name> <rate>`.");
        return Ok(());
    }

    header(format!("Today {}", sheet.today()));

    let mut table = Table::new(vec![
        Column::left("NAME"),
        Column::left("STATUS"),
        Column::right("TODAY"),
        Column::right("RATE"),
    ]);

    let today = sheet.today();
    for emp in &employees {
        let status = sheet.employee_status(&emp.id);
        let mut badge = status_badge(&status);

        // a shift left open on an earlier day still blocks `in`
        if !matches!(status, EmployeeStatus::Working(_))
            && let Some(open) = sheet.find_open_entry(&emp.id)
            && open.date < today
        {
            badge = format!(
                "{} since {} {}",
                status_badge(&EmployeeStatus::Working(open.clone())),
                open.date_str(),
                open.clock_in_str()
            );
        }

        let hours = sheet.today_total(&emp.id);
        table.add_row(vec![
            emp.name.clone(),
            badge,
            fmt_hours(hours),
            format!("{}/h", fmt_money(&cfg.currency, emp.hourly_rate)),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
