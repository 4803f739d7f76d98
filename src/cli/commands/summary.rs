use crate::cli::commands::context::{open_sheet, resolve_range};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::{bold, fmt_hours, fmt_money};
use crate::utils::table::{Column, Table};

/// Payroll table: hours and wage per employee, then the grand total.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let range = match &cli.command {
        crate::cli::parser::Commands::Summary { range } => range,
        _ => return Ok(()),
    };

    let sheet = open_sheet(cli, cfg)?;
    let spec = resolve_range(range.as_ref(), cfg)?;
    let dr = spec.resolve(sheet.today());
    let summary = sheet.wage_summary(&dr);

    header(format!("{} ({})", spec.label(), dr));

    if summary.rows.is_empty() {
        info("No employees yet.");
        return Ok(());
    }
    if !summary.has_data() {
        info("No completed shifts in this range.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::left("NAME"),
        Column::right("HOURS"),
        Column::right("RATE"),
        Column::right("WAGE"),
    ]);

    for row in summary.rows.iter().filter(|r| r.hours > 0.0) {
        table.add_row(vec![
            row.name.clone(),
            fmt_hours(row.hours),
            fmt_money(&cfg.currency, row.hourly_rate),
            fmt_money(&cfg.currency, row.wage),
        ]);
    }
    table.add_row(vec![
        "Total".to_string(),
        fmt_hours(summary.total_hours),
        String::new(),
        fmt_money(&cfg.currency, summary.total_wage),
    ]);

    let rendered = table.render();
    let lines: Vec<&str> = rendered.lines().collect();
    for (i, line) in lines.iter().enumerate() {
        if i + 1 == lines.len() {
            println!("{}", bold(line));
        } else {
            println!("{}", line);
        }
    }

    Ok(())
}
