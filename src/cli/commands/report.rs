use crate::cli::commands::context::{open_sheet, resolve_range};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::report::wage_report_text;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { range } = &cli.command {
        let sheet = open_sheet(cli, cfg)?;
        let spec = resolve_range(range.as_ref(), cfg)?;
        let summary = sheet.wage_summary(&spec.resolve(sheet.today()));

        println!("{}", wage_report_text(&summary, &spec.label(), &cfg.currency));
    }
    Ok(())
}
