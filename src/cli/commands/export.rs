use crate::cli::commands::context::{open_sheet, resolve_range};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        entries,
        force,
    } = &cli.command
    {
        let sheet = open_sheet(cli, cfg)?;
        let spec = resolve_range(range.as_ref(), cfg)?;
        let dr = spec.resolve(sheet.today());

        if *entries {
            ExportLogic::export_entries(&sheet, format, file, &dr, *force)?;
        } else {
            ExportLogic::export_summary(&sheet, format, file, &dr, *force)?;
        }
    }
    Ok(())
}
