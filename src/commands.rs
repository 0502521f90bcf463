//! CLI Command Handlers
//!
//! Implements all CLI commands over the dataset.
//! Each handler takes CLI args and Output, returns ExitCode.

use std::fmt::Display;

use serde::Serialize;

use crate::cli::{
    ClientsCmd, ExitCode, HousesCmd, ListArgs, Output, PaletteCmd, PaletteEntry, ProcessesCmd,
    TrackingCmd,
};
use crate::data::Dataset;
use crate::filter::{filter_records, AllRecords, CategoryFilter, ProcessTab, Searchable};
use crate::models::TrackingStatus;
use crate::theme::{hex, ThemeStore};

/// Filter, then cap at `args.limit`
pub fn select<'a, R, C>(records: &'a [R], category: &C, args: &ListArgs) -> Vec<&'a R>
where
    R: Searchable,
    C: CategoryFilter<R> + ?Sized,
{
    let mut results = filter_records(records, category, args.query());
    results.truncate(args.limit);
    results
}

/// Print results, or report that nothing matched
fn print_results<T: Serialize + Display>(
    what: &str,
    results: &[&T],
    args: &ListArgs,
    output: &Output,
) -> ExitCode {
    tracing::info!(what, query = args.query(), count = results.len(), "list command");

    if results.is_empty() {
        let msg = if args.query().trim().is_empty() {
            format!("No {} found", what)
        } else {
            format!("No {} match '{}'", what, args.query())
        };
        return output.error(msg, ExitCode::NoResults);
    }

    output.info(format!("{} {}", results.len(), what));
    if let Err(e) = output.print_list(results) {
        return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
    }
    ExitCode::Success
}

// =============================================================================
// List Commands
// =============================================================================

pub fn clients_cmd(cmd: ClientsCmd, data: &Dataset, output: &Output) -> ExitCode {
    let results = select(&data.clients, &AllRecords, &cmd.list);
    print_results("clients", &results, &cmd.list, output)
}

pub fn processes_cmd(cmd: ProcessesCmd, data: &Dataset, output: &Output) -> ExitCode {
    let tab = ProcessTab::from(cmd.tab);
    let results = select(&data.processes, &tab, &cmd.list);
    print_results("processes", &results, &cmd.list, output)
}

pub fn tracking_cmd(cmd: TrackingCmd, data: &Dataset, output: &Output) -> ExitCode {
    let status = TrackingStatus::from(cmd.status);
    let results = select(&data.tracking, &status, &cmd.list);
    print_results("tracking items", &results, &cmd.list, output)
}

pub fn houses_cmd(cmd: HousesCmd, data: &Dataset, output: &Output) -> ExitCode {
    let results = select(&data.houses, &AllRecords, &cmd.list);
    print_results("judicial houses", &results, &cmd.list, output)
}

// =============================================================================
// Palette Command
// =============================================================================

/// Named hex colors for the store's effective palette
pub fn palette_entries(store: &ThemeStore) -> Vec<PaletteEntry> {
    store
        .colors()
        .entries()
        .iter()
        .filter_map(|(name, color)| {
            hex(*color).map(|hex| PaletteEntry {
                name: name.to_string(),
                hex,
            })
        })
        .collect()
}

pub fn palette_cmd(cmd: PaletteCmd, mut store: ThemeStore, output: &Output) -> ExitCode {
    if let Some(mode) = cmd.mode {
        store.set_mode(mode.into());
    }
    output.info(format!(
        "Theme: {} ({})",
        store.mode(),
        if store.is_dark() { "dark" } else { "light" }
    ));

    let entries = palette_entries(&store);
    if let Err(e) = output.print_list(&entries) {
        return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
    }
    ExitCode::Success
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{SystemScheme, ThemeMode};

    fn args(query: &str, limit: usize) -> ListArgs {
        ListArgs {
            query: Some(query.to_string()),
            limit,
        }
    }

    #[test]
    fn test_select_applies_limit() {
        let data = Dataset::mock();
        let all = select(&data.clients, &AllRecords, &args("", 50));
        assert_eq!(all.len(), data.clients.len());

        let capped = select(&data.clients, &AllRecords, &args("", 3));
        assert_eq!(capped.len(), 3);
        assert_eq!(capped[0].name, "Maria Garcia");
    }

    #[test]
    fn test_select_with_category() {
        let data = Dataset::mock();
        let archived = select(&data.processes, &ProcessTab::Archived, &args("", 50));
        assert_eq!(archived.len(), 3);

        let urgent = select(&data.tracking, &TrackingStatus::Urgent, &args("pericial", 50));
        assert_eq!(urgent.len(), 1);
        assert_eq!(urgent[0].id, "t-005");
    }

    #[test]
    fn test_palette_entries() {
        let store = ThemeStore::new(ThemeMode::Dark, SystemScheme::Unknown);
        let entries = palette_entries(&store);
        assert_eq!(entries.len(), 12);
        assert_eq!(entries[0].name, "primary");
        assert_eq!(entries[0].hex, "#4C83C2");
    }

    #[test]
    fn test_no_results_exit_code() {
        let output = Output {
            json: false,
            quiet: true,
        };
        let cmd = ClientsCmd {
            list: args("zzz-nadie", 50),
        };
        assert_eq!(
            clients_cmd(cmd, Dataset::mock(), &output),
            ExitCode::NoResults
        );
    }
}
