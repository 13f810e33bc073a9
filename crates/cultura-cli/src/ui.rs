use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};
use crate::output::table::TableOptions;

/// Terminals narrower than this are treated as unknown width.
const MIN_TERM_WIDTH: usize = 40;

static TABLE_OPTIONS: OnceLock<TableOptions> = OnceLock::new();

/// Resolve table rendering options once from flags and the environment.
pub fn init(flags: &GlobalFlags) {
    let options = resolve(
        flags,
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var("COLUMNS").ok().as_deref(),
    );
    let _ = TABLE_OPTIONS.set(options);
}

/// Options for table output; plain and unbounded before [`init`] runs.
#[must_use]
pub fn table_options() -> TableOptions {
    TABLE_OPTIONS.get().copied().unwrap_or(TableOptions {
        max_width: None,
        color: false,
    })
}

fn resolve(flags: &GlobalFlags, is_tty: bool, no_color: bool, columns: Option<&str>) -> TableOptions {
    let table = flags.format == OutputFormat::Table;
    let color = match flags.color {
        ColorMode::Always => table,
        ColorMode::Never => false,
        ColorMode::Auto => table && is_tty && !flags.quiet && !no_color,
    };
    let max_width = columns
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= MIN_TERM_WIDTH);
    TableOptions { max_width, color }
}
