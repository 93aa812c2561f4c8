//! `brs schema`: print the exported data source schemas.

use brs_core::data_source;

use crate::cli::GlobalOpts;
use crate::config;
use crate::error::CliError;
use crate::output;

pub fn handle(global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = config::load(global)?;
    let schemas = data_source::export_schemas();

    // A schema has no tabular form; table falls back to pretty JSON.
    let out = output::render_single(config::output_format(global, &cfg), &schemas, |s| {
        serde_json::to_string_pretty(s).unwrap_or_default()
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}
