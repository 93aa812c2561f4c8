//! `brs sources`: read protection source trees and render them.

use serde_json::Value;
use tabled::Tabled;
use tracing::debug;

use brs_core::data_source::protection_sources;
use brs_core::{ResourceConfig, ResourceState, Session};

use crate::cli::{GlobalOpts, SourcesArgs};
use crate::config;
use crate::error::CliError;
use crate::output;

// ── Table row ────────────────────────────────────────────────────────

#[derive(Debug, Tabled)]
pub struct SourceRow {
    #[tabled(rename = "Source")]
    name: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Environment")]
    environment: String,
    #[tabled(rename = "Logical Size")]
    logical_size: String,
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(args: &SourcesArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = config::load(global)?;
    let target = config::resolve_target(global, &cfg)?;
    let format = config::output_format(global, &cfg);

    let schema = protection_sources::schema();
    let arguments = ResourceConfig::new(&schema, args.to_arguments(&target.tenant))?;

    debug!(endpoint = %target.client.endpoint, tenant = %target.tenant, "reading protection sources");
    let session = Session::connect(&target.client);
    let state = protection_sources::read(&session, &arguments).await?;

    // Keys and passwords never reach the terminal
    let shown = state.redacted(&schema);
    let out = output::render_list(format, &shown, tree_rows, source_names)?;
    output::print_output(&out, global.quiet);
    Ok(())
}

// ── Tree walking ─────────────────────────────────────────────────────

fn roots(state: &ResourceState) -> &[Value] {
    state
        .get("protection_sources")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Children of a flattened node: `nodes`, then `application_nodes`.
fn children(node: &Value) -> impl Iterator<Item = &Value> {
    ["nodes", "application_nodes"]
        .into_iter()
        .filter_map(|key| node.get(key).and_then(Value::as_array))
        .flatten()
}

fn walk<'a>(node: &'a Value, depth: usize, visit: &mut impl FnMut(&'a Value, usize)) {
    visit(node, depth);
    for child in children(node) {
        walk(child, depth + 1, visit);
    }
}

fn text(value: &Value) -> String {
    match value {
        Value::Null => "-".into(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `custom_name` when set, else `name`.
fn display_name(source: &Value) -> Option<&str> {
    source["custom_name"]
        .as_str()
        .filter(|n| !n.is_empty())
        .or_else(|| source["name"].as_str())
}

/// One row per node, depth-first, indented by depth.
pub fn tree_rows(state: &ResourceState) -> Vec<SourceRow> {
    let mut rows = Vec::new();
    for root in roots(state) {
        walk(root, 0, &mut |node: &Value, depth: usize| {
            let source = &node["protection_source"][0];
            let indent = if depth == 0 {
                String::new()
            } else {
                format!("{}└ ", "  ".repeat(depth - 1))
            };
            rows.push(SourceRow {
                name: format!("{indent}{}", display_name(source).unwrap_or("-")),
                id: text(&source["id"]),
                environment: text(&source["environment"]),
                logical_size: text(&node["logical_size"]),
            });
        });
    }
    rows
}

/// Source names, depth-first.
pub fn source_names(state: &ResourceState) -> Vec<String> {
    let mut names = Vec::new();
    for root in roots(state) {
        walk(root, 0, &mut |node: &Value, _: usize| {
            if let Some(name) = display_name(&node["protection_source"][0]) {
                names.push(name.to_owned());
            }
        });
    }
    names
}
