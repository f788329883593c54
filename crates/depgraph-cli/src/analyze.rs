use colored::Colorize;
use std::collections::BTreeMap;

use depgraph_graph::{graph_digest, Extraction, GraphSummary};

/// Longest id list printed in full before it is elided.
const MAX_LISTED: usize = 10;

pub fn print_analysis(extraction: &Extraction) {
    let summary = GraphSummary::of(&extraction.graph);
    let report = &extraction.report;

    println!("{}", "Analysis".green().bold());
    println!("  Nodes: {}", summary.nodes.to_string().cyan());
    print_counts("Kinds", &summary.kinds);
    print_counts("Type status", &summary.type_statuses);
    print_counts("Term status", &summary.term_statuses);
    println!(
        "  Dependencies: {} type-level, {} term-level",
        summary.type_dependencies, summary.term_dependencies
    );
    println!("  Default blocks discarded: {}", report.defaults_discarded);
    if !report.skipped.is_empty() {
        println!(
            "  {} {}",
            "Skipped statements:".yellow(),
            report.skipped.len()
        );
        for statement in &report.skipped {
            println!("    {}", statement.dimmed());
        }
    }
    print_ids("Without content", &summary.without_content);
    print_ids("Leaves", &summary.leaves);
    print_ids("Roots", &summary.roots);
    println!("  Digest: {}", graph_digest(&extraction.graph).cyan());
}

fn print_counts(label: &str, counts: &BTreeMap<String, usize>) {
    if counts.is_empty() {
        return;
    }
    let parts: Vec<String> = counts.iter().map(|(k, n)| format!("{k}={n}")).collect();
    println!("  {label}: {}", parts.join(", "));
}

fn print_ids(label: &str, ids: &[String]) {
    if ids.is_empty() {
        return;
    }
    let shown: Vec<&str> = ids.iter().take(MAX_LISTED).map(String::as_str).collect();
    let more = if ids.len() > MAX_LISTED {
        format!(" (+{} more)", ids.len() - MAX_LISTED)
    } else {
        String::new()
    };
    println!("  {label} ({}): {}{more}", ids.len(), shown.join(", ").yellow());
}
