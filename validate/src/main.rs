//! Dataset integrity checker.
//!
//! The tables are hand-authored, so stale cross-references and odd
//! values slip in between seasons. The runtime recovers from all of
//! them softly; this tool surfaces them at authoring time instead.
//!
//! Errors are problems the runtime silently drops data over (dangling
//! references, duplicates, out-of-range scores). Warnings are
//! suspicious-but-legal authoring (unknown subrole keys, counter tier
//! disagreeing with effectiveness).

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

use herodex_core::Dataset;
use herodex_core::types::CounterInfo;

#[derive(Parser)]
#[command(version, about = "Check a Herodex dataset directory for integrity problems")]
struct Cli {
    /// Dataset directory containing the five JSON tables
    #[arg(short, long, default_value = "data")]
    data: PathBuf,

    /// Treat warnings as failures
    #[arg(long)]
    strict: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Error,
    Warning,
}

#[derive(Debug)]
struct Finding {
    severity: Severity,
    message: String,
}

impl Finding {
    fn error(message: impl Into<String>) -> Self {
        Self { severity: Severity::Error, message: message.into() }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self { severity: Severity::Warning, message: message.into() }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let data = match Dataset::load_dir(&cli.data) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut findings = check_dataset(&data);
    findings.extend(check_raw_scores(&cli.data));

    let errors = findings.iter().filter(|f| f.severity == Severity::Error).count();
    let warnings = findings.len() - errors;
    report(&findings, errors, warnings);

    if errors > 0 || (cli.strict && warnings > 0) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Checks over the parsed dataset
// ═══════════════════════════════════════════════════════════════════════════

fn check_dataset(data: &Dataset) -> Vec<Finding> {
    let mut findings = Vec::new();

    check_duplicate_heroes(data, &mut findings);
    check_counters(data, &mut findings);
    check_synergies(data, &mut findings);
    check_meta(data, &mut findings);
    check_patches(data, &mut findings);
    check_subroles(data, &mut findings);

    findings
}

fn check_duplicate_heroes(data: &Dataset, findings: &mut Vec<Finding>) {
    let mut seen = HashSet::new();
    for hero in data.heroes() {
        if !seen.insert(hero.id.as_str()) {
            findings.push(Finding::error(format!("heroes: duplicate id `{}`", hero.id)));
        }
    }
}

fn check_counters(data: &Dataset, findings: &mut Vec<Finding>) {
    let mut seen = HashSet::new();
    for group in data.counter_groups() {
        if data.hero(&group.hero_id).is_none() {
            findings.push(Finding::error(format!(
                "counters: group owner `{}` is not in the hero table",
                group.hero_id
            )));
        }
        if !seen.insert(group.hero_id.as_str()) {
            findings.push(Finding::error(format!(
                "counters: duplicate group for `{}`",
                group.hero_id
            )));
        }

        for counter in &group.counters {
            if data.hero(&counter.hero_id).is_none() {
                findings.push(Finding::error(format!(
                    "counters: `{}` entry references unknown hero `{}`",
                    group.hero_id, counter.hero_id
                )));
            }
            if let Some(finding) = check_tier_agreement(&group.hero_id, counter) {
                findings.push(finding);
            }
        }
    }
}

/// Counter tier and effectiveness are authored independently; they are
/// allowed to disagree, but a disagreement is usually a typo.
fn check_tier_agreement(owner: &str, counter: &CounterInfo) -> Option<Finding> {
    let tier = counter.tier?;
    let expected = (counter.effectiveness.saturating_sub(1)).max(1);
    if tier.rank() == expected {
        return None;
    }
    Some(Finding::warning(format!(
        "counters: `{}` entry for `{}` has tier {:?} but effectiveness {}",
        owner, counter.hero_id, tier, counter.effectiveness
    )))
}

fn check_synergies(data: &Dataset, findings: &mut Vec<Finding>) {
    for (owner, synergies) in data.synergies() {
        if data.hero(owner).is_none() {
            findings.push(Finding::error(format!(
                "synergies: owner `{owner}` is not in the hero table"
            )));
        }
        for synergy in synergies {
            if data.hero(&synergy.partner_id).is_none() {
                findings.push(Finding::error(format!(
                    "synergies: `{}` references unknown partner `{}`",
                    owner, synergy.partner_id
                )));
            }
        }
    }
}

fn check_meta(data: &Dataset, findings: &mut Vec<Finding>) {
    let mut seen = HashSet::new();
    for entry in &data.meta().heroes {
        if data.hero(&entry.hero_id).is_none() {
            findings.push(Finding::error(format!(
                "meta: entry references unknown hero `{}`",
                entry.hero_id
            )));
        }
        if !seen.insert(entry.hero_id.as_str()) {
            findings.push(Finding::error(format!(
                "meta: duplicate entry for `{}`",
                entry.hero_id
            )));
        }
    }

    for id in &data.meta().new_heroes {
        if data.hero(id).is_none() {
            findings.push(Finding::warning(format!(
                "meta: newHeroes lists unknown hero `{id}`"
            )));
        }
    }
}

fn check_patches(data: &Dataset, findings: &mut Vec<Finding>) {
    for patch in data.patches() {
        for change in &patch.changes {
            if data.hero(&change.hero_id).is_none() {
                findings.push(Finding::error(format!(
                    "patches: `{}` change references unknown hero `{}`",
                    patch.patch_id, change.hero_id
                )));
            }
        }
    }
}

fn check_subroles(data: &Dataset, findings: &mut Vec<Finding>) {
    for hero in data.heroes() {
        let Some(subrole) = &hero.subrole else { continue };
        if !hero.role.valid_subroles().contains(&subrole.as_str()) {
            findings.push(Finding::warning(format!(
                "heroes: `{}` has subrole `{}` which is not valid for {} (will render verbatim)",
                hero.id,
                subrole,
                hero.role.label()
            )));
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Raw-value checks
// ═══════════════════════════════════════════════════════════════════════════

/// The typed loader clamps effectiveness into [1, 5], so out-of-range
/// values have to be caught on the raw JSON before clamping.
fn check_raw_scores(dir: &Path) -> Vec<Finding> {
    let mut findings = Vec::new();
    for file in ["counters.json", "synergies.json"] {
        let path = dir.join(file);
        let Ok(content) = fs::read_to_string(&path) else { continue };
        let Ok(value) = serde_json::from_str::<Value>(&content) else { continue };
        scan_scores(file, &value, &mut findings);
    }
    findings
}

fn scan_scores(file: &str, value: &Value, findings: &mut Vec<Finding>) {
    match value {
        Value::Object(map) => {
            if let Some(score) = map.get("effectiveness").and_then(Value::as_i64) {
                if !(1..=5).contains(&score) {
                    findings.push(Finding::error(format!(
                        "{file}: effectiveness {score} is outside 1-5"
                    )));
                }
            }
            for nested in map.values() {
                scan_scores(file, nested, findings);
            }
        }
        Value::Array(items) => {
            for item in items {
                scan_scores(file, item, findings);
            }
        }
        _ => {}
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Reporting
// ═══════════════════════════════════════════════════════════════════════════

fn report(findings: &[Finding], errors: usize, warnings: usize) {
    let color = atty::is(atty::Stream::Stdout);

    for finding in findings {
        let (tag, code) = match finding.severity {
            Severity::Error => ("error", "31"),
            Severity::Warning => ("warning", "33"),
        };
        if color {
            println!("\x1b[{code}m{tag}\x1b[0m: {}", finding.message);
        } else {
            println!("{tag}: {}", finding.message);
        }
    }

    if findings.is_empty() {
        println!("dataset OK");
    } else {
        println!("{errors} error(s), {warnings} warning(s)");
    }
}
