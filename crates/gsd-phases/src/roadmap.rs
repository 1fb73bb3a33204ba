//! Roadmap-side phase search.
//!
//! The roadmap is a free-text markdown document with one section per phase:
//!
//! ```markdown
//! ### Phase 3: API
//! **Goal:** Build API
//! **Requirements**: CP-01, CP-02
//! **Plans:** 1 plans
//! ```
//!
//! Parsing is a small line-oriented scan: find the matching section header,
//! then accumulate the typed field lines that follow it, stopping at the
//! next header or end of document. No field is required; anything missing
//! stays `None`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use gsd_utils::text::{compare_phase_number, normalize_phase_name};

static PHASE_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^###\s+Phase\s+(\d+)\s*:\s*(.+?)\s*$").unwrap());
static GOAL_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*\*Goal:?\*\*:?\s*(.+?)\s*$").unwrap());
static REQUIREMENTS_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*\*Requirements:?\*\*:?\s*(.+?)\s*$").unwrap());
static PLANS_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*\*Plans:?\*\*:?\s*(.+?)\s*$").unwrap());

/// Placeholder authors write while requirements are still undecided.
/// Case-sensitive, matching how it appears in documents.
const REQUIREMENTS_PLACEHOLDER: &str = "TBD";

/// One parsed roadmap section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoadmapPhase {
    /// Phase number exactly as written in the header (no padding applied).
    pub number: String,
    /// Section title, trimmed.
    pub title: String,
    /// Goal line text, if present.
    pub goal: Option<String>,
    /// Requirement IDs as one literal string (comma-separated IDs are not
    /// split). `None` when the line is absent or holds the placeholder.
    pub requirement_ids: Option<String>,
    /// Declared plan count, if the plans line carries a number.
    pub plan_count: Option<u32>,
}

/// Find the roadmap section for a phase number, zero-padding ignored.
#[must_use]
pub fn find_by_number(text: &str, number: u32) -> Option<RoadmapPhase> {
    let wanted = number.to_string();
    find_section(text, |header_number, _| {
        compare_phase_number(header_number, &wanted).is_eq()
    })
}

/// Find the roadmap section whose title normalizes to the same form as a
/// textual identifier.
#[must_use]
pub fn find_by_title(text: &str, identifier: &str) -> Option<RoadmapPhase> {
    let needle = normalize_phase_name(identifier);
    if needle.is_empty() {
        return None;
    }
    find_section(text, |_, title| normalize_phase_name(title) == needle)
}

fn find_section(text: &str, matches: impl Fn(&str, &str) -> bool) -> Option<RoadmapPhase> {
    let mut lines = text.lines();
    let (number, title) = loop {
        let line = lines.next()?;
        if let Some(caps) = PHASE_HEADER.captures(line) {
            let number = caps.get(1).map(|m| m.as_str())?;
            let title = caps.get(2).map(|m| m.as_str())?;
            if matches(number, title) {
                break (number.to_string(), title.to_string());
            }
        }
    };

    let mut phase = RoadmapPhase {
        number,
        title,
        goal: None,
        requirement_ids: None,
        plan_count: None,
    };
    for line in lines {
        if line.starts_with("### ") {
            break;
        }
        if let Some(caps) = GOAL_LINE.captures(line) {
            phase.goal.get_or_insert_with(|| caps[1].to_string());
        } else if let Some(caps) = REQUIREMENTS_LINE.captures(line) {
            if phase.requirement_ids.is_none() {
                phase.requirement_ids = requirement_ids(&caps[1]);
            }
        } else if let Some(caps) = PLANS_LINE.captures(line) {
            if phase.plan_count.is_none() {
                phase.plan_count = plan_count(&caps[1]);
            }
        }
    }
    Some(phase)
}

/// Clean a requirements value: strip one surrounding bracket pair, trim,
/// and map the placeholder (or an empty value) to `None`.
fn requirement_ids(raw: &str) -> Option<String> {
    let value = raw
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .trim();
    if value.is_empty() || value == REQUIREMENTS_PLACEHOLDER {
        None
    } else {
        Some(value.to_string())
    }
}

/// Leading integer of a plans value (`"1 plans"` -> 1); `None` when the
/// value carries no number.
fn plan_count(raw: &str) -> Option<u32> {
    let digits: String = raw.trim().chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}
