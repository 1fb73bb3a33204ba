//! Layered configuration loading for the planning tree.
//!
//! Configuration lives in `.planning/config.json`. The document is
//! duck-typed: recognized keys may appear at top level or nested one level
//! under a known section (`planning.*`, `git.*`). Merge precedence, highest
//! to lowest: explicit top-level key, nested section key, hard-coded
//! default. A missing or unparseable document degrades to pure defaults;
//! loading never fails.

use std::collections::HashMap;

use camino::Utf8Path;
use serde::Serialize;
use serde_json::Value;

use gsd_utils::fsx::read_optional;
use gsd_utils::paths::PlanningTree;

/// Named preset mapping agent types to model tiers.
///
/// Unknown profile names fall back to `balanced`, both here and in the
/// profile table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelProfile {
    Quality,
    #[default]
    Balanced,
    Budget,
}

impl ModelProfile {
    /// Parse a profile name, falling back to `Balanced` for anything
    /// unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "quality" => Self::Quality,
            "balanced" => Self::Balanced,
            "budget" => Self::Budget,
            other => {
                tracing::debug!(profile = other, "unknown model_profile, using balanced");
                Self::Balanced
            }
        }
    }

    /// Canonical lowercase name of the profile.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quality => "quality",
            Self::Balanced => "balanced",
            Self::Budget => "budget",
        }
    }
}

/// Flat resolved configuration for one invocation.
///
/// Every field has a default, so a missing or malformed config file never
/// yields an error. `model_overrides` is `None` (serialized as JSON `null`)
/// when no overrides are configured; the distinction between null and a
/// populated mapping is part of the model-resolution contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfig {
    pub model_profile: ModelProfile,
    pub commit_docs: bool,
    pub research: bool,
    pub plan_checker: bool,
    pub brave_search: bool,
    pub parallelization: bool,
    pub branching_strategy: String,
    pub model_overrides: Option<HashMap<String, String>>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            model_profile: ModelProfile::Balanced,
            commit_docs: true,
            research: true,
            plan_checker: true,
            brave_search: false,
            parallelization: true,
            branching_strategy: "none".to_string(),
            model_overrides: None,
        }
    }
}

/// Load and merge the planning configuration for `project_root`.
///
/// Never fails: a missing `.planning/config.json`, or one that is not valid
/// JSON, yields [`ResolvedConfig::default`].
#[must_use]
pub fn load_config(project_root: &Utf8Path) -> ResolvedConfig {
    let tree = PlanningTree::new(project_root);
    let Some(raw) = read_optional(&tree.config_file()) else {
        return ResolvedConfig::default();
    };
    let Ok(doc) = serde_json::from_str::<Value>(&raw) else {
        tracing::debug!(path = %tree.config_file(), "config.json is not valid JSON, using defaults");
        return ResolvedConfig::default();
    };

    let defaults = ResolvedConfig::default();
    ResolvedConfig {
        model_profile: lookup_str(&doc, "model_profile")
            .map(ModelProfile::from_name)
            .unwrap_or(defaults.model_profile),
        commit_docs: lookup_bool(&doc, "commit_docs").unwrap_or(defaults.commit_docs),
        research: lookup_bool(&doc, "research").unwrap_or(defaults.research),
        plan_checker: lookup_bool(&doc, "plan_checker").unwrap_or(defaults.plan_checker),
        brave_search: lookup_bool(&doc, "brave_search").unwrap_or(defaults.brave_search),
        parallelization: parallelization_flag(&doc).unwrap_or(defaults.parallelization),
        branching_strategy: lookup_str(&doc, "branching_strategy")
            .map(str::to_string)
            .unwrap_or(defaults.branching_strategy),
        model_overrides: model_overrides(&doc),
    }
}

/// Find a recognized key: explicit top-level first, then nested one level
/// under the known sections, in order.
fn lookup<'a>(doc: &'a Value, key: &str) -> Option<&'a Value> {
    const SECTIONS: [&str; 2] = ["planning", "git"];
    doc.get(key).or_else(|| {
        SECTIONS
            .iter()
            .find_map(|section| doc.get(section).and_then(|s| s.get(key)))
    })
}

fn lookup_bool(doc: &Value, key: &str) -> Option<bool> {
    lookup(doc, key).and_then(Value::as_bool)
}

fn lookup_str<'a>(doc: &'a Value, key: &str) -> Option<&'a str> {
    lookup(doc, key).and_then(Value::as_str)
}

/// `parallelization` may be a plain boolean or an object carrying an
/// `enabled` boolean; both forms normalize to one flag.
fn parallelization_flag(doc: &Value) -> Option<bool> {
    match lookup(doc, "parallelization")? {
        Value::Bool(flag) => Some(*flag),
        Value::Object(section) => section.get("enabled").and_then(Value::as_bool),
        _ => None,
    }
}

/// Per-agent overrides, passed through verbatim. Non-string values are
/// dropped; an absent or non-object field maps to `None`.
fn model_overrides(doc: &Value) -> Option<HashMap<String, String>> {
    let section = lookup(doc, "model_overrides")?.as_object()?;
    Some(
        section
            .iter()
            .filter_map(|(agent, model)| {
                model.as_str().map(|m| (agent.clone(), m.to_string()))
            })
            .collect(),
    )
}
