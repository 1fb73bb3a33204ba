//! Agent-model resolution.
//!
//! Maps an agent name plus the active profile and per-agent overrides to a
//! concrete model identifier. The profile table is pure data: a two-level
//! immutable lookup plus one fallback constant, no dispatch.

use camino::Utf8Path;

use crate::config::{ModelProfile, load_config};

/// Model used for agent types unknown to the active profile.
pub const FALLBACK_MODEL: &str = "sonnet";

/// High-tier model name that is never forced directly; see [`INHERIT_MODEL`].
pub const HIGH_TIER_MODEL: &str = "opus";

/// Sentinel telling the invoking environment to use its own default model
/// instead of forcing a specific one. Any candidate resolving to
/// [`HIGH_TIER_MODEL`] is translated to this, whether it came from an
/// override or from the profile table.
pub const INHERIT_MODEL: &str = "inherit";

/// Per-profile agent-to-model rows. Two-level static data keyed by
/// [`ModelProfile`] first, agent type second.
const QUALITY_MODELS: &[(&str, &str)] = &[
    ("gsd-planner", "opus"),
    ("gsd-roadmapper", "opus"),
    ("gsd-executor", "opus"),
    ("gsd-verifier", "opus"),
    ("gsd-plan-checker", "opus"),
    ("gsd-phase-researcher", "opus"),
    ("gsd-project-researcher", "opus"),
    ("gsd-research-synthesizer", "opus"),
    ("gsd-debugger", "opus"),
    ("gsd-codebase-mapper", "sonnet"),
];

const BALANCED_MODELS: &[(&str, &str)] = &[
    ("gsd-planner", "opus"),
    ("gsd-roadmapper", "opus"),
    ("gsd-executor", "sonnet"),
    ("gsd-verifier", "sonnet"),
    ("gsd-plan-checker", "sonnet"),
    ("gsd-phase-researcher", "sonnet"),
    ("gsd-project-researcher", "sonnet"),
    ("gsd-research-synthesizer", "sonnet"),
    ("gsd-debugger", "sonnet"),
    ("gsd-codebase-mapper", "haiku"),
];

const BUDGET_MODELS: &[(&str, &str)] = &[
    ("gsd-planner", "sonnet"),
    ("gsd-roadmapper", "sonnet"),
    ("gsd-executor", "sonnet"),
    ("gsd-verifier", "sonnet"),
    ("gsd-plan-checker", "haiku"),
    ("gsd-phase-researcher", "haiku"),
    ("gsd-project-researcher", "haiku"),
    ("gsd-research-synthesizer", "haiku"),
    ("gsd-debugger", "sonnet"),
    ("gsd-codebase-mapper", "haiku"),
];

fn profile_rows(profile: ModelProfile) -> &'static [(&'static str, &'static str)] {
    match profile {
        ModelProfile::Quality => QUALITY_MODELS,
        ModelProfile::Balanced => BALANCED_MODELS,
        ModelProfile::Budget => BUDGET_MODELS,
    }
}

/// Look up the model a profile assigns to an agent type, falling back to
/// [`FALLBACK_MODEL`] for agents the profile does not know.
#[must_use]
pub fn profile_model(profile: ModelProfile, agent_type: &str) -> &'static str {
    profile_rows(profile)
        .iter()
        .find(|(agent, _)| *agent == agent_type)
        .map(|(_, model)| *model)
        .unwrap_or(FALLBACK_MODEL)
}

/// Resolve the model for `agent_type` under the project's configuration.
///
/// A per-agent override wins over the profile table. The high-tier model is
/// uniformly translated to [`INHERIT_MODEL`] regardless of where the
/// candidate came from.
#[must_use]
pub fn resolve_model(project_root: &Utf8Path, agent_type: &str) -> String {
    let config = load_config(project_root);
    let candidate = config
        .model_overrides
        .as_ref()
        .and_then(|overrides| overrides.get(agent_type).cloned())
        .unwrap_or_else(|| profile_model(config.model_profile, agent_type).to_string());

    if candidate == HIGH_TIER_MODEL {
        tracing::debug!(agent = agent_type, "high-tier candidate, deferring to caller");
        INHERIT_MODEL.to_string()
    } else {
        candidate
    }
}
