//! Planning configuration and agent-model resolution.
//!
//! [`load_config`] merges `.planning/config.json` into one flat
//! [`ResolvedConfig`] with layered precedence and hard defaults;
//! [`resolve_model`] maps an agent name through per-agent overrides and the
//! active model profile to a concrete model identifier.

pub mod config;
pub mod model;

pub use config::{ModelProfile, ResolvedConfig, load_config};
pub use model::{FALLBACK_MODEL, HIGH_TIER_MODEL, INHERIT_MODEL, profile_model, resolve_model};
