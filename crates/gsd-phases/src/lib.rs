//! Phase lookup across the two sources of truth.
//!
//! A phase can exist as an on-disk directory under `.planning/phases/`
//! (canonical form `NN-slug`) and/or as a `### Phase N: Title` section in
//! `.planning/ROADMAP.md`. [`find_phase`] searches both and reconciles: the
//! directory is authoritative for paths and existence flags, the roadmap
//! supplies goal text and requirement IDs. A roadmap-only match still
//! counts as found, with no directory and all flags false.

pub mod matcher;
pub mod roadmap;

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;

use gsd_utils::fsx::{list_dir, read_optional};
use gsd_utils::paths::PlanningTree;
use gsd_utils::text::generate_slug;

pub use roadmap::RoadmapPhase;

/// Existence flags for a phase directory's companion files, computed by
/// direct checks scoped to that directory. All false when no directory
/// matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CompanionFlags {
    pub has_context: bool,
    pub has_research: bool,
    pub has_verification: bool,
    pub has_uat: bool,
    pub has_plans: bool,
    pub has_summaries: bool,
}

/// Relative paths of the singular companion files that exist. `None` means
/// the file is absent (and the field is omitted from emitted records).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompanionPaths {
    pub context: Option<Utf8PathBuf>,
    pub research: Option<Utf8PathBuf>,
    pub verification: Option<Utf8PathBuf>,
    pub uat: Option<Utf8PathBuf>,
}

/// Result of a phase lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PhaseMatch {
    /// Whether either source matched the identifier.
    pub found: bool,
    /// Relative path of the matched phase directory, if one exists on disk.
    pub directory: Option<Utf8PathBuf>,
    /// Slug identity of the phase: from the directory name when on disk,
    /// else slugified from the roadmap title.
    pub slug: Option<String>,
    /// Roadmap section for the phase, if the roadmap has one.
    pub roadmap: Option<RoadmapPhase>,
    pub flags: CompanionFlags,
    pub companions: CompanionPaths,
}

/// Locate the phase named by `identifier` (numeric like `"3"`/`"03"`, or
/// free text) under `project_root`.
#[must_use]
pub fn find_phase(project_root: &Utf8Path, identifier: &str) -> PhaseMatch {
    let tree = PlanningTree::new(project_root);
    let dir_name = matcher::search_phase_dir(&tree, identifier);

    let roadmap_text = read_optional(&tree.roadmap_file());
    let roadmap_entry = roadmap_text.as_deref().and_then(|text| {
        // Prefer the numeric key: from the identifier itself, or from the
        // matched directory's number prefix for textual identifiers.
        let number = gsd_utils::text::phase_number(identifier)
            .or_else(|| dir_name.as_deref().and_then(matcher::leading_number));
        match number {
            Some(n) => roadmap::find_by_number(text, n),
            None => roadmap::find_by_title(text, identifier),
        }
    });

    match dir_name {
        Some(name) => {
            tracing::debug!(dir = %name, "phase matched on-disk directory");
            let (flags, companions) = scan_companions(&tree, &name);
            PhaseMatch {
                found: true,
                directory: Some(tree.rel_phase_dir(&name)),
                slug: Some(matcher::dir_slug(&name)),
                roadmap: roadmap_entry,
                flags,
                companions,
            }
        }
        None => match roadmap_entry {
            Some(entry) => {
                tracing::debug!(phase = %entry.number, "phase matched roadmap only");
                let slug = generate_slug(&entry.title);
                PhaseMatch {
                    found: true,
                    directory: None,
                    slug: Some(slug),
                    roadmap: Some(entry),
                    ..PhaseMatch::default()
                }
            }
            None => PhaseMatch::default(),
        },
    }
}

/// Companion-file existence flags and paths for a matched phase directory.
fn scan_companions(tree: &PlanningTree, dir_name: &str) -> (CompanionFlags, CompanionPaths) {
    let entries = list_dir(&tree.phases_dir().join(dir_name));
    let single = |suffix: &str| -> Option<Utf8PathBuf> {
        entries
            .iter()
            .find(|name| name.ends_with(suffix))
            .map(|name| tree.rel_phase_dir(dir_name).join(name))
    };
    let companions = CompanionPaths {
        context: single("-CONTEXT.md"),
        research: single("-RESEARCH.md"),
        verification: single("-VERIFICATION.md"),
        uat: single("-UAT.md"),
    };
    let flags = CompanionFlags {
        has_context: companions.context.is_some(),
        has_research: companions.research.is_some(),
        has_verification: companions.verification.is_some(),
        has_uat: companions.uat.is_some(),
        has_plans: entries.iter().any(|name| name.ends_with("-PLAN.md")),
        has_summaries: entries.iter().any(|name| name.ends_with("-SUMMARY.md")),
    };
    (flags, companions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn planning_project() -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        std::fs::create_dir_all(root.join(".planning/phases")).unwrap();
        (dir, root)
    }

    fn add_phase_dir(root: &Utf8Path, name: &str, files: &[&str]) {
        let dir = root.join(".planning/phases").join(name);
        std::fs::create_dir_all(&dir).unwrap();
        for file in files {
            std::fs::write(dir.join(file), "# stub").unwrap();
        }
    }

    #[test]
    fn unpadded_and_padded_identifiers_hit_the_same_directory() {
        let (_guard, root) = planning_project();
        add_phase_dir(&root, "03-api", &["03-CONTEXT.md"]);

        let a = find_phase(&root, "3");
        let b = find_phase(&root, "03");
        assert!(a.found && b.found);
        assert_eq!(a.directory, b.directory);
        assert_eq!(a.directory.unwrap(), ".planning/phases/03-api");
    }

    #[test]
    fn directory_match_computes_flags_and_companion_paths() {
        let (_guard, root) = planning_project();
        add_phase_dir(
            &root,
            "03-api",
            &["03-CONTEXT.md", "03-RESEARCH.md", "03-01-PLAN.md"],
        );

        let m = find_phase(&root, "03");
        assert!(m.found);
        assert_eq!(m.slug.as_deref(), Some("api"));
        assert!(m.flags.has_context);
        assert!(m.flags.has_research);
        assert!(m.flags.has_plans);
        assert!(!m.flags.has_verification);
        assert!(!m.flags.has_uat);
        assert!(!m.flags.has_summaries);
        assert_eq!(
            m.companions.context.unwrap(),
            ".planning/phases/03-api/03-CONTEXT.md"
        );
        assert_eq!(m.companions.verification, None);
    }

    #[test]
    fn textual_identifier_matches_directory_by_normalized_name() {
        let (_guard, root) = planning_project();
        add_phase_dir(&root, "04-widget-builder", &[]);

        let m = find_phase(&root, "Widget Builder");
        assert!(m.found);
        assert_eq!(m.directory.unwrap(), ".planning/phases/04-widget-builder");
        assert_eq!(m.slug.as_deref(), Some("widget-builder"));
    }

    #[test]
    fn roadmap_only_match_is_found_without_directory() {
        let (_guard, root) = planning_project();
        std::fs::write(
            root.join(".planning/ROADMAP.md"),
            "# Roadmap\n\n### Phase 5: Widget Builder\n**Goal:** Build widgets\n**Plans:** TBD\n",
        )
        .unwrap();

        let m = find_phase(&root, "5");
        assert!(m.found);
        assert_eq!(m.directory, None);
        assert_eq!(m.slug.as_deref(), Some("widget-builder"));
        assert_eq!(m.flags, CompanionFlags::default());
        assert_eq!(m.roadmap.unwrap().goal.as_deref(), Some("Build widgets"));
    }

    #[test]
    fn no_match_in_either_source_is_not_found() {
        let (_guard, root) = planning_project();
        std::fs::write(
            root.join(".planning/ROADMAP.md"),
            "# Roadmap\n\n### Phase 1: Setup\n**Goal:** Setup project\n**Plans:** TBD\n",
        )
        .unwrap();

        let m = find_phase(&root, "99");
        assert!(!m.found);
        assert_eq!(m.directory, None);
        assert_eq!(m.slug, None);
    }

    #[test]
    fn directory_match_still_carries_roadmap_metadata() {
        let (_guard, root) = planning_project();
        add_phase_dir(&root, "03-api", &["03-01-PLAN.md"]);
        std::fs::write(
            root.join(".planning/ROADMAP.md"),
            "# Roadmap\n\n### Phase 3: API\n**Goal:** Build API\n**Requirements**: EX-01, EX-02\n**Plans:** 1 plans\n",
        )
        .unwrap();

        let m = find_phase(&root, "3");
        assert!(m.found);
        assert!(m.directory.is_some());
        let entry = m.roadmap.unwrap();
        assert_eq!(entry.requirement_ids.as_deref(), Some("EX-01, EX-02"));
        assert_eq!(entry.plan_count, Some(1));
    }
}
