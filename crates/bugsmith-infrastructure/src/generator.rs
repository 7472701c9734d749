//! Batch bug generation
//!
//! Applies a [`RunManifest`] to every entity of a source tree. Each
//! `(entity, strategy)` pair gets its own modifier instance whose seed is
//! derived from the run seed and the pair identity, so the output does not
//! depend on how rayon schedules the pairs.

use crate::config::RunManifest;
use crate::discovery::discover_sources;
use bugsmith_domain::error::Result;
use bugsmith_domain::{BugRewrite, EntityInfo};
use bugsmith_providers::language::EntityExtractor;
use bugsmith_providers::modifiers::ModifierKind;
use bugsmith_providers::CodeEntity;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{debug, info};

/// Why a pair produced no bug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Tags or complexity outside the strategy's bounds
    Ineligible,
    /// No site was chosen, or the rewrite equalled the original
    NoMutation,
}

/// A pair that produced no bug
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedPair {
    pub file: PathBuf,
    pub entity: String,
    pub strategy: String,
    pub reason: SkipReason,
}

/// A file that contributed no entities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseFailure {
    pub file: PathBuf,
    pub message: String,
}

/// A rewrite tied to the entity it was produced from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedBug {
    /// `<file>::<entity>::<strategy>__<hash8>`
    pub id: String,
    pub entity: EntityInfo,
    pub strategy: String,
    pub explanation: String,
    pub rewrite: String,
}

impl GeneratedBug {
    pub fn new(entity: &CodeEntity, bug: BugRewrite) -> Self {
        let digest = seahash::hash(bug.rewrite.as_bytes()) & 0xffff_ffff;
        let id = format!(
            "{}::{}::{}__{digest:08x}",
            entity.file_path().display(),
            entity.name(),
            bug.strategy
        );
        Self {
            id,
            entity: entity.info().clone(),
            strategy: bug.strategy,
            explanation: bug.explanation,
            rewrite: bug.rewrite,
        }
    }
}

/// Outcome of a batch run
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// Sorted by file, span start and strategy
    pub bugs: Vec<GeneratedBug>,
    pub skipped: Vec<SkippedPair>,
    pub parse_failures: Vec<ParseFailure>,
}

impl BatchReport {
    pub fn skipped_count(&self, reason: SkipReason) -> usize {
        self.skipped.iter().filter(|s| s.reason == reason).count()
    }
}

enum Outcome {
    Bug(GeneratedBug),
    Skipped(SkipReason),
}

/// Parallel driver over entities and manifest strategies
#[derive(Debug, Clone, Default)]
pub struct BugGenerator {
    manifest: RunManifest,
    extractor: EntityExtractor,
}

impl BugGenerator {
    pub fn new(manifest: RunManifest) -> Self {
        Self {
            manifest,
            extractor: EntityExtractor::new(),
        }
    }

    pub fn manifest(&self) -> &RunManifest {
        &self.manifest
    }

    /// Discover, extract and mutate every source file under `inputs`
    pub fn run(&self, inputs: &[PathBuf]) -> Result<BatchReport> {
        let files = discover_sources(inputs)?;
        let extraction = self.extractor.extract_files(&files);

        let mut report = self.generate(&extraction.entities)?;
        report.parse_failures = extraction
            .failures
            .into_iter()
            .map(|(file, e)| ParseFailure {
                file,
                message: e.to_string(),
            })
            .collect();

        info!(
            files = files.len(),
            entities = extraction.entities.len(),
            bugs = report.bugs.len(),
            ineligible = report.skipped_count(SkipReason::Ineligible),
            no_mutation = report.skipped_count(SkipReason::NoMutation),
            parse_failures = report.parse_failures.len(),
            "Generation finished"
        );
        Ok(report)
    }

    /// Apply the manifest to already extracted entities
    pub fn generate(&self, entities: &[CodeEntity]) -> Result<BatchReport> {
        let mut ordered: Vec<&CodeEntity> = entities.iter().collect();
        ordered.sort_by(|a, b| {
            (a.file_path(), a.byte_range().start).cmp(&(b.file_path(), b.byte_range().start))
        });
        if let Some(max) = self.manifest.max_entities() {
            ordered.truncate(max);
        }

        let pairs: Vec<(&CodeEntity, ModifierKind, f64)> = ordered
            .iter()
            .flat_map(|entity| {
                self.manifest
                    .modifiers_for(entity.language())
                    .iter()
                    .map(move |(kind, likelihood)| (*entity, *kind, *likelihood))
            })
            .collect();

        let outcomes = pairs
            .par_iter()
            .map(|(entity, kind, likelihood)| self.apply(entity, *kind, *likelihood))
            .collect::<Result<Vec<_>>>()?;

        let mut report = BatchReport::default();
        for ((entity, kind, _), outcome) in pairs.iter().zip(outcomes) {
            match outcome {
                Outcome::Bug(bug) => report.bugs.push(bug),
                Outcome::Skipped(reason) => report.skipped.push(SkippedPair {
                    file: entity.file_path().to_path_buf(),
                    entity: entity.name().to_string(),
                    strategy: kind.name().to_string(),
                    reason,
                }),
            }
        }

        report.bugs.sort_by(|a, b| {
            (&a.entity.file_path, a.entity.byte_range.start, &a.strategy).cmp(&(
                &b.entity.file_path,
                b.entity.byte_range.start,
                &b.strategy,
            ))
        });
        if let Some(max) = self.manifest.max_bugs_per_entity() {
            cap_per_entity(&mut report.bugs, max);
        }
        Ok(report)
    }

    fn apply(&self, entity: &CodeEntity, kind: ModifierKind, likelihood: f64) -> Result<Outcome> {
        let seed = pair_seed(self.manifest.seed(), entity, kind);
        let mut modifier = kind.build(likelihood, seed)?;

        if !modifier.can_change(entity) {
            debug!(entity = entity.name(), strategy = kind.name(), "Ineligible");
            return Ok(Outcome::Skipped(SkipReason::Ineligible));
        }
        match modifier.modify(entity) {
            Some(bug) => {
                debug!(entity = entity.name(), strategy = kind.name(), "Bug generated");
                Ok(Outcome::Bug(GeneratedBug::new(entity, bug)))
            }
            None => {
                debug!(entity = entity.name(), strategy = kind.name(), "No mutation");
                Ok(Outcome::Skipped(SkipReason::NoMutation))
            }
        }
    }
}

/// Seed of one pair's private stream
fn pair_seed(run_seed: u64, entity: &CodeEntity, kind: ModifierKind) -> u64 {
    let key = format!(
        "{run_seed}\0{}\0{}\0{}",
        entity.file_path().display(),
        entity.name(),
        kind.name()
    );
    seahash::hash(key.as_bytes())
}

/// Keep the first `max` bugs of every entity, in report order
fn cap_per_entity(bugs: &mut Vec<GeneratedBug>, max: usize) {
    let mut kept: HashMap<(PathBuf, usize), usize> = HashMap::new();
    let before = bugs.len();
    bugs.retain(|bug| {
        let count = kept
            .entry((bug.entity.file_path.clone(), bug.entity.byte_range.start))
            .or_default();
        *count += 1;
        *count <= max
    });
    if bugs.len() < before {
        info!(dropped = before - bugs.len(), max, "Capped bugs per entity");
    }
}
