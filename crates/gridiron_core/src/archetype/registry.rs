//! Archetype registry: load once, query by id/position, weighted pick.

use super::Archetype;
use crate::error::Result;
use crate::models::Position;
use crate::sampling::weighted_choice;
use rand::Rng;
use std::collections::HashMap;
use std::path::Path;

/// Built-in archetype set, embedded at compile time.
const OFFENSE_YAML: &str = include_str!("../../../../data/archetypes/offense.yaml");
const DEFENSE_YAML: &str = include_str!("../../../../data/archetypes/defense.yaml");
const SPECIAL_TEAMS_YAML: &str = include_str!("../../../../data/archetypes/special_teams.yaml");

/// Immutable collection of validated archetypes. Constructed by the
/// caller at startup and passed by reference wherever it is needed.
#[derive(Debug, Default)]
pub struct ArchetypeRegistry {
    archetypes: Vec<Archetype>,
    by_id: HashMap<String, usize>,
}

impl ArchetypeRegistry {
    /// Build a registry from already-parsed definitions. Entries that
    /// fail validation or repeat an id are dropped with a warning.
    pub fn new(definitions: Vec<Archetype>) -> Self {
        let mut registry = Self::default();
        for archetype in definitions {
            registry.insert(archetype);
        }
        registry
    }

    /// The embedded default set.
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        for (source, yaml) in [
            ("offense.yaml", OFFENSE_YAML),
            ("defense.yaml", DEFENSE_YAML),
            ("special_teams.yaml", SPECIAL_TEAMS_YAML),
        ] {
            match serde_yaml::from_str::<Vec<Archetype>>(yaml) {
                Ok(definitions) => {
                    for archetype in definitions {
                        registry.insert(archetype);
                    }
                }
                Err(err) => log::warn!("skipping embedded {}: {}", source, err),
            }
        }
        registry
    }

    /// Layer every `.yaml`/`.yml`/`.json` file from a directory on top of
    /// the current set. Malformed files and entries are skipped with a
    /// warning; only the directory listing itself can fail.
    pub fn load_from_dir(&mut self, dir: &Path) -> Result<usize> {
        let mut added = 0;
        let mut entries: Vec<_> =
            std::fs::read_dir(dir)?.filter_map(|entry| entry.ok()).map(|e| e.path()).collect();
        entries.sort();

        for path in entries {
            let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
                continue;
            };
            let text = match std::fs::read_to_string(&path) {
                Ok(text) => text,
                Err(err) => {
                    log::warn!("skipping {}: {}", path.display(), err);
                    continue;
                }
            };
            let parsed = match ext {
                "yaml" | "yml" => {
                    serde_yaml::from_str::<Vec<Archetype>>(&text).map_err(|e| e.to_string())
                }
                "json" => {
                    serde_json::from_str::<Vec<Archetype>>(&text).map_err(|e| e.to_string())
                }
                _ => continue,
            };
            match parsed {
                Ok(definitions) => {
                    for archetype in definitions {
                        if self.insert(archetype) {
                            added += 1;
                        }
                    }
                }
                Err(err) => log::warn!("skipping {}: {}", path.display(), err),
            }
        }

        Ok(added)
    }

    fn insert(&mut self, archetype: Archetype) -> bool {
        if let Err(reason) = archetype.validate() {
            log::warn!("dropping archetype {}: {}", archetype.id, reason);
            return false;
        }
        if self.by_id.contains_key(&archetype.id) {
            log::warn!("dropping archetype {}: duplicate id", archetype.id);
            return false;
        }
        self.by_id.insert(archetype.id.clone(), self.archetypes.len());
        self.archetypes.push(archetype);
        true
    }

    pub fn by_id(&self, id: &str) -> Option<&Archetype> {
        self.by_id.get(id).map(|&index| &self.archetypes[index])
    }

    pub fn for_position(&self, position: Position) -> Vec<&Archetype> {
        self.archetypes.iter().filter(|a| a.position == position).collect()
    }

    /// Frequency-weighted pick among archetypes of a position. `None`
    /// when the position has no archetypes.
    pub fn select_random<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        position: Position,
    ) -> Option<&Archetype> {
        let candidates: Vec<(&Archetype, f32)> = self
            .for_position(position)
            .into_iter()
            .map(|archetype| (archetype, archetype.frequency))
            .collect();
        weighted_choice(rng, &candidates).copied()
    }

    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Archetype> {
        self.archetypes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype::{AttributeRange, DevelopmentCurve, PeakAgeWindow};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::BTreeMap;
    use std::io::Write;

    fn archetype(id: &str, position: Position, frequency: f32) -> Archetype {
        Archetype {
            id: id.to_string(),
            position,
            frequency,
            curve: DevelopmentCurve::Normal,
            peak_ages: PeakAgeWindow { start: 24, end: 28 },
            overall: AttributeRange { min: 50, max: 90, mean: 68.0, std_dev: 8.0 },
            physical: BTreeMap::new(),
            mental: BTreeMap::new(),
            position_specific: BTreeMap::new(),
        }
    }

    #[test]
    fn test_builtin_set_loads_every_position() {
        let registry = ArchetypeRegistry::builtin();
        assert!(!registry.is_empty());
        for position in Position::ALL {
            assert!(
                !registry.for_position(position).is_empty(),
                "no builtin archetypes for {}",
                position
            );
        }
    }

    #[test]
    fn test_invalid_entries_are_dropped_not_fatal() {
        let mut bad = archetype("bad", Position::QB, 0.5);
        bad.frequency = 2.0;
        let registry =
            ArchetypeRegistry::new(vec![archetype("good", Position::QB, 0.5), bad]);
        assert_eq!(registry.len(), 1);
        assert!(registry.by_id("good").is_some());
        assert!(registry.by_id("bad").is_none());
    }

    #[test]
    fn test_select_random_respects_position_and_emptiness() {
        let registry = ArchetypeRegistry::new(vec![
            archetype("rb_one", Position::RB, 0.7),
            archetype("rb_two", Position::RB, 0.3),
        ]);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..100 {
            let picked = registry.select_random(&mut rng, Position::RB).unwrap();
            assert_eq!(picked.position, Position::RB);
        }
        assert!(registry.select_random(&mut rng, Position::K).is_none());
    }

    #[test]
    fn test_weighted_selection_prefers_frequent_archetype() {
        let registry = ArchetypeRegistry::new(vec![
            archetype("common", Position::WR, 0.9),
            archetype("rare", Position::WR, 0.1),
        ]);
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let mut common = 0u32;
        for _ in 0..5_000 {
            if registry.select_random(&mut rng, Position::WR).unwrap().id == "common" {
                common += 1;
            }
        }
        assert!(common > 3_500, "common picked only {} times", common);
    }

    #[test]
    fn test_load_from_dir_skips_malformed_files() {
        let dir = tempfile::tempdir().unwrap();

        let good = serde_yaml::to_string(&vec![archetype("dir_qb", Position::QB, 0.4)]).unwrap();
        std::fs::write(dir.path().join("good.yaml"), good).unwrap();

        let mut bad = std::fs::File::create(dir.path().join("bad.yaml")).unwrap();
        writeln!(bad, "this is: [not, an archetype").unwrap();

        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let mut registry = ArchetypeRegistry::default();
        let added = registry.load_from_dir(dir.path()).unwrap();
        assert_eq!(added, 1);
        assert!(registry.by_id("dir_qb").is_some());
    }
}
