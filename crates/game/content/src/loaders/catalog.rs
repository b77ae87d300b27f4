//! Skill catalog loader.
//!
//! Loads the list of skills a roster is seeded with from RON files.

use std::path::Path;

use sheet_core::{Ability, Skill, SkillOptions};

use crate::loaders::{LoadResult, read_file};

/// One catalog row: a skill name, its keyed ability and optional overrides.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogEntry {
    pub name: String,
    pub ability: Ability,
    #[serde(default)]
    pub options: SkillOptions,
}

impl CatalogEntry {
    /// Builds a fresh, untrained skill from this entry.
    pub fn to_skill(&self) -> Skill {
        Skill::new(self.name.as_str(), self.ability, self.options.clone())
    }
}

/// Ordered list of skills a roster is seeded with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillCatalog {
    entries: Vec<CatalogEntry>,
}

impl SkillCatalog {
    /// Loads the standard d20 skill list embedded at build time.
    pub fn standard() -> LoadResult<Self> {
        Self::from_ron_str(include_str!("../../data/skills.ron"))
            .map_err(|e| anyhow::anyhow!("Failed to parse embedded skills.ron: {}", e))
    }

    /// Load a skill catalog from a RON file.
    ///
    /// RON format: `[(name: "Appraise", ability: Int, options: (...)), ...]`
    pub fn load(path: &Path) -> LoadResult<Self> {
        let content = read_file(path)?;
        let catalog = Self::from_ron_str(&content)?;
        tracing::debug!("Loaded {} skills from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Parse a catalog from RON text.
    pub fn from_ron_str(content: &str) -> LoadResult<Self> {
        let entries: Vec<CatalogEntry> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse skill catalog RON: {}", e))?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn standard_catalog_has_every_skill_in_order() {
        let catalog = SkillCatalog::standard().expect("embedded catalog parses");
        assert_eq!(catalog.len(), 35);
        assert_eq!(catalog.entries()[0].name, "Appraise");
        assert_eq!(catalog.entries()[34].name, "UseRope");

        let climb = catalog.get("Climb").unwrap();
        assert_eq!(climb.ability, Ability::Str);
        assert_eq!(climb.options, SkillOptions::default());

        let decipher = catalog.get("DecipherScript").unwrap();
        assert!(!decipher.options.use_untrained);
        assert_eq!(decipher.to_skill().bonus(), None);
    }

    #[test]
    fn load_reads_options_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"[
                (name: "Hide", ability: Dex, options: (size: true, size_modifier: 4)),
                (name: "Swim", ability: Str, options: (armor_check_penalty_applies: true)),
            ]"#
        )
        .unwrap();

        let catalog = SkillCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("Hide").unwrap().to_skill().bonus(), Some(4));
        assert_eq!(catalog.get("Swim").unwrap().to_skill().bonus(), Some(1));
    }

    #[test]
    fn unknown_option_is_rejected() {
        let err = SkillCatalog::from_ron_str(
            r#"[(name: "Hide", ability: Dex, options: (sise: true))]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("skill catalog"));
    }

    #[test]
    fn unknown_ability_is_rejected() {
        assert!(SkillCatalog::from_ron_str(r#"[(name: "Hide", ability: Luk)]"#).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = SkillCatalog::load(Path::new("/nonexistent/skills.ron")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
