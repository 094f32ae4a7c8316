//! Condition catalog
//!
//! The catalog is an ordered, read-only table of [`ConditionProfile`]s. It is
//! built once (from the bundled YAML file or an operator-supplied one), checked
//! for integrity, and then shared behind an `Arc` by every request.
//!
//! Catalog order is significant: the engine walks profiles in order and keeps
//! the first one on a composite-score tie.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::engine::normalize_symptom;
use crate::error::CatalogError;
use crate::types::Gender;

/// Bundled condition table
pub const BUILTIN_CATALOG_YAML: &str = include_str!("../data/conditions.yaml");

/// Highest allowed `base_risk`
pub const MAX_BASE_RISK: u32 = 100;

/// Risk boost applied when the subject is at least `min_age` years old
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRule {
    pub min_age: u32,
    pub bonus: u32,
}

/// Risk boost applied when the subject's gender matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderRule {
    pub gender: Gender,
    pub bonus: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionProfile {
    pub name: String,
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_rule: Option<AgeRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender_rule: Option<GenderRule>,
    pub base_risk: u32,
    #[serde(default)]
    pub preventive_measures: Vec<String>,
}

impl ConditionProfile {
    /// Age bonus that applies to a subject of `age`
    pub fn age_bonus(&self, age: u32) -> u32 {
        self.age_rule
            .filter(|rule| age >= rule.min_age)
            .map_or(0, |rule| rule.bonus)
    }

    /// Gender bonus that applies to a subject of `gender`
    pub fn gender_bonus(&self, gender: Gender) -> u32 {
        self.gender_rule
            .filter(|rule| rule.gender == gender)
            .map_or(0, |rule| rule.bonus)
    }

    fn validate(&self, position: usize) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::BlankName(position));
        }
        if self.keywords.is_empty() {
            return Err(CatalogError::NoKeywords(self.name.clone()));
        }
        if self.keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(CatalogError::BlankKeyword(self.name.clone()));
        }
        if self.base_risk > MAX_BASE_RISK {
            return Err(CatalogError::BaseRiskOutOfRange {
                name: self.name.clone(),
                base_risk: self.base_risk,
            });
        }
        Ok(())
    }
}

/// Immutable, ordered set of condition profiles
#[derive(Debug, Clone)]
pub struct ConditionCatalog {
    profiles: Vec<ConditionProfile>,
    index: HashMap<String, usize>,
}

impl ConditionCatalog {
    /// Validate the profiles and normalize their keywords.
    ///
    /// Keywords are trimmed and lowercased here, once, so scoring never has to
    /// re-normalize them. Their order and count are preserved.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when the catalog is empty, a name is blank or
    /// repeated, a keyword list is empty or holds a blank keyword, or a base
    /// risk exceeds [`MAX_BASE_RISK`].
    pub fn new(profiles: Vec<ConditionProfile>) -> Result<Self, CatalogError> {
        if profiles.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = HashMap::with_capacity(profiles.len());
        let mut normalized = Vec::with_capacity(profiles.len());

        for (position, mut profile) in profiles.into_iter().enumerate() {
            profile.validate(position)?;
            profile.name = profile.name.trim().to_string();
            profile.keywords = profile
                .keywords
                .iter()
                .map(|k| normalize_symptom(k))
                .collect();

            if index.insert(profile.name.clone(), position).is_some() {
                return Err(CatalogError::DuplicateName(profile.name));
            }
            normalized.push(profile);
        }

        tracing::debug!(conditions = normalized.len(), "Condition catalog built");

        Ok(Self {
            profiles: normalized,
            index,
        })
    }

    /// # Errors
    ///
    /// Fails on malformed YAML or when the profiles do not pass [`ConditionCatalog::new`].
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let profiles: Vec<ConditionProfile> = serde_yaml::from_str(yaml)?;
        Self::new(profiles)
    }

    /// # Errors
    ///
    /// Fails on malformed JSON or when the profiles do not pass [`ConditionCatalog::new`].
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let profiles: Vec<ConditionProfile> = serde_json::from_str(json)?;
        Self::new(profiles)
    }

    /// Load a catalog file, picking the parser from its extension
    /// (`.yaml`, `.yml` or `.json`).
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read, the extension is unknown, or the
    /// content is not a valid catalog.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&content)?,
            "json" => Self::from_json_str(&content)?,
            other => return Err(CatalogError::UnsupportedFormat(other.to_string())),
        };

        tracing::info!(
            path = %path.display(),
            conditions = catalog.len(),
            "Loaded condition catalog"
        );
        Ok(catalog)
    }

    /// The bundled catalog, shared
    ///
    /// # Errors
    ///
    /// Only fails if the bundled data file itself is broken.
    pub fn builtin() -> Result<Arc<Self>, CatalogError> {
        Self::from_yaml_str(BUILTIN_CATALOG_YAML).map(Arc::new)
    }

    pub fn get(&self, name: &str) -> Option<&ConditionProfile> {
        self.index
            .get(name.trim())
            .and_then(|&position| self.profiles.get(position))
    }

    /// Profiles in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, ConditionProfile> {
        self.profiles.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl<'a> IntoIterator for &'a ConditionCatalog {
    type Item = &'a ConditionProfile;
    type IntoIter = std::slice::Iter<'a, ConditionProfile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str, keywords: &[&str], base_risk: u32) -> ConditionProfile {
        ConditionProfile {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            age_rule: None,
            gender_rule: None,
            base_risk,
            preventive_measures: vec!["Rest".to_string()],
        }
    }

    #[test]
    fn test_builtin_catalog_loads_in_order() {
        let catalog = ConditionCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 15);

        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names.first(), Some(&"Type 2 Diabetes"));
        assert_eq!(names.last(), Some(&"Arthritis"));
        assert_eq!(names.get(11), Some(&"Coronary Artery Disease"));
    }

    #[test]
    fn test_builtin_catalog_rules() {
        let catalog = ConditionCatalog::builtin().unwrap();

        let cad = catalog.get("Coronary Artery Disease").unwrap();
        assert_eq!(cad.base_risk, 35);
        assert_eq!(cad.keywords.len(), 9);
        assert_eq!(cad.age_rule, Some(AgeRule { min_age: 40, bonus: 15 }));
        assert_eq!(cad.gender_rule, Some(GenderRule { gender: Gender::Male, bonus: 8 }));

        let cold = catalog.get("Common Cold / Influenza").unwrap();
        assert!(cold.age_rule.is_none());
        assert!(cold.gender_rule.is_none());

        for profile in catalog.iter() {
            assert_eq!(profile.preventive_measures.len(), 5, "{}", profile.name);
        }
    }

    #[test]
    fn test_keywords_are_normalized_on_load() {
        let catalog =
            ConditionCatalog::new(vec![profile("Flu", &["  Fever ", "DRY Cough"], 20)]).unwrap();
        let flu = catalog.get("Flu").unwrap();
        assert_eq!(flu.keywords, vec!["fever", "dry cough"]);
    }

    #[test]
    fn test_rule_bonuses() {
        let mut p = profile("Gout", &["toe pain"], 20);
        p.age_rule = Some(AgeRule { min_age: 40, bonus: 12 });
        p.gender_rule = Some(GenderRule { gender: Gender::Male, bonus: 6 });

        assert_eq!(p.age_bonus(39), 0);
        assert_eq!(p.age_bonus(40), 12);
        assert_eq!(p.gender_bonus(Gender::Male), 6);
        assert_eq!(p.gender_bonus(Gender::Other), 0);
    }

    #[test]
    fn test_rejects_invalid_catalogs() {
        assert!(matches!(ConditionCatalog::new(vec![]), Err(CatalogError::Empty)));

        assert!(matches!(
            ConditionCatalog::new(vec![profile("Flu", &[], 20)]),
            Err(CatalogError::NoKeywords(_))
        ));

        assert!(matches!(
            ConditionCatalog::new(vec![profile("Flu", &["fever", "  "], 20)]),
            Err(CatalogError::BlankKeyword(_))
        ));

        assert!(matches!(
            ConditionCatalog::new(vec![profile(" ", &["fever"], 20)]),
            Err(CatalogError::BlankName(0))
        ));

        assert!(matches!(
            ConditionCatalog::new(vec![profile("Flu", &["fever"], 101)]),
            Err(CatalogError::BaseRiskOutOfRange { base_risk: 101, .. })
        ));

        assert!(matches!(
            ConditionCatalog::new(vec![
                profile("Flu", &["fever"], 20),
                profile("Flu", &["cough"], 20),
            ]),
            Err(CatalogError::DuplicateName(name)) if name == "Flu"
        ));
    }

    #[test]
    fn test_json_catalog() {
        let json = r#"[
            {
                "name": "Sinusitis",
                "keywords": ["facial pain", "congestion"],
                "gender_rule": { "gender": "Female", "bonus": 3 },
                "base_risk": 22,
                "preventive_measures": ["Use saline rinses"]
            }
        ]"#;

        let catalog = ConditionCatalog::from_json_str(json).unwrap();
        let sinusitis = catalog.get("Sinusitis").unwrap();
        assert_eq!(sinusitis.gender_bonus(Gender::Female), 3);
        assert!(sinusitis.age_rule.is_none());
    }
}
