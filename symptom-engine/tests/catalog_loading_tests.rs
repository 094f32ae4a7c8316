use std::io::Write;

use symptom_engine::*;

const SMALL_CATALOG_YAML: &str = r"
- name: Sinusitis
  keywords: [facial pain, Nasal Congestion]
  age_rule: { min_age: 18, bonus: 4 }
  base_risk: 22
  preventive_measures:
    - Use saline rinses
- name: Tonsillitis
  keywords: [sore throat, swollen tonsils]
  base_risk: 18
  preventive_measures:
    - Gargle with warm salt water
";

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_yaml_catalog_from_file() {
    let file = write_temp(".yaml", SMALL_CATALOG_YAML);
    let catalog = ConditionCatalog::from_path(file.path()).unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["Sinusitis", "Tonsillitis"]);
    assert_eq!(
        catalog.get("Sinusitis").unwrap().keywords,
        vec!["facial pain", "nasal congestion"]
    );
}

#[test]
fn test_load_json_catalog_from_file() {
    let json = r#"[{"name": "Tonsillitis", "keywords": ["sore throat"], "base_risk": 18}]"#;
    let file = write_temp(".json", json);

    let catalog = ConditionCatalog::from_path(file.path()).unwrap();
    let tonsillitis = catalog.get("Tonsillitis").unwrap();
    assert!(tonsillitis.preventive_measures.is_empty());
}

#[test]
fn test_unknown_extension_is_rejected() {
    let file = write_temp(".txt", SMALL_CATALOG_YAML);
    assert!(matches!(
        ConditionCatalog::from_path(file.path()),
        Err(CatalogError::UnsupportedFormat(ext)) if ext == "txt"
    ));
}

#[test]
fn test_malformed_yaml_is_rejected() {
    let file = write_temp(".yml", "- name: Broken\n  keywords: not-a-list\n  base_risk: 10\n");
    assert!(matches!(
        ConditionCatalog::from_path(file.path()),
        Err(CatalogError::Yaml(_))
    ));
}

#[test]
fn test_invalid_profile_in_file_is_rejected() {
    let file = write_temp(
        ".yaml",
        "- name: Overweight\n  keywords: [snoring]\n  base_risk: 140\n",
    );
    assert!(matches!(
        ConditionCatalog::from_path(file.path()),
        Err(CatalogError::BaseRiskOutOfRange { .. })
    ));
}

#[test]
fn test_engine_config_loads_external_catalog() {
    let file = write_temp(".yaml", SMALL_CATALOG_YAML);
    let engine = EngineConfig::default()
        .with_catalog_path(file.path())
        .build_engine()
        .unwrap();

    let result = engine.assess(&AssessmentRequest::new(30, Gender::Female, ["Facial Pain"]));
    assert_eq!(result.disease, "Sinusitis");
    // 22 + 0.5 * 40 + 4
    assert_eq!(result.risk_score, 46);
    assert_eq!(result.preventive, vec!["Use saline rinses"]);
}

#[test]
fn test_catalog_is_shared_not_copied() {
    let engine = SymptomEngine::builtin().unwrap();
    let clone = engine.clone();
    assert!(std::sync::Arc::ptr_eq(&engine.shared_catalog(), &clone.shared_catalog()));
}
