// Integration tests for the farming advisor against the bundled sample dataset
//
// This test suite validates the complete workflow:
// 1. Load and validate the dataset document
// 2. Resolve a tracked weapon list
// 3. Match weapons per dungeon and build schemes
// 4. Render and export the result

use std::path::Path;

use farming_advisor::advisor::recommend;
use farming_advisor::evaluator::{self, Verdict};
use farming_advisor::report::{self, ReportOptions};
use farming_advisor::{
    Dataset, DatasetLoader, FarmingAdvisor, GatePolicy, Recommendation, StatTaxonomy, TrackedSet,
};
use tempfile::TempDir;

const SAMPLE_DATASET: &str = "data/sample_data.json";

fn load_sample() -> Dataset {
    DatasetLoader::load(Path::new(SAMPLE_DATASET)).expect("sample dataset should load")
}

fn melee_tracked() -> TrackedSet {
    [
        "Forgeborn Scathe",
        "Wavebreaker",
        "Jet",
        "Grand Vision",
        "Industry 0.1",
    ]
    .into_iter()
    .collect()
}

fn location_names(recommendations: &[Recommendation]) -> Vec<&str> {
    recommendations
        .iter()
        .map(|r| r.location.name.as_str())
        .collect()
}

#[test]
fn test_sample_dataset_loads() {
    let dataset = load_sample();

    assert_eq!(dataset.weapons.len(), 12);
    assert_eq!(dataset.dungeons.len(), 5);

    let taxonomy = StatTaxonomy::from_database(&dataset.database).unwrap();
    assert_eq!(taxonomy.len(), 28);
}

#[test]
fn test_dungeons_ranked_by_yield() {
    let dataset = load_sample();
    let result = FarmingAdvisor::new(&dataset)
        .unwrap()
        .recommend(&melee_tracked())
        .unwrap();

    // The base-only weapon matches every dungeon, so all five survive
    assert_eq!(
        location_names(&result),
        vec![
            "Power Plateau",
            "Valley Pass",
            "Wuling Outskirts",
            "Originium Science Park",
            "Aburrey Quarry",
        ]
    );
    assert_eq!(result[0].member_count(), 4);
    assert_eq!(result[1].member_count(), 4);
    for quiet in &result[2..] {
        assert_eq!(quiet.member_count(), 1);
        assert_eq!(quiet.members[0].weapon.name, "Industry 0.1");
        assert!(quiet.schemes.is_empty());
    }
}

#[test]
fn test_power_plateau_schemes() {
    let dataset = load_sample();
    let result = FarmingAdvisor::new(&dataset)
        .unwrap()
        .recommend(&melee_tracked())
        .unwrap();
    let plateau = &result[0];

    let members: Vec<&str> = plateau
        .members
        .iter()
        .map(|m| m.weapon.name.as_str())
        .collect();
    assert_eq!(
        members,
        vec!["Forgeborn Scathe", "Grand Vision", "Wavebreaker", "Industry 0.1"]
    );

    assert_eq!(plateau.schemes.len(), 4);

    let assault = &plateau.schemes[0];
    assert_eq!(assault.id, "Power Plateau::Forgeborn Scathe+Wavebreaker");
    assert_eq!(assault.locked_advanced, vec!["Assault"]);
    assert_eq!(assault.locked_base, vec!["Strength"]);
    assert_eq!(assault.score, 2);

    // Attack Boost and Suppression both select only Grand Vision
    let vision = plateau
        .schemes
        .iter()
        .find(|s| s.id == "Power Plateau::Grand Vision")
        .expect("Grand Vision scheme");
    assert_eq!(vision.locked_advanced, vec!["Attack Boost", "Suppression"]);
    assert_eq!(vision.locked_base, vec!["Agility"]);
}

#[test]
fn test_valley_pass_base_ranking() {
    let dataset = load_sample();
    let result = FarmingAdvisor::new(&dataset)
        .unwrap()
        .recommend(&melee_tracked())
        .unwrap();
    let valley = &result[1];

    let physical = &valley.schemes[0];
    assert_eq!(physical.locked_advanced, vec!["Physical DMG Boost"]);
    assert_eq!(
        physical.member_names().collect::<Vec<_>>(),
        vec!["Forgeborn Scathe", "Jet"]
    );
    assert_eq!(physical.locked_base, vec!["Strength", "Agility"]);

    let locks: Vec<&str> = valley
        .schemes
        .iter()
        .map(|s| s.locked_advanced[0].as_str())
        .collect();
    assert_eq!(
        locks,
        vec!["Physical DMG Boost", "Assault", "Critical Rate Boost", "Pursuit"]
    );
}

#[test]
fn test_recomputation_is_stable() {
    let dataset = load_sample();
    let tracked = melee_tracked();

    let first = recommend(&dataset, &tracked, GatePolicy::FirstOccurrence).unwrap();
    let second = recommend(&dataset, &tracked, GatePolicy::FirstOccurrence).unwrap();
    assert_eq!(first, second);
    assert_eq!(tracked, melee_tracked());
}

#[test]
fn test_empty_tracked_list_renders_empty_state() {
    let dataset = load_sample();
    let result = FarmingAdvisor::new(&dataset)
        .unwrap()
        .recommend(&TrackedSet::new())
        .unwrap();
    assert!(result.is_empty());

    let mut out = Vec::new();
    report::render_text(&mut out, &result, ReportOptions::default()).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap().trim(),
        report::EMPTY_STATE_MESSAGE
    );
}

#[test]
fn test_json_lines_export() {
    let dataset = load_sample();
    let result = FarmingAdvisor::new(&dataset)
        .unwrap()
        .recommend(&melee_tracked())
        .unwrap();

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("plan.jsonl");
    report::write_json_lines(&path, &result).unwrap();

    let read_back: Vec<Recommendation> = serde_jsonlines::json_lines(&path)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(read_back, result);
}

#[test]
fn test_three_star_drop_evaluation() {
    let dataset = load_sample();
    let taxonomy = StatTaxonomy::from_database(&dataset.database).unwrap();
    let tarr = dataset.weapon("Tarr 11").unwrap();

    let rolled = vec!["Main Attribute".to_string(), "Attack Boost".to_string()];
    let evaluation = evaluator::evaluate(tarr, &rolled, &taxonomy).unwrap();

    assert_eq!(evaluation.slot_limit, 2);
    assert_eq!(evaluation.verdict, Verdict::Perfect);
}
