// End-to-end runs of both transformations against a real (temporary)
// filesystem, the way the binaries drive them.

use std::fs;

use serde_json::Value;
use tempfile::TempDir;

use descholars_tools::database::Database;
use descholars_tools::scaffold::scaffold_directories;
use descholars_tools::sort::{sort_database, write_sorted};

const DATABASE: &str = r#"{
    "Amy Lee": {"admit_year": 2021, "major": "Math", "writeup": "likes graphs"},
    "Bo Chen": {"admit_year": 2021, "major": null},
    "Cy Diaz": {"admit_year": 2020, "major": "Math"}
}"#;

#[test]
fn scaffold_then_sort_from_one_database_file() {
    let tmp = TempDir::new().unwrap();
    let json_file = tmp.path().join("database.json");
    fs::write(&json_file, DATABASE).unwrap();

    let template = tmp.path().join("template");
    fs::create_dir_all(&template).unwrap();
    fs::write(template.join("page.tsx"), "template page").unwrap();

    let db = Database::from_path(&json_file).unwrap();

    // scaffold
    let parent = tmp.path().join("humans-of-descholars");
    let summary = scaffold_directories(&db, &template, &parent).unwrap();
    assert_eq!(summary.directories, 3);
    for slug in ["amy-lee", "bo-chen", "cy-diaz"] {
        assert_eq!(
            fs::read_to_string(parent.join(slug).join("page.tsx")).unwrap(),
            "template page"
        );
    }

    // sort
    let out_file = tmp.path().join("sorted_database.json");
    write_sorted(&sort_database(&db), &out_file).unwrap();

    let parsed: Value = serde_json::from_str(&fs::read_to_string(&out_file).unwrap()).unwrap();
    let years: Vec<&String> = parsed.as_object().unwrap().keys().collect();
    assert_eq!(years, ["2020", "2021"]);

    let majors_2021: Vec<&String> = parsed["2021"].as_object().unwrap().keys().collect();
    assert_eq!(majors_2021, ["Math", "No Major"]);

    assert_eq!(
        parsed["2021"]["Math"][0]["Amy Lee"]["writeup"],
        "likes graphs"
    );
    assert_eq!(parsed["2021"]["No Major"][0]["Bo Chen"]["major"], Value::Null);
}

#[test]
fn bad_database_fails_before_any_output_exists() {
    let tmp = TempDir::new().unwrap();
    let json_file = tmp.path().join("database.json");
    fs::write(&json_file, r#"{"No Year": {"major": "CS"}}"#).unwrap();

    let err = Database::from_path(&json_file).unwrap_err();
    assert!(err.to_string().contains("parsing"));
    assert!(format!("{err:#}").contains("admit_year"));

    // the load failed, so the sorter never got a chance to create this
    assert!(!tmp.path().join("sorted_database.json").exists());
}
