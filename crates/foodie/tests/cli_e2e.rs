#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn foodie_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("foodie"));
    cmd.env("XDG_CONFIG_HOME", temp.path().join("config"))
        .env("HOME", temp.path())
        .env("FOODIE_DATA_DIR", temp.path().join("data"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_list_shows_builtin_catalog() {
    let temp = TempDir::new().unwrap();

    foodie_cmd(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Avocado toast"))
        .stdout(predicate::str::contains("Slow beef stew"));
}

#[test]
fn test_no_subcommand_lists() {
    let temp = TempDir::new().unwrap();

    foodie_cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cake with some berries"));
}

#[test]
fn test_list_with_meal_filter() {
    let temp = TempDir::new().unwrap();

    foodie_cmd(&temp)
        .args(["list", "--filter", "mealTime=Dinner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Slow beef stew"))
        .stdout(predicate::str::contains("Avocado toast").not());
}

#[test]
fn test_search_matches_ingredients_as_json() {
    let temp = TempDir::new().unwrap();

    let output = foodie_cmd(&temp)
        .args(["search", "egg", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let recipes: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = recipes
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert!(ids.contains(&"1"));
    assert!(ids.contains(&"4"));
}

#[test]
fn test_bad_filter_syntax_is_rejected() {
    let temp = TempDir::new().unwrap();

    foodie_cmd(&temp)
        .args(["list", "--filter", "mealTime"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("category=value"));
}

#[test]
fn test_show_unknown_recipe_fails() {
    let temp = TempDir::new().unwrap();

    foodie_cmd(&temp)
        .args(["show", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Recipe not found: nope"));
}

#[test]
fn test_save_and_unsave_workflow() {
    let temp = TempDir::new().unwrap();

    foodie_cmd(&temp)
        .args(["saved"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved recipes."));

    foodie_cmd(&temp)
        .args(["save", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved recipe 4"));

    foodie_cmd(&temp)
        .args(["save", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already saved"));

    assert!(temp
        .path()
        .join("data")
        .join("foodieFusion_savedRecipes.json")
        .exists());

    foodie_cmd(&temp)
        .args(["saved"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Simple egg toast"));

    foodie_cmd(&temp)
        .args(["unsave", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed recipe 4"));

    foodie_cmd(&temp)
        .args(["saved"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved recipes."));
}

#[test]
fn test_create_persists_and_lists_first() {
    let temp = TempDir::new().unwrap();

    let output = foodie_cmd(&temp)
        .args([
            "create",
            "--title",
            "Lunch Pasta Bowl",
            "--ingredients",
            "2 eggs",
            "1 cup flour",
            "Salt",
            "--cooking-time",
            "20 min",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let created: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let recipe = &created[0];
    assert_eq!(recipe["title"], "Lunch Pasta Bowl");
    assert_eq!(recipe["cookingTime"], 20);
    assert_eq!(recipe["mealTime"][0], "Lunch");
    assert_eq!(recipe["ingredients"][0], "eggs");
    assert_eq!(recipe["creator"], "You");
    let id = recipe["id"].as_str().unwrap().to_string();
    assert!(id.starts_with("created-"));

    let listed = foodie_cmd(&temp).args(["list", "--json"]).output().unwrap();
    let listed: serde_json::Value = serde_json::from_slice(&listed.stdout).unwrap();
    assert_eq!(listed[0]["id"], id.as_str());

    foodie_cmd(&temp)
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch Pasta Bowl"))
        .stdout(predicate::str::contains("flour"));
}

#[test]
fn test_config_file_keys_are_honored() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("config").join("foodie");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("foodie.toml"), "saved_key = \"bookmarks\"\n").unwrap();

    foodie_cmd(&temp)
        .args(["save", "2"])
        .assert()
        .success();

    assert!(temp.path().join("data").join("bookmarks.json").exists());
}

#[test]
fn test_data_dir_flag_overrides_env() {
    let temp = TempDir::new().unwrap();
    let elsewhere = temp.path().join("elsewhere");

    foodie_cmd(&temp)
        .args(["save", "1", "--data-dir"])
        .arg(&elsewhere)
        .assert()
        .success();

    assert!(elsewhere.join("foodieFusion_savedRecipes.json").exists());
    assert!(!temp.path().join("data").exists());
}
