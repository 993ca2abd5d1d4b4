use std::cell::RefCell;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use seedling::config::Params;
use seedling::error::{Error, Result};
use seedling::prompt::{Prompter, Question};
use seedling::resolver::{list_seed_types, resolve};
use tempfile::TempDir;

/// Prompting backend with canned answers; records every batch it is asked.
struct MockPrompter {
    answers: IndexMap<String, String>,
    asked: RefCell<Vec<Question>>,
}

impl MockPrompter {
    fn new(answers: &[(&str, &str)]) -> Self {
        Self {
            answers: answers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            asked: RefCell::new(Vec::new()),
        }
    }

    fn asked_keys(&self) -> Vec<String> {
        self.asked.borrow().iter().map(|q| q.key.clone()).collect()
    }
}

impl Prompter for MockPrompter {
    fn ask(&self, questions: &[Question]) -> Result<IndexMap<String, String>> {
        self.asked.borrow_mut().extend(questions.iter().cloned());
        let mut out = IndexMap::new();
        for question in questions {
            let answer = self
                .answers
                .get(&question.key)
                .cloned()
                .unwrap_or_else(|| question.default.clone());
            out.insert(question.key.clone(), answer);
        }
        Ok(out)
    }
}

fn make_seeds(root: &Path, types: &[&str]) {
    for seed_type in types {
        fs::create_dir_all(root.join(seed_type)).unwrap();
    }
}

#[test]
fn test_list_seed_types_skips_dot_dirs() {
    let seeds = TempDir::new().unwrap();
    make_seeds(seeds.path(), &["base", "other", ".hidden"]);
    fs::write(seeds.path().join("stray-file"), "").unwrap();

    let types = list_seed_types(seeds.path()).unwrap();
    assert_eq!(types, vec!["base".to_string(), "other".to_string()]);
}

#[test]
fn test_sole_type_selected_without_prompt() {
    let seeds = TempDir::new().unwrap();
    make_seeds(seeds.path(), &["base"]);
    let prompter = MockPrompter::new(&[]);

    let params = Params { name: Some("demo".to_string()), ..Default::default() };
    let resolved =
        resolve(&params, Path::new("/tmp/demo"), seeds.path(), &prompter).unwrap();

    assert_eq!(resolved.seed_type, "base");
    assert!(prompter.asked_keys().is_empty());
}

#[test]
fn test_unknown_explicit_type_fails_naming_value() {
    let seeds = TempDir::new().unwrap();
    make_seeds(seeds.path(), &["base", "other"]);
    let prompter = MockPrompter::new(&[]);

    let params = Params {
        name: Some("demo".to_string()),
        seed_type: Some("missing".to_string()),
        ..Default::default()
    };
    let err =
        resolve(&params, Path::new("/tmp/demo"), seeds.path(), &prompter).unwrap_err();

    match err {
        Error::TypeNotFound { ref type_name } => assert_eq!(type_name, "missing"),
        other => panic!("unexpected error: {}", other),
    }
    assert!(err.to_string().contains("missing"));
}

#[test]
fn test_prompts_batched_with_defaults() {
    let seeds = TempDir::new().unwrap();
    make_seeds(seeds.path(), &["base", "other"]);
    let prompter = MockPrompter::new(&[("name", "answered"), ("type", "other")]);

    let params = Params::default();
    let resolved =
        resolve(&params, Path::new("/work/my-app"), seeds.path(), &prompter).unwrap();

    // Both questions go out in one batch, name first.
    assert_eq!(prompter.asked_keys(), vec!["name".to_string(), "type".to_string()]);
    let asked = prompter.asked.borrow();
    assert_eq!(asked[0].default, "my-app");
    assert_eq!(asked[1].default, "base");
    assert_eq!(asked[1].choices, vec!["base".to_string(), "other".to_string()]);

    assert_eq!(resolved.name, "answered");
    assert_eq!(resolved.seed_type, "other");
}

#[test]
fn test_empty_name_answer_does_not_overwrite() {
    let seeds = TempDir::new().unwrap();
    make_seeds(seeds.path(), &["base"]);
    let prompter = MockPrompter::new(&[("name", "")]);

    let params = Params::default();
    let resolved =
        resolve(&params, Path::new("/work/my-app"), seeds.path(), &prompter).unwrap();

    assert_eq!(resolved.name, "my-app");
}

#[test]
fn test_min_version_bumped_only_upward() {
    let seeds = TempDir::new().unwrap();
    make_seeds(seeds.path(), &["base"]);
    let prompter = MockPrompter::new(&[]);
    let name = Some("demo".to_string());

    let lower = Params {
        name: name.clone(),
        yyl_version: Some("3.9.9".to_string()),
        ..Default::default()
    };
    let resolved =
        resolve(&lower, Path::new("/tmp/demo"), seeds.path(), &prompter).unwrap();
    assert_eq!(resolved.min_version, "3.10.2");

    let higher = Params {
        name,
        yyl_version: Some("3.11.0".to_string()),
        ..Default::default()
    };
    let resolved =
        resolve(&higher, Path::new("/tmp/demo"), seeds.path(), &prompter).unwrap();
    assert_eq!(resolved.min_version, "3.11.0");
}

#[test]
fn test_empty_seeds_root_fails() {
    let seeds = TempDir::new().unwrap();
    let prompter = MockPrompter::new(&[]);

    let params = Params { name: Some("demo".to_string()), ..Default::default() };
    assert!(resolve(&params, Path::new("/tmp/demo"), seeds.path(), &prompter).is_err());
}
