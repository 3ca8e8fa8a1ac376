//! End-to-end build tests: waypost.toml + content tree in, static site out.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;

use waypost_config::Config;
use waypost_site::{SiteBuilder, SiteOptions};

/// Write a file, creating parent directories.
fn write_file(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Set up a project directory with a config file and content tree.
fn project(config: &str, docs: &[(&str, &str)]) -> tempfile::TempDir {
    let temp = tempfile::tempdir().unwrap();
    write_file(&temp.path().join("waypost.toml"), config);
    for (rel, contents) in docs {
        write_file(&temp.path().join("docs").join(rel), contents);
    }
    temp
}

fn build(temp: &tempfile::TempDir) -> Result<waypost_site::BuildSummary, waypost_site::BuildError> {
    let config = Config::load(Some(&temp.path().join("waypost.toml")), None).unwrap();
    SiteBuilder::new(SiteOptions {
        site_title: config.site.title,
        site_description: config.site.description,
        content_dir: config.paths.content_dir,
        out_dir: config.paths.out_dir,
        sidebar: config.sidebar,
    })
    .build()
}

fn nav_json(temp: &tempfile::TempDir) -> serde_json::Value {
    let raw = fs::read_to_string(temp.path().join("dist/nav.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

const TUTORIAL_SITE: &str = r#"
[site]
title = "Onboarding Challenges"

[[sidebar]]
label = "Guides"
items = [{ label = "Example Guide", slug = "guides/example" }]

[[sidebar]]
label = "Challenges"
autogenerate = { directory = "challenges" }

[[sidebar]]
label = "How-Tos"
autogenerate = { directory = "reference" }

[[sidebar]]
label = "Explanations"
autogenerate = { directory = "reference" }

[[sidebar]]
label = "Reference"
autogenerate = { directory = "reference" }
"#;

const TUTORIAL_DOCS: &[(&str, &str)] = &[
    ("index.md", "# Welcome\n"),
    (
        "guides/example.md",
        "---\ntitle: Example Guide\n---\nFollow along.\n",
    ),
    (
        "challenges/sveltekit.md",
        "---\ntitle: SvelteKit in 30 Minutes\nsidebar:\n  order: 1\n---\nStart here.\n",
    ),
    (
        "challenges/tauri.md",
        "---\ntitle: Tauri in 30 Minutes\nsidebar:\n  order: 2\n---\nDesktop next.\n",
    ),
    (
        "challenges/storybook.md",
        "---\ntitle: Storybook in 30 Minutes\n---\nComponents.\n",
    ),
    ("reference/api.md", "---\ntitle: API Reference\n---\nDetails.\n"),
];

#[test]
fn test_tutorial_site_builds_end_to_end() {
    let temp = project(TUTORIAL_SITE, TUTORIAL_DOCS);

    let summary = build(&temp).unwrap();

    assert_eq!(summary.pages, 6);
    assert_eq!(summary.groups, 5);
    assert!(temp.path().join("dist/index.html").exists());
    assert!(temp.path().join("dist/challenges/sveltekit/index.html").exists());

    let nav = nav_json(&temp);
    let labels: Vec<_> = nav["groups"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["label"].as_str().unwrap())
        .collect();
    assert_eq!(
        labels,
        vec!["Guides", "Challenges", "How-Tos", "Explanations", "Reference"]
    );
}

#[test]
fn test_ordered_entries_come_before_lexical_ones() {
    let temp = project(TUTORIAL_SITE, TUTORIAL_DOCS);
    build(&temp).unwrap();

    let nav = nav_json(&temp);
    let challenge_labels: Vec<_> = nav["groups"][1]["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["label"].as_str().unwrap())
        .collect();
    // sveltekit (order 1), tauri (order 2), then storybook lexically
    assert_eq!(
        challenge_labels,
        vec![
            "SvelteKit in 30 Minutes",
            "Tauri in 30 Minutes",
            "Storybook in 30 Minutes"
        ]
    );
}

#[test]
fn test_repeated_autogenerate_directory_duplicates_entries() {
    let temp = project(TUTORIAL_SITE, TUTORIAL_DOCS);
    build(&temp).unwrap();

    let nav = nav_json(&temp);
    for index in 2..=4 {
        let entries = nav["groups"][index]["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["slug"], "reference/api");
    }
}

#[test]
fn test_deleting_referenced_document_fails_the_build() {
    let temp = project(TUTORIAL_SITE, TUTORIAL_DOCS);
    build(&temp).unwrap();

    fs::remove_file(temp.path().join("docs/guides/example.md")).unwrap();

    let err = build(&temp).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Example Guide"));
    assert!(message.contains("guides/example"));
}

#[test]
fn test_missing_autogenerate_directory_builds_empty_group() {
    let config = r#"
[[sidebar]]
label = "Experiments"
autogenerate = { directory = "experiments" }
"#;
    let temp = project(config, &[("index.md", "# Home\n")]);

    build(&temp).unwrap();

    let nav = nav_json(&temp);
    assert_eq!(nav["groups"][0]["label"], "Experiments");
    assert!(nav["groups"][0].get("entries").is_none());
}

#[test]
fn test_rebuild_produces_identical_navigation() {
    let temp = project(TUTORIAL_SITE, TUTORIAL_DOCS);

    build(&temp).unwrap();
    let first = nav_json(&temp);
    build(&temp).unwrap();
    let second = nav_json(&temp);

    assert_eq!(first, second);
}

#[test]
fn test_pages_link_navigation_with_active_entry() {
    let temp = project(TUTORIAL_SITE, TUTORIAL_DOCS);
    build(&temp).unwrap();

    let page = fs::read_to_string(temp.path().join("dist/guides/example/index.html")).unwrap();
    assert!(page.contains("href=\"/guides/example/\" class=\"active\""));
    assert!(page.contains("Onboarding Challenges"));
    assert!(page.contains("Follow along."));
}
