use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn shelf(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.env("SHELF_HOME", home)
        .env_remove("RUST_LOG")
        .env_remove("CLICOLOR_FORCE")
        .current_dir(home);
    cmd
}

fn add(home: &Path, title: &str, author: &str, year: &str, read: &str) {
    shelf(home)
        .args(["add", title, "--author", author, "--year", year, "--read", read])
        .assert()
        .success();
}

fn seed_four(home: &Path) {
    add(home, "Dune", "Frank Herbert", "1965", "yes");
    add(home, "Emma", "Jane Austen", "1815", "yes");
    add(home, "Persuasion", "Jane Austen", "1817", "yes");
    add(home, "Ulysses", "James Joyce", "1922", "no");
}

fn saved_books(home: &Path) -> Vec<serde_json::Value> {
    let raw = std::fs::read_to_string(home.join("library.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn add_then_list_shows_a_card() {
    let dir = TempDir::new().unwrap();
    shelf(dir.path())
        .args([
            "add", "The", "Hobbit", "-a", "J.R.R. Tolkien", "-y", "1937", "-g", "Fantasy",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Book 'The Hobbit' added to your library!",
        ));

    shelf(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The Hobbit by J.R.R. Tolkien (1937)\n    Genre: Fantasy\n    Read\n",
        ));
}

#[test]
fn library_file_is_a_pretty_json_array() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Emma", "Jane Austen", "1815", "no");

    let raw = std::fs::read_to_string(dir.path().join("library.json")).unwrap();
    assert!(raw.starts_with("[\n"));

    let books = saved_books(dir.path());
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["title"], "Emma");
    assert_eq!(books[0]["author"], "Jane Austen");
    assert_eq!(books[0]["year"], 1815);
    assert_eq!(books[0]["genre"], "");
    assert_eq!(books[0]["read"], false);
}

#[test]
fn bare_invocation_lists_and_reports_empty_library() {
    let dir = TempDir::new().unwrap();
    shelf(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Your library is empty!"));
    assert!(!dir.path().join("library.json").exists());
}

#[test]
fn remove_drops_every_book_with_the_title() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Dune", "Frank Herbert", "1965", "yes");
    add(dir.path(), "Emma", "Jane Austen", "1815", "no");
    add(dir.path(), "Dune", "Someone Else", "2021", "no");

    shelf(dir.path())
        .args(["remove", "Dune"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book 'Dune' removed!"));

    let books = saved_books(dir.path());
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["title"], "Emma");
}

#[test]
fn remove_reports_unknown_title_and_empty_library() {
    let dir = TempDir::new().unwrap();
    shelf(dir.path())
        .args(["rm", "Dune"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Library is empty."));

    add(dir.path(), "Emma", "Jane Austen", "1815", "no");
    shelf(dir.path())
        .args(["rm", "Dune"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No book titled 'Dune' in your library.",
        ));
    assert_eq!(saved_books(dir.path()).len(), 1);
}

#[test]
fn search_by_author_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    seed_four(dir.path());

    shelf(dir.path())
        .args(["search", "AUSTEN", "--by", "author"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Emma by Jane Austen (1815)"))
        .stdout(predicate::str::contains("Persuasion by Jane Austen (1817)"))
        .stdout(predicate::str::contains("Dune").not());
}

#[test]
fn search_without_matches() {
    let dir = TempDir::new().unwrap();
    seed_four(dir.path());

    shelf(dir.path())
        .args(["search", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matches found."));
}

#[test]
fn empty_search_lists_everything() {
    let dir = TempDir::new().unwrap();
    seed_four(dir.path());

    shelf(dir.path())
        .arg("search")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune by Frank Herbert"))
        .stdout(predicate::str::contains("Ulysses by James Joyce"));
}

#[test]
fn stats_report_completion_rate() {
    let dir = TempDir::new().unwrap();
    seed_four(dir.path());

    shelf(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Books: 4"))
        .stdout(predicate::str::contains("Books Read: 3"))
        .stdout(predicate::str::contains("Unread Books: 1"))
        .stdout(predicate::str::contains("Completion Rate: 75.00%"));
}

#[test]
fn stats_on_empty_library() {
    let dir = TempDir::new().unwrap();
    shelf(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Books: 0"))
        .stdout(predicate::str::contains("Completion Rate: 0.00%"));
}

#[test]
fn malformed_library_fails_with_status_one() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("library.json"), "{ not a list").unwrap();

    shelf(dir.path())
        .arg("list")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn year_outside_bounds_is_rejected() {
    let dir = TempDir::new().unwrap();
    shelf(dir.path())
        .args(["add", "Beowulf", "--year", "975"])
        .assert()
        .failure();
    assert!(!dir.path().join("library.json").exists());
}

#[test]
fn file_flag_points_at_another_library() {
    let dir = TempDir::new().unwrap();
    let other = dir.path().join("elsewhere").join("books.json");

    shelf(dir.path())
        .args(["add", "Emma", "--year", "1815", "--file"])
        .arg(&other)
        .assert()
        .success();

    assert!(other.exists());
    assert!(!dir.path().join("library.json").exists());

    shelf(dir.path())
        .arg("titles")
        .arg("-f")
        .arg(&other)
        .assert()
        .success()
        .stdout("Emma\n");
}

#[test]
fn titles_and_completion_helper() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Dune", "Frank Herbert", "1965", "yes");
    add(dir.path(), "Emma", "Jane Austen", "1815", "no");

    shelf(dir.path())
        .arg("__complete-titles")
        .assert()
        .success()
        .stdout("Dune\nEmma\n");
}

#[test]
fn completion_titles_follow_the_file_flag() {
    let dir = TempDir::new().unwrap();
    let other = dir.path().join("other.json");
    add(dir.path(), "Dune", "Frank Herbert", "1965", "yes");
    shelf(dir.path())
        .args(["add", "Ubik", "--year", "1969", "--file"])
        .arg(&other)
        .assert()
        .success();

    shelf(dir.path())
        .arg("__complete-titles")
        .arg("--file")
        .arg(&other)
        .assert()
        .success()
        .stdout("Ubik\n");

    for shell in ["bash", "zsh"] {
        shelf(dir.path())
            .args(["completions", shell])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "shelf __complete-titles \"${file_args[@]}\"",
            ));
    }
}

#[test]
fn malformed_config_warns_and_falls_back() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ broken").unwrap();

    shelf(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your library is empty!"))
        .stderr(predicate::str::contains("Ignoring unreadable config"));

    shelf(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ignoring unreadable config"))
        .stdout(predicate::str::contains("color = auto"))
        .stderr(predicate::str::contains("Ignoring unreadable config").not());
}

#[test]
fn exit_says_goodbye() {
    let dir = TempDir::new().unwrap();
    shelf(dir.path())
        .arg("exit")
        .assert()
        .success()
        .stdout(predicate::str::contains("Library saved! Come back soon!"));
}

#[test]
fn export_single_markdown_file() {
    let dir = TempDir::new().unwrap();
    seed_four(dir.path());

    shelf(dir.path())
        .args(["export", "--single-file", "catalog.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 4 books"));

    let markdown = std::fs::read_to_string(dir.path().join("catalog.md")).unwrap();
    assert!(markdown.contains("# Library Catalog"));
    assert!(markdown.contains("## Dune"));
}

#[test]
fn import_appends_books_from_json() {
    let dir = TempDir::new().unwrap();
    add(dir.path(), "Dune", "Frank Herbert", "1965", "yes");

    let source = dir.path().join("more.json");
    std::fs::write(
        &source,
        r#"[{"title":"Emma","author":"Jane Austen","year":1815,"genre":"Novel","read":false}]"#,
    )
    .unwrap();

    shelf(dir.path())
        .arg("import")
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total imported: 1"));

    let books = saved_books(dir.path());
    assert_eq!(books.len(), 2);
    assert_eq!(books[1]["title"], "Emma");
}

#[test]
fn config_color_round_trip() {
    let dir = TempDir::new().unwrap();
    shelf(dir.path())
        .args(["config", "color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("color set to never"));

    shelf(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("color = never"))
        .stdout(predicate::str::contains("library-file = library.json"));

    shelf(dir.path())
        .args(["config", "theme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown config key: theme"));
}

#[test]
fn grouped_help() {
    let dir = TempDir::new().unwrap();
    shelf(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog Commands:"))
        .stdout(predicate::str::contains("Data Commands:"));
}
