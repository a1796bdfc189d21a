mod common;

use common::*;

#[test]
fn add_creates_changelist_and_records_paths() {
    let repo = TestRepo::new();
    repo.commit_file("file1.txt", "hello");
    repo.commit_file("file2.txt", "world");
    repo.write("file1.txt", "hello modified");
    repo.write("file2.txt", "world modified");

    add(&repo, "feature1", &["file1.txt", "file2.txt"]).unwrap();

    let active = repo.active();
    assert_eq!(active["feature1"], vec!["file1.txt", "file2.txt"]);
}

#[test]
fn adding_to_another_changelist_reassigns() {
    let repo = TestRepo::new();
    repo.commit_file("f.txt", "one");
    repo.write("f.txt", "one modified");

    add(&repo, "a", &["f.txt"]).unwrap();
    add(&repo, "b", &["f.txt"]).unwrap();
    add(&repo, "a", &["f.txt"]).unwrap();

    let active = repo.active();
    assert_eq!(active["a"], vec!["f.txt"]);
    assert_eq!(active["b"], Vec::<String>::new());
}

#[test]
fn duplicate_paths_in_one_add_are_deduplicated() {
    let repo = TestRepo::new();
    repo.commit_file("f.txt", "one");
    repo.write("f.txt", "changed");

    add(&repo, "dupe-test", &["f.txt", "f.txt"]).unwrap();

    assert_eq!(repo.active()["dupe-test"], vec!["f.txt"]);
}

#[test]
fn status_groups_files_by_changelist() {
    let repo = TestRepo::new();
    repo.commit_file("file1.txt", "hello");
    repo.commit_file("src/main.py", "print('hello')");
    repo.write("file1.txt", "hello modified");
    repo.write("src/main.py", "print('v2')");
    repo.write("file3.txt", "new file");

    add(&repo, "feature1", &["file1.txt"]).unwrap();
    add(&repo, "feature2", &["src/main.py"]).unwrap();

    let out = status_output(&repo, "", &[], false);
    assert!(out.contains("feature1:"));
    assert!(out.contains("  [ M] file1.txt"));
    assert!(out.contains("feature2:"));
    assert!(out.contains("  [ M] src/main.py"));
    // file3.txt is not assigned anywhere
    assert!(out.contains("No Changelist:"));
    assert!(out.contains("  [??] file3.txt"));
}

#[test]
fn status_filter_hides_other_sections() {
    let repo = TestRepo::new();
    repo.commit_file("file1.txt", "hello");
    repo.write("file1.txt", "modified");
    repo.write("file3.txt", "new");
    add(&repo, "feature1", &["file1.txt"]).unwrap();
    add(&repo, "feature2", &["file3.txt"]).unwrap();

    let out = status_output(&repo, "", &["feature1"], false);
    assert!(out.contains("feature1:"));
    assert!(!out.contains("feature2:"));
    assert!(!out.contains("No Changelist:"));
}

#[test]
fn status_filter_with_include_no_cl() {
    let repo = TestRepo::new();
    repo.commit_file("file1.txt", "hello");
    repo.write("file1.txt", "modified");
    repo.write("loose.txt", "unassigned");
    add(&repo, "feature1", &["file1.txt"]).unwrap();

    let out = status_output(&repo, "", &["feature1"], true);
    assert!(out.contains("feature1:"));
    assert!(out.contains("No Changelist:"));
    assert!(out.contains("loose.txt"));
}

#[test]
fn clean_file_in_changelist_shows_blank_code() {
    let repo = TestRepo::new();
    repo.commit_file("file.txt", "content");

    add(&repo, "my-list", &["file.txt"]).unwrap();

    let out = status_output(&repo, "", &[], false);
    assert!(out.contains("  [  ] file.txt"));
}

#[test]
fn deleted_file_in_changelist_shows_d_code() {
    let repo = TestRepo::new();
    repo.commit_file("to-delete.txt", "temporary");
    repo.delete("to-delete.txt");

    add(&repo, "cleanup", &["to-delete.txt"]).unwrap();

    let out = status_output(&repo, "", &[], false);
    assert!(out.contains("  [ D] to-delete.txt"));
}

#[test]
fn status_with_no_changelists_lists_unassigned_changes() {
    let repo = TestRepo::new();
    repo.commit_file("file.txt", "content");
    repo.write("file.txt", "modified");

    let out = status_output(&repo, "", &[], false);
    assert!(out.contains("No Changelist:"));
    assert!(out.contains("file.txt"));
}

#[test]
fn status_with_unknown_filter_name_fails() {
    let repo = TestRepo::new();
    let err = git_cl::cli::status::Status {
        changelists: vec!["no-such-list".to_string()],
        include_no_cl: false,
    }
    .run(&repo.ctx())
    .unwrap_err();
    assert!(err.to_string().contains("no-such-list"));
}
