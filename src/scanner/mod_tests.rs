use std::fs;

use tempfile::TempDir;

use super::*;

fn html_exts() -> Vec<String> {
    vec!["html".to_string(), "htm".to_string()]
}

#[test]
fn scan_finds_documents_by_extension() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.html"), "<p>a</p>").unwrap();
    fs::write(dir.path().join("b.htm"), "<p>b</p>").unwrap();
    fs::write(dir.path().join("c.css"), "p {}").unwrap();

    let scanner = DocumentScanner::new(&html_exts(), &[]).unwrap();
    let files = scanner.scan(dir.path()).unwrap();

    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|f| f.extension().unwrap() != "css"));
}

#[test]
fn scan_recurses_into_subdirectories() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("nested/deeper")).unwrap();
    fs::write(dir.path().join("nested/deeper/page.html"), "<p>x</p>").unwrap();

    let scanner = DocumentScanner::new(&html_exts(), &[]).unwrap();
    let files = scanner.scan(dir.path()).unwrap();
    assert_eq!(files.len(), 1);
}

#[test]
fn exclude_globs_prune_matches() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("drafts")).unwrap();
    fs::write(dir.path().join("published.html"), "<p>x</p>").unwrap();
    fs::write(dir.path().join("drafts/wip.html"), "<p>y</p>").unwrap();

    let scanner =
        DocumentScanner::new(&html_exts(), &["**/drafts/**".to_string()]).unwrap();
    let files = scanner.scan(dir.path()).unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("published.html"));
}

#[test]
fn extension_matching_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("PAGE.HTML"), "<p>x</p>").unwrap();

    let scanner = DocumentScanner::new(&html_exts(), &[]).unwrap();
    assert_eq!(scanner.scan(dir.path()).unwrap().len(), 1);
}

#[test]
fn results_are_sorted_for_determinism() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("zzz.html"), "<p>z</p>").unwrap();
    fs::write(dir.path().join("aaa.html"), "<p>a</p>").unwrap();

    let scanner = DocumentScanner::new(&html_exts(), &[]).unwrap();
    let files = scanner.scan(dir.path()).unwrap();
    assert!(files[0].ends_with("aaa.html"));
    assert!(files[1].ends_with("zzz.html"));
}

#[test]
fn invalid_exclude_pattern_is_an_error() {
    assert!(DocumentScanner::new(&html_exts(), &["[bad".to_string()]).is_err());
}
