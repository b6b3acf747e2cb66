//! End-to-end tests running the `vgen` binary against temporary projects.

use std::{
    fs,
    path::Path,
    process::{Command, Output},
};

use tempfile::TempDir;

fn vgen(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vgen"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run vgen")
}

fn project_with(targets: &[&str]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for target in targets {
        fs::create_dir_all(temp.path().join("Sources").join(target)).unwrap();
    }
    temp
}

#[test]
fn test_generates_three_files() {
    let project = project_with(&["App"]);

    let output = vgen(
        project.path(),
        &["product", "title:string", "price:int", "inStock:bool"],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generating files for resource: Product..."));
    assert!(stdout.contains("Created: Product.swift"));
    assert!(stdout.contains("Created: CreateProduct.swift"));
    assert!(stdout.contains("Created: ProductController.swift"));
    assert!(stdout.contains("configure.swift"));

    let app = project.path().join("Sources").join("App");
    assert!(app.join("Models").join("Product.swift").is_file());
    assert!(app.join("Migrations").join("CreateProduct.swift").is_file());
    assert!(app.join("Controllers").join("ProductController.swift").is_file());
}

#[test]
fn test_zero_fields() {
    let project = project_with(&["App"]);

    let output = vgen(project.path(), &["tag"]);

    assert!(output.status.success());
    let model =
        fs::read_to_string(project.path().join("Sources/App/Models/Tag.swift")).unwrap();
    assert!(model.contains("var id: UUID?"));
    assert!(!model.contains("@Field"));
}

#[test]
fn test_path_flag() {
    let project = project_with(&["Backend"]);
    let elsewhere = TempDir::new().unwrap();
    let path = project.path().to_string_lossy().into_owned();

    let output = vgen(elsewhere.path(), &["Order", "total:double", "--path", &path]);

    assert!(output.status.success());
    assert!(
        project
            .path()
            .join("Sources/Backend/Models/Order.swift")
            .is_file()
    );
}

#[test]
fn test_missing_sources_fails() {
    let temp = TempDir::new().unwrap();

    let output = vgen(temp.path(), &["Product"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Sources"));
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn test_ambiguous_project_fails() {
    let project = project_with(&["Api", "Worker"]);

    let output = vgen(project.path(), &["Product"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Api"));
    assert!(stderr.contains("Worker"));
    assert!(!project.path().join("Sources/Api/Models").exists());
    assert!(!project.path().join("Sources/Worker/Models").exists());
}

#[test]
fn test_write_failure_exits_with_error() {
    let project = project_with(&["App"]);
    let app = project.path().join("Sources/App");
    // A plain file where the migrations directory should go
    fs::write(app.join("Migrations"), "").unwrap();

    let output = vgen(project.path(), &["Product", "title"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to access"));
    assert!(stderr.contains("Migrations"));
    // Earlier files are kept and later ones are never attempted
    assert!(app.join("Models/Product.swift").is_file());
    assert!(!app.join("Controllers").exists());
}

#[test]
fn test_dry_run_writes_nothing() {
    let project = project_with(&["App"]);

    let output = vgen(project.path(), &["Product", "title", "--dry-run"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("final class Product"));
    assert!(stdout.contains("3 files would be generated"));
    assert!(!project.path().join("Sources/App/Models").exists());
}

#[test]
fn test_unknown_type_warns_but_generates() {
    let project = project_with(&["App"]);

    let output = vgen(project.path(), &["Doc", "body:json"]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown type 'json'"));
    let model =
        fs::read_to_string(project.path().join("Sources/App/Models/Doc.swift")).unwrap();
    assert!(model.contains("var body: String"));
}

#[test]
fn test_rerun_overwrites() {
    let project = project_with(&["App"]);

    assert!(vgen(project.path(), &["Note", "body"]).status.success());
    assert!(
        vgen(project.path(), &["Note", "body", "pinned:bool"])
            .status
            .success()
    );

    let model =
        fs::read_to_string(project.path().join("Sources/App/Models/Note.swift")).unwrap();
    assert!(model.contains("var pinned: Bool"));
}
