//! Multi-file compilation: imports, statuses and failure isolation

use async_trait::async_trait;
use concordia::compiler::{
    Compiler, CompilerOptions, FileReader, FileStatus, MemoryFileReader,
};
use concordia::dictionary::BuiltinDictionaries;
use concordia::error::ProblemKind;
use concordia::problems::GENERIC_KEY;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

fn paths(names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(PathBuf::from).collect()
}

fn compiler(reader: Arc<dyn FileReader>, options: CompilerOptions) -> Compiler {
    Compiler::new(options, reader, BuiltinDictionaries::shared()).expect("compiler")
}

#[tokio::test]
async fn test_diamond_import_compiles_shared_file_once() {
    let reader = Arc::new(
        MemoryFileReader::new()
            .with_file("/specs/a.feature", "import \"shared/c.feature\"\nFeature: A")
            .with_file("/specs/b.feature", "import \"./shared/c.feature\"\nFeature: B")
            .with_file("/specs/shared/c.feature", "Feature: C"),
    );
    let output = compiler(reader.clone(), CompilerOptions::default())
        .compile(&paths(&["a.feature", "b.feature"]), Path::new("/specs"))
        .await;

    assert!(output.problems.is_empty(), "{:?}", output.problems);
    assert_eq!(output.spec.len(), 3);
    assert_eq!(reader.read_count("/specs/shared/c.feature"), 1);
    assert_eq!(reader.total_reads(), 3);
    assert!(output
        .statuses
        .values()
        .all(|status| *status == FileStatus::Done));

    let shared = Path::new("/specs/shared/c.feature");
    let dependents: Vec<_> = output.graph.dependents(shared).collect();
    assert_eq!(dependents.len(), 2);
    let order = output.graph.topological_order().expect("no cycle");
    assert_eq!(order[0], shared);
}

#[tokio::test]
async fn test_same_input_twice_is_compiled_once() {
    let reader = Arc::new(MemoryFileReader::new().with_file("/a.feature", "Feature: A"));
    let output = compiler(reader.clone(), CompilerOptions::default())
        .compile(&paths(&["a.feature", "./a.feature"]), Path::new("/"))
        .await;

    assert_eq!(output.spec.len(), 1);
    assert_eq!(reader.read_count("/a.feature"), 1);
}

#[tokio::test]
async fn test_stop_on_first_error_schedules_nothing_new() {
    let reader = Arc::new(
        MemoryFileReader::new()
            .with_file("/two.feature", "Feature: Two")
            .with_file("/three.feature", "Feature: Three"),
    );
    let options = CompilerOptions {
        concurrency: Some(1),
        stop_on_first_error: true,
        ..CompilerOptions::default()
    };
    let output = compiler(reader.clone(), options)
        .compile(
            &paths(&["one.feature", "two.feature", "three.feature"]),
            Path::new("/"),
        )
        .await;

    assert_eq!(reader.total_reads(), 1);
    assert!(output.spec.is_empty());
    assert_eq!(output.statuses.len(), 1);
    assert_eq!(output.problems.errors(GENERIC_KEY)[0].kind, ProblemKind::Io);
}

#[tokio::test]
async fn test_errors_do_not_stop_by_default() {
    let reader = Arc::new(
        MemoryFileReader::new()
            .with_file("/bad.feature", "Feature: A\nFeature: B")
            .with_file("/good.feature", "Feature: C"),
    );
    let options = CompilerOptions {
        concurrency: Some(1),
        ..CompilerOptions::default()
    };
    let output = compiler(reader, options)
        .compile(&paths(&["bad.feature", "good.feature"]), Path::new("/"))
        .await;

    assert_eq!(output.spec.len(), 2);
    assert_eq!(output.problems.errors("/bad.feature").len(), 1);
    assert!(output.problems.errors("/good.feature").is_empty());
}

#[tokio::test]
async fn test_missing_import_only_fails_that_file() {
    let reader = Arc::new(
        MemoryFileReader::new()
            .with_file("/a.feature", "import \"gone.feature\"\nFeature: A"),
    );
    let output = compiler(reader, CompilerOptions::default())
        .compile(&paths(&["a.feature"]), Path::new("/"))
        .await;

    assert_eq!(output.spec.len(), 1);
    assert_eq!(
        output.statuses.get(Path::new("/a.feature")),
        Some(&FileStatus::Done)
    );
    assert_eq!(
        output.statuses.get(Path::new("/gone.feature")),
        Some(&FileStatus::Failed)
    );
    assert_eq!(output.problems.errors(GENERIC_KEY).len(), 1);
}

#[tokio::test]
async fn test_unlimited_concurrency_with_a_deep_chain() {
    let mut reader = MemoryFileReader::new();
    for i in 0..30 {
        let content = format!("import \"f{}.feature\"\nFeature: F{i}", i + 1);
        reader = reader.with_file(format!("/f{i}.feature"), content);
    }
    reader = reader.with_file("/f30.feature", "Feature: Last");
    let options = CompilerOptions {
        concurrency: None,
        ..CompilerOptions::default()
    };
    let output = compiler(Arc::new(reader), options)
        .compile(&paths(&["f0.feature"]), Path::new("/"))
        .await;

    assert_eq!(output.spec.len(), 31);
    assert!(output.problems.is_empty());
}

#[tokio::test]
async fn test_chain_deeper_than_the_limit() {
    let mut reader = MemoryFileReader::new();
    for i in 0..5 {
        let content = format!("import \"f{}.feature\"\nFeature: F{i}", i + 1);
        reader = reader.with_file(format!("/f{i}.feature"), content);
    }
    reader = reader.with_file("/f5.feature", "Feature: Last");
    let options = CompilerOptions {
        concurrency: Some(1),
        ..CompilerOptions::default()
    };
    let output = compiler(Arc::new(reader), options)
        .compile(&paths(&["f0.feature"]), Path::new("/"))
        .await;

    assert_eq!(output.spec.len(), 6);
}

struct PanickingReader;

#[async_trait]
impl FileReader for PanickingReader {
    async fn read(&self, path: &Path) -> io::Result<String> {
        if path.ends_with("boom.feature") {
            panic!("reader exploded");
        }
        Ok("Feature: Fine".to_string())
    }
}

#[tokio::test]
async fn test_panicking_task_becomes_a_problem() {
    let output = compiler(Arc::new(PanickingReader), CompilerOptions::default())
        .compile(&paths(&["boom.feature", "fine.feature"]), Path::new("/"))
        .await;

    let errors = output.problems.errors("/boom.feature");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ProblemKind::Internal);
    assert_eq!(
        output.statuses.get(Path::new("/boom.feature")),
        Some(&FileStatus::Failed)
    );
    assert!(output.spec.contains("/fine.feature"));
}

#[tokio::test]
async fn test_file_system_compilation() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::create_dir(dir.path().join("sub")).expect("sub dir");
    std::fs::write(
        dir.path().join("main.feature"),
        "import \"sub/other.feature\"\nFeature: Main\n",
    )
    .expect("main");
    std::fs::write(
        dir.path().join("sub").join("other.feature"),
        "\u{feff}#language: pt\r\nFuncionalidade: Outra\r\n",
    )
    .expect("other");

    let output = Compiler::from_options(CompilerOptions {
        line_break: "\n".to_string(),
        ..CompilerOptions::default()
    })
    .expect("compiler")
    .compile(&paths(&["main.feature"]), dir.path())
    .await;

    assert!(output.problems.is_empty(), "{:?}", output.problems);
    let other = output
        .spec
        .get(dir.path().join("sub").join("other.feature"))
        .expect("imported document");
    assert_eq!(other.language_value(), Some("pt"));
    assert_eq!(
        other.feature.as_ref().and_then(|f| f.name()),
        Some("Outra")
    );
}

#[tokio::test]
async fn test_custom_dictionary_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(
        dir.path().join("eo.json"),
        r#"{ "keywords": { "language": ["lingvo"], "feature": ["trajto"], "scenario": ["scenaro"] } }"#,
    )
    .expect("dictionary");
    std::fs::write(dir.path().join("a.feature"), "Trajto: Saluton\nScenaro: Unu\n")
        .expect("source");

    let options = CompilerOptions::from_yaml_str(&format!(
        "language: eo\ndictionary-dir: {}\n",
        dir.path().display()
    ))
    .expect("options");
    let output = Compiler::from_options(options)
        .expect("compiler")
        .compile(&paths(&["a.feature"]), dir.path())
        .await;

    assert!(output.problems.is_empty(), "{:?}", output.problems);
    let doc = output
        .spec
        .get(dir.path().join("a.feature"))
        .expect("document");
    let feature = doc.feature.as_ref().expect("feature");
    assert_eq!(feature.name(), Some("Saluton"));
    assert_eq!(feature.scenarios.len(), 1);
}
