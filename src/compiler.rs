//! Multi-file compiler
//!
//!     [`Compiler::compile`] turns a set of files into a [`Specification`]: every input file and
//!     everything they import, transitively, each compiled exactly once.
//!
//! File Tasks
//!
//!     Every file is compiled by its own task. A task first claims its path in the
//!     [`StatusTable`]; if another task got there first it stops right away, which is what
//!     keeps diamond shaped imports (two files importing a third) from compiling the shared
//!     file twice. The owner reads the file, runs the single file pipeline on it, adds the
//!     document to the specification and then compiles its imports as a new set of tasks,
//!     waiting for them before marking itself done.
//!
//!     Reading and compiling take a permit from a semaphore sized by the concurrency option.
//!     Waiting for imports does not, so a chain of imports deeper than the limit cannot
//!     starve itself.
//!
//! Failures
//!
//!     Nothing is raised from a task. Read failures, diagnostics and panics all become
//!     problems, and with `stop-on-first-error` the first error stops new tasks from being
//!     scheduled. Tasks already running finish normally.
//!
//! After The Tasks
//!
//!     Once every task has settled the [`ImportGraph`] is built from the documents, import
//!     cycles are reported, and the [`BatchSemanticAnalyzer`] gets to look at the whole
//!     specification.

pub mod graph;
pub mod options;
pub mod paths;
pub mod reader;
pub mod spec;
pub mod status;

pub use graph::{ImportCycle, ImportGraph};
pub use options::CompilerOptions;
pub use reader::{FileReader, FsFileReader, MemoryFileReader};
pub use spec::Specification;
pub use status::{FileStatus, StatusTable};

use crate::ast::Document;
use crate::dictionary::{BuiltinDictionaries, DictionaryProvider, DirectoryDictionaryProvider};
use crate::error::{DictionaryError, Problem, ProblemKind};
use crate::lexing::Lexer;
use crate::parsing::Parser;
use crate::pipeline::{NoSentenceRecognition, SentenceRecognizer, SingleFileCompiler};
use crate::problems::ProblemMapper;
use futures::future::{BoxFuture, FutureExt};
use parking_lot::Mutex;
use paths::{resolve_import, resolve_path};
use std::collections::BTreeMap;
use std::panic::AssertUnwindSafe;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinSet};

const BOM: char = '\u{feff}';

/// Cross-document checks, run once per compilation
pub trait BatchSemanticAnalyzer: Send + Sync {
    fn analyze(&self, problems: &mut ProblemMapper, spec: &Specification, graph: &ImportGraph);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoSemanticAnalysis;

impl BatchSemanticAnalyzer for NoSemanticAnalysis {
    fn analyze(&self, _problems: &mut ProblemMapper, _spec: &Specification, _graph: &ImportGraph) {
    }
}

#[derive(Debug, Default)]
pub struct CompilationOutput {
    pub problems: ProblemMapper,
    pub spec: Specification,
    pub graph: ImportGraph,
    pub statuses: BTreeMap<PathBuf, FileStatus>,
}

pub struct Compiler {
    options: CompilerOptions,
    reader: Arc<dyn FileReader>,
    dictionaries: Arc<dyn DictionaryProvider>,
    recognizer: Arc<dyn SentenceRecognizer>,
    analyzer: Arc<dyn BatchSemanticAnalyzer>,
}

impl Compiler {
    /// Fails when there is no dictionary for the default language.
    pub fn new(
        options: CompilerOptions,
        reader: Arc<dyn FileReader>,
        dictionaries: Arc<dyn DictionaryProvider>,
    ) -> Result<Self, DictionaryError> {
        dictionaries.dictionary(&options.language)?;
        Ok(Self {
            options,
            reader,
            dictionaries,
            recognizer: Arc::new(NoSentenceRecognition),
            analyzer: Arc::new(NoSemanticAnalysis),
        })
    }

    /// File system reader, with the dictionaries of `dictionary-dir` when it is set.
    pub fn from_options(options: CompilerOptions) -> Result<Self, DictionaryError> {
        let dictionaries: Arc<dyn DictionaryProvider> = match &options.dictionary_dir {
            Some(dir) => Arc::new(DirectoryDictionaryProvider::new(dir.clone())),
            None => BuiltinDictionaries::shared(),
        };
        Self::new(options, Arc::new(FsFileReader), dictionaries)
    }

    pub fn with_recognizer(mut self, recognizer: Arc<dyn SentenceRecognizer>) -> Self {
        self.recognizer = recognizer;
        self
    }

    pub fn with_analyzer(mut self, analyzer: Arc<dyn BatchSemanticAnalyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    /// Compiles `files`, resolved against `base_path`, and everything they import.
    pub async fn compile(&self, files: &[PathBuf], base_path: &Path) -> CompilationOutput {
        let limit = self.options.concurrency_limit();
        let run = Arc::new(Run::new(self, limit));
        tracing::debug!(files = files.len(), ?limit, "compilation started");

        let mut pending = files.iter().map(|file| resolve_path(base_path, file));
        let mut tasks = JoinSet::new();
        loop {
            while !run.stopped() && limit.map_or(true, |limit| tasks.len() < limit) {
                let Some(path) = pending.next() else {
                    break;
                };
                spawn_file(&mut tasks, &run, path);
            }
            match tasks.join_next().await {
                Some(result) => run.record_join(result),
                None => break,
            }
        }

        let spec = std::mem::take(&mut *run.spec.lock());
        let mut problems = std::mem::take(&mut *run.problems.lock());
        let graph = ImportGraph::from_specification(&spec);
        for cycle in graph.cycles() {
            let Some(first) = cycle.first().cloned() else {
                continue;
            };
            let cycle = ImportCycle(cycle);
            tracing::warn!(%cycle, "import cycle");
            problems.add_error(first, Problem::new(ProblemKind::Import, cycle.to_string()));
        }

        let analyzer = self.analyzer.as_ref();
        let analyzed = std::panic::catch_unwind(AssertUnwindSafe(|| {
            analyzer.analyze(&mut problems, &spec, &graph)
        }));
        if analyzed.is_err() {
            tracing::warn!("semantic analyzer panicked");
            problems.add_generic_error(Problem::new(
                ProblemKind::Internal,
                "Semantic analysis panicked",
            ));
        }

        tracing::info!(
            documents = spec.len(),
            errors = problems.error_count(),
            warnings = problems.warning_count(),
            "compilation finished"
        );
        CompilationOutput {
            problems,
            spec,
            graph,
            statuses: run.statuses.snapshot(),
        }
    }
}

/// State shared by the file tasks of one compilation
struct Run {
    language: String,
    line_break: String,
    stop_on_first_error: bool,
    reader: Arc<dyn FileReader>,
    dictionaries: Arc<dyn DictionaryProvider>,
    recognizer: Arc<dyn SentenceRecognizer>,
    limiter: Option<Semaphore>,
    /// Idle pipelines, reused across files
    pipelines: Mutex<Vec<SingleFileCompiler>>,
    statuses: StatusTable,
    spec: Mutex<Specification>,
    problems: Mutex<ProblemMapper>,
    stopped: AtomicBool,
}

impl Run {
    fn new(compiler: &Compiler, limit: Option<usize>) -> Self {
        Self {
            language: compiler.options.language.clone(),
            line_break: compiler.options.line_break.clone(),
            stop_on_first_error: compiler.options.stop_on_first_error,
            reader: Arc::clone(&compiler.reader),
            dictionaries: Arc::clone(&compiler.dictionaries),
            recognizer: Arc::clone(&compiler.recognizer),
            limiter: limit.map(Semaphore::new),
            pipelines: Mutex::new(Vec::new()),
            statuses: StatusTable::new(),
            spec: Mutex::new(Specification::new()),
            problems: Mutex::new(ProblemMapper::new()),
            stopped: AtomicBool::new(false),
        }
    }

    fn stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    fn report(&self, problems: ProblemMapper) {
        let failed = problems.has_errors();
        self.problems.lock().merge(problems);
        if failed && self.stop_on_first_error {
            self.stopped.store(true, Ordering::SeqCst);
        }
    }

    fn record_join(&self, result: Result<(), JoinError>) {
        if let Err(error) = result {
            tracing::warn!(%error, "file task failed");
            let mut problems = ProblemMapper::new();
            problems.add_generic_error(Problem::new(ProblemKind::Internal, error.to_string()));
            self.report(problems);
        }
    }

    fn pipeline(&self) -> Result<SingleFileCompiler, DictionaryError> {
        if let Some(pipeline) = self.pipelines.lock().pop() {
            return Ok(pipeline);
        }
        let lexer = Lexer::new(
            &self.language,
            Arc::clone(&self.dictionaries),
            self.stop_on_first_error,
        )?;
        Ok(SingleFileCompiler::new(
            lexer,
            Parser::new(self.stop_on_first_error),
            Arc::clone(&self.recognizer),
        ))
    }

    /// Reads and compiles one file. `None` when it could not be read.
    async fn compile_document(&self, path: &Path) -> Option<Document> {
        let _permit = match &self.limiter {
            Some(limiter) => limiter.acquire().await.ok(),
            None => None,
        };
        let mut problems = ProblemMapper::new();
        let content = match self.reader.read(path).await {
            Ok(content) => content,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "could not read file");
                problems.add_generic_error(Problem::new(
                    ProblemKind::Io,
                    format!("Could not read {}: {error}", path.display()),
                ));
                self.report(problems);
                return None;
            }
        };
        let content = content.strip_prefix(BOM).unwrap_or(&content);

        let doc = match self.pipeline() {
            Ok(mut pipeline) => {
                let doc = pipeline.process(&mut problems, path, content, &self.line_break);
                self.pipelines.lock().push(pipeline);
                Some(doc)
            }
            Err(error) => {
                problems.add_error(path, error);
                None
            }
        };
        self.report(problems);
        doc
    }
}

fn spawn_file(tasks: &mut JoinSet<()>, run: &Arc<Run>, path: PathBuf) {
    let run = Arc::clone(run);
    tasks.spawn(async move {
        let task = compile_file(Arc::clone(&run), path.clone());
        if AssertUnwindSafe(task).catch_unwind().await.is_err() {
            tracing::warn!(path = %path.display(), "file task panicked");
            run.statuses.advance(&path, FileStatus::Failed);
            let mut problems = ProblemMapper::new();
            problems.add_error(
                &path,
                Problem::new(ProblemKind::Internal, "Compilation panicked"),
            );
            run.report(problems);
        }
    });
}

fn compile_file(run: Arc<Run>, path: PathBuf) -> BoxFuture<'static, ()> {
    async move {
        if !run.statuses.claim(&path) {
            tracing::trace!(path = %path.display(), "already claimed");
            return;
        }
        tracing::debug!(path = %path.display(), "compiling");
        let Some(doc) = run.compile_document(&path).await else {
            run.statuses.advance(&path, FileStatus::Failed);
            return;
        };
        let imports: Vec<PathBuf> = doc
            .import_values()
            .map(|value| resolve_import(&path, value))
            .collect();
        run.statuses.advance(&path, FileStatus::Compiled);
        run.spec.lock().insert(doc);

        if !imports.is_empty() && !run.stopped() {
            let mut tasks = JoinSet::new();
            for import in imports {
                spawn_file(&mut tasks, &run, import);
            }
            while let Some(result) = tasks.join_next().await {
                run.record_join(result);
            }
        }
        run.statuses.advance(&path, FileStatus::Done);
        tracing::debug!(path = %path.display(), "done");
    }
    .boxed()
}
