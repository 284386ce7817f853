//! Keyword dictionaries
//!
//!     Keyword-driven lexers do not hardcode any word. They ask a [`Dictionary`] for the words
//!     of their [`Keyword`] and build their patterns from that, so switching language is only a
//!     matter of handing every lexer a different dictionary.
//!
//! Format
//!
//!     Dictionaries are JSON documents keyed by camelCase keyword names:
//!
//!         { "keywords": { "feature": ["feature", "story"], "stepGiven": ["given"] } }
//!
//!     Unknown keys are ignored and missing keys mean "no words", which simply makes the
//!     corresponding lexer never match.
//!
//! Providers
//!
//!     [`BuiltinDictionaries`] serves the dictionaries embedded in the crate (`en`, `pt`, `es`).
//!     [`DirectoryDictionaryProvider`] layers `<dir>/<lang>.json` files on top of them. Both
//!     cache parsed dictionaries, so resolving a language twice is cheap.

use crate::error::DictionaryError;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const BUILTIN_SOURCES: &[(&str, &str)] = &[
    ("en", include_str!("dictionary/data/en.json")),
    ("pt", include_str!("dictionary/data/pt.json")),
    ("es", include_str!("dictionary/data/es.json")),
];

/// The English word for the language declaration, accepted in every language.
pub const UNIVERSAL_LANGUAGE_KEYWORD: &str = "language";

/// Localizable words, one entry per keyword-driven construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Keyword {
    Language,
    Import,
    Feature,
    Background,
    VariantBackground,
    Scenario,
    Variant,
    TestCase,
    ConstantBlock,
    RegexBlock,
    Table,
    Database,
    UiElement,
    BeforeAll,
    AfterAll,
    BeforeFeature,
    AfterFeature,
    BeforeEachScenario,
    AfterEachScenario,
    StepGiven,
    StepWhen,
    StepThen,
    StepAnd,
    StepOtherwise,
    Is,
    TagFeature,
    TagScenario,
    TagVariant,
    TagGenerated,
    TagFail,
    TagIgnore,
    TagGlobal,
    TagImportance,
    TagGenerateOnlyValidValues,
}

impl Keyword {
    pub const ALL: [Keyword; 34] = [
        Keyword::Language,
        Keyword::Import,
        Keyword::Feature,
        Keyword::Background,
        Keyword::VariantBackground,
        Keyword::Scenario,
        Keyword::Variant,
        Keyword::TestCase,
        Keyword::ConstantBlock,
        Keyword::RegexBlock,
        Keyword::Table,
        Keyword::Database,
        Keyword::UiElement,
        Keyword::BeforeAll,
        Keyword::AfterAll,
        Keyword::BeforeFeature,
        Keyword::AfterFeature,
        Keyword::BeforeEachScenario,
        Keyword::AfterEachScenario,
        Keyword::StepGiven,
        Keyword::StepWhen,
        Keyword::StepThen,
        Keyword::StepAnd,
        Keyword::StepOtherwise,
        Keyword::Is,
        Keyword::TagFeature,
        Keyword::TagScenario,
        Keyword::TagVariant,
        Keyword::TagGenerated,
        Keyword::TagFail,
        Keyword::TagIgnore,
        Keyword::TagGlobal,
        Keyword::TagImportance,
        Keyword::TagGenerateOnlyValidValues,
    ];

    /// Key used in dictionary files.
    pub fn key(self) -> &'static str {
        match self {
            Keyword::Language => "language",
            Keyword::Import => "import",
            Keyword::Feature => "feature",
            Keyword::Background => "background",
            Keyword::VariantBackground => "variantBackground",
            Keyword::Scenario => "scenario",
            Keyword::Variant => "variant",
            Keyword::TestCase => "testCase",
            Keyword::ConstantBlock => "constantBlock",
            Keyword::RegexBlock => "regexBlock",
            Keyword::Table => "table",
            Keyword::Database => "database",
            Keyword::UiElement => "uiElement",
            Keyword::BeforeAll => "beforeAll",
            Keyword::AfterAll => "afterAll",
            Keyword::BeforeFeature => "beforeFeature",
            Keyword::AfterFeature => "afterFeature",
            Keyword::BeforeEachScenario => "beforeEachScenario",
            Keyword::AfterEachScenario => "afterEachScenario",
            Keyword::StepGiven => "stepGiven",
            Keyword::StepWhen => "stepWhen",
            Keyword::StepThen => "stepThen",
            Keyword::StepAnd => "stepAnd",
            Keyword::StepOtherwise => "stepOtherwise",
            Keyword::Is => "is",
            Keyword::TagFeature => "tagFeature",
            Keyword::TagScenario => "tagScenario",
            Keyword::TagVariant => "tagVariant",
            Keyword::TagGenerated => "tagGenerated",
            Keyword::TagFail => "tagFail",
            Keyword::TagIgnore => "tagIgnore",
            Keyword::TagGlobal => "tagGlobal",
            Keyword::TagImportance => "tagImportance",
            Keyword::TagGenerateOnlyValidValues => "tagGenerateOnlyValidValues",
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawDictionary {
    #[serde(default)]
    keywords: BTreeMap<String, Vec<String>>,
}

/// Keyword words for one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    language: String,
    keywords: HashMap<Keyword, Vec<String>>,
}

impl Dictionary {
    pub fn new(language: impl Into<String>, keywords: HashMap<Keyword, Vec<String>>) -> Self {
        Self {
            language: language.into(),
            keywords,
        }
    }

    pub fn from_json(language: &str, json: &str) -> Result<Self, DictionaryError> {
        let raw: RawDictionary =
            serde_json::from_str(json).map_err(|source| DictionaryError::Invalid {
                language: language.to_string(),
                source,
            })?;
        let keywords = Keyword::ALL
            .into_iter()
            .filter_map(|keyword| {
                raw.keywords
                    .get(keyword.key())
                    .map(|words| (keyword, words.clone()))
            })
            .collect();
        Ok(Self::new(language, keywords))
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn words(&self, keyword: Keyword) -> &[String] {
        self.keywords.get(&keyword).map_or(&[], Vec::as_slice)
    }
}

/// Source of dictionaries, keyed by language code
pub trait DictionaryProvider: Send + Sync {
    fn dictionary(&self, language: &str) -> Result<Arc<Dictionary>, DictionaryError>;
}

/// Lookup keys for a language code: `pt_BR` tries `pt-br`, then `pt`.
fn language_candidates(language: &str) -> Vec<String> {
    let normalized = language.trim().to_lowercase().replace('_', "-");
    let mut candidates = vec![normalized.clone()];
    if let Some((base, _)) = normalized.split_once('-') {
        candidates.push(base.to_string());
    }
    candidates
}

/// Dictionaries embedded in the crate
#[derive(Debug, Default)]
pub struct BuiltinDictionaries {
    cache: Mutex<HashMap<String, Arc<Dictionary>>>,
}

static SHARED_BUILTIN: Lazy<Arc<BuiltinDictionaries>> =
    Lazy::new(|| Arc::new(BuiltinDictionaries::new()));

impl BuiltinDictionaries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide instance, so the embedded JSON is parsed once.
    pub fn shared() -> Arc<BuiltinDictionaries> {
        Arc::clone(&SHARED_BUILTIN)
    }

    pub fn languages() -> impl Iterator<Item = &'static str> {
        BUILTIN_SOURCES.iter().map(|(language, _)| *language)
    }
}

impl DictionaryProvider for BuiltinDictionaries {
    fn dictionary(&self, language: &str) -> Result<Arc<Dictionary>, DictionaryError> {
        for candidate in language_candidates(language) {
            if let Some(dictionary) = self.cache.lock().get(&candidate) {
                return Ok(Arc::clone(dictionary));
            }
            let Some((_, source)) = BUILTIN_SOURCES
                .iter()
                .find(|(code, _)| *code == candidate)
            else {
                continue;
            };
            let dictionary = Arc::new(Dictionary::from_json(&candidate, source)?);
            self.cache
                .lock()
                .insert(candidate, Arc::clone(&dictionary));
            return Ok(dictionary);
        }
        Err(DictionaryError::NotFound(language.to_string()))
    }
}

/// Reads `<dir>/<lang>.json`, falling back to the built-in dictionaries
#[derive(Debug)]
pub struct DirectoryDictionaryProvider {
    dir: PathBuf,
    fallback: Arc<BuiltinDictionaries>,
    cache: Mutex<HashMap<String, Arc<Dictionary>>>,
}

impl DirectoryDictionaryProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            fallback: BuiltinDictionaries::shared(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DictionaryProvider for DirectoryDictionaryProvider {
    fn dictionary(&self, language: &str) -> Result<Arc<Dictionary>, DictionaryError> {
        for candidate in language_candidates(language) {
            if let Some(dictionary) = self.cache.lock().get(&candidate) {
                return Ok(Arc::clone(dictionary));
            }
            let path = self.dir.join(format!("{candidate}.json"));
            if !path.is_file() {
                continue;
            }
            let json = std::fs::read_to_string(&path)
                .map_err(|source| DictionaryError::Io { path, source })?;
            let dictionary = Arc::new(Dictionary::from_json(&candidate, &json)?);
            self.cache
                .lock()
                .insert(candidate, Arc::clone(&dictionary));
            return Ok(dictionary);
        }
        self.fallback.dictionary(language)
    }
}
