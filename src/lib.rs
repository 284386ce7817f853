//! # concordia
//!
//! Front end of a compiler for Concordia, a controlled natural language for describing
//! software requirements as features, scenarios, variants and test cases, with keywords in
//! several languages.
//!
//! The pipeline, per file:
//!
//!     source text ──▶ [`lexing::Lexer`] ──▶ nodes ──▶ [`parsing::Parser`] ──▶ [`ast::Document`]
//!
//! and, for a set of files, [`compiler::Compiler`] follows imports and assembles a
//! [`compiler::Specification`] plus the import graph between its documents.
//!
//! Diagnostics are collected, not raised. Everything that goes wrong while compiling ends up
//! in a [`problems::ProblemMapper`] keyed by file; only construction with an unknown default
//! language fails outright.
//!
//! ## Testing
//!
//! The [`testing`] module has helpers to lex and parse inline sources with the built-in
//! English dictionary.

pub mod ast;
pub mod compiler;
pub mod dictionary;
pub mod error;
pub mod lexing;
pub mod parsing;
pub mod pipeline;
pub mod problems;
pub mod testing;
