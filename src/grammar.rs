//! Tagging grammar: declarative rule fragments and their compiled form.
//!
//! The grammar side of the pipeline is split into focused submodules:
//!
//! ```text
//! zh::fragments() / en::fragments()   (rule modules, C2)
//!         │
//!         v
//! CompiledGrammar::compile            (compile.rs: union + content hash)
//!         │
//!         v
//! tag_text                            (tagger.rs, C3: collect candidates)
//!         │
//!         v
//! postprocess::select_tags            (C4: parse, suppress, best cover)
//! ```
//!
//! A fragment maps a surface pattern to a bracketed tag string; fragments
//! compose by union and weights implement priority (lower weight wins on
//! ambiguity). The compiled grammar is built once per language, stamped with
//! a content hash, and shared read-only across threads.

#[path = "grammar/compile.rs"]
mod compile;
#[path = "grammar/en.rs"]
mod en;
#[path = "grammar/fragment.rs"]
mod fragment;
#[path = "grammar/numbers.rs"]
pub(crate) mod numbers;
#[path = "grammar/tagger.rs"]
mod tagger;
#[path = "grammar/zh.rs"]
mod zh;

pub(crate) use compile::{CompiledGrammar, grammar_for, sync_manifest};
pub(crate) use tagger::{RawMatch, tag_text};
