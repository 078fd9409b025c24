//! Grammar composition and the per-language registry.
//!
//! Compilation unions the language's fragment list and stamps it with a
//! content hash over every fragment's name, pattern and weight plus the
//! grammar version. The compiled grammar is immutable, process-resident and
//! shared; a small JSON manifest of the hash can be persisted next to other
//! artifacts so stale caches are detected across runs.

use super::fragment::Fragment;
use super::{en, zh};
use crate::api::Language;
use crate::error::BuildError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::{debug, info};

/// Bumped whenever rule semantics change; part of the cache key.
pub(crate) const GRAMMAR_VERSION: &str = "3";

pub(crate) struct CompiledGrammar {
    pub language: Language,
    pub fragments: Vec<Fragment>,
    pub content_hash: String,
}

impl CompiledGrammar {
    fn compile(language: Language) -> Self {
        let fragments = match language {
            Language::Chinese => zh::fragments(),
            Language::English => en::fragments(),
        };

        let mut hasher = Sha256::new();
        hasher.update(GRAMMAR_VERSION.as_bytes());
        for frag in &fragments {
            hasher.update(frag.name.as_bytes());
            hasher.update(frag.pattern.as_str().as_bytes());
            hasher.update(frag.weight.to_le_bytes());
        }
        let content_hash = format!("{:x}", hasher.finalize());

        info!(
            language = language.as_str(),
            fragments = fragments.len(),
            hash = &content_hash[..12],
            "grammar compiled"
        );
        CompiledGrammar { language, fragments, content_hash }
    }
}

fn registry() -> &'static Mutex<HashMap<Language, Arc<CompiledGrammar>>> {
    static REGISTRY: OnceLock<Mutex<HashMap<Language, Arc<CompiledGrammar>>>> = OnceLock::new();
    REGISTRY.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Fetch (or build) the compiled grammar for `language`.
///
/// `overwrite` forces recompilation, discarding the registered instance.
pub(crate) fn grammar_for(language: Language, overwrite: bool) -> Arc<CompiledGrammar> {
    let mut reg = registry().lock().expect("grammar registry poisoned");
    if overwrite {
        reg.remove(&language);
    }
    reg.entry(language).or_insert_with(|| Arc::new(CompiledGrammar::compile(language))).clone()
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Manifest {
    grammar_version: String,
    language: String,
    content_hash: String,
}

fn manifest_path(cache_dir: &Path, language: Language) -> std::path::PathBuf {
    cache_dir.join(format!("{}_grammar.json", language.as_str()))
}

/// Check the persisted manifest against the compiled grammar; rewrite it
/// (atomically: write-to-tmp + rename) when missing or stale. Returns `true`
/// when the existing manifest already matched.
pub(crate) fn sync_manifest(
    grammar: &CompiledGrammar,
    cache_dir: &Path,
) -> Result<bool, BuildError> {
    std::fs::create_dir_all(cache_dir)?;
    let path = manifest_path(cache_dir, grammar.language);
    let want = Manifest {
        grammar_version: GRAMMAR_VERSION.to_string(),
        language: grammar.language.as_str().to_string(),
        content_hash: grammar.content_hash.clone(),
    };

    if let Ok(raw) = std::fs::read_to_string(&path) {
        match serde_json::from_str::<Manifest>(&raw) {
            Ok(found) if found == want => {
                debug!(path = %path.display(), "grammar manifest up to date");
                return Ok(true);
            }
            Ok(_) => info!(path = %path.display(), "grammar manifest stale, rewriting"),
            Err(err) => info!(path = %path.display(), %err, "grammar manifest unreadable, rewriting"),
        }
    }

    let mut tmp = tempfile::NamedTempFile::new_in(cache_dir)?;
    tmp.write_all(serde_json::to_string_pretty(&want)?.as_bytes())?;
    tmp.persist(&path).map_err(|e| BuildError::CacheIo(e.error))?;
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grammar_is_shared_and_hashed() {
        let a = grammar_for(Language::Chinese, false);
        let b = grammar_for(Language::Chinese, false);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.content_hash.len(), 64);
        assert!(!a.fragments.is_empty());
    }

    #[test]
    fn overwrite_recompiles() {
        let a = grammar_for(Language::English, false);
        let b = grammar_for(Language::English, true);
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(a.content_hash, b.content_hash);
    }

    #[test]
    fn manifest_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let grammar = grammar_for(Language::Chinese, false);
        assert!(!sync_manifest(&grammar, dir.path()).unwrap());
        assert!(sync_manifest(&grammar, dir.path()).unwrap());
    }
}
