//! Shared test fixtures: recorded pose takes under the repo-root `fixtures/`
//! directory, fronted by a small manifest so tests address them by name.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    recordings: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = fixtures_root().join(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

pub mod recordings {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.recordings.keys().cloned().collect()
    }

    /// Raw JSON text of the named recording.
    pub fn json(name: &str) -> Result<String> {
        let rel = MANIFEST
            .recordings
            .get(name)
            .ok_or_else(|| anyhow!("unknown recording fixture '{name}'"))?;
        read_to_string(rel)
    }

    /// Parsed JSON document of the named recording.
    pub fn document(name: &str) -> Result<serde_json::Value> {
        let text = json(name)?;
        serde_json::from_str(&text).with_context(|| format!("failed to parse recording {name}"))
    }
}
