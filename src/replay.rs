//! Gesture scripts: recorded event sequences fed to an edit tool.
//!
//! A script is a JSON array of [`UiEvent`]s:
//!
//! ```json
//! [
//!   {"event": "double_tap", "sx": 10, "sy": 10},
//!   {"event": "move", "sx": 40, "sy": 30},
//!   {"event": "double_tap", "sx": 50, "sy": 40},
//!   {"event": "pan_start", "sx": 80, "sy": 80, "shift": true}
//! ]
//! ```

use crate::input::{BoxEditTool, UiEvent};
use crate::source::{SourceChange, Value};
use anyhow::{Context, Result};
use log::{debug, info};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Final state of one renderer's source after a replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceSnapshot {
    pub columns: BTreeMap<String, Vec<Value>>,
    pub selected: Vec<usize>,
}

/// Parses a gesture script from JSON text.
pub fn parse_script(json: &str) -> Result<Vec<UiEvent>> {
    serde_json::from_str(json).context("Invalid gesture script")
}

/// Reads and parses a gesture script file.
pub fn load_script(path: &Path) -> Result<Vec<UiEvent>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script from {}", path.display()))?;
    let events =
        parse_script(&json).with_context(|| format!("Failed to parse script {}", path.display()))?;
    info!("Loaded {} event(s) from {}", events.len(), path.display());
    Ok(events)
}

/// Feeds every event to the tool in order, draining each source's change log.
///
/// Returns the number of commits observed across all renderers.
pub fn run(tool: &mut BoxEditTool, events: &[UiEvent]) -> usize {
    let mut commits = 0;
    for event in events {
        tool.handle_event(event);
        for renderer in tool.renderers_mut() {
            let changes = renderer.source.take_changes();
            if changes.is_empty() {
                continue;
            }
            debug!("Renderer '{}' changes: {:?}", renderer.name, changes);
            commits += changes
                .iter()
                .filter(|change| **change == SourceChange::Committed)
                .count();
        }
    }
    commits
}

/// Captures every renderer's columns and selection, keyed by renderer name.
pub fn snapshot(tool: &BoxEditTool) -> BTreeMap<String, SourceSnapshot> {
    tool.renderers()
        .iter()
        .map(|renderer| {
            (
                renderer.name.clone(),
                SourceSnapshot {
                    columns: renderer.source.columns().clone(),
                    selected: renderer.source.selected().indices().to_vec(),
                },
            )
        })
        .collect()
}
