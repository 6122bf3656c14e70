use crate::error::{CopasError, Result};
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

pub fn get_editor() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.trim().is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in &["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(CopasError::Api(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Runs `editor` on `file_path` and returns the file contents afterwards.
///
/// `editor` may carry arguments (`"code --wait"`).
pub fn open_in_editor<P: AsRef<Path>>(editor: &str, file_path: P) -> Result<String> {
    let path = file_path.as_ref();
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| CopasError::Api("Editor command is empty".to_string()))?;

    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| CopasError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(CopasError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    fs::read_to_string(path).map_err(CopasError::Io)
}

/// Opens `initial` in the user's editor and returns the saved buffer.
pub fn edit_text(initial: &str) -> Result<String> {
    let editor = get_editor()?;
    edit_with(&editor, initial)
}

fn edit_with(editor: &str, initial: &str) -> Result<String> {
    let temp_file = env::temp_dir().join(format!(
        "copas_edit_{}.txt",
        uuid::Uuid::new_v4().simple()
    ));
    fs::write(&temp_file, initial).map_err(CopasError::Io)?;

    let result = open_in_editor(editor, &temp_file);
    let _ = fs::remove_file(&temp_file);
    result
}
