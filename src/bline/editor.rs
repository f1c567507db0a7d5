use crate::error::{BlineError, Result};
use log::debug;
use std::env;
use std::path::Path;
use std::process::Command;

/// Gets the editor command from environment.
/// Checks $EDITOR, then $VISUAL, then falls back to common editors.
pub fn get_editor() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.trim().is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in ["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok(fallback.to_string());
        }
    }

    Err(BlineError::Api(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Split an editor setting like `code --wait` into program and arguments.
fn editor_command(editor: &str) -> (String, Vec<String>) {
    let mut parts = editor.split_whitespace().map(str::to_string);
    let program = parts.next().unwrap_or_default();
    (program, parts.collect())
}

/// Opens a file in the user's editor and waits for it to close.
/// The editor inherits the terminal.
pub fn open_in_editor<P: AsRef<Path>>(file_path: P) -> Result<()> {
    let editor = get_editor()?;
    let (program, args) = editor_command(&editor);
    let path = file_path.as_ref();
    debug!("opening {} with {}", path.display(), editor);

    let status = Command::new(&program)
        .args(&args)
        .arg(path)
        .status()
        .map_err(|e| BlineError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(BlineError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }
    Ok(())
}
