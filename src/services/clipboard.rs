use crate::domain::models::StatusLine;
use std::io::Write;
use std::process::{Command, Stdio};

pub trait ClipboardSink {
    fn write_text(&self, text: &str) -> anyhow::Result<()>;
}

/// Pipes the text into an external clipboard program's stdin.
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    /// `command` is program plus arguments; empty picks the platform default.
    pub fn from_command(command: &[String]) -> Self {
        match command.split_first() {
            Some((program, args)) => Self {
                program: program.clone(),
                args: args.to_vec(),
            },
            None => Self::platform_default(),
        }
    }

    pub fn platform_default() -> Self {
        let (program, args): (&str, &[&str]) = if cfg!(target_os = "macos") {
            ("pbcopy", &[])
        } else if cfg!(windows) {
            ("clip", &[])
        } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            ("wl-copy", &[])
        } else {
            ("xclip", &["-selection", "clipboard"])
        };
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl ClipboardSink for CommandClipboard {
    fn write_text(&self, text: &str) -> anyhow::Result<()> {
        log::debug!("copying {} bytes via {}", text.len(), self.program);
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| anyhow::anyhow!("{}: {}", self.program, e))?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }
        let status = child.wait()?;
        if !status.success() {
            anyhow::bail!("{} exited with {}", self.program, status);
        }
        Ok(())
    }
}

/// Attempts one copy and reports the outcome as status text. No retry.
pub fn copy_to_clipboard(sink: &dyn ClipboardSink, text: &str) -> StatusLine {
    if text.trim().is_empty() {
        return StatusLine {
            message: "Nothing to copy.".to_string(),
            is_error: true,
        };
    }
    match sink.write_text(text) {
        Ok(()) => StatusLine {
            message: "Copied to clipboard.".to_string(),
            is_error: false,
        },
        Err(e) => {
            log::warn!("clipboard write failed: {}", e);
            StatusLine {
                message: format!(
                    "Copy failed. Try selecting the text and copying manually. ({})",
                    e
                ),
                is_error: true,
            }
        }
    }
}
