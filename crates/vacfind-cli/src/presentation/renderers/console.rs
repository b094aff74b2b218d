use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::{Display, Write};

use super::traits::Renderer;
use crate::presentation::view_models::CommandResultViewModel;
use crate::types::OutputFormat;

pub struct ConsoleRenderer {
    json_mode: bool,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            json_mode: format == OutputFormat::Json,
            color: std::io::stdout().is_terminal(),
        }
    }

    /// Renderer that never emits ANSI styling
    pub fn plain(format: OutputFormat) -> Self {
        Self {
            json_mode: format == OutputFormat::Json,
            color: false,
        }
    }

    pub fn to_text<T>(&self, result: &CommandResultViewModel<T>) -> Result<String>
    where
        T: Serialize + Display,
    {
        if self.json_mode {
            return Ok(serde_json::to_string_pretty(result)? + "\n");
        }

        let mut out = String::new();

        if let Some(badge) = &result.badge {
            if self.color {
                writeln!(out, "{} {}", badge.icon(), badge.label.bold())?;
            } else {
                writeln!(out, "{} {}", badge.icon(), badge.label)?;
            }
            writeln!(out)?;
        }

        write!(out, "{}", result.content)?;

        if !result.suggestions.is_empty() {
            let title = "💡 Tips:";
            if self.color {
                writeln!(out, "\n{}", title.yellow().bold())?;
            } else {
                writeln!(out, "\n{}", title)?;
            }
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if self.color {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }

        Ok(out)
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display,
    {
        print!("{}", self.to_text(&result)?);
        Ok(())
    }
}
