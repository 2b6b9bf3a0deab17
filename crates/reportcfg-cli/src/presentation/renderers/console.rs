use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, ViewStyle};
use crate::types::OutputFormat;

pub struct ConsoleRenderer {
    format: OutputFormat,
    style: ViewStyle,
}

impl ConsoleRenderer {
    /// Colour is enabled only for text output to a terminal.
    pub fn new(format: OutputFormat) -> Self {
        let color = format == OutputFormat::Plain
            && std::io::stdout().is_terminal()
            && std::env::var_os("NO_COLOR").is_none();
        Self {
            format,
            style: ViewStyle { color },
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        if self.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(result)?);
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            if self.style.color {
                println!("{} {}", badge.icon(), badge.label.bold());
            } else {
                println!("{} {}", badge.icon(), badge.label);
            }
            println!();
        }

        print!("{}", result.content.create_view(self.style));

        if !result.suggestions.is_empty() {
            println!();
            println!("Tips:");
            for tip in &result.suggestions {
                print!("  • {}", tip.description);
                if let Some(cmd) = &tip.command {
                    if self.style.color {
                        print!(": {}", cmd.cyan());
                    } else {
                        print!(": {}", cmd);
                    }
                }
                println!();
            }
        }

        Ok(())
    }
}
