//! Terminal rendering module for rich markdown output
//!
//! Uses termimad for styled output, with a plain-text fallback for
//! `--no-color` and for piping into other tools.

use anyhow::Result;
use termimad::{
    crossterm::style::{Attribute, Color},
    MadSkin,
};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Green);
        // Schedule and workout titles stand out from their sections.
        skin.headers[0].compound_style.add_attr(Attribute::Bold);
        skin.bold.set_fg(Color::Cyan);
        skin.italic.set_fg(Color::Magenta);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            for line in markdown.lines() {
                match heading_level(line) {
                    Some(level) => println!("{}", self.styled_heading(line, level)),
                    None => {
                        self.skin.print_inline(line);
                        println!();
                    }
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    /// Heading line with its `#` markers kept, styled by the skin's header
    /// style for `level`.
    fn styled_heading(&self, line: &str, level: usize) -> String {
        let index = level.clamp(1, self.skin.headers.len()) - 1;
        self.skin.headers[index]
            .compound_style
            .apply_to(line)
            .to_string()
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Markdown heading depth of `line`, if it is a heading.
fn heading_level(line: &str) -> Option<usize> {
    let level = line.chars().take_while(|&c| c == '#').count();
    let rest = &line[level..];
    (level > 0 && (rest.is_empty() || rest.starts_with(' '))).then_some(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
        assert!(renderer.render("# Title\n\n- item\n").is_ok());
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }

    #[test]
    fn test_heading_level() {
        assert_eq!(heading_level("# Workout"), Some(1));
        assert_eq!(heading_level("### Main Set"), Some(3));
        assert_eq!(heading_level("#"), Some(1));
        assert_eq!(heading_level("#hashtag"), None);
        assert_eq!(heading_level("- **Blocks**: 4"), None);
    }

    #[test]
    fn test_styled_heading_keeps_markers() {
        let renderer = TerminalRenderer::default();

        let title = renderer.styled_heading("# Schedule for Ada", 1);
        assert!(title.contains("# Schedule for Ada"));
        assert!(title.len() > "# Schedule for Ada".len());

        let deep = renderer.styled_heading("######### Too deep", 9);
        assert!(deep.contains("Too deep"));
    }
}
