// src/cli/render.rs

//! Text output of the menu. Everything takes an explicit writer and palette.

use crate::core::color::{Palette, Role};
use std::io::{self, Write};

const BANNER: &str = r"  ____
 |  _ \ __ _  ___ ___   ___  _ __
 | |_) / _` |/ __/ _ \ / _ \| '_ \
 |  _ < (_| | (_| (_) | (_) | | | |
 |_| \_\__,_|\___\___/ \___/|_| |_|
";

/// One numbered line of a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRow {
    /// Directory name with a trailing separator, or the script's label.
    pub text: String,
    /// Directories are painted in the muted color.
    pub is_directory: bool,
}

/// Prints the ASCII-art banner.
pub fn render_banner<W: Write + ?Sized>(out: &mut W, palette: Palette) -> io::Result<()> {
    writeln!(out, "{}", palette.paint(BANNER, Role::Accent))
}

/// Prints the numbered rows followed by the `[0]` entry.
pub fn render_menu<W: Write + ?Sized>(
    out: &mut W,
    rows: &[MenuRow],
    is_top_level: bool,
    palette: Palette,
) -> io::Result<()> {
    writeln!(out)?;
    for (i, row) in rows.iter().enumerate() {
        let role = if row.is_directory { Role::Muted } else { Role::Accent };
        writeln!(
            out,
            "  {}  {}",
            palette.paint(&format!("[{}]", i + 1), Role::Accent),
            palette.paint(&row.text, role)
        )?;
    }
    writeln!(out)?;

    let zero_label = if is_top_level {
        t!("menu.exit")
    } else {
        t!("menu.back")
    };
    writeln!(
        out,
        "  {}  {}",
        palette.paint("[0]", Role::Accent),
        palette.paint(zero_label, Role::Accent)
    )
}

/// `  * <message>`, used for every recoverable problem.
pub fn render_notice<W: Write + ?Sized>(out: &mut W, message: &str, palette: Palette) -> io::Result<()> {
    writeln!(out, "  {} {}", palette.paint("*", Role::Accent), message)
}

/// Prints the closing line of a session.
pub fn render_farewell<W: Write + ?Sized>(out: &mut W, palette: Palette) -> io::Result<()> {
    writeln!(out, "  {}", palette.paint(t!("menu.farewell"), Role::Muted))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(rows: &[MenuRow], is_top_level: bool) -> String {
        let mut out = Vec::new();
        render_menu(&mut out, rows, is_top_level, Palette::plain()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_menu_layout() {
        let rows = vec![
            MenuRow {
                text: "tools/".to_string(),
                is_directory: true,
            },
            MenuRow {
                text: "Run Backup".to_string(),
                is_directory: false,
            },
        ];
        assert_eq!(
            render_to_string(&rows, true),
            "\n  [1]  tools/\n  [2]  Run Backup\n\n  [0]  Exit\n"
        );
    }

    #[test]
    fn test_nested_menu_offers_back() {
        let rendered = render_to_string(&[], false);
        assert_eq!(rendered, "\n\n  [0]  Back\n");
    }

    #[test]
    fn test_notice_and_farewell() {
        let mut out = Vec::new();
        render_notice(&mut out, "Invalid choice", Palette::plain()).unwrap();
        render_farewell(&mut out, Palette::plain()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "  * Invalid choice\n  Goodbye.\n");
    }

    #[test]
    fn test_banner_spells_the_name() {
        let mut out = Vec::new();
        render_banner(&mut out, Palette::plain()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("  ____\n"));
        assert_eq!(text.lines().count(), 6);
    }
}
