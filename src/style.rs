//! ANSI style catalog
//!
//! Fixed escape sequences for the 8 base colors, each in five variants
//! (normal, bold, underlined, bright, bold-bright), plus `RESET`.
//!
//! The constants are raw bytes meant to be embedded in printed text:
//!
//! ```
//! use termio::style;
//!
//! let line = format!("{}error{}", style::RED_BOLD, style::RESET);
//! assert!(line.starts_with("\x1b[1;31m"));
//! ```
//!
//! Nothing here checks terminal capabilities. A terminal that does not
//! interpret ANSI codes will show them verbatim.

pub const RESET: &str = "\x1b[0m";

pub const BLACK: &str = "\x1b[0;30m";
pub const RED: &str = "\x1b[0;31m";
pub const GREEN: &str = "\x1b[0;32m";
pub const YELLOW: &str = "\x1b[0;33m";
pub const BLUE: &str = "\x1b[0;34m";
pub const PURPLE: &str = "\x1b[0;35m";
pub const CYAN: &str = "\x1b[0;36m";
pub const WHITE: &str = "\x1b[0;37m";

pub const BLACK_BOLD: &str = "\x1b[1;30m";
pub const RED_BOLD: &str = "\x1b[1;31m";
pub const GREEN_BOLD: &str = "\x1b[1;32m";
pub const YELLOW_BOLD: &str = "\x1b[1;33m";
pub const BLUE_BOLD: &str = "\x1b[1;34m";
pub const PURPLE_BOLD: &str = "\x1b[1;35m";
pub const CYAN_BOLD: &str = "\x1b[1;36m";
pub const WHITE_BOLD: &str = "\x1b[1;37m";

pub const BLACK_UNDERLINED: &str = "\x1b[4;30m";
pub const RED_UNDERLINED: &str = "\x1b[4;31m";
pub const GREEN_UNDERLINED: &str = "\x1b[4;32m";
pub const YELLOW_UNDERLINED: &str = "\x1b[4;33m";
pub const BLUE_UNDERLINED: &str = "\x1b[4;34m";
pub const PURPLE_UNDERLINED: &str = "\x1b[4;35m";
pub const CYAN_UNDERLINED: &str = "\x1b[4;36m";
pub const WHITE_UNDERLINED: &str = "\x1b[4;37m";

pub const BLACK_BRIGHT: &str = "\x1b[0;90m";
pub const RED_BRIGHT: &str = "\x1b[0;91m";
pub const GREEN_BRIGHT: &str = "\x1b[0;92m";
pub const YELLOW_BRIGHT: &str = "\x1b[0;93m";
pub const BLUE_BRIGHT: &str = "\x1b[0;94m";
pub const PURPLE_BRIGHT: &str = "\x1b[0;95m";
pub const CYAN_BRIGHT: &str = "\x1b[0;96m";
pub const WHITE_BRIGHT: &str = "\x1b[0;97m";

pub const BLACK_BOLD_BRIGHT: &str = "\x1b[1;90m";
pub const RED_BOLD_BRIGHT: &str = "\x1b[1;91m";
pub const GREEN_BOLD_BRIGHT: &str = "\x1b[1;92m";
pub const YELLOW_BOLD_BRIGHT: &str = "\x1b[1;93m";
pub const BLUE_BOLD_BRIGHT: &str = "\x1b[1;94m";
pub const PURPLE_BOLD_BRIGHT: &str = "\x1b[1;95m";
pub const CYAN_BOLD_BRIGHT: &str = "\x1b[1;96m";
pub const WHITE_BOLD_BRIGHT: &str = "\x1b[1;97m";

/// Every style paired with its symbolic name, in declaration order
pub const CATALOG: &[(&str, &str)] = &[
    ("reset", RESET),
    ("black", BLACK),
    ("red", RED),
    ("green", GREEN),
    ("yellow", YELLOW),
    ("blue", BLUE),
    ("purple", PURPLE),
    ("cyan", CYAN),
    ("white", WHITE),
    ("black_bold", BLACK_BOLD),
    ("red_bold", RED_BOLD),
    ("green_bold", GREEN_BOLD),
    ("yellow_bold", YELLOW_BOLD),
    ("blue_bold", BLUE_BOLD),
    ("purple_bold", PURPLE_BOLD),
    ("cyan_bold", CYAN_BOLD),
    ("white_bold", WHITE_BOLD),
    ("black_underlined", BLACK_UNDERLINED),
    ("red_underlined", RED_UNDERLINED),
    ("green_underlined", GREEN_UNDERLINED),
    ("yellow_underlined", YELLOW_UNDERLINED),
    ("blue_underlined", BLUE_UNDERLINED),
    ("purple_underlined", PURPLE_UNDERLINED),
    ("cyan_underlined", CYAN_UNDERLINED),
    ("white_underlined", WHITE_UNDERLINED),
    ("black_bright", BLACK_BRIGHT),
    ("red_bright", RED_BRIGHT),
    ("green_bright", GREEN_BRIGHT),
    ("yellow_bright", YELLOW_BRIGHT),
    ("blue_bright", BLUE_BRIGHT),
    ("purple_bright", PURPLE_BRIGHT),
    ("cyan_bright", CYAN_BRIGHT),
    ("white_bright", WHITE_BRIGHT),
    ("black_bold_bright", BLACK_BOLD_BRIGHT),
    ("red_bold_bright", RED_BOLD_BRIGHT),
    ("green_bold_bright", GREEN_BOLD_BRIGHT),
    ("yellow_bold_bright", YELLOW_BOLD_BRIGHT),
    ("blue_bold_bright", BLUE_BOLD_BRIGHT),
    ("purple_bold_bright", PURPLE_BOLD_BRIGHT),
    ("cyan_bold_bright", CYAN_BOLD_BRIGHT),
    ("white_bold_bright", WHITE_BOLD_BRIGHT),
];

/// Look up a style by its symbolic name
///
/// Matching ignores case and treats `-`, `_` and spaces alike, so
/// `"red-bold"`, `"RED_BOLD"` and `"red bold"` all resolve to [`RED_BOLD`].
pub fn lookup(name: &str) -> Option<&'static str> {
    let normalized: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect();

    CATALOG
        .iter()
        .find(|(key, _)| *key == normalized)
        .map(|(_, value)| *value)
}

/// Wrap `text` in `style` and a trailing [`RESET`]
pub fn paint(text: &str, style: &str) -> String {
    format!("{style}{text}{RESET}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_reset_and_forty_colors() {
        assert_eq!(CATALOG.len(), 41);
        assert_eq!(CATALOG[0], ("reset", "\x1b[0m"));
    }

    #[test]
    fn test_catalog_names_are_unique() {
        let mut names: Vec<_> = CATALOG.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CATALOG.len());
    }

    #[test]
    fn test_variant_codes() {
        assert_eq!(RED, "\x1b[0;31m");
        assert_eq!(RED_BOLD, "\x1b[1;31m");
        assert_eq!(RED_UNDERLINED, "\x1b[4;31m");
        assert_eq!(RED_BRIGHT, "\x1b[0;91m");
        assert_eq!(RED_BOLD_BRIGHT, "\x1b[1;91m");
        assert_eq!(WHITE_BOLD_BRIGHT, "\x1b[1;97m");
    }

    #[test]
    fn test_lookup_normalizes_separators_and_case() {
        assert_eq!(lookup("red_bold"), Some(RED_BOLD));
        assert_eq!(lookup("Red-Bold"), Some(RED_BOLD));
        assert_eq!(lookup("  cyan bold bright "), Some(CYAN_BOLD_BRIGHT));
        assert_eq!(lookup("RESET"), Some(RESET));
    }

    #[test]
    fn test_lookup_unknown_name() {
        assert_eq!(lookup("orange"), None);
        assert_eq!(lookup("bold_red"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn test_paint_wraps_text() {
        assert_eq!(paint("ok", GREEN), "\x1b[0;32mok\x1b[0m");
    }
}
