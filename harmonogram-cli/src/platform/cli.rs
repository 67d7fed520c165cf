//! Error display with source context

use harmonogram_api::HarmonogramError;
use harmonogram_vfs::VirtualFileSystem;
use std::path::Path;

/// Lines of context shown around the failing line
const CONTEXT_LINES: usize = 2;

/// Print an error, then the offending source lines when they can be read
pub fn print_error_with_source(e: &HarmonogramError, fs: &dyn VirtualFileSystem) {
    eprintln!("error: {}", e);

    let (Some(file), Some(line), Some(column)) = (e.file(), e.line(), e.column()) else {
        return;
    };
    if let Ok(source) = fs.read_to_string(Path::new(file)) {
        eprint!("{}", print_source_context(&source, line, column));
    }
}

/// Render the lines around `error_line` with a caret under `error_col`
pub fn print_source_context(source: &str, error_line: usize, error_col: usize) -> String {
    let lines: Vec<&str> = source.lines().collect();
    if error_line == 0 || error_line > lines.len() {
        return String::new();
    }

    let first = error_line.saturating_sub(CONTEXT_LINES).max(1);
    let last = (error_line + CONTEXT_LINES).min(lines.len());
    let width = last.to_string().len();

    let mut out = format!("{}--\n", "-".repeat(width + 1));
    for number in first..=last {
        out.push_str(&format!("{:>width$} | {}\n", number, lines[number - 1]));
        if number == error_line {
            let offset = error_col.saturating_sub(1);
            out.push_str(&format!("{:width$} | {}^\n", "", " ".repeat(offset)));
        }
    }
    out.push_str(&format!("{}--\n", "-".repeat(width + 1)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "name: G\n{\n  name: A\n  center: 0 0\n}\n";

    #[test]
    fn test_context_marks_column() {
        let out = print_source_context(SOURCE, 4, 13);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "----");
        assert_eq!(lines[1], "2 | {");
        assert_eq!(lines[3], "4 |   center: 0 0");
        assert_eq!(lines[4], "  |             ^");
        assert_eq!(lines[5], "5 | }");
    }

    #[test]
    fn test_context_out_of_range_is_empty() {
        assert!(print_source_context(SOURCE, 0, 1).is_empty());
        assert!(print_source_context(SOURCE, 42, 1).is_empty());
    }
}
