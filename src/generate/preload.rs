//! Symbol naming and the single-line preload statement.

use std::collections::HashSet;

/// `const <symbol> = preload('<path>')` followed by a newline
pub fn preload_statement(symbol: &str, path: &str) -> String {
    format!("const {} = preload('{}')\n", symbol, path)
}

/// Base name of a qualifying file: the name with its matched extension removed.
pub fn file_symbol<'a>(file_name: &'a str, extension: &str) -> &'a str {
    file_name.strip_suffix(extension).unwrap_or(file_name)
}

/// Symbol for a subdirectory reference.
///
/// The suffix is appended once when a file in the same directory already
/// claims the name. It does not cascade.
pub fn directory_symbol(name: &str, taken: &HashSet<&str>, suffix: &str) -> String {
    if taken.contains(name) {
        format!("{}{}", name, suffix)
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preload_statement() {
        assert_eq!(
            preload_statement("player", "player.gd"),
            "const player = preload('player.gd')\n"
        );
    }

    #[test]
    fn test_file_symbol() {
        assert_eq!(file_symbol("player.gd", ".gd"), "player");
        assert_eq!(file_symbol("native.gdns", ".gdns"), "native");
        assert_eq!(file_symbol("a.b.gd", ".gd"), "a.b");
        assert_eq!(file_symbol(".gd", ".gd"), "");
    }

    #[test]
    fn test_directory_symbol_collision() {
        let taken: HashSet<&str> = ["util", "player"].into_iter().collect();
        assert_eq!(directory_symbol("util", &taken, "D"), "utilD");
        assert_eq!(directory_symbol("enemies", &taken, "D"), "enemies");
    }

    #[test]
    fn test_directory_symbol_does_not_cascade() {
        let taken: HashSet<&str> = ["util", "utilD"].into_iter().collect();
        assert_eq!(directory_symbol("util", &taken, "D"), "utilD");
    }
}
