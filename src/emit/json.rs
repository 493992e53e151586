use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::{RunReport, Warning};

#[derive(Serialize)]
pub struct JsonReport<'a> {
    pub version: &'static str,
    pub generated_at: DateTime<Utc>,
    pub root: String,
    pub directories_visited: usize,
    pub written: Vec<String>,
    pub cycles_skipped: Vec<String>,
    pub warnings: &'a [Warning],
}

impl<'a> JsonReport<'a> {
    pub fn from_report(report: &'a RunReport) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            generated_at: Utc::now(),
            root: report.root.display().to_string(),
            directories_visited: report.directories_visited,
            written: report
                .written
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            cycles_skipped: report
                .cycles_skipped
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            warnings: &report.warnings,
        }
    }
}

pub fn render_json(report: &RunReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport::from_report(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WarningAction;
    use std::path::{Path, PathBuf};

    #[test]
    fn test_render_json() {
        let mut report = RunReport::new(Path::new("/game"));
        report.directories_visited = 2;
        report.written.push(PathBuf::from("/game/__init__.gd"));
        report.cycles_skipped.push(PathBuf::from("/game/lib/back"));
        report.warn(
            Path::new("/game/ui/__init__.gd"),
            WarningAction::Remove,
            &std::io::Error::new(std::io::ErrorKind::Other, "busy"),
        );

        let json = render_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["root"], "/game");
        assert_eq!(value["directories_visited"], 2);
        assert_eq!(value["written"][0], "/game/__init__.gd");
        assert_eq!(value["cycles_skipped"][0], "/game/lib/back");
        assert_eq!(value["warnings"][0]["action"], "remove");
        assert_eq!(value["warnings"][0]["message"], "busy");
        assert!(value["generated_at"].is_string());
    }
}
