// src/export.rs
//
// "Descargas": cada export se escribe de una vez en la carpeta de exports.

use crate::error::ExportError;
use crate::model::{Scenario, TOTAL_GOAL};
use crate::offline::offline_html;
use crate::results::{Summary, certificate_text, format_date, guide_text};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

pub const OFFLINE_FILE_NAME: &str = "Netiquette_Master_100_OFFLINE.html";

pub fn certificate_file_name(date: NaiveDate) -> String {
    format!("Netiquette_Master_Zertifikat_{}.txt", file_date(date))
}

pub fn guide_file_name(date: NaiveDate) -> String {
    format!("Netiquette_Lern_Guide_{}.txt", file_date(date))
}

fn file_date(date: NaiveDate) -> String {
    format_date(date).replace('.', "-")
}

fn write_artifact(dir: &Path, file_name: &str, content: &str) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    std::fs::write(&path, content)?;
    log::info!("exported {}", path.display());
    Ok(path)
}

pub fn export_certificate(
    dir: &Path,
    summary: &Summary,
    date: NaiveDate,
) -> Result<PathBuf, ExportError> {
    write_artifact(dir, &certificate_file_name(date), &certificate_text(summary, date))
}

pub fn export_guide(
    dir: &Path,
    scenarios: &[Scenario],
    date: NaiveDate,
) -> Result<PathBuf, ExportError> {
    write_artifact(dir, &guide_file_name(date), &guide_text(scenarios, date))
}

/// Solo con el set completo cargado
pub fn export_offline_bundle(dir: &Path, scenarios: &[Scenario]) -> Result<PathBuf, ExportError> {
    if scenarios.len() < TOTAL_GOAL {
        return Err(ExportError::Incomplete {
            loaded: scenarios.len(),
            required: TOTAL_GOAL,
        });
    }
    let html = offline_html(scenarios)?;
    write_artifact(dir, OFFLINE_FILE_NAME, &html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::testing::scenarios;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn file_names_use_dashed_dates() {
        assert_eq!(
            certificate_file_name(date()),
            "Netiquette_Master_Zertifikat_19-10-2026.txt"
        );
        assert_eq!(guide_file_name(date()), "Netiquette_Lern_Guide_19-10-2026.txt");
    }

    #[test]
    fn exports_land_in_the_target_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("downloads");

        let cert = export_certificate(&out, &Summary::new(75, 100), date()).unwrap();
        assert!(std::fs::read_to_string(&cert).unwrap().contains("DIGITAL PRO"));

        let set = scenarios(100);
        let guide = export_guide(&out, &set, date()).unwrap();
        assert_eq!(
            std::fs::read_to_string(&guide).unwrap().matches("Challenge #").count(),
            100
        );

        let bundle = export_offline_bundle(&out, &set).unwrap();
        assert_eq!(bundle, out.join(OFFLINE_FILE_NAME));
        assert!(std::fs::read_to_string(&bundle).unwrap().contains("scenario-100"));
    }

    #[test]
    fn offline_bundle_needs_the_full_set() {
        let dir = tempfile::tempdir().unwrap();
        let result = export_offline_bundle(dir.path(), &scenarios(60));
        assert!(matches!(
            result,
            Err(ExportError::Incomplete { loaded: 60, required: 100 })
        ));
        assert!(!dir.path().join(OFFLINE_FILE_NAME).exists());
    }
}
