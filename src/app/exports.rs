use super::*;
use crate::error::ExportError;
use crate::export::{export_certificate, export_guide, export_offline_bundle};
use crate::results::Summary;
use chrono::NaiveDate;
use std::path::PathBuf;

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

impl QuizApp {
    pub fn summary(&self) -> Summary {
        Summary::new(self.game.score, self.game.total_questions)
    }

    pub fn download_certificate(&mut self) {
        let result = export_certificate(&self.config.export_directory(), &self.summary(), today());
        self.report_export(result);
    }

    pub fn download_guide(&mut self) {
        let result = export_guide(&self.config.export_directory(), &self.game.scenarios, today());
        self.report_export(result);
    }

    pub fn download_offline_bundle(&mut self) {
        let result = export_offline_bundle(&self.config.export_directory(), &self.game.scenarios);
        self.report_export(result);
    }

    fn report_export(&mut self, result: Result<PathBuf, ExportError>) {
        self.message = match result {
            Ok(path) => format!("Gespeichert: {}", path.display()),
            Err(ExportError::Incomplete { .. }) => "Warte bis alle Aufgaben geladen sind.".into(),
            Err(e) => {
                log::error!("export failed: {e}");
                format!("Export fehlgeschlagen: {e}")
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::testing::scenarios;
    use crate::export::OFFLINE_FILE_NAME;

    fn app_exporting_to(dir: &tempfile::TempDir) -> QuizApp {
        QuizApp::new(Config {
            export_dir: Some(dir.path().to_path_buf()),
            ..Config::default()
        })
    }

    #[test]
    fn bundle_waits_for_the_full_set() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_exporting_to(&dir);
        app.download_offline_bundle();
        assert_eq!(app.message, "Warte bis alle Aufgaben geladen sind.");
        assert!(!dir.path().join(OFFLINE_FILE_NAME).exists());

        app.dispatch(GameEvent::Loaded(scenarios(100)));
        app.download_offline_bundle();
        assert!(app.message.starts_with("Gespeichert: "));
        assert!(dir.path().join(OFFLINE_FILE_NAME).exists());
    }

    #[test]
    fn certificate_and_guide_are_written() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_exporting_to(&dir);
        app.dispatch(GameEvent::Loaded(scenarios(100)));

        app.download_certificate();
        assert!(app.message.contains("Netiquette_Master_Zertifikat_"));
        app.download_guide();
        assert!(app.message.contains("Netiquette_Lern_Guide_"));

        let files = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(files, 2);
    }
}
