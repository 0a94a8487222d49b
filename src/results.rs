//! Puntuación final: porcentaje, rango y los textos exportables.

use crate::model::Scenario;
use chrono::NaiveDate;

const RULE: &str = "====================================================";
const SEPARATOR: &str = "----------------------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rank {
    Noob,
    Advanced,
    Pro,
    Master,
}

/// Color de acento de cada rango
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Indigo,
    Green,
    Blue,
    Orange,
}

impl Rank {
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 90 {
            Rank::Master
        } else if percentage >= 70 {
            Rank::Pro
        } else if percentage >= 50 {
            Rank::Advanced
        } else {
            Rank::Noob
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Master => "Netiquette Master GOAT",
            Rank::Pro => "Digital Pro",
            Rank::Advanced => "Fortgeschritten",
            Rank::Noob => "Noob",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Rank::Master => "Absolute Legende! Du weißt genau, wie man sich im Netz korrekt verhält.",
            Rank::Pro => "Stark! Du bist sicher unterwegs und checkst die meisten Vibes.",
            Rank::Advanced => {
                "Nicht schlecht, aber pass auf, dass du nicht aus Versehen zum Trolling beiträgst."
            }
            Rank::Noob => "Da geht noch was! Lern die Regeln, bevor du im Netz gecancelt wirst.",
        }
    }

    pub fn accent(self) -> Accent {
        match self {
            Rank::Master => Accent::Indigo,
            Rank::Pro => Accent::Green,
            Rank::Advanced => Accent::Blue,
            Rank::Noob => Accent::Orange,
        }
    }
}

pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (score as f64 / total as f64 * 100.0).round() as u32
}

/// Resultado final ya calculado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub rank: Rank,
}

impl Summary {
    pub fn new(score: usize, total: usize) -> Self {
        let percentage = percentage(score, total);
        Self {
            score,
            total,
            percentage,
            rank: Rank::from_percentage(percentage),
        }
    }
}

/// Fecha corta alemana (`19.10.2026`, `5.1.2026`)
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d.%-m.%Y").to_string()
}

pub fn certificate_text(summary: &Summary, date: NaiveDate) -> String {
    format!(
        "{RULE}
           DIGITALER EHRENRAT - ZERTIFIKAT
                 Netiquette Master 100
{RULE}

Hiermit wird offiziell bestätigt: 
Du hast den Realness-Check bestanden!

Datum: {date}
Score: {score} / {total} Points ({pct}%)
Rank:  {rank}

\"{message}\"

Mach das Internet zu einem besseren Ort! 
Kein Hate, nur Respekt.
{RULE}",
        date = format_date(date),
        score = summary.score,
        total = summary.total,
        pct = summary.percentage,
        rank = summary.rank.label().to_uppercase(),
        message = summary.rank.message(),
    )
}

/// Guía con todos los escenarios, en orden, con la respuesta correcta
pub fn guide_text(scenarios: &[Scenario], date: NaiveDate) -> String {
    let mut content = format!(
        "\n{RULE}\n           NETIQUETTE GUIDE: DIE 100 CHALLENGES\n{RULE}\n\
         Zusammenstellung der wichtigsten Regeln für den digitalen Alltag.\n\
         Datum: {}\n\n",
        format_date(date)
    );

    for (i, s) in scenarios.iter().enumerate() {
        let correct = s.correct_option().map(|o| o.text.as_str()).unwrap_or_default();
        content.push_str(&format!(
            "\nChallenge #{} [{}]\nSzenario: {}\n\nKorrekte Antwort:\n-> {}\n\nHintergrundwissen:\n{}\n\n{SEPARATOR}\n",
            i + 1,
            s.category,
            s.description,
            correct,
            s.explanation,
        ));
    }

    content.push_str(&format!(
        "\n{RULE}\nEnde des Guides. Bleib respektvoll!\n{RULE}\n"
    ));
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::testing::scenarios;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
    }

    #[test]
    fn rank_boundaries() {
        let cases = [
            (50, Rank::Advanced),
            (69, Rank::Advanced),
            (70, Rank::Pro),
            (89, Rank::Pro),
            (90, Rank::Master),
            (100, Rank::Master),
            (49, Rank::Noob),
            (0, Rank::Noob),
        ];
        for (pct, rank) in cases {
            assert_eq!(Rank::from_percentage(pct), rank, "{pct}%");
        }
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(percentage(1, 100), 1);
        assert_eq!(percentage(1, 8), 13); // 12.5
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn one_correct_answer_is_noob() {
        let summary = Summary::new(1, 100);
        assert_eq!(summary.percentage, 1);
        assert_eq!(summary.rank, Rank::Noob);
        assert_eq!(summary.rank.accent(), Accent::Orange);
    }

    #[test]
    fn german_short_date() {
        assert_eq!(format_date(date()), "5.1.2026");
        assert_eq!(
            format_date(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()),
            "19.10.2026"
        );
    }

    #[test]
    fn certificate_contains_score_and_rank() {
        let text = certificate_text(&Summary::new(93, 100), date());
        assert!(text.starts_with(RULE));
        assert!(text.ends_with(RULE));
        assert!(text.contains("Datum: 5.1.2026"));
        assert!(text.contains("Score: 93 / 100 Points (93%)"));
        assert!(text.contains("Rank:  NETIQUETTE MASTER GOAT"));
        assert!(text.contains("\"Absolute Legende!"));
        assert!(text.contains("Hiermit wird offiziell bestätigt: \nDu hast"));
        assert!(text.contains("Mach das Internet zu einem besseren Ort! \nKein Hate"));
    }

    #[test]
    fn guide_lists_every_scenario_in_order() {
        let set = scenarios(3);
        let text = guide_text(&set, date());
        assert!(text.contains("NETIQUETTE GUIDE: DIE 100 CHALLENGES"));
        assert_eq!(text.matches("Challenge #").count(), 3);
        assert_eq!(text.matches(SEPARATOR).count(), 3);

        let first = text.find("Challenge #1 [WhatsApp]").unwrap();
        let third = text.find("Challenge #3 [WhatsApp]").unwrap();
        assert!(first < third);
        assert!(text.contains("Korrekte Antwort:\n-> Option 2\n"));
        assert!(text.contains("Hintergrundwissen:\nErklärung 3\n"));
        assert!(text.ends_with(&format!("Ende des Guides. Bleib respektvoll!\n{RULE}\n")));
    }
}
