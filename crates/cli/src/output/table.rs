//! Table rendering for score reports and run summaries

use citation_eval_domain::{QuestionOutcome, QuestionScore};
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, CellAlignment, Color,
    ContentArrangement, Table,
};

/// Table formatter
pub struct TableFormatter;

impl TableFormatter {
    fn styled() -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic);
        if !colored::control::SHOULD_COLORIZE.should_colorize() {
            table.force_no_tty();
        }
        table
    }

    /// Metric values are shown with four decimals
    pub fn metric(value: f64) -> String {
        format!("{:.4}", value)
    }

    /// Two-column table of named values, values right-aligned
    pub fn key_value(items: Vec<(&str, String)>) -> String {
        let mut table = Self::styled();
        for (key, value) in items {
            table.add_row(vec![
                Cell::new(key),
                Cell::new(value).set_alignment(CellAlignment::Right),
            ]);
        }
        table.to_string()
    }

    /// One row per reference question; missing questions in yellow, zero
    /// contributions in red and perfect ones in green
    pub fn question_breakdown(questions: &[QuestionScore]) -> String {
        let mut table = Self::styled();
        table.set_header(vec!["Question", "Outcome", "Score"]);

        for question in questions {
            let outcome = question.outcome;
            let (score, color) = match outcome {
                QuestionOutcome::Missing => ("-".to_string(), Color::Yellow),
                _ => {
                    let contribution = outcome.contribution();
                    let color = if contribution >= 1.0 {
                        Color::Green
                    } else if contribution <= 0.0 {
                        Color::Red
                    } else {
                        Color::Reset
                    };
                    (Self::metric(contribution), color)
                }
            };

            table.add_row(vec![
                Cell::new(&question.question_id),
                Cell::new(outcome.label()).fg(color),
                Cell::new(score).set_alignment(CellAlignment::Right),
            ]);
        }
        table.to_string()
    }
}
