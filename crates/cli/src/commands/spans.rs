//! Span detection scoring command (Subtask 1A)

use anyhow::Result;
use citation_eval_application::{SpanScorer, SpanScoringInput, SpanSummary};
use citation_eval_common::validate_file_name;
use citation_eval_domain::IndexConvention;
use citation_eval_infrastructure::discovery::{self, MarkerCase, SPAN_REFERENCE_MARKER};
use citation_eval_infrastructure::{loaders, write_details};

use super::CommandContext;
use crate::output::Formattable;

/// Options of the `spans` command
#[derive(Debug, Clone, Default)]
pub struct SpanArgs {
    /// Treat prediction span ends as inclusive, whatever the configuration says
    pub inclusive: bool,
    /// Print the per-question outcomes after the report
    pub breakdown: bool,
    /// Write the full summary as JSON under this name in the score directory
    pub details_file: Option<String>,
}

impl SpanArgs {
    fn convention(&self, configured: IndexConvention) -> IndexConvention {
        if self.inclusive {
            IndexConvention::Inclusive
        } else {
            configured
        }
    }
}

/// Load the span tables, score them and write the report
pub fn run(ctx: &CommandContext, args: &SpanArgs) -> Result<SpanSummary> {
    ctx.title("Span Detection Scoring");
    if let Some(name) = &args.details_file {
        validate_file_name("Details file", name)?;
    }

    let reference_dir = ctx.reference_dir();
    let xml_path = discovery::find_xml(&reference_dir)?;
    let responses = loaders::load_responses(&xml_path)?;
    ctx.step(format!("Loaded {} responses", responses.len()));

    let reference_path =
        discovery::find_reference(&reference_dir, SPAN_REFERENCE_MARKER, MarkerCase::Sensitive)?;
    let reference = loaders::load_reference_spans(&reference_path)?;
    ctx.step(format!("Loaded {} reference rows", reference.len()));

    let prediction_path = discovery::find_span_prediction(&ctx.prediction_dir())?;
    let predictions = loaders::load_predicted_spans(&prediction_path)?;
    ctx.step(format!(
        "Loaded {} prediction rows from {}",
        predictions.len(),
        prediction_path.display()
    ));

    let scorer = SpanScorer::new(args.convention(ctx.config.spans.convention()));
    ctx.step(format!("Reading prediction span ends as {}", scorer.convention()));
    let input = SpanScoringInput {
        responses,
        reference,
        predictions,
    };
    let summary = ctx.score(&scorer, &input)?;

    for question_id in summary.missing_questions() {
        ctx.warn(format!(
            "Question ID {} is missing from the prediction file",
            question_id
        ));
    }

    if args.breakdown {
        println!("{}", summary.format(ctx.format)?);
    }

    if let Some(name) = &args.details_file {
        let path = write_details(&summary, &ctx.config.paths.score_dir(), name)?;
        ctx.step(format!("Details written to {}", path.display()));
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusive_flag_overrides_configuration() {
        let args = SpanArgs {
            inclusive: true,
            ..SpanArgs::default()
        };
        assert_eq!(
            args.convention(IndexConvention::Exclusive),
            IndexConvention::Inclusive
        );
        assert_eq!(
            SpanArgs::default().convention(IndexConvention::Inclusive),
            IndexConvention::Inclusive
        );
    }
}
