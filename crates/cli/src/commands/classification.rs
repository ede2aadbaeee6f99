//! Citation classification scoring command (Subtask 1B)

use anyhow::Result;
use citation_eval_application::{ClassificationInput, ClassificationScorer, ClassificationSummary};
use citation_eval_infrastructure::discovery::{self, MarkerCase, HIDDEN_REFERENCE_MARKER};
use citation_eval_infrastructure::loaders;

use super::CommandContext;

pub fn run(ctx: &CommandContext) -> Result<ClassificationSummary> {
    ctx.title("Citation Classification Scoring");

    let reference_path = discovery::find_reference(
        &ctx.reference_dir(),
        HIDDEN_REFERENCE_MARKER,
        MarkerCase::Sensitive,
    )?;
    let reference = loaders::load_classification_reference(&reference_path)?;

    let prediction_path = discovery::find_tsv_prediction(&ctx.prediction_dir())?;
    let predictions = loaders::load_classification_predictions(&prediction_path)?;
    ctx.step(format!(
        "Loaded {} reference and {} prediction rows",
        reference.len(),
        predictions.len()
    ));

    let summary = ctx.score(
        &ClassificationScorer,
        &ClassificationInput {
            reference,
            predictions,
        },
    )?;

    if summary.misaligned_rows > 0 {
        ctx.warn(format!(
            "{} rows name a different sequence id than the reference; rows were compared by position",
            summary.misaligned_rows
        ));
    }
    ctx.show(&summary)?;

    Ok(summary)
}
