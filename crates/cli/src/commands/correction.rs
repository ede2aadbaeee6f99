//! Citation correction scoring command (Subtask 1C)

use anyhow::Result;
use citation_eval_application::{CitationCorpus, CorrectionInput, CorrectionScorer, CorrectionSummary};
use citation_eval_infrastructure::discovery::{self, MarkerCase, HIDDEN_REFERENCE_MARKER};
use citation_eval_infrastructure::loaders;

use super::CommandContext;

pub fn run(ctx: &CommandContext) -> Result<CorrectionSummary> {
    ctx.title("Citation Correction Scoring");

    let correction = &ctx.config.correction;
    let sources = loaders::load_sources(&correction.quran_path(), &correction.hadith_path())?;
    let scorer = CorrectionScorer::new(CitationCorpus::from_sources(&sources));
    ctx.step(format!(
        "Loaded {} verses and {} hadith texts from {}",
        scorer.corpus().verse_count(),
        scorer.corpus().hadith_count(),
        correction.resources_dir().display()
    ));

    let reference_path = discovery::find_reference(
        &ctx.reference_dir(),
        HIDDEN_REFERENCE_MARKER,
        MarkerCase::Insensitive,
    )?;
    let reference = loaders::load_correction_reference(&reference_path)?;

    let prediction_path = discovery::find_tsv_prediction(&ctx.prediction_dir())?;
    let predictions = loaders::load_correction_predictions(&prediction_path)?;

    let summary = ctx.score(
        &scorer,
        &CorrectionInput {
            reference,
            predictions,
        },
    )?;
    ctx.show(&summary)?;

    Ok(summary)
}
