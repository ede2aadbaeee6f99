//! Response extraction from the question XML.
//!
//! The file is scanned with regular expressions rather than parsed as XML:
//! response bodies are taken verbatim, without entity decoding, so character
//! offsets match the annotation.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use citation_eval_domain::{QuestionId, ResponseSet, ScoringError, ScoringResult};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

static QUESTION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<Question>(.*?)</Question>").unwrap()
});

static ID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<ID>(.*?)</ID>").unwrap());

static RESPONSE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<Response>(.*?)</Response>").unwrap()
});

/// Read and parse the question XML.
///
/// Line endings are folded to `\n` first (`\r\n`, then lone `\r`), so a
/// response counts one character per line break whatever platform wrote it.
pub fn load_responses(path: &Path) -> ScoringResult<ResponseSet> {
    let raw = fs::read_to_string(path).map_err(|e| ScoringError::io(path, e))?;
    let content = normalize_newlines(&raw);
    let responses = parse_responses(&content, &super::origin(path))?;
    info!(path = %path.display(), questions = responses.len(), "Loaded responses");
    Ok(responses)
}

fn normalize_newlines(raw: &str) -> Cow<'_, str> {
    if raw.contains('\r') {
        Cow::Owned(raw.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(raw)
    }
}

/// Extract every `Question` record's ID and response text
pub fn parse_responses(content: &str, origin: &str) -> ScoringResult<ResponseSet> {
    let mut responses = ResponseSet::new();

    for (index, question) in QUESTION_REGEX.captures_iter(content).enumerate() {
        let body = &question[1];
        let field = |regex: &Regex, tag: &str| {
            regex
                .captures(body)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str())
                .ok_or_else(|| {
                    ScoringError::schema(
                        origin,
                        format!("Question record {} has no <{}> element", index + 1, tag),
                    )
                })
        };

        let question_id = QuestionId::new(field(&ID_REGEX, "ID")?);
        let text = field(&RESPONSE_REGEX, "Response")?;

        if responses.insert(question_id.clone(), text).is_some() {
            warn!(question_id = %question_id, "Duplicate question in XML, keeping the last response");
        }
    }

    Ok(responses)
}
