use serde::{Deserialize, Serialize};

use super::tense::Tense;

/// Facts computed once per sentence and consumed by the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceMeta {
    pub tense: Tense,
    pub is_question: bool,
    pub is_negated: bool,
}
