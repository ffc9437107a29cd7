// SPDX-FileCopyrightText: 2026 PLaMo Translate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt construction for the PLaMo translation model.

use crate::language::Language;

/// Token separating the dataset, input, and output segments of the prompt.
/// Also sent as the stop sequence so generation ends at the next segment
/// boundary.
pub const SEGMENT_MARKER: &str = "<|plamo:op|>";

/// Render the fixed three-segment translation prompt.
///
/// The template is a wire contract with the model: the exact bytes, including
/// embedded newlines and the absence of a trailing newline, are load-bearing.
/// The text is embedded verbatim, with no escaping.
pub fn build_translation_prompt(text: &str, source: Language, target: Language) -> String {
    format!(
        "{SEGMENT_MARKER}dataset\ntranslation\n\n{SEGMENT_MARKER}input lang={source}\n{text}\n{SEGMENT_MARKER}output lang={target}"
    )
}
