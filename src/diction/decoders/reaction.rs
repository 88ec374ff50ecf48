//! # Reaction-Grammar Decoder (Diction 236)
//!
//! Reaction quantity records span physical lines. The code, the
//! classification tag and the parenthesized description can each arrive
//! on a different line, in several layouts:
//!
//! ```text
//! ,POL/DA,,VAP      NO  (Vector analyzing power, iT(11))            ...
//! ```
//! code and tag up front, single-line description;
//!
//! ```text
//! PR,NU/DA/DE,N+*F/NFYAE(Diff.prompt neut.mult.d/dA(n+frag.spec.    ...
//!                      )/dE(n))                                     ...
//! ```
//! description continued on indented lines until the closing
//! parenthesis balances out the opening one at column 22;
//!
//! ```text
//! ,POL/DA/DA/DE,*,ANA                                               ...
//!                   NO  (Analyzing power dA1/dA2/dE f.particle      ...
//!                       specified)                                  ...
//! ```
//! a long code alone on the first line, with the tag and description
//! supplied by the following lines.
//!
//! Decoding tracks one [`ContinuationState`] advanced by a named
//! transition per line: record start, pure continuation, or reset.
//! A finalized record overwrites any earlier record with the same code,
//! which is how the long-code layout replaces the empty record emitted
//! when its first line closes without a description.

use crate::diction::decoders::is_noise_line;
use crate::diction::models::{CodeMap, CodeRecord, RawBlock};
use crate::diction::refs::{ReferenceTables, Vocabulary};
use crate::diction::utils;

/// Transient per-record parsing state.
///
/// The code and tag survive a finalized record on purpose: a later line
/// may supply a second, fuller description for the same code, and the
/// long-code layout reads its tag after the code line has already been
/// seen.
#[derive(Debug, Default)]
struct ContinuationState {
    code: Option<String>,
    additional_code: Option<String>,
    fragments: Vec<String>,
    in_continuation: bool,
    active: bool,
}

/// A line opens (or extends the head of) a record if it starts with an
/// alphanumeric character, a comma or an open parenthesis, or whenever
/// no description is currently being continued.
fn is_record_start(line: &str, in_continuation: bool) -> bool {
    let first = utils::col(line, 0);
    first.is_ascii_alphanumeric() || first == b',' || first == b'(' || !in_continuation
}

impl ContinuationState {
    /// Record-start transition: reads the code shape and, when column 22
    /// opens a parenthesis, begins the description.
    fn record_start(&mut self, line: &str) {
        self.in_continuation = false;
        self.active = utils::field(line, 79, 80) != "O";
        let paren_at_22 = utils::col(line, 22) == b'(';

        if !line.starts_with(' ') && paren_at_22 {
            // short form: code and tag share the description line
            self.code = Some(utils::field_rtrim(line, 0, 18).to_string());
            self.additional_code = Some(utils::field_rtrim(line, 18, 22).to_string());
        } else if !utils::field(line, 0, 18).contains(' ') && !paren_at_22 {
            // long form: the line carries only the code
            self.code = Some(utils::field_rtrim(line, 0, 30).to_string());
        } else if utils::leading_spaces(line, 18) && utils::col(line, 18) != b' ' && paren_at_22 {
            // long form, second line: the tag arrives with the description
            self.additional_code = Some(utils::field_rtrim(line, 18, 22).to_string());
        }

        if paren_at_22 {
            let fragment = utils::field_rtrim(line, 22, 66);
            self.in_continuation = !fragment.ends_with(')');
            self.fragments = vec![fragment.to_string()];
        }
    }

    /// Pure-continuation transition: appends the next description
    /// fragment from a line indented past the description column.
    fn pure_continuation(&mut self, line: &str) {
        let fragment = utils::field_rtrim(line, 22, 66);
        if !fragment.is_empty() {
            self.in_continuation = !fragment.ends_with(')');
            self.fragments.push(fragment.to_string());
        }
    }

    /// Reset transition: an unsupported line shape abandons the record
    /// in progress. Known upstream notations (TRS,POL/DA/DA/DE and kin)
    /// land here; they are dropped, not decoded.
    fn reset(&mut self) {
        self.code = None;
        self.fragments.clear();
        self.in_continuation = false;
    }

    /// Emits the record once its description stops continuing.
    ///
    /// Fragments are concatenated without a separator, exactly as they
    /// sit in their columns, then vocabulary-expanded. The cleared
    /// fragment list arms the state for the next record.
    fn take_record(&mut self, vocab: &Vocabulary) -> Option<(String, CodeRecord)> {
        if self.in_continuation {
            return None;
        }
        let code = self.code.clone()?;
        let description = vocab.expand(&self.fragments.concat());
        self.fragments.clear();
        let record = CodeRecord {
            additional_code: self.additional_code.clone(),
            ..CodeRecord::new(description, self.active)
        };
        Some((code, record))
    }
}

/// Diction 236: reaction quantities.
pub fn decode_reactions(block: &RawBlock, tables: &ReferenceTables) -> CodeMap {
    let mut codes = CodeMap::new();
    let mut state = ContinuationState::default();

    for line in block.data_lines(27) {
        // a blank line matches no record shape
        if line.trim().is_empty() || is_noise_line(line) {
            continue;
        }

        if is_record_start(line, state.in_continuation) {
            state.record_start(line);
        } else if utils::leading_spaces(line, 22) {
            state.pure_continuation(line);
        } else {
            state.reset();
        }

        if let Some((code, record)) = state.take_record(&tables.reaction_vocab) {
            codes.insert(code, record);
        }
    }

    codes
}
