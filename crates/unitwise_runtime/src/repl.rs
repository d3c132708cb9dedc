//! The interactive conversion REPL.
//!
//! Feeds each input line to the [`QueryParser`] and renders the outcome: a
//! converted value, "INVALID!" for cross-category requests, or a numbered
//! candidate list when the unit text is still ambiguous. Entering a number
//! while candidates are shown rewrites the previous input with the chosen
//! unit and re-parses it.

use unitwise_foundation::Result;
use unitwise_grammar::{ParseOutcome, QuantityCandidates, QueryParser};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// A candidate list waiting for the user to pick from it.
#[derive(Debug)]
struct Pending {
    input: String,
    candidates: QuantityCandidates,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    editor: E,
    parser: QueryParser,
    prompt: String,
    show_banner: bool,
    pending: Option<Pending>,
}

impl Repl<RustylineEditor> {
    /// Creates a REPL over the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(parser: QueryParser) -> Result<Self> {
        Ok(Self::with_editor(parser, RustylineEditor::new()?))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a REPL with the given editor.
    pub fn with_editor(parser: QueryParser, editor: E) -> Self {
        Self {
            editor,
            parser,
            prompt: "convert> ".to_string(),
            show_banner: true,
            pending: None,
        }
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Runs the REPL loop until EOF.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            println!("Unitwise. Try \"50 centimeters to miles\" or \"ten pounds in grams\".");
        }
        loop {
            match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => {
                    self.editor.add_history(&line);
                    let response = self.respond(&line);
                    if !response.is_empty() {
                        println!("{response}");
                    }
                }
                ReadResult::Interrupted => {
                    self.pending = None;
                }
                ReadResult::Eof => break,
            }
        }
        Ok(())
    }

    /// Produces the response text for one input line.
    fn respond(&mut self, line: &str) -> String {
        let line = line.trim();
        if line.is_empty() {
            return String::new();
        }

        if let Some(pending) = self.pending.take() {
            if let Ok(choice) = line.parse::<usize>() {
                if (1..=pending.candidates.candidates.len()).contains(&choice) {
                    let unit = &pending.candidates.candidates[choice - 1];
                    let rewritten = self.parser.apply_candidate_selection(
                        &pending.input,
                        &pending.candidates,
                        unit,
                    );
                    let mut out = format!("-> {rewritten}\n");
                    out.push_str(&self.outcome_text(&rewritten));
                    return out;
                }
            }
            // Not a selection; treat the line as a fresh query.
        }

        self.outcome_text(line)
    }

    /// Parses one query and renders its outcome.
    fn outcome_text(&mut self, input: &str) -> String {
        match self.parser.parse_outcome(input) {
            Some(ParseOutcome::Conversion(conversion)) => format!("{conversion}"),
            Some(ParseOutcome::Ambiguous(candidates)) => {
                let mut out = format!("\"{}\" is ambiguous:\n", candidates.typed);
                for (i, unit) in candidates.candidates.iter().enumerate() {
                    out.push_str(&format!("  {}. {}\n", i + 1, unit.name));
                }
                out.push_str("enter a number to pick a unit");
                self.pending = Some(Pending {
                    input: input.to_string(),
                    candidates,
                });
                out
            }
            None => "no parse".to_string(),
        }
    }
}
