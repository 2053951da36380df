//! Character-driven state machine for rule tags.
//!
//! A tag like `[GB:7-10,required | PT:5]` declares per-country length and
//! presence rules for one field. The machine consumes the tag one character
//! at a time; each state is a small function from (character, context) to
//! the next state, so transitions stay testable in isolation and adding a
//! rule kind is a local change.
//!
//! Scanning stops at the first `]`. Input that runs out before a `]` yields
//! whatever was accumulated up to that point; an unterminated tag is not
//! itself an error.

use tracing::debug;

use ruletag_model::{ConstraintMap, CountryConstraint, Result, RuleTagError};

use crate::classify::{is_letter, is_numeric};

const OPENER: char = '[';
const CLOSER: char = ']';
const COUNTRY_INITIALIZER: char = ':';
const COUNTRY_SEPARATOR: char = '|';
const LENGTH_SEPARATOR: char = '-';
const RULE_SEPARATOR: char = ',';

/// The only keyword rule currently recognized.
const KEYWORD_REQUIRED: &str = "required";

/// Parser states. `Done` is terminal; a fatal transition surfaces as the
/// `Err` arm of [`State::step`] instead of a dedicated invalid state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Expecting the opening `[`, skipping leading spaces.
    Initial,
    /// Accumulating a country code.
    CountryCode,
    /// At the start of a rule: a letter opens a keyword, a digit a size.
    RuleStart,
    /// Accumulating the first (or only) size number.
    SizeMin,
    /// Accumulating the upper bound of a size range.
    SizeMax,
    /// Accumulating a keyword token such as `required`.
    Keyword,
    /// Between rules, expecting `]`, `,`, `|`, or the next keyword.
    RuleEnd,
    /// Terminal success; trailing characters are not inspected.
    Done,
}

/// Mutable scratch state for a single parse call. A fresh context is built
/// per call, so concurrent parses never share anything.
#[derive(Debug, Default)]
struct ParseContext {
    accumulator: String,
    current_country: String,
    position: usize,
    constraints: ConstraintMap,
}

impl ParseContext {
    fn unexpected(&self, symbol: char) -> RuleTagError {
        RuleTagError::UnexpectedSymbol {
            symbol,
            position: self.position,
        }
    }

    fn current_mut(&mut self) -> &mut CountryConstraint {
        self.constraints
            .entry(self.current_country.clone())
            .or_default()
    }

    /// Drain the accumulator as a length value. Digit runs that overflow
    /// `usize` fall back to 0 (unset), mirroring the reference
    /// interpreter's tolerant integer conversion.
    fn take_number(&mut self) -> usize {
        let value = self.accumulator.parse().unwrap_or(0);
        self.accumulator.clear();
        value
    }
}

impl State {
    /// Advance the machine by one character.
    fn step(self, symbol: char, ctx: &mut ParseContext) -> Result<State> {
        match self {
            State::Initial => initial(symbol, ctx),
            State::CountryCode => country_code(symbol, ctx),
            State::RuleStart => rule_start(symbol, ctx),
            State::SizeMin => size_min(symbol, ctx),
            State::SizeMax => size_max(symbol, ctx),
            State::Keyword => keyword(symbol, ctx),
            State::RuleEnd => rule_end(symbol, ctx),
            State::Done => Ok(State::Done),
        }
    }
}

fn initial(symbol: char, ctx: &mut ParseContext) -> Result<State> {
    match symbol {
        OPENER => Ok(State::CountryCode),
        ' ' => Ok(State::Initial),
        other => Err(ctx.unexpected(other)),
    }
}

fn country_code(symbol: char, ctx: &mut ParseContext) -> Result<State> {
    if is_letter(symbol) {
        ctx.current_country.push(symbol);
        return Ok(State::CountryCode);
    }
    // Leading spaces are tolerated only before the first letter.
    if symbol == ' ' && ctx.current_country.is_empty() {
        return Ok(State::CountryCode);
    }
    if symbol == COUNTRY_INITIALIZER {
        if ctx.constraints.contains_key(&ctx.current_country) {
            return Err(RuleTagError::DuplicateCountry(ctx.current_country.clone()));
        }
        ctx.constraints
            .insert(ctx.current_country.clone(), CountryConstraint::default());
        return Ok(State::RuleStart);
    }
    Err(ctx.unexpected(symbol))
}

fn rule_start(symbol: char, ctx: &mut ParseContext) -> Result<State> {
    if is_letter(symbol) {
        ctx.accumulator.push(symbol);
        return Ok(State::Keyword);
    }
    if is_numeric(symbol) {
        ctx.accumulator.push(symbol);
        return Ok(State::SizeMin);
    }
    if symbol == ' ' {
        return Ok(State::RuleStart);
    }
    Err(ctx.unexpected(symbol))
}

fn size_min(symbol: char, ctx: &mut ParseContext) -> Result<State> {
    if is_numeric(symbol) {
        ctx.accumulator.push(symbol);
        return Ok(State::SizeMin);
    }
    match symbol {
        LENGTH_SEPARATOR => {
            let min = ctx.take_number();
            ctx.current_mut().min_len = min;
            Ok(State::SizeMax)
        }
        CLOSER => {
            commit_fixed_size(ctx);
            Ok(State::Done)
        }
        RULE_SEPARATOR => {
            commit_fixed_size(ctx);
            Ok(State::RuleStart)
        }
        ' ' => {
            commit_fixed_size(ctx);
            Ok(State::RuleEnd)
        }
        other => Err(ctx.unexpected(other)),
    }
}

/// The single-number shorthand pins both bounds to the same value.
fn commit_fixed_size(ctx: &mut ParseContext) {
    let size = ctx.take_number();
    let constraint = ctx.current_mut();
    constraint.min_len = size;
    constraint.max_len = size;
}

fn size_max(symbol: char, ctx: &mut ParseContext) -> Result<State> {
    if is_numeric(symbol) {
        ctx.accumulator.push(symbol);
        return Ok(State::SizeMax);
    }
    match symbol {
        RULE_SEPARATOR => {
            let max = ctx.take_number();
            ctx.current_mut().max_len = max;
            Ok(State::RuleStart)
        }
        CLOSER => {
            let max = ctx.take_number();
            ctx.current_mut().max_len = max;
            Ok(State::Done)
        }
        ' ' => {
            let max = ctx.take_number();
            ctx.current_mut().max_len = max;
            Ok(State::RuleEnd)
        }
        other => Err(ctx.unexpected(other)),
    }
}

fn keyword(symbol: char, ctx: &mut ParseContext) -> Result<State> {
    if symbol == ' ' || symbol == CLOSER {
        apply_keyword(ctx)?;
        if symbol == ' ' {
            return Ok(State::RuleEnd);
        }
        return Ok(State::Done);
    }
    // Everything else, digits included, keeps accumulating; the keyword
    // table decides at the terminator.
    ctx.accumulator.push(symbol);
    Ok(State::Keyword)
}

fn apply_keyword(ctx: &mut ParseContext) -> Result<()> {
    let token = std::mem::take(&mut ctx.accumulator);
    match token.as_str() {
        KEYWORD_REQUIRED => {
            ctx.current_mut().required = true;
            Ok(())
        }
        _ => Err(RuleTagError::UnexpectedToken {
            token,
            position: ctx.position,
        }),
    }
}

fn rule_end(symbol: char, ctx: &mut ParseContext) -> Result<State> {
    if is_letter(symbol) {
        ctx.accumulator.push(symbol);
        return Ok(State::Keyword);
    }
    match symbol {
        CLOSER => Ok(State::Done),
        RULE_SEPARATOR => Ok(State::RuleStart),
        COUNTRY_SEPARATOR => {
            ctx.current_country.clear();
            Ok(State::CountryCode)
        }
        ' ' => Ok(State::RuleEnd),
        other => Err(ctx.unexpected(other)),
    }
}

/// Parse one rule tag into its per-country constraints.
///
/// The position reported in errors is the zero-based byte offset of the
/// offending character within `tag`, counted over every character scanned,
/// ignored spaces included.
pub fn parse_rule_tag(tag: &str) -> Result<ConstraintMap> {
    let mut ctx = ParseContext::default();
    let mut state = State::Initial;
    for (position, symbol) in tag.char_indices() {
        ctx.position = position;
        state = state.step(symbol, &mut ctx)?;
        if state == State::Done {
            break;
        }
    }
    debug!(countries = ctx.constraints.len(), "parsed rule tag");
    Ok(ctx.constraints)
}
