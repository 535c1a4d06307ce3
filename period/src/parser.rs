//! Reading Periods back from their text form.
//!
//! Each interval is one token: `[` or `]` opens it (inclusive or exclusive start), then the left
//! end, `;`, the right end, and `]` or `[` closes it (inclusive or exclusive end). Ends are
//! RFC 3339 instants or the sentinels `-oo` / `+oo`. The token `][` stands for the empty Period.
//! Tokens are separated by whitespace; the Period is the union of all of them.

use chrono::{DateTime, FixedOffset, ParseResult, Utc};
use pest::iterators::Pair;
use pest::Parser;

use crate::bound::Bound;
use crate::error::{ParseError, ParseErrors};
use crate::grammar::{PeriodParser, Rule};
use crate::interval::Interval;
use crate::period::Period;
use crate::Instant;

/// Parse a serialized Period. Fails if any token is malformed, reporting all of them.
pub fn parse_period(input: &str) -> Result<Period, ParseErrors> {
    let (period, errors) = parse_period_lossy(input);
    if errors.is_empty() {
        Ok(period)
    } else {
        Err(ParseErrors(errors))
    }
}

/// Parse a serialized Period, keeping the union of every token that parsed alongside the errors
/// for those that did not.
pub fn parse_period_lossy(input: &str) -> (Period, Vec<ParseError>) {
    let mut intervals = Vec::new();
    let mut errors = Vec::new();
    for token in input.split_whitespace() {
        match parse_interval(token) {
            Ok(interval) => intervals.push(interval),
            Err(e) => {
                tracing::debug!("skipping malformed period token {token:?}: {e}");
                errors.push(e);
            }
        }
    }
    (Period::from_intervals(intervals), errors)
}

/// Parse a single interval token.
pub fn parse_interval(token: &str) -> Result<Interval, ParseError> {
    let mut pairs = PeriodParser::parse(Rule::Token, token).map_err(|e| syntax(token, e.variant.message().into_owned()))?;
    let pair = pairs.next().ok_or_else(|| syntax(token, "empty token".into()))?;
    match pair.as_rule() {
        Rule::EmptyToken => Ok(Interval::empty()),
        Rule::IntervalToken => parse_interval_token(token, pair),
        rule => Err(syntax(token, format!("expected an interval, got {rule:?}"))),
    }
}

fn parse_interval_token(token: &str, pair: Pair<Rule>) -> Result<Interval, ParseError> {
    let mut parts = pair.into_inner();
    let (Some(open), Some(left), Some(right), Some(close)) = (parts.next(), parts.next(), parts.next(), parts.next()) else {
        return Err(syntax(token, "incomplete interval".into()));
    };

    let left = match left.as_rule() {
        Rule::NegInfinity => Bound::Unbounded,
        Rule::PosInfinity => return Err(ParseError::MisplacedInfinity { token: token.into(), sentinel: "+oo", side: "left" }),
        _ => Bound::new(parse_instant(token, left.as_str())?, open.as_str() == "["),
    };
    let right = match right.as_rule() {
        Rule::PosInfinity => Bound::Unbounded,
        Rule::NegInfinity => return Err(ParseError::MisplacedInfinity { token: token.into(), sentinel: "-oo", side: "right" }),
        _ => Bound::new(parse_instant(token, right.as_str())?, close.as_str() == "]"),
    };
    Ok(Interval::new(left, right))
}

fn parse_instant(token: &str, value: &str) -> Result<Instant, ParseError> {
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| parse_extended_year(value))
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| ParseError::InvalidInstant { token: token.into(), value: value.into() })
}

/// RFC 3339 with a signed or five-digit year, which is how instants outside 0000-9999 are printed.
fn parse_extended_year(value: &str) -> ParseResult<DateTime<FixedOffset>> {
    let offset = match value.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{rest}+00:00"),
        None => value.to_string(),
    };
    DateTime::parse_from_str(&offset, "%Y-%m-%dT%H:%M:%S%.f%:z")
}

fn syntax(token: &str, message: String) -> ParseError { ParseError::Syntax { token: token.into(), message } }
