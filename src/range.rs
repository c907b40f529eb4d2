// Copyright 2018-2023 the Deno authors. All rights reserved. MIT license.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::hash::Hash;
use std::str::FromStr;

use capacity_builder::CapacityDisplay;
use capacity_builder::StringAppendable;
use capacity_builder::StringBuilder;
use capacity_builder::StringType;
use deno_error::JsError;
use ecow::EcoString;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use tracing::trace;

use crate::common::comparator_op;
use crate::ParseErrorKind;
use crate::Version;
use crate::VersionInput;
use crate::VersionParseError;

#[derive(Error, Debug, Clone, JsError, PartialEq, Eq)]
#[class(type)]
#[error("Invalid version range '{text}'. {source}")]
pub struct RangeParseError {
  pub text: String,
  #[source]
  pub source: RangeParseErrorReason,
}

impl RangeParseError {
  pub fn kind(&self) -> ParseErrorKind {
    self.source.kind()
  }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeParseErrorReason {
  #[error("Expected at least one comparator.")]
  Empty,
  #[error("Expected a comparator set at position {position}.")]
  EmptySet { position: usize },
  #[error("Expected '||' at position {position}, but found a single '|'.")]
  SingleBar { position: usize },
  #[error(
    "Unknown comparator operator '{0}'. Expected '<', '<=', '>', '>=', or '='."
  )]
  UnknownOperator(String),
  #[error(transparent)]
  InvalidVersion(#[from] VersionParseError),
}

impl RangeParseErrorReason {
  pub fn kind(&self) -> ParseErrorKind {
    match self {
      Self::Empty => ParseErrorKind::Structural,
      Self::EmptySet { .. } | Self::SingleBar { .. } => {
        ParseErrorKind::RangeToken
      }
      Self::UnknownOperator(_) => ParseErrorKind::Operator,
      Self::InvalidVersion(err) => err.kind(),
    }
  }
}

#[derive(Error, Debug, Clone, JsError, PartialEq, Eq)]
pub enum MaxSatisfyingError {
  #[class(inherit)]
  #[error(transparent)]
  InvalidVersion(#[from] VersionParseError),
  #[class(type)]
  #[error("No version satisfies the range '{range}'.")]
  NoneSatisfied { range: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparatorOp {
  Less,
  LessOrEqual,
  Greater,
  GreaterOrEqual,
  Equal,
}

impl ComparatorOp {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Less => "<",
      Self::LessOrEqual => "<=",
      Self::Greater => ">",
      Self::GreaterOrEqual => ">=",
      Self::Equal => "=",
    }
  }

  /// Gets if a version that compares to the comparator's version
  /// with `ordering` is accepted.
  pub fn matches(self, ordering: Ordering) -> bool {
    match self {
      Self::Less => ordering == Ordering::Less,
      Self::LessOrEqual => ordering != Ordering::Greater,
      Self::Greater => ordering == Ordering::Greater,
      Self::GreaterOrEqual => ordering != Ordering::Less,
      Self::Equal => ordering == Ordering::Equal,
    }
  }
}

/// An operator and the version it compares against, such as `>=1.2.3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, CapacityDisplay)]
pub struct Comparator {
  op: ComparatorOp,
  version: Version,
}

impl<'a> StringAppendable<'a> for &'a Comparator {
  fn append_to_builder<TString: StringType>(
    self,
    builder: &mut StringBuilder<'a, TString>,
  ) {
    if self.op != ComparatorOp::Equal {
      builder.append(self.op.as_str());
    }
    builder.append(&self.version);
  }
}

impl Comparator {
  pub fn new(op: ComparatorOp, version: Version) -> Self {
    Self { op, version }
  }

  pub fn op(&self) -> ComparatorOp {
    self.op
  }

  pub fn version(&self) -> &Version {
    &self.version
  }

  pub fn satisfies(&self, version: &Version) -> bool {
    self.op.matches(version.cmp(&self.version))
  }
}

/// Comparators that must all hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, CapacityDisplay)]
pub struct ComparatorSet(Vec<Comparator>);

impl<'a> StringAppendable<'a> for &'a ComparatorSet {
  fn append_to_builder<TString: StringType>(
    self,
    builder: &mut StringBuilder<'a, TString>,
  ) {
    for (i, comparator) in self.0.iter().enumerate() {
      if i > 0 {
        builder.append(' ');
      }
      builder.append(comparator);
    }
  }
}

impl ComparatorSet {
  pub fn comparators(&self) -> &[Comparator] {
    &self.0
  }

  pub fn satisfies(&self, version: &Version) -> bool {
    self.0.iter().all(|c| c.satisfies(version))
  }
}

/// A version range such as `1.4.6 || >=1.9.2 <3.0.0`.
///
/// Satisfied when any of its comparator sets is. Two ranges are equal
/// when their sets and comparators are equal in the same order, so ranges
/// written differently are unequal even if they accept the same versions.
#[derive(Debug, Clone, CapacityDisplay)]
pub struct Range {
  raw_text: EcoString,
  sets: Vec<ComparatorSet>,
}

impl PartialEq for Range {
  fn eq(&self, other: &Self) -> bool {
    self.sets == other.sets
  }
}

impl Eq for Range {}

impl Hash for Range {
  fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
    self.sets.hash(state);
  }
}

impl<'a> StringAppendable<'a> for &'a Range {
  fn append_to_builder<TString: StringType>(
    self,
    builder: &mut StringBuilder<'a, TString>,
  ) {
    for (i, set) in self.sets.iter().enumerate() {
      if i > 0 {
        builder.append(" || ");
      }
      builder.append(set);
    }
  }
}

impl Serialize for Range {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.raw_text)
  }
}

impl<'de> Deserialize<'de> for Range {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: serde::Deserializer<'de>,
  {
    let text = String::deserialize(deserializer)?;
    match Range::parse(&text) {
      Ok(range) => Ok(range),
      Err(err) => Err(serde::de::Error::custom(err)),
    }
  }
}

impl FromStr for Range {
  type Err = RangeParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
  }
}

impl Range {
  pub fn parse(text: &str) -> Result<Range, RangeParseError> {
    match RangeScanner::new(text).scan() {
      Ok(sets) => Ok(Range {
        raw_text: EcoString::from(text),
        sets,
      }),
      Err(source) => {
        debug!(text, %source, "rejected version range");
        Err(RangeParseError {
          text: text.to_string(),
          source,
        })
      }
    }
  }

  /// The text the range was parsed from.
  pub fn version_text(&self) -> &str {
    &self.raw_text
  }

  pub fn sets(&self) -> &[ComparatorSet] {
    &self.sets
  }

  /// Gets if this is structurally equal to the range written in `text`.
  pub fn eq_text(&self, text: &str) -> Result<bool, RangeParseError> {
    Ok(*self == Range::parse(text)?)
  }

  pub fn satisfies(&self, version: &Version) -> bool {
    self.sets.iter().any(|set| set.satisfies(version))
  }

  /// Like [`Range::satisfies`], but also accepts version text.
  pub fn satisfied_by<'a>(
    &self,
    version: impl VersionInput<'a>,
  ) -> Result<bool, VersionParseError> {
    let version = version.into_version()?;
    Ok(self.satisfies(&version))
  }

  /// The greatest of `versions` that satisfies the range.
  ///
  /// Of equal versions the first one wins.
  pub fn max_satisfying<'a>(
    &self,
    versions: impl IntoIterator<Item = &'a Version>,
  ) -> Option<&'a Version> {
    versions
      .into_iter()
      .filter(|version| self.satisfies(version))
      .fold(None, |max, version| match max {
        Some(max) if max >= version => Some(max),
        _ => Some(version),
      })
  }

  /// The greatest of `candidates` that satisfies the range.
  ///
  /// Candidates given as text are parsed in order and the first one that
  /// fails to parse aborts the search. Having no satisfying candidate is
  /// an error.
  pub fn max_satisfied_by<'a, I>(
    &self,
    candidates: I,
  ) -> Result<Version, MaxSatisfyingError>
  where
    I: IntoIterator,
    I::Item: VersionInput<'a>,
  {
    let mut max: Option<Cow<'a, Version>> = None;
    for candidate in candidates {
      let version = candidate.into_version()?;
      if !self.satisfies(&version) {
        continue;
      }
      let is_new_max = match &max {
        Some(current) => *version > **current,
        None => true,
      };
      if is_new_max {
        max = Some(version);
      }
    }

    match max {
      Some(version) => {
        trace!(range = %self.raw_text, %version, "selected max satisfying");
        Ok(version.into_owned())
      }
      None => Err(MaxSatisfyingError::NoneSatisfied {
        range: self.raw_text.to_string(),
      }),
    }
  }
}

/// Where the range scanner is relative to the `||` separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
  /// Inside a comparator set that starts at `start`.
  Set { start: usize },
  /// Just after the first `|` of a `||`, which is at `bar`.
  HalfOr { bar: usize },
}

// range-set  ::= set ( logical-or set ) *
// logical-or ::= ( ' ' ) * '||' ( ' ' ) *
// set        ::= comparator ( ' ' comparator ) *
// comparator ::= op ? version
struct RangeScanner<'a> {
  text: &'a str,
  sets: Vec<ComparatorSet>,
}

impl<'a> RangeScanner<'a> {
  fn new(text: &'a str) -> Self {
    Self {
      text,
      sets: Vec::new(),
    }
  }

  fn scan(mut self) -> Result<Vec<ComparatorSet>, RangeParseErrorReason> {
    if self.text.trim().is_empty() {
      return Err(RangeParseErrorReason::Empty);
    }

    let text = self.text;
    let mut state = ScanState::Set { start: 0 };
    for (index, c) in text.char_indices() {
      state = match state {
        ScanState::Set { start } => self.on_set(start, index, c)?,
        ScanState::HalfOr { bar } => self.on_half_or(bar, index, c)?,
      };
    }

    match state {
      ScanState::Set { start } => self.push_set(start, text.len())?,
      ScanState::HalfOr { bar } => {
        return Err(RangeParseErrorReason::SingleBar { position: bar });
      }
    }
    Ok(self.sets)
  }

  fn on_set(
    &mut self,
    start: usize,
    index: usize,
    c: char,
  ) -> Result<ScanState, RangeParseErrorReason> {
    if c == '|' {
      self.push_set(start, index)?;
      Ok(ScanState::HalfOr { bar: index })
    } else {
      Ok(ScanState::Set { start })
    }
  }

  fn on_half_or(
    &self,
    bar: usize,
    index: usize,
    c: char,
  ) -> Result<ScanState, RangeParseErrorReason> {
    if c == '|' {
      Ok(ScanState::Set { start: index + 1 })
    } else {
      Err(RangeParseErrorReason::SingleBar { position: bar })
    }
  }

  fn push_set(
    &mut self,
    start: usize,
    end: usize,
  ) -> Result<(), RangeParseErrorReason> {
    let text = &self.text[start..end];
    if text.trim().is_empty() {
      return Err(RangeParseErrorReason::EmptySet { position: start });
    }
    let comparators = text
      .split_whitespace()
      .map(parse_comparator)
      .collect::<Result<Vec<_>, _>>()?;
    self.sets.push(ComparatorSet(comparators));
    Ok(())
  }
}

fn parse_comparator(text: &str) -> Result<Comparator, RangeParseErrorReason> {
  let (version_text, op) = comparator_op(text).map_err(|token| {
    RangeParseErrorReason::UnknownOperator(token.to_string())
  })?;
  let version = Version::parse(version_text)?;
  Ok(Comparator { op, version })
}

#[cfg(test)]
mod test {
  use pretty_assertions::assert_eq;

  use super::*;

  struct RangeTester(Range);

  impl RangeTester {
    fn new(text: &str) -> Self {
      Self(Range::parse(text).unwrap())
    }

    #[track_caller]
    fn matches(&self, version: &str) -> bool {
      self.0.satisfied_by(version).unwrap()
    }

    #[track_caller]
    fn max(&self, candidates: &[&str]) -> String {
      self
        .0
        .max_satisfied_by(candidates.iter().copied())
        .unwrap()
        .to_string()
    }
  }

  fn range(text: &str) -> Range {
    Range::parse(text).unwrap()
  }

  #[track_caller]
  fn parse_err(text: &str) -> RangeParseErrorReason {
    Range::parse(text).unwrap_err().source
  }

  #[test]
  fn less_than() {
    let tester = RangeTester::new("<1.2.3");
    assert!(tester.matches("0.9.6"));
    assert!(!tester.matches("3.2.8"));
    assert!(!tester.matches("1.2.3"));
    assert_eq!(tester.max(&["0.5.2", "4.9.6", "1.0.5"]), "1.0.5");

    let tester = RangeTester::new("<2.8.4-alpha.3");
    assert!(tester.matches("2.8.4-alpha.2"));
    assert!(!tester.matches("2.8.4-beta.1"));
  }

  #[test]
  fn less_than_or_equal() {
    let tester = RangeTester::new("<=1.2.3");
    assert!(tester.matches("0.9.6"));
    assert!(tester.matches("1.2.3"));
    assert!(!tester.matches("3.2.8"));
    assert_eq!(tester.max(&["0.5.2", "4.9.6", "1.0.5", "1.2.3"]), "1.2.3");
  }

  #[test]
  fn greater_than() {
    let tester = RangeTester::new(">1.2.3");
    assert!(tester.matches("3.9.4"));
    assert!(!tester.matches("0.9.6"));
    assert!(!tester.matches("1.2.3"));
    assert_eq!(tester.max(&["4.9.6", "1.0.5", "9.8.6"]), "9.8.6");
  }

  #[test]
  fn greater_than_or_equal() {
    let tester = RangeTester::new(">=1.2.3");
    assert!(tester.matches("3.9.4"));
    assert!(tester.matches("1.2.3"));
    assert!(!tester.matches("0.9.6"));
    assert!(!tester.matches("1.2.3-rc.1"));
    assert_eq!(tester.max(&["4.9.6", "1.0.5", "9.8.6"]), "9.8.6");
  }

  #[test]
  fn equal() {
    let tester = RangeTester::new("=1.2.3");
    assert!(tester.matches("1.2.3"));
    assert!(tester.matches("1.2.3+build"));
    assert!(!tester.matches("0.9.6"));
    assert!(!tester.matches("3.2.1"));

    // no operator means equality
    let tester = RangeTester::new("1.2.3");
    assert!(tester.matches("1.2.3"));
    assert!(!tester.matches("0.9.6"));
    assert!(!tester.matches("3.2.1"));
    assert_eq!(range("1.2.3"), range("=1.2.3"));
  }

  #[test]
  fn multiple_comparators() {
    let tester = RangeTester::new(">4.2.8 <9.6.2");
    assert!(tester.matches("5.8.2"));
    assert!(!tester.matches("4.2.8"));
    assert!(!tester.matches("10.2.4"));

    let tester = RangeTester::new("<=2.9.5   >0.4.2");
    assert!(tester.matches("1.67.2"));
    assert!(tester.matches("2.6.3-rc.5"));
    assert!(!tester.matches("3.74.2"));
  }

  #[test]
  fn logical_or() {
    let tester = RangeTester::new("1.4.6 || >=1.9.2 <3.0.0");
    assert!(tester.matches("1.4.6"));
    assert!(!tester.matches("1.6.0"));
    assert!(tester.matches("2.0.0"));
    assert!(!tester.matches("3.0.0"));
    assert!(!tester.matches("4.1.0"));

    let tester =
      RangeTester::new("1.5.2 || >9.4.2 <12.4.2 || 9.2.5 || >=25.0.0");
    assert!(tester.matches("1.5.2"));
    assert!(tester.matches("9.2.5"));
    assert!(tester.matches("25.0.0"));
    assert!(tester.matches("10.2.4"));
    assert!(!tester.matches("15.67.2"));
    assert!(!tester.matches("5.3.8"));

    // whitespace around the separator is optional
    assert_eq!(range("1.0.0||2.0.0"), range("1.0.0 || 2.0.0"));
    assert_eq!(range("  <1.0.0  ||2.0.0  "), range("<1.0.0 || 2.0.0"));
  }

  #[test]
  fn structure() {
    let range = range(">=1.9.2 <3.0.0 || 1.4.6");
    assert_eq!(range.sets().len(), 2);
    let first = range.sets()[0].comparators();
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].op(), ComparatorOp::GreaterOrEqual);
    assert_eq!(first[0].version().to_string(), "1.9.2");
    assert_eq!(first[1].op(), ComparatorOp::Less);
    assert_eq!(first[1].version().to_string(), "3.0.0");
    let second = range.sets()[1].comparators();
    assert_eq!(
      second,
      &[Comparator::new(
        ComparatorOp::Equal,
        Version::parse("1.4.6").unwrap()
      )]
    );
  }

  #[test]
  fn display() {
    #[track_caller]
    fn run_test(text: &str, expected: &str) {
      let range = range(text);
      assert_eq!(range.to_string(), expected);
      assert_eq!(range.version_text(), text);
    }

    run_test("<1.2.3", "<1.2.3");
    run_test("=1.2.3+build", "1.2.3+build");
    run_test(
      "1.4.6||>=1.9.2    <3.0.0-rc.1",
      "1.4.6 || >=1.9.2 <3.0.0-rc.1",
    );
  }

  #[test]
  fn structural_equality() {
    assert_eq!(range(">4.2.8 <9.6.2"), range(">4.2.8 <9.6.2"));
    assert_ne!(range(">4.2.8 <9.6.2"), range(">4.2.8"));
    assert_ne!(
      range("1.4.6 || >=1.9.2 <3.0.0"),
      range(">1.4.6 || <2.5.4 >2.0.0 || 0.6.3")
    );
    assert_ne!(range(">4.2.8"), range("<1.4.5"));
    // equivalent but differently written ranges are not equal
    assert_ne!(range(">4.2.8 <9.6.2"), range("<9.6.2 >4.2.8"));
    assert_ne!(range(">=1.0.0"), range(">1.0.0 || 1.0.0"));
    // metadata never takes part in comparisons
    assert_eq!(range("1.0.0+a"), range("1.0.0+b"));

    let r = range(">6.8.3 <9.1.3");
    assert!(r.eq_text(">6.8.3 <9.1.3").unwrap());
    assert!(!r.eq_text(">6.8.3").unwrap());
    assert_eq!(
      r.eq_text(">6.8.3 |").unwrap_err().kind(),
      ParseErrorKind::RangeToken
    );
  }

  #[test]
  fn satisfied_by_parsed_versions() {
    let range = range("<1.2.3");
    let version = Version::parse("1.0.0").unwrap();
    assert!(range.satisfies(&version));
    assert!(range.satisfied_by(&version).unwrap());
    assert!(range.satisfied_by(version).unwrap());
    assert!(range.satisfied_by(String::from("0.1.0")).unwrap());

    let err = range.satisfied_by("1.2").unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::Structural);
  }

  #[test]
  fn max_satisfying() {
    let range = range(">=1.0.0 <2.0.0 || 3.0.0-rc.1");
    let versions = ["0.9.0", "1.5.0", "1.9.9", "3.0.0-rc.1", "2.0.0"]
      .map(|v| Version::parse(v).unwrap());
    assert_eq!(
      range.max_satisfying(&versions).map(|v| v.to_string()),
      Some("3.0.0-rc.1".to_string())
    );
    assert_eq!(
      range.max_satisfied_by(&versions).unwrap().to_string(),
      "3.0.0-rc.1"
    );
    assert_eq!(range.max_satisfying(&versions[..1]), None);

    // the first of equal versions is kept
    let versions = ["1.5.0+first", "1.5.0+second"]
      .map(|v| Version::parse(v).unwrap());
    assert_eq!(range.max_satisfying(&versions).unwrap().meta(), "first");
    assert_eq!(range.max_satisfied_by(versions).unwrap().meta(), "first");
  }

  #[test]
  fn max_satisfied_by_errors() {
    let range = range("=1.2.3");
    let err = range
      .max_satisfied_by(["4.9.6", "1.0.5", "9.8.6"])
      .unwrap_err();
    assert_eq!(
      err,
      MaxSatisfyingError::NoneSatisfied {
        range: "=1.2.3".to_string()
      }
    );
    assert_eq!(
      err.to_string(),
      "No version satisfies the range '=1.2.3'."
    );

    let err = range
      .max_satisfied_by(Vec::<String>::new())
      .unwrap_err();
    assert!(matches!(err, MaxSatisfyingError::NoneSatisfied { .. }));

    // an unparsable candidate aborts even after a match
    let err = range
      .max_satisfied_by(["1.2.3", "1.2.x"])
      .unwrap_err();
    match err {
      MaxSatisfyingError::InvalidVersion(err) => {
        assert_eq!(err.text, "1.2.x");
      }
      err => panic!("unexpected error: {err}"),
    }
  }

  #[test]
  fn parse_errors() {
    use RangeParseErrorReason::*;

    assert_eq!(parse_err(""), Empty);
    assert_eq!(parse_err("   "), Empty);
    assert_eq!(parse_err("1.0.0 | 2.0.0"), SingleBar { position: 6 });
    assert_eq!(parse_err("1.0.0|"), SingleBar { position: 5 });
    assert_eq!(parse_err("1.0.0 |||2.0.0"), EmptySet { position: 8 });
    assert_eq!(parse_err("|| 1.0.0"), EmptySet { position: 0 });
    assert_eq!(parse_err("1.0.0 ||"), EmptySet { position: 8 });
    assert_eq!(parse_err("1.0.0 ||   || 2.0.0"), EmptySet { position: 8 });
    assert_eq!(parse_err("~1.2.3"), UnknownOperator("~".to_string()));
    assert_eq!(
      parse_err(">=1.0.0 =>2.0.0"),
      UnknownOperator("=>".to_string())
    );

    // the first problem from the left is reported
    assert_eq!(parse_err("~1.2.3 || 1.0.0 | 2"), UnknownOperator("~".to_string()));
    match parse_err(">=1.2 | 2.0.0") {
      InvalidVersion(err) => assert_eq!(err.text, "1.2"),
      err => panic!("unexpected error: {err}"),
    }
  }

  #[test]
  fn parse_error_kinds() {
    #[track_caller]
    fn run_test(text: &str, kind: ParseErrorKind) {
      assert_eq!(Range::parse(text).unwrap_err().kind(), kind, "{text}");
    }

    run_test("", ParseErrorKind::Structural);
    run_test("<", ParseErrorKind::Structural);
    run_test(">=1.2", ParseErrorKind::Structural);
    run_test("1.0.0 | 2.0.0", ParseErrorKind::RangeToken);
    run_test("1.0.0 || || 2.0.0", ParseErrorKind::RangeToken);
    run_test("!1.0.0", ParseErrorKind::Operator);
    run_test("<01.0.0", ParseErrorKind::NumericField);
    run_test("1.0.0-rc.0", ParseErrorKind::Prerelease);
    run_test("1.0.0+a_b", ParseErrorKind::Metadata);
  }

  #[test]
  fn error_message() {
    assert_eq!(
      Range::parse("1.0.0 | 2.0.0").unwrap_err().to_string(),
      "Invalid version range '1.0.0 | 2.0.0'. Expected '||' at position 6, but found a single '|'."
    );
    assert_eq!(
      Range::parse("<1.2").unwrap_err().to_string(),
      "Invalid version range '<1.2'. Invalid version '1.2'. Missing patch version number."
    );
  }

  #[test]
  fn serialize_deserialize() {
    let range: Range =
      serde_json::from_str("\"1.4.6 ||  >=1.9.2 <3.0.0\"").unwrap();
    assert!(range.satisfies(&Version::parse("2.0.0").unwrap()));
    // serializes the text it was parsed from
    assert_eq!(
      serde_json::to_string(&range).unwrap(),
      "\"1.4.6 ||  >=1.9.2 <3.0.0\""
    );
    assert!(serde_json::from_str::<Range>("\"1.4.6 | 2.0.0\"").is_err());
  }
}
