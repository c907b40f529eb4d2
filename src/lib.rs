// Copyright 2018-2023 the Deno authors. All rights reserved. MIT license.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::num::NonZeroU64;
use std::str::FromStr;

use capacity_builder::CapacityDisplay;
use capacity_builder::StringAppendable;
use capacity_builder::StringBuilder;
use capacity_builder::StringType;
use ecow::EcoString;
use serde::Deserialize;
use serde::Serialize;

mod common;
mod range;
mod version;

pub use self::range::Comparator;
pub use self::range::ComparatorOp;
pub use self::range::ComparatorSet;
pub use self::range::MaxSatisfyingError;
pub use self::range::Range;
pub use self::range::RangeParseError;
pub use self::range::RangeParseErrorReason;
pub use self::version::VersionParseError;
pub use self::version::VersionParseErrorReason;

/// The category of a version or range parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
  /// A mandatory part (major, minor, patch, or a comparator) is missing.
  Structural,
  /// A numeric field has a non-digit, a leading zero, or overflows.
  NumericField,
  /// The pre-release type is unknown or its number is zero.
  Prerelease,
  /// The build metadata is empty or has a disallowed character.
  Metadata,
  /// A comparator has an unrecognized operator.
  Operator,
  /// A lone `|` or an empty comparator set in a range.
  RangeToken,
}

/// A numeric field of a version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionField {
  Major,
  Minor,
  Patch,
  PrereleaseNumber,
}

impl fmt::Display for VersionField {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      VersionField::Major => "major",
      VersionField::Minor => "minor",
      VersionField::Patch => "patch",
      VersionField::PrereleaseNumber => "pre-release",
    })
  }
}

/// The closed set of pre-release types, declared in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrereleaseKind {
  Alpha,
  Beta,
  Rc,
}

impl PrereleaseKind {
  pub fn from_type(text: &str) -> Option<Self> {
    match text {
      "alpha" => Some(Self::Alpha),
      "beta" => Some(Self::Beta),
      "rc" => Some(Self::Rc),
      _ => None,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Alpha => "alpha",
      Self::Beta => "beta",
      Self::Rc => "rc",
    }
  }

  /// Precedence of the type. Lower weights sort first.
  pub fn weight(self) -> u8 {
    match self {
      Self::Alpha => 0,
      Self::Beta => 1,
      Self::Rc => 2,
    }
  }
}

impl fmt::Display for PrereleaseKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A pre-release qualifier such as `beta` or `rc.2`.
///
/// A missing number sorts before any explicit number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prerelease {
  pub kind: PrereleaseKind,
  pub number: Option<NonZeroU64>,
}

impl Prerelease {
  pub fn new(kind: PrereleaseKind, number: Option<NonZeroU64>) -> Self {
    Self { kind, number }
  }
}

impl PartialOrd for Prerelease {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for Prerelease {
  fn cmp(&self, other: &Self) -> Ordering {
    match self.kind.weight().cmp(&other.kind.weight()) {
      Ordering::Equal => match (self.number, other.number) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.cmp(&b),
      },
      ordering => ordering,
    }
  }
}

/// A parsed version of the form
/// `MAJOR.MINOR.PATCH[-TYPE[.NUMBER]][+META]`.
///
/// Equality, ordering, and hashing ignore the build metadata.
#[derive(Clone, Debug, CapacityDisplay)]
pub struct Version {
  major: u64,
  minor: u64,
  patch: u64,
  prerelease: Option<Prerelease>,
  meta: EcoString,
}

impl Default for Version {
  fn default() -> Self {
    Self::new(0, 1, 0)
  }
}

impl Version {
  pub fn new(major: u64, minor: u64, patch: u64) -> Self {
    Self {
      major,
      minor,
      patch,
      prerelease: None,
      meta: EcoString::new(),
    }
  }

  pub fn with_prerelease(mut self, prerelease: Prerelease) -> Self {
    self.prerelease = Some(prerelease);
    self
  }

  /// Parse a version.
  pub fn parse(text: &str) -> Result<Version, VersionParseError> {
    version::parse_version(text)
  }

  /// Replaces this version with the one parsed from `text`.
  ///
  /// On failure the current value is left as it was.
  pub fn assign(&mut self, text: &str) -> Result<(), VersionParseError> {
    *self = Self::parse(text)?;
    Ok(())
  }

  pub fn major(&self) -> u64 {
    self.major
  }

  pub fn minor(&self) -> u64 {
    self.minor
  }

  pub fn patch(&self) -> u64 {
    self.patch
  }

  pub fn prerelease(&self) -> Option<&Prerelease> {
    self.prerelease.as_ref()
  }

  /// Build metadata, or an empty string when there is none.
  pub fn meta(&self) -> &str {
    self.meta.as_str()
  }

  pub fn is_prerelease(&self) -> bool {
    self.prerelease.is_some()
  }

  /// Compares against a version that may still need parsing.
  pub fn compare<'a>(
    &self,
    other: impl VersionInput<'a>,
  ) -> Result<Ordering, VersionParseError> {
    let other = other.into_version()?;
    Ok(self.cmp(&*other))
  }

  /// Gets if this equals the version written in `text`.
  pub fn eq_text(&self, text: &str) -> Result<bool, VersionParseError> {
    Ok(*self == Self::parse(text)?)
  }

  pub(crate) fn from_parts(
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Option<Prerelease>,
    meta: &str,
  ) -> Self {
    Self {
      major,
      minor,
      patch,
      prerelease,
      meta: EcoString::from(meta),
    }
  }
}

impl FromStr for Version {
  type Err = VersionParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
  }
}

impl<'a> StringAppendable<'a> for &'a Version {
  fn append_to_builder<TString: StringType>(
    self,
    builder: &mut StringBuilder<'a, TString>,
  ) {
    builder.append(self.major);
    builder.append('.');
    builder.append(self.minor);
    builder.append('.');
    builder.append(self.patch);
    if let Some(prerelease) = &self.prerelease {
      builder.append('-');
      builder.append(prerelease.kind.as_str());
      if let Some(number) = prerelease.number {
        builder.append('.');
        builder.append(number.get());
      }
    }
    if !self.meta.is_empty() {
      builder.append('+');
      builder.append(self.meta.as_str());
    }
  }
}

impl Serialize for Version {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

impl<'de> Deserialize<'de> for Version {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: serde::Deserializer<'de>,
  {
    let text = String::deserialize(deserializer)?;
    match Version::parse(&text) {
      Ok(version) => Ok(version),
      Err(err) => Err(serde::de::Error::custom(err)),
    }
  }
}

impl PartialEq for Version {
  fn eq(&self, other: &Self) -> bool {
    self.major == other.major
      && self.minor == other.minor
      && self.patch == other.patch
      && self.prerelease == other.prerelease
  }
}

impl Eq for Version {}

impl Hash for Version {
  fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
    // must stay consistent with `Eq`, so the metadata is skipped
    self.major.hash(state);
    self.minor.hash(state);
    self.patch.hash(state);
    self.prerelease.hash(state);
  }
}

impl std::cmp::PartialOrd for Version {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl std::cmp::Ord for Version {
  fn cmp(&self, other: &Self) -> Ordering {
    let cmp_result = self.major.cmp(&other.major);
    if cmp_result != Ordering::Equal {
      return cmp_result;
    }

    let cmp_result = self.minor.cmp(&other.minor);
    if cmp_result != Ordering::Equal {
      return cmp_result;
    }

    let cmp_result = self.patch.cmp(&other.patch);
    if cmp_result != Ordering::Equal {
      return cmp_result;
    }

    // a pre-release always precedes the release it qualifies
    match (&self.prerelease, &other.prerelease) {
      (None, None) => Ordering::Equal,
      (Some(_), None) => Ordering::Less,
      (None, Some(_)) => Ordering::Greater,
      (Some(a), Some(b)) => a.cmp(b),
    }
  }
}

/// A version that is either already parsed or still raw text.
///
/// Text is parsed on conversion and parse errors are returned as is.
pub trait VersionInput<'a> {
  fn into_version(self) -> Result<Cow<'a, Version>, VersionParseError>;
}

impl<'a> VersionInput<'a> for &'a Version {
  fn into_version(self) -> Result<Cow<'a, Version>, VersionParseError> {
    Ok(Cow::Borrowed(self))
  }
}

impl<'a> VersionInput<'a> for Version {
  fn into_version(self) -> Result<Cow<'a, Version>, VersionParseError> {
    Ok(Cow::Owned(self))
  }
}

impl<'a> VersionInput<'a> for &str {
  fn into_version(self) -> Result<Cow<'a, Version>, VersionParseError> {
    Version::parse(self).map(Cow::Owned)
  }
}

impl<'a> VersionInput<'a> for &String {
  fn into_version(self) -> Result<Cow<'a, Version>, VersionParseError> {
    Version::parse(self).map(Cow::Owned)
  }
}

impl<'a> VersionInput<'a> for String {
  fn into_version(self) -> Result<Cow<'a, Version>, VersionParseError> {
    Version::parse(&self).map(Cow::Owned)
  }
}
