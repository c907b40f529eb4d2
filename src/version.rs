// Copyright 2018-2023 the Deno authors. All rights reserved. MIT license.

use std::num::NonZeroU64;

use deno_error::JsError;
use thiserror::Error;
use tracing::trace;

use crate::common::is_meta_char;
use crate::ParseErrorKind;
use crate::Prerelease;
use crate::PrereleaseKind;
use crate::Version;
use crate::VersionField;

#[derive(Error, Debug, Clone, JsError, PartialEq, Eq)]
#[class(type)]
#[error("Invalid version '{text}'. {source}")]
pub struct VersionParseError {
  pub text: String,
  /// Byte offset at which the problem was found.
  pub position: usize,
  #[source]
  pub source: VersionParseErrorReason,
}

impl VersionParseError {
  pub fn kind(&self) -> ParseErrorKind {
    self.source.kind()
  }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParseErrorReason {
  #[error("Missing {0} version number.")]
  MissingField(VersionField),
  #[error("Unexpected character '{found}' in {field} version number.")]
  UnexpectedCharacter { field: VersionField, found: char },
  #[error("Leading zeros are not allowed in the {0} version number.")]
  LeadingZero(VersionField),
  #[error("The {0} version number is too large.")]
  TooLarge(VersionField),
  #[error("Missing pre-release type.")]
  MissingPrereleaseType,
  #[error(
    "Unknown pre-release type '{0}'. Expected 'alpha', 'beta', or 'rc'."
  )]
  UnknownPrereleaseType(String),
  #[error("Pre-release number must not be 0.")]
  ZeroPrereleaseNumber,
  #[error("Missing build metadata after '+'.")]
  MissingMetadata,
  #[error("Unexpected character '{0}' in build metadata.")]
  InvalidMetadataCharacter(char),
}

impl VersionParseErrorReason {
  pub fn kind(&self) -> ParseErrorKind {
    match self {
      Self::MissingField(_) => ParseErrorKind::Structural,
      Self::UnexpectedCharacter { .. }
      | Self::LeadingZero(_)
      | Self::TooLarge(_) => ParseErrorKind::NumericField,
      Self::MissingPrereleaseType
      | Self::UnknownPrereleaseType(_)
      | Self::ZeroPrereleaseNumber => ParseErrorKind::Prerelease,
      Self::MissingMetadata | Self::InvalidMetadataCharacter(_) => {
        ParseErrorKind::Metadata
      }
    }
  }
}

// version    ::= major '.' minor '.' patch ( '-' pretype ( '.' prenr )? )?
//                ( '+' meta )?
// major      ::= nr
// minor      ::= nr
// patch      ::= nr
// nr         ::= '0' | ['1'-'9'] ( ['0'-'9'] ) *
// pretype    ::= 'alpha' | 'beta' | 'rc'
// prenr      ::= ['1'-'9'] ( ['0'-'9'] ) *
// meta       ::= [-.0-9A-Za-z]+
pub(crate) fn parse_version(
  text: &str,
) -> Result<Version, VersionParseError> {
  let mut scanner = VersionScanner::new(text);
  for (index, c) in text.char_indices() {
    scanner
      .step(index, c)
      .map_err(|source| new_error(text, index, source))?;
  }
  scanner
    .finish()
    .map_err(|source| new_error(text, text.len(), source))
}

fn new_error(
  text: &str,
  position: usize,
  source: VersionParseErrorReason,
) -> VersionParseError {
  trace!(text, position, %source, "rejected version");
  VersionParseError {
    text: text.to_string(),
    position,
    source,
  }
}

/// The part of the version currently being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
  Major,
  Minor,
  Patch,
  PrereleaseType,
  PrereleaseNumber,
  Metadata,
}

struct VersionScanner<'a> {
  text: &'a str,
  state: ScanState,
  /// Value of the numeric field being accumulated, `None` before its
  /// first digit.
  number: Option<u64>,
  /// Start of the text field (pre-release type or metadata) being scanned.
  field_start: usize,
  major: u64,
  minor: u64,
  patch: u64,
  prerelease_kind: Option<PrereleaseKind>,
  prerelease_number: Option<NonZeroU64>,
  meta: &'a str,
}

impl<'a> VersionScanner<'a> {
  fn new(text: &'a str) -> Self {
    Self {
      text,
      state: ScanState::Major,
      number: None,
      field_start: 0,
      major: 0,
      minor: 0,
      patch: 0,
      prerelease_kind: None,
      prerelease_number: None,
      meta: "",
    }
  }

  fn step(
    &mut self,
    index: usize,
    c: char,
  ) -> Result<(), VersionParseErrorReason> {
    match self.state {
      ScanState::Major => self.on_major(c),
      ScanState::Minor => self.on_minor(c),
      ScanState::Patch => self.on_patch(index, c),
      ScanState::PrereleaseType => self.on_prerelease_type(index, c),
      ScanState::PrereleaseNumber => self.on_prerelease_number(index, c),
      ScanState::Metadata => self.on_metadata(c),
    }
  }

  fn on_major(&mut self, c: char) -> Result<(), VersionParseErrorReason> {
    match c {
      '.' => {
        self.major = self.close_number(VersionField::Major)?;
        self.state = ScanState::Minor;
        Ok(())
      }
      '-' | '+' => Err(self.missing_after(VersionField::Major)),
      _ => self.push_digit(VersionField::Major, c),
    }
  }

  fn on_minor(&mut self, c: char) -> Result<(), VersionParseErrorReason> {
    match c {
      '.' => {
        self.minor = self.close_number(VersionField::Minor)?;
        self.state = ScanState::Patch;
        Ok(())
      }
      '-' | '+' => Err(self.missing_after(VersionField::Minor)),
      _ => self.push_digit(VersionField::Minor, c),
    }
  }

  fn on_patch(
    &mut self,
    index: usize,
    c: char,
  ) -> Result<(), VersionParseErrorReason> {
    match c {
      '-' => {
        self.patch = self.close_number(VersionField::Patch)?;
        self.start_text_field(ScanState::PrereleaseType, index);
        Ok(())
      }
      '+' => {
        self.patch = self.close_number(VersionField::Patch)?;
        self.start_text_field(ScanState::Metadata, index);
        Ok(())
      }
      _ => self.push_digit(VersionField::Patch, c),
    }
  }

  fn on_prerelease_type(
    &mut self,
    index: usize,
    c: char,
  ) -> Result<(), VersionParseErrorReason> {
    match c {
      '.' => {
        self.close_prerelease_type(index)?;
        self.state = ScanState::PrereleaseNumber;
        Ok(())
      }
      '+' => {
        self.close_prerelease_type(index)?;
        self.start_text_field(ScanState::Metadata, index);
        Ok(())
      }
      // validated against the known types once the field closes
      _ => Ok(()),
    }
  }

  fn on_prerelease_number(
    &mut self,
    index: usize,
    c: char,
  ) -> Result<(), VersionParseErrorReason> {
    match c {
      '+' => {
        self.close_prerelease_number()?;
        self.start_text_field(ScanState::Metadata, index);
        Ok(())
      }
      _ => self.push_digit(VersionField::PrereleaseNumber, c),
    }
  }

  fn on_metadata(&self, c: char) -> Result<(), VersionParseErrorReason> {
    if is_meta_char(c) {
      Ok(())
    } else {
      Err(VersionParseErrorReason::InvalidMetadataCharacter(c))
    }
  }

  fn finish(mut self) -> Result<Version, VersionParseErrorReason> {
    match self.state {
      ScanState::Major => return Err(self.missing_after(VersionField::Major)),
      ScanState::Minor => return Err(self.missing_after(VersionField::Minor)),
      ScanState::Patch => {
        self.patch = self.close_number(VersionField::Patch)?;
      }
      ScanState::PrereleaseType => {
        self.close_prerelease_type(self.text.len())?;
      }
      ScanState::PrereleaseNumber => {
        self.close_prerelease_number()?;
      }
      ScanState::Metadata => {
        let meta = &self.text[self.field_start..];
        if meta.is_empty() {
          return Err(VersionParseErrorReason::MissingMetadata);
        }
        self.meta = meta;
      }
    }

    let prerelease = self
      .prerelease_kind
      .map(|kind| Prerelease::new(kind, self.prerelease_number));
    Ok(Version::from_parts(
      self.major,
      self.minor,
      self.patch,
      prerelease,
      self.meta,
    ))
  }

  /// Consumes one character of a numeric field.
  fn push_digit(
    &mut self,
    field: VersionField,
    c: char,
  ) -> Result<(), VersionParseErrorReason> {
    let Some(digit) = c.to_digit(10) else {
      return Err(VersionParseErrorReason::UnexpectedCharacter {
        field,
        found: c,
      });
    };
    let value = match self.number {
      None => u64::from(digit),
      Some(0) => return Err(VersionParseErrorReason::LeadingZero(field)),
      Some(value) => value
        .checked_mul(10)
        .and_then(|value| value.checked_add(u64::from(digit)))
        .ok_or(VersionParseErrorReason::TooLarge(field))?,
    };
    self.number = Some(value);
    Ok(())
  }

  fn close_number(
    &mut self,
    field: VersionField,
  ) -> Result<u64, VersionParseErrorReason> {
    self
      .number
      .take()
      .ok_or(VersionParseErrorReason::MissingField(field))
  }

  /// Error for input that ends the version while `field` is being scanned.
  ///
  /// An empty field is the one that is missing, otherwise it's the next one.
  fn missing_after(&self, field: VersionField) -> VersionParseErrorReason {
    let missing = match (self.number, field) {
      (None, field) => field,
      (Some(_), VersionField::Major) => VersionField::Minor,
      (Some(_), _) => VersionField::Patch,
    };
    VersionParseErrorReason::MissingField(missing)
  }

  fn start_text_field(&mut self, state: ScanState, separator_index: usize) {
    self.state = state;
    // separators are ascii, so this is a char boundary
    self.field_start = separator_index + 1;
  }

  fn close_prerelease_type(
    &mut self,
    end: usize,
  ) -> Result<(), VersionParseErrorReason> {
    let text = &self.text[self.field_start..end];
    if text.is_empty() {
      return Err(VersionParseErrorReason::MissingPrereleaseType);
    }
    match PrereleaseKind::from_type(text) {
      Some(kind) => {
        self.prerelease_kind = Some(kind);
        Ok(())
      }
      None => Err(VersionParseErrorReason::UnknownPrereleaseType(
        text.to_string(),
      )),
    }
  }

  fn close_prerelease_number(
    &mut self,
  ) -> Result<(), VersionParseErrorReason> {
    let value = self.close_number(VersionField::PrereleaseNumber)?;
    let number = NonZeroU64::new(value)
      .ok_or(VersionParseErrorReason::ZeroPrereleaseNumber)?;
    self.prerelease_number = Some(number);
    Ok(())
  }
}
