// Copyright 2018-2023 the Deno authors. All rights reserved. MIT license.

use monch::*;

use crate::ComparatorOp;

// meta ::= [-.0-9A-Za-z]+
pub fn is_meta_char(c: char) -> bool {
  c.is_ascii_alphanumeric() || matches!(c, '-' | '.')
}

// op ::= '<=' | '>=' | '<' | '>' | '='
fn op(input: &str) -> ParseResult<ComparatorOp> {
  // two character operators are tried first so `<=` never reads as `<`
  or5(
    map(tag(">="), |_| ComparatorOp::GreaterOrEqual),
    map(tag("<="), |_| ComparatorOp::LessOrEqual),
    map(ch('<'), |_| ComparatorOp::Less),
    map(ch('>'), |_| ComparatorOp::Greater),
    map(ch('='), |_| ComparatorOp::Equal),
  )(input)
}

fn op_token(input: &str) -> ParseResult<&str> {
  substring(skip_while(|c| !c.is_ascii_alphanumeric()))(input)
}

/// Splits a comparator into its operator and the remaining version text.
///
/// No operator means `=`. An operator prefix that isn't exactly one of the
/// known operators is returned as the error.
pub fn comparator_op(input: &str) -> Result<(&str, ComparatorOp), &str> {
  let Ok((rest, token)) = op_token(input) else {
    return Err(input);
  };
  if token.is_empty() {
    return Ok((input, ComparatorOp::Equal));
  }
  match op(token) {
    Ok(("", kind)) => Ok((rest, kind)),
    _ => Err(token),
  }
}
