use itertools::Itertools;
use regex::Regex;
use thiserror::Error;

use crate::automaton::{self, Automaton};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
  #[error("missing `x = <width>, rule = <number>` header line")]
  MissingHeader,
  #[error("number {0:?} in pattern is out of range")]
  NumberOutOfRange(String),
  #[error("pattern has {0} cells, more than the declared width")]
  RowTooLong(usize),
  #[error("invalid character {0:?} in pattern")]
  UnexpectedChar(char),
  #[error("pattern is not terminated by `!`")]
  UnexpectedEof,
  #[error(transparent)]
  Construct(#[from] automaton::Error),
}

/// Reads an automaton from a one-row RLE string.
///
/// RLE format: <https://www.conwaylife.com/wiki/Run_Length_Encoded>,
/// restricted to a single row, with the header carrying the rule number
/// instead of a birth/survival string. `#` comment lines before the
/// header are skipped, and cells beyond the encoded prefix are dead.
pub fn read(src: impl AsRef<str>) -> Result<Automaton, ParseError> {
  let header_re = Regex::new(r"^x = (\d+), rule = (\d+)\b").unwrap();
  let mut src = src.as_ref().trim_start();

  while src.starts_with('#') {
    src = match src.find('\n') {
      Some(pos) => src[pos + 1..].trim_start(),
      None => "",
    };
  }

  let caps = header_re.captures(src).ok_or(ParseError::MissingHeader)?;
  let width = parse_num(&caps[1])?;
  let number = parse_num(&caps[2])?;

  src = &src[src.find('\n').unwrap_or(src.len())..];

  let mut row = Vec::new();
  loop {
    src = src.trim_start();

    let c = src.chars().next().ok_or(ParseError::UnexpectedEof)?;
    if c == '!' {
      break;
    }

    let mut num = 1;
    if c.is_ascii_digit() {
      let num_len = src.find(|c: char| !c.is_ascii_digit()).unwrap_or(src.len());
      num = src[..num_len]
        .parse()
        .map_err(|_| ParseError::NumberOutOfRange(src[..num_len].to_owned()))?;
      src = &src[num_len..];
    }

    match src.chars().next() {
      Some('b') => row.resize(row.len() + num, 0),
      Some('o') => row.resize(row.len() + num, 1),
      Some(c) => return Err(ParseError::UnexpectedChar(c)),
      None => return Err(ParseError::UnexpectedEof),
    }

    src = &src[1..];
  }

  if row.len() as i64 > width as i64 {
    return Err(ParseError::RowTooLong(row.len()));
  }
  row.resize(width as usize, 0);

  Ok(Automaton::with_seed(number, width, &row)?)
}

/// Writes the current generation of an automaton as a one-row RLE string.
///
/// Trailing dead cells are left implicit, and lines are wrapped around
/// 70 characters like conwaylife.com pattern files.
pub fn write(automaton: &Automaton) -> String {
  let mut output = format!("x = {}, rule = {}\n", automaton.width(), automaton.rule());

  let mut runs = Vec::new();
  for (cell, group) in &automaton.cells().iter().group_by(|&&c| c) {
    runs.push((cell, group.count()));
  }
  if let Some(&(0, _)) = runs.last() {
    runs.pop();
  }

  for (cell, num) in runs {
    let unit = if cell == 0 { RleUnit::Dead } else { RleUnit::Alive };
    unit.write(num, &mut output);
  }
  RleUnit::End.write(1, &mut output);

  output.push('\n');
  output
}

fn parse_num(digits: &str) -> Result<i32, ParseError> {
  digits
    .parse()
    .map_err(|_| ParseError::NumberOutOfRange(digits.to_owned()))
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum RleUnit {
  Dead,
  Alive,
  End,
}

impl RleUnit {
  fn write(&self, num: usize, s: &mut String) {
    let c = match self {
      Self::Dead => 'b',
      Self::Alive => 'o',
      Self::End => '!',
    };

    let buf = if num == 1 {
      c.to_string()
    } else {
      format!("{}{}", num, c)
    };

    if s.len() - s.rfind('\n').unwrap() + buf.len() > 71 {
      s.push('\n');
    }

    s.push_str(&buf);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::automaton::Error;
  use pretty_assertions::assert_eq;

  #[test]
  fn read_single_cell() {
    let auto = read("x = 7, rule = 90\n3bo!\n").unwrap();
    assert_eq!(auto.cells(), &[0, 0, 0, 1, 0, 0, 0]);
    assert_eq!(auto.rule().number(), 90);
    assert_eq!(auto.width(), 7);
    assert_eq!(auto.generation(), 0);
  }

  #[test]
  fn read_pads_trailing_dead_cells() {
    let auto = read("x = 6, rule = 30\no2bo!\n").unwrap();
    assert_eq!(auto.cells(), &[1, 0, 0, 1, 0, 0]);
  }

  #[test]
  fn read_skips_comment_lines() {
    let src = r"
#N single cell
#C seeded in the middle
x = 5, rule = 110
2bo!
".trim_start_matches('\n');
    let auto = read(src).unwrap();
    assert_eq!(auto.cells(), &[0, 0, 1, 0, 0]);
    assert_eq!(auto.rule().number(), 110);
  }

  #[test]
  fn read_accepts_whitespace_between_runs() {
    let auto = read("x = 7, rule = 90\n3b\n o !\n").unwrap();
    assert_eq!(auto.cells(), &[0, 0, 0, 1, 0, 0, 0]);
  }

  #[test]
  fn read_rejects_a_missing_header() {
    assert_eq!(read("3bo!\n").unwrap_err(), ParseError::MissingHeader);
    assert_eq!(read("x = 7\n3bo!\n").unwrap_err(), ParseError::MissingHeader);
  }

  #[test]
  fn read_rejects_an_unterminated_pattern() {
    assert_eq!(read("x = 7, rule = 90\n3bo").unwrap_err(), ParseError::UnexpectedEof);
    assert_eq!(read("x = 7, rule = 90\n3bo2").unwrap_err(), ParseError::UnexpectedEof);
  }

  #[test]
  fn read_rejects_foreign_characters() {
    let err = read("x = 7, rule = 90\n3bq!\n").unwrap_err();
    assert_eq!(err, ParseError::UnexpectedChar('q'));
    // A count must be followed by a tag, not the terminator.
    let err = read("x = 7, rule = 90\nbo3!\n").unwrap_err();
    assert_eq!(err, ParseError::UnexpectedChar('!'));
  }

  #[test]
  fn read_rejects_rows_longer_than_the_width() {
    let err = read("x = 3, rule = 90\n5o!\n").unwrap_err();
    assert_eq!(err, ParseError::RowTooLong(5));
  }

  #[test]
  fn read_rejects_bad_headers_through_construction() {
    let err = read("x = 7, rule = 256\no!\n").unwrap_err();
    assert_eq!(err, ParseError::Construct(Error::InvalidRuleNumber(256)));
    let err = read("x = 0, rule = 90\n!\n").unwrap_err();
    assert_eq!(err, ParseError::Construct(Error::InvalidWidth(0)));
  }

  #[test]
  fn write_elides_trailing_dead_cells() {
    let auto = Automaton::new(90, 7).unwrap();
    assert_eq!(write(&auto), "x = 7, rule = 90\n3bo!\n");
  }

  #[test]
  fn write_an_all_dead_row() {
    let auto = Automaton::with_seed(30, 5, &[]).unwrap();
    assert_eq!(write(&auto), "x = 5, rule = 30\n!\n");
  }

  #[test]
  fn write_wraps_long_patterns() {
    let seed: Vec<u8> = (0..90).map(|i| (i % 2 == 0) as u8).collect();
    let auto = Automaton::with_seed(30, 90, &seed).unwrap();
    let expected = r"
x = 90, rule = 30
obobobobobobobobobobobobobobobobobobobobobobobobobobobobobobobobobobob
obobobobobobobobobo!
".trim_start_matches('\n');
    assert_eq!(write(&auto), expected);
  }

  #[test]
  fn read_write_round_trip() {
    for src in &[
      "x = 7, rule = 90\n3bo!\n",
      "x = 6, rule = 30\n2o2b2o!\n",
      "x = 12, rule = 110\nob2o3b3o!\n",
      "x = 5, rule = 0\n!\n",
    ] {
      let auto = read(*src).unwrap();
      assert_eq!(&write(&auto), src);
    }
  }
}
