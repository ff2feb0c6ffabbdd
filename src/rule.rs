use std::fmt::{self, Display};

use crate::automaton::Error;

/// An elementary cellular automaton rule, i.e. a Wolfram code in `0..=255`.
///
/// # Bit-neighborhood correspondence
///
/// The eight bits of the rule number are the next-state table. A cell's
/// neighborhood `(left, middle, right)` is read as a 3-bit number with
/// `left` in the highest bit, and that number indexes the table:
///
/// ```ignored
/// neighborhood  111 110 101 100 011 010 001 000
/// table index     7   6   5   4   3   2   1   0
/// rule 90         0   1   0   1   1   0   1   0
/// ```
///
/// I.e. rule 90 is `0b01011010`, so a cell whose neighborhood reads
/// `0b100` becomes live because bit 4 of 90 is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
  number: u8,
  table: [u8; 8],
}

pub const RULE_30: Rule = Rule::from_number(30);
pub const RULE_90: Rule = Rule::from_number(90);
pub const RULE_110: Rule = Rule::from_number(110);

const fn compute_table(number: u8) -> [u8; 8] {
  let mut table = [0u8; 8];
  let mut i = 0;
  while i < 8 {
    table[i] = number >> i & 1;
    i += 1;
  }
  table
}

impl Rule {
  /// Decodes a rule number, rejecting anything outside `0..=255`.
  pub fn new(number: i32) -> Result<Self, Error> {
    if number < 0 || number > 255 {
      return Err(Error::InvalidRuleNumber(number));
    }
    Ok(Self::from_number(number as u8))
  }

  pub const fn from_number(number: u8) -> Self {
    Self {
      number,
      table: compute_table(number),
    }
  }

  /// Next state of a cell with the given neighborhood. Nonzero cell
  /// values count as live.
  pub fn next_state(&self, left: u8, middle: u8, right: u8) -> u8 {
    let v = (left != 0) as usize * 4 + (middle != 0) as usize * 2 + (right != 0) as usize;
    self.table[v]
  }

  pub fn number(&self) -> u8 {
    self.number
  }

  /// The next-state table, indexed by neighborhood value.
  pub fn table(&self) -> &[u8; 8] {
    &self.table
  }
}

impl Display for Rule {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self.number)
  }
}
