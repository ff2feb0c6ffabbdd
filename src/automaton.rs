use log::warn;
use thiserror::Error;

use crate::rule::Rule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
  #[error("invalid rule number {0}, expected an integer in 0..=255")]
  InvalidRuleNumber(i32),
  #[error("invalid width {0}, expected a positive integer")]
  InvalidWidth(i32),
}

/// A one-dimensional two-state cellular automaton on a ring of cells.
///
/// The ring has a fixed width and wraps around, so the left neighbor of
/// cell 0 is the last cell. Each [`step`](Automaton::step) computes every
/// next state from the current generation, then replaces the whole
/// generation at once. Only the current generation is kept.
#[derive(Debug, Clone)]
pub struct Automaton {
  rule: Rule,
  width: usize,
  cells: Vec<u8>,
  generation: u64,
}

impl Automaton {
  /// Creates an automaton seeded with a single live cell at index
  /// `width / 2`, the canonical seed for drawing rule-triangles.
  pub fn new(rule_number: i32, width: i32) -> Result<Self, Error> {
    let (rule, width) = validate(rule_number, width)?;
    let mut cells = vec![0u8; width];
    cells[width / 2] = 1;
    Ok(Self {
      rule,
      width,
      cells,
      generation: 0,
    })
  }

  /// Creates an automaton from an explicit seed row.
  ///
  /// A seed shorter than `width` is centered, with the extra dead cell
  /// going to the right when the difference is odd; a longer seed is
  /// truncated to the first `width` values. Both adjustments are logged
  /// as warnings. Nonzero seed values count as live.
  pub fn with_seed(rule_number: i32, width: i32, seed: &[u8]) -> Result<Self, Error> {
    let (rule, width) = validate(rule_number, width)?;
    let mut cells = vec![0u8; width];
    let lead = if seed.len() < width {
      warn!("seed length {} is less than width {}, centering", seed.len(), width);
      (width - seed.len()) / 2
    } else {
      if seed.len() > width {
        warn!("seed length {} exceeds width {}, truncating", seed.len(), width);
      }
      0
    };
    for (i, &c) in seed.iter().take(width).enumerate() {
      cells[lead + i] = (c != 0) as u8;
    }
    Ok(Self {
      rule,
      width,
      cells,
      generation: 0,
    })
  }

  /// Advances one generation and returns a view of the new one.
  ///
  /// Next states are computed from the old row only, so neighbors
  /// already visited in the same step never leak updated values.
  pub fn step(&mut self) -> &[u8] {
    let mut next = vec![0u8; self.width];
    for (i, cell) in next.iter_mut().enumerate() {
      let left = self.cells[(i + self.width - 1) % self.width];
      let middle = self.cells[i];
      let right = self.cells[(i + 1) % self.width];
      *cell = self.rule.next_state(left, middle, right);
    }
    self.cells = next;
    self.generation += 1;
    &self.cells
  }

  /// Advances `num_gen` generations and returns a view of the last one.
  pub fn simulate(&mut self, num_gen: u64) -> &[u8] {
    for _ in 0..num_gen {
      self.step();
    }
    &self.cells
  }

  /// The current generation. Always exactly `width` cells of 0 or 1.
  pub fn cells(&self) -> &[u8] {
    &self.cells
  }

  pub fn rule(&self) -> Rule {
    self.rule
  }

  pub fn width(&self) -> usize {
    self.width
  }

  /// Number of steps taken since construction.
  pub fn generation(&self) -> u64 {
    self.generation
  }
}

fn validate(rule_number: i32, width: i32) -> Result<(Rule, usize), Error> {
  let rule = Rule::new(rule_number)?;
  if width <= 0 {
    return Err(Error::InvalidWidth(width));
  }
  Ok((rule, width as usize))
}
