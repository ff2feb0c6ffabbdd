//! Elementary cellular automata on a finite ring.
//!
//! An automaton is a fixed-width row of two-state cells with periodic
//! boundaries, evolved by one of the 256 Wolfram rules. The rule number
//! is decoded into a next-state table once at construction; stepping
//! replaces the whole generation at a time.
//!
//! ```
//! use elementary::Automaton;
//!
//! let mut auto = Automaton::new(90, 7).unwrap();
//! assert_eq!(auto.cells(), &[0, 0, 0, 1, 0, 0, 0]);
//! assert_eq!(auto.step(), &[0, 0, 1, 0, 1, 0, 0]);
//! ```
//!
//! Patterns can be exchanged as one-row RLE strings via [`rle`], rendered
//! as text or images via [`export`], and classified via [`orbit`].

pub mod automaton;
pub mod export;
pub mod orbit;
pub mod rle;
pub mod rule;

pub use automaton::{Automaton, Error};
pub use orbit::Cycle;
pub use rule::{Rule, RULE_110, RULE_30, RULE_90};
