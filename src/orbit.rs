use std::hash::BuildHasherDefault;

use indexmap::IndexSet;
use rustc_hash::FxHasher;

use crate::automaton::Automaton;

/// The shape of an automaton's orbit once it starts repeating.
///
/// A finite ring has at most `2 ^ width` generations, so every automaton
/// eventually enters a cycle preceded by a (possibly empty) transient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
  /// Steps taken before the first recurring generation showed up.
  pub transient: usize,
  /// Number of distinct generations in the cycle.
  pub period: usize,
}

/// Steps the automaton until a generation repeats, up to `max_gen` steps.
///
/// Returns `None` when no repeat shows up in time. Seen generations are
/// held here in insertion order, so the index of the first duplicate is
/// both the transient length and the start of the cycle; the automaton
/// itself keeps only its current generation and is left parked on the
/// first repeated one.
pub fn find_cycle(automaton: &mut Automaton, max_gen: usize) -> Option<Cycle> {
  let mut seen: IndexSet<Vec<u8>, BuildHasherDefault<FxHasher>> = IndexSet::default();
  seen.insert(automaton.cells().to_vec());

  for _ in 0..max_gen {
    let state = automaton.step().to_vec();
    if let Some((index, _)) = seen.get_full(&state) {
      // `seen.len()` distinct generations came before this one, so the
      // repeat closes a cycle of that length minus the transient.
      return Some(Cycle {
        transient: index,
        period: seen.len() - index,
      });
    }
    seen.insert(state);
  }
  None
}
