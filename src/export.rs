use std::path::Path;

use image::{ImageBuffer, ImageResult, Luma};
use itertools::Itertools;

use crate::automaton::Automaton;

/// Steps the automaton `num_gen` times and collects every generation,
/// starting with the current one. The result has `num_gen + 1` rows.
pub fn history(automaton: &mut Automaton, num_gen: usize) -> Vec<Vec<u8>> {
  let mut rows = Vec::with_capacity(num_gen + 1);
  rows.push(automaton.cells().to_vec());
  for _ in 0..num_gen {
    rows.push(automaton.step().to_vec());
  }
  rows
}

/// Renders rows of cells as text, one line per generation, live cells
/// as `#` and dead cells as spaces.
pub fn render(rows: &[Vec<u8>]) -> String {
  rows.iter().map(|row| render_row(row)).join("\n")
}

pub fn render_row(cells: &[u8]) -> String {
  cells
    .iter()
    .map(|&c| if c != 0 { '#' } else { ' ' })
    .collect()
}

/// Steps the automaton `num_gen` times and saves the space-time diagram
/// as a grayscale image, one pixel per cell, generations top to bottom.
///
/// The format is picked from the file extension by the image crate.
pub fn save_image(
  automaton: &mut Automaton,
  num_gen: usize,
  path: impl AsRef<Path>,
) -> ImageResult<()> {
  let rows = history(automaton, num_gen);

  let mut buffer = ImageBuffer::new(automaton.width() as u32, rows.len() as u32);
  for (y, row) in rows.iter().enumerate() {
    for (x, &cell) in row.iter().enumerate() {
      if cell != 0 {
        buffer.put_pixel(x as u32, y as u32, Luma([255u8]));
      }
    }
  }

  buffer.save(path)
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn history_includes_the_seed_row() {
    let mut auto = Automaton::new(90, 7).unwrap();
    let rows = history(&mut auto, 2);
    assert_eq!(
      rows,
      vec![
        vec![0, 0, 0, 1, 0, 0, 0],
        vec![0, 0, 1, 0, 1, 0, 0],
        vec![0, 1, 0, 0, 0, 1, 0],
      ]
    );
    assert_eq!(auto.generation(), 2);
  }

  #[test]
  fn history_of_zero_generations_is_the_current_row() {
    let mut auto = Automaton::new(30, 5).unwrap();
    assert_eq!(history(&mut auto, 0), vec![vec![0, 0, 1, 0, 0]]);
    assert_eq!(auto.generation(), 0);
  }

  #[test]
  fn render_row_maps_cells_to_glyphs() {
    assert_eq!(render_row(&[1, 0, 1, 1, 0]), "# ## ");
    assert_eq!(render_row(&[]), "");
  }

  #[test]
  fn render_draws_the_rule_90_triangle() {
    let mut auto = Automaton::new(90, 15).unwrap();
    let rows = history(&mut auto, 7);
    assert_eq!(render(&rows), r"
       #       
      # #      
     #   #     
    # # # #    
   #       #   
  # #     # #  
 #   #   #   # 
# # # # # # # #".trim_start_matches('\n'));
  }
}
