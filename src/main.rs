use elementary::{export, orbit, Automaton};
use log::info;

fn main() {
  simple_logger::init().unwrap();
  info!("elementary v{}", env!("CARGO_PKG_VERSION"));

  let mut sierpinski = Automaton::new(90, 63).unwrap();
  println!("rule 90:");
  println!("{}", export::render(&export::history(&mut sierpinski, 31)));

  let mut chaotic = Automaton::new(110, 63).unwrap();
  println!("rule 110:");
  println!("{}", export::render(&export::history(&mut chaotic, 31)));

  let mut ring = Automaton::new(110, 10).unwrap();
  match orbit::find_cycle(&mut ring, 10_000) {
    Some(cycle) => info!(
      "rule 110 on a 10-cell ring: transient {}, period {}",
      cycle.transient, cycle.period
    ),
    None => info!("rule 110 on a 10-cell ring: no repeat within 10000 steps"),
  }

  let mut triangle = Automaton::new(90, 512).unwrap();
  export::save_image(&mut triangle, 511, "sierpinski.png").unwrap();
  info!("wrote sierpinski.png");
}
