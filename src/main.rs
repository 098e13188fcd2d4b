use sudoku_gen::{generate_puzzle, NUM_FIELDS};

fn main() {
    let puzzle = generate_puzzle();
    println!("{}", puzzle.board());
    println!("Solution:\n{}", puzzle.solution());
    println!("Number of clues: {}", NUM_FIELDS - puzzle.board().num_empty());
}
