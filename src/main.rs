use regicide::{Board, ChessMove, MoveOutcome};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Terminal front end for the rules engine: prompt, parse, attempt, repeat.
/// All input validation happens here; the board only ever sees in-range
/// squares.
fn main() -> Result<(), io::Error> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut board = Board::default();

    println!("NEW GAME");
    println!("------------------------------");
    println!("{}", board);

    loop {
        let color = board.side_to_move();
        print!("{} move (like e2e4, or quit): ", color);
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };
        let input = line.trim().to_lowercase();
        if input == "quit" {
            return Ok(());
        }

        let m = match ChessMove::from_str(&input) {
            Ok(m) => m,
            Err(_) => {
                println!("Please enter a move as two squares, like e2e4");
                continue;
            }
        };

        match board.attempt_move(color, m) {
            Ok(MoveOutcome::Moved) => {
                println!("{}", board);
            }
            Ok(MoveOutcome::Won(winner)) => {
                println!("{}", board);
                println!("{} wins", winner);
                return Ok(());
            }
            Err(reason) => {
                println!("Not a valid move: {}", reason);
            }
        }
    }
}
