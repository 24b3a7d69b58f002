//! Terminal front end.
//!
//! Owns everything the engine does not: collecting player names, prompting
//! for columns, turning raw text into a column index, rendering the board
//! and announcing the result. All reads are line based and re-prompt on bad
//! input; end of input at any prompt ends the session quietly.
//!
//! The console is generic over its input and output so it can be driven
//! from tests with in-memory buffers.
//!
//! ## Example
//!
//! ```ignore
//! use connect_four::console::Console;
//! let stdin = std::io::stdin();
//! let mut console = Console::new(stdin.lock(), std::io::stdout());
//! console.run()?;
//! ```

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, info};

use crate::board::Rejected;
use crate::constants::COLS;
use crate::engine::{GameStatus, MoveOutcome, TurnEngine, new_game};
use crate::player::Player;

const BANNER: &str = "\
Let's play Connect4!
 -------------
|             |
|   CONNECT   |
|   F O U R   |
|             |
|   ● ● ● ●   |
|   ○ ○ ○ ○   |
 -------------
";

const DIVIDER_A: &str = "●○●○●○●○●○●○●○●○●○●○●○●○●○●○●○●○●○●○●○●○";
const DIVIDER_B: &str = "○●○●○●○●○●○●○●○●○●○●○●○●○●○●○●○●○●○●○●○●";

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// What a column prompt produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnInput {
    /// Zero-based column inside the board.
    Column(usize),
    OutOfRange,
    NotANumber,
}

/// Parse a 1-based column as typed by a player.
fn parse_column(text: &str) -> ColumnInput {
    match text.trim().parse::<i64>() {
        Ok(n) if n >= 1 && n <= COLS as i64 => ColumnInput::Column(n as usize - 1),
        Ok(_) => ColumnInput::OutOfRange,
        Err(_) => ColumnInput::NotANumber,
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
    /// Display names indexed by `Player::index`.
    names: [Option<String>; 2],
    /// Stop after the first game instead of offering a rematch.
    once: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            names: [None, None],
            once: false,
        }
    }

    /// Preset a player's name; that player is not asked for one.
    /// Blank names are ignored.
    pub fn with_name(mut self, player: Player, name: impl Into<String>) -> Self {
        let name = name.into().trim().to_string();
        if !name.is_empty() {
            self.names[player.index()] = Some(name);
        }
        self
    }

    pub fn once(mut self, once: bool) -> Self {
        self.once = once;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the whole session and return the result of every finished game.
    pub fn run(&mut self) -> Result<Vec<GameStatus>, ConsoleError> {
        let mut results = Vec::new();
        write!(self.output, "{BANNER}")?;
        writeln!(self.output)?;

        for (player, label) in [(Player::A, "Player 1"), (Player::B, "Player 2")] {
            if self.names[player.index()].is_none() {
                match self.prompt_name(&format!("{label}, enter your name"))? {
                    Some(name) => self.names[player.index()] = Some(name),
                    None => return Ok(results),
                }
            }
            writeln!(self.output, "OK {}, you get the {player} ", self.name(player))?;
            writeln!(self.output)?;
        }

        loop {
            match self.play_game()? {
                Some(status) => results.push(status),
                None => break,
            }
            if self.once || !self.prompt_play_again()? {
                writeln!(self.output, "Thanks for playing!")?;
                break;
            }
        }
        self.output.flush()?;
        Ok(results)
    }

    /// Play one game to the end. `None` if input ran out first.
    fn play_game(&mut self) -> Result<Option<GameStatus>, ConsoleError> {
        let mut engine = new_game();
        info!(a = %self.name(Player::A), b = %self.name(Player::B), "new game");

        writeln!(self.output, "{DIVIDER_A}")?;
        writeln!(self.output, "             Let's play!")?;
        writeln!(self.output, "{DIVIDER_B}")?;
        writeln!(self.output, "{}, you go first! ", self.name(Player::A))?;
        write!(self.output, "{}", engine.snapshot())?;

        loop {
            let player = engine.active_player();
            writeln!(
                self.output,
                "In which column (1 - {COLS}) would you like to place your {player}? "
            )?;
            if !self.read_move(&mut engine)? {
                return Ok(None);
            }
            write!(self.output, "{}", engine.snapshot())?;

            match engine.status() {
                GameStatus::InProgress => {
                    let next = engine.active_player();
                    writeln!(self.output, "{}, it's your turn ", self.name(next))?;
                }
                GameStatus::Won(winner) => {
                    writeln!(
                        self.output,
                        "Congratulations {}, you win in {} turns! Better luck next time {}!",
                        self.name(winner),
                        engine.move_count(),
                        self.name(winner.other())
                    )?;
                    return Ok(Some(engine.status()));
                }
                GameStatus::Draw => {
                    writeln!(self.output, "It's a draw! Congratulations to both of you")?;
                    return Ok(Some(engine.status()));
                }
            }
        }
    }

    /// Read columns until one is placed. `false` on end of input.
    fn read_move(&mut self, engine: &mut TurnEngine) -> Result<bool, ConsoleError> {
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            let column = match parse_column(&line) {
                ColumnInput::Column(c) => c,
                ColumnInput::OutOfRange => {
                    debug!(input = line.trim(), "column out of range");
                    writeln!(self.output, "Please provide a number between 1 and {COLS}")?;
                    continue;
                }
                ColumnInput::NotANumber => {
                    debug!(input = line.trim(), "column is not a number");
                    writeln!(self.output, "Please enter a valid number between 1 and {COLS}")?;
                    continue;
                }
            };
            match engine.submit_move(column) {
                MoveOutcome::Placed(_) => return Ok(true),
                MoveOutcome::Rejected(Rejected::ColumnFull(c)) => {
                    writeln!(
                        self.output,
                        "Column {} is maxed out. Please choose another column. ",
                        c + 1
                    )?;
                }
                MoveOutcome::Rejected(Rejected::OutOfRange(_)) => {
                    writeln!(self.output, "Please provide a number between 1 and {COLS}")?;
                }
                // play_game stops asking once the game is over.
                MoveOutcome::GameAlreadyOver => return Ok(true),
            }
        }
    }

    /// Ask until a non-blank name is given. `None` on end of input.
    fn prompt_name(&mut self, prompt: &str) -> Result<Option<String>, ConsoleError> {
        loop {
            writeln!(self.output, "{prompt}")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let name = line.trim();
            if name.is_empty() {
                writeln!(self.output, "Name cannot be blank. Please enter a valid name.")?;
                continue;
            }
            return Ok(Some(name.to_string()));
        }
    }

    /// Ask whether to play again. End of input counts as "no".
    fn prompt_play_again(&mut self) -> Result<bool, ConsoleError> {
        loop {
            writeln!(self.output, "Would you like to play again? (y/n)")?;
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            match line.trim().to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Please answer y or n.")?,
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn name(&self, player: Player) -> String {
        self.names[player.index()]
            .clone()
            .unwrap_or_else(|| "Player".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(script: &str) -> (Vec<GameStatus>, String) {
        let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let results = console.run().unwrap();
        let out = String::from_utf8(console.into_output()).unwrap();
        (results, out)
    }

    #[test]
    fn test_parse_column() {
        assert_eq!(parse_column("1"), ColumnInput::Column(0));
        assert_eq!(parse_column(" 7 \n"), ColumnInput::Column(6));
        assert_eq!(parse_column("0"), ColumnInput::OutOfRange);
        assert_eq!(parse_column("8"), ColumnInput::OutOfRange);
        assert_eq!(parse_column("-3"), ColumnInput::OutOfRange);
        assert_eq!(parse_column("three"), ColumnInput::NotANumber);
        assert_eq!(parse_column(""), ColumnInput::NotANumber);
    }

    #[test]
    fn test_blank_name_is_reprompted() {
        let (results, out) = session("\n   \nAlice\n");
        assert!(results.is_empty());
        assert_eq!(out.matches("Name cannot be blank").count(), 2);
        assert!(out.contains("OK Alice, you get the ● "));
        assert!(out.contains("Player 2, enter your name"));
    }

    #[test]
    fn test_vertical_win_announced() {
        let (results, out) = session("Alice\nBob\n1\n2\n1\n2\n1\n2\n1\nn\n");
        assert_eq!(results, vec![GameStatus::Won(Player::A)]);
        assert!(out.contains("Alice, you go first!"));
        assert!(out.contains("Bob, it's your turn"));
        assert!(
            out.contains("Congratulations Alice, you win in 7 turns! Better luck next time Bob!")
        );
        assert!(out.contains("Thanks for playing!"));
    }

    #[test]
    fn test_bad_input_is_reprompted() {
        let (_, out) = session("A\nB\nx\n9\n0\n1\n");
        assert!(out.contains("Please enter a valid number between 1 and 7"));
        assert_eq!(out.matches("Please provide a number between 1 and 7").count(), 2);
        assert!(out.contains("B, it's your turn"));
    }

    #[test]
    fn test_full_column_is_reprompted() {
        let (_, out) = session("A\nB\n1\n1\n1\n1\n1\n1\n1\n2\n");
        assert!(out.contains("Column 1 is maxed out. Please choose another column."));
        // The seventh "1" was refused, so the "2" is still A's move.
        assert_eq!(out.matches("B, it's your turn").count(), 4);
    }

    #[test]
    fn test_preset_names_and_once() {
        let mut console = Console::new(Cursor::new(b"1\n2\n1\n2\n1\n2\n1\n".to_vec()), Vec::new())
            .with_name(Player::A, "Ann")
            .with_name(Player::B, "Ben")
            .once(true);
        let results = console.run().unwrap();
        let out = String::from_utf8(console.into_output()).unwrap();

        assert_eq!(results, vec![GameStatus::Won(Player::A)]);
        assert!(!out.contains("enter your name"));
        assert!(!out.contains("play again"));
        assert!(out.contains("OK Ben, you get the ○ "));
    }

    #[test]
    fn test_play_again_keeps_names() {
        let game = "1\n2\n1\n2\n1\n2\n1\n";
        let script = format!("Ann\nBen\n{game}maybe\ny\n{game}no\n");
        let (results, out) = session(&script);

        assert_eq!(results, vec![GameStatus::Won(Player::A); 2]);
        assert!(out.contains("Please answer y or n."));
        assert_eq!(out.matches("Ann, you go first!").count(), 2);
    }

    #[test]
    fn test_eof_mid_game_ends_quietly() {
        let (results, out) = session("Ann\nBen\n4\n");
        assert!(results.is_empty());
        assert!(out.contains("Ben, it's your turn"));
        assert!(!out.contains("Thanks for playing!"));
    }
}
