//! Connect Four: a two-player gravity-drop game on a 6x7 grid.
//!
//! The crate separates a pure game core from its terminal front end. The
//! core never blocks or performs I/O; it takes already-parsed column
//! indices and reports what happened.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions and rule constants
//! - [`player`] - The two symbolic tokens
//! - [`board`] - Grid state and gravity-drop placement
//! - [`win`] - Four-in-a-row detection
//! - [`engine`] - Turn sequencing and game status
//! - [`console`] - Line-based terminal front end
//!
//! ## Example
//!
//! ```
//! use connect_four::engine::{new_game, GameStatus, MoveOutcome};
//! use connect_four::player::Player;
//!
//! let mut game = new_game();
//! for column in [0, 1, 0, 1, 0, 1, 0] {
//!     assert!(matches!(game.submit_move(column), MoveOutcome::Placed(_)));
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::A));
//! assert_eq!(game.submit_move(3), MoveOutcome::GameAlreadyOver);
//! print!("{}", game.snapshot());
//! ```

pub mod board;
pub mod console;
pub mod constants;
pub mod engine;
pub mod player;
pub mod win;
