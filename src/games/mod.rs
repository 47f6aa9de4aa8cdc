//! The mini-game challenges
//!
//! Each game is a `Challenge` implementation plugged into `sim::Session`.
//! The scrolling games (`runner`, `flappy`, `dodger`) compose the shared
//! entity/physics/spawn/collision machinery; the turn-based games (`memory`,
//! `reaction`, `puzzle`, `typing`, `logo`) are event-driven but run through
//! the same driver and terminal evaluation.

pub mod dodger;
pub mod flappy;
pub mod logo;
pub mod memory;
pub mod puzzle;
pub mod reaction;
pub mod runner;
pub mod typing;

pub use dodger::{Dodger, DodgerInput, Direction};
pub use flappy::{Flappy, FlappyInput};
pub use logo::{LogoInput, LogoQuiz};
pub use memory::{MemoryInput, MemoryMatch};
pub use puzzle::{PuzzleInput, SlidingPuzzle};
pub use reaction::{Reaction, ReactionInput};
pub use runner::{Runner, RunnerInput};
pub use typing::{Typing, TypingInput};
