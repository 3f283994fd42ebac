//! Lucky Number - console guessing game
//!
//! A player gives a name and birthdate, passes an age gate, then guesses from
//! a pool of numbers that narrows around the lucky number after every miss.
//!
//! # Architecture
//!
//! - **Rules**: pure game logic lives in the `lucky_rules` crate
//! - **Console**: blocking line I/O plus a retry combinator
//! - **Session**: drives the phases and reports how the session ended
//! - **Config**: optional TOML file with command-line overrides
//!
//! # Example
//!
//! ```
//! use lucky_number::{Console, FixedClock, GameSession, SessionEnd};
//! use lucky_rules::ScriptedNumbers;
//! use std::io::Cursor;
//!
//! let input = "ada\n20100101\n";
//! let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
//! let mut session = GameSession::new(console, ScriptedNumbers::new(vec![1]), FixedClock::new(2023));
//!
//! assert_eq!(session.run().unwrap(), SessionEnd::Ineligible { age: 13 });
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod clock;
mod config;
mod console;
mod messages;
mod session;

// Crate-level exports - Clock
pub use clock::{Clock, FixedClock, SystemClock};

// Crate-level exports - Configuration
pub use config::{ConfigError, SessionConfig};

// Crate-level exports - Console
pub use console::{Console, ConsoleError, prompt_until};

// Crate-level exports - Console text
pub use messages::{
    BIRTHDATE_PROMPT, FAREWELL, GAME_OVER, GUESS_PROMPT, NAME_PROMPT, PLAY_AGAIN_PROMPT,
};

// Crate-level exports - Session management
pub use session::{GameSession, Identity, SessionEnd};
