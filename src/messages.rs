//! Console text shown to the player.
//!
//! Prompts and status lines are reproduced verbatim so existing scripted
//! transcripts keep matching.

use lucky_rules::LuckyPool;

/// Prompt for the player's name.
pub const NAME_PROMPT: &str = "Enter your first name: ";

/// Prompt for the player's birthdate.
pub const BIRTHDATE_PROMPT: &str = "Enter your birthdate (YYYYMMDD): ";

/// Prompt for a guess.
pub const GUESS_PROMPT: &str = "Pick a number from the list: ";

/// Prompt for another round.
pub const PLAY_AGAIN_PROMPT: &str = "Do you want to play again?\n (y: Yes, n: No): ";

/// Printed when the pool runs out.
pub const GAME_OVER: &str = "GAME OVER";

/// Printed once when the player declines another round.
pub const FAREWELL: &str = "Thank you for playing! Goodbye.";

/// Welcome text and rules printed before identity collection.
pub const INTRO: &str = "\nWelcome to Lucky Number!\n\n\
In this game, you'll have the chance to test your luck.\n\
Here's how it works:\n\
1. Enter your full name and birthdate to get started.\n\
2. We'll generate a list of lucky numbers.\n\
3. Your goal is to guess the lucky number from the list.\n\
4. You can keep guessing until you get it right or there are only 2 numbers left.\n\
5. Let's see if you have what it takes to find the lucky number!\n";

/// Greeting once the age gate has passed.
pub fn game_begins(name: &str) -> String {
    format!("\n★ {name}, Let the game begin ★\n")
}

/// Pool shown at the start of a round.
pub fn lucky_list(pool: &LuckyPool) -> String {
    format!("Lucky list: {pool}")
}

/// Win message.
pub fn congratulations(tries: u32) -> String {
    format!("Congratulations!\nYou got the lucky number from try {tries}\n")
}

/// Wrong-guess message with the narrowed pool.
pub fn wrong_number(tries: u32, shorter_list: &LuckyPool) -> String {
    format!(
        "Wrong number. This was your {tries} try.\nLet's try again from a shorter list.\n{shorter_list}"
    )
}
