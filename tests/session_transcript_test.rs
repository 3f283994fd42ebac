//! Scripted end-to-end sessions over an in-memory console.

use lucky_number::{
    BIRTHDATE_PROMPT, Console, FAREWELL, FixedClock, GAME_OVER, GUESS_PROMPT, GameSession,
    NAME_PROMPT, PLAY_AGAIN_PROMPT, SessionEnd,
};
use lucky_rules::{GuessResult, RoundInProgress, ScriptedNumbers};
use std::io::Cursor;

/// Deals `[10, 20, 30, 40, 50, 60, 70, 80, 90, 35]` with 35 as the lucky number, every round.
fn fixed_deal() -> ScriptedNumbers {
    ScriptedNumbers::new(vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 35])
}

/// Runs a full session and returns how it ended plus the stdout transcript.
fn play(input: &str) -> (SessionEnd, String) {
    let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let mut session =
        GameSession::new(console, fixed_deal(), FixedClock::new(2023)).with_intro(false);
    let end = session.run().expect("Scripted session should not hit I/O errors");
    let transcript = String::from_utf8_lossy(session.console().output()).into_owned();
    (end, transcript)
}

#[test]
fn test_underage_player_is_turned_away() {
    let (end, transcript) = play("Ada\n20100101\n");

    assert_eq!(end, SessionEnd::Ineligible { age: 13 });
    assert!(transcript.contains("You must be 18 years or older to play this game.\nExiting the game."));
    assert!(!transcript.contains(GUESS_PROMPT));
}

#[test]
fn test_win_after_one_wrong_guess() {
    let (end, transcript) = play("gullbritt\n19900101\n30\n35\nn\n");

    assert_eq!(
        end,
        SessionEnd::Farewell {
            rounds_played: 1,
            rounds_won: 1
        }
    );
    assert!(transcript.starts_with(NAME_PROMPT));
    assert!(transcript.contains(BIRTHDATE_PROMPT));
    assert!(transcript.contains("★ Gullbritt, Let the game begin ★"));
    assert!(transcript.contains("Lucky list: [10, 20, 30, 40, 50, 60, 70, 80, 90, 35]"));
    assert!(transcript.contains(
        "Wrong number. This was your 1 try.\nLet's try again from a shorter list.\n[40, 35]"
    ));
    assert!(transcript.contains("Congratulations!\nYou got the lucky number from try 2\n"));
    assert!(transcript.contains(PLAY_AGAIN_PROMPT));
    assert_eq!(transcript.matches(FAREWELL).count(), 1);
}

#[test]
fn test_rejected_input_still_counts_as_a_try() {
    let (_, transcript) = play("Bo\n19800615\nabc\n22\n35\nn\n");

    assert!(transcript.contains("Invalid input. Please enter a number."));
    assert!(transcript.contains("Invalid choice. Pick a number from the list."));
    assert!(transcript.contains("You got the lucky number from try 3"));
}

#[test]
fn test_game_over_then_replay_with_fresh_round() {
    let (end, transcript) = play("Cy\n19700101\n40\n30\nmaybe\ny\n35\nN\n");

    assert_eq!(
        end,
        SessionEnd::Farewell {
            rounds_played: 2,
            rounds_won: 1
        }
    );
    assert!(transcript.contains(GAME_OVER));
    assert!(transcript.contains("Invalid input. Enter 'y' for Yes or 'n' for No."));
    // Second round starts over at try 1.
    assert!(transcript.contains("You got the lucky number from try 1"));
    assert_eq!(transcript.matches("Lucky list:").count(), 2);
    assert_eq!(transcript.matches(FAREWELL).count(), 1);
}

#[test]
fn test_invalid_identity_is_reprompted() {
    let (_, transcript) = play("R2D2\nleia\n1990-01-01\n19901301\n19900101\n35\nn\n");

    assert_eq!(transcript.matches(NAME_PROMPT).count(), 2);
    assert_eq!(transcript.matches(BIRTHDATE_PROMPT).count(), 3);
    assert!(transcript.contains("Invalid input. \nYour game name can only contain characters."));
    assert!(transcript.contains("Invalid format. Please use YYYYMMDD format."));
    assert!(transcript.contains("Invalid date. Please enter a valid date."));
    assert!(transcript.contains("★ Leia, Let the game begin ★"));
}

#[test]
fn test_closed_input_is_an_error() {
    let console = Console::new(Cursor::new(b"Dee\n".to_vec()), Vec::new());
    let mut session = GameSession::new(console, fixed_deal(), FixedClock::new(2023));
    assert!(session.run().is_err());
    assert!(session.identity().is_none());
}

#[test]
fn test_intro_shown_by_default() {
    let console = Console::new(Cursor::new(b"Ed\n20200101\n".to_vec()), Vec::new());
    let mut session = GameSession::new(console, fixed_deal(), FixedClock::new(2023));
    session.run().expect("Session should end at the age gate");
    let transcript = String::from_utf8_lossy(session.console().output()).into_owned();
    assert!(transcript.contains("Welcome to Lucky Number!"));
}

#[test]
fn test_wrong_guess_on_sample_pool() {
    let console = Console::new(Cursor::new(b"22\n".to_vec()), Vec::new());
    let mut session = GameSession::new(console, fixed_deal(), FixedClock::new(2023));
    let round = RoundInProgress::with_pool(vec![10, 20, 22, 30, 40, 50], 35);

    // Pool [10, 20, 22, 30, 40, 50] minus 22, kept within 10 of 35.
    let GuessResult::Narrowed { round, .. } = round.guess(22) else {
        panic!("Expected narrowed pool");
    };
    assert_eq!(round.pool().numbers(), &[30, 40]);

    // The same miss through the console, then the pool runs dry.
    let round = RoundInProgress::with_pool(vec![22, 30], 35);
    let finished = session.play_round(round).expect("Round should finish");
    assert!(!finished.outcome().is_win());
    let transcript = String::from_utf8_lossy(session.console().output()).into_owned();
    assert!(transcript.contains(GAME_OVER));
}

#[test]
fn test_replay_deals_a_new_pool() {
    let numbers = ScriptedNumbers::new(vec![
        10, 20, 30, 40, 50, 60, 70, 80, 90, 35, // first round, lucky 35
        5, 15, 25, 45, 65, 75, 85, 95, 99, 55, // second round, lucky 55
    ]);
    let input = "Di\n19850101\n35\ny\n45\n55\nn\n";
    let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let mut session = GameSession::new(console, numbers, FixedClock::new(2023)).with_intro(false);

    let end = session.run().expect("Scripted session should not hit I/O errors");
    let transcript = String::from_utf8_lossy(session.console().output()).into_owned();

    assert_eq!(
        end,
        SessionEnd::Farewell {
            rounds_played: 2,
            rounds_won: 2
        }
    );
    let lists: Vec<&str> = transcript
        .lines()
        .filter_map(|line| line.find("Lucky list:").map(|at| &line[at..]))
        .collect();
    assert_eq!(
        lists,
        vec![
            "Lucky list: [10, 20, 30, 40, 50, 60, 70, 80, 90, 35]",
            "Lucky list: [5, 15, 25, 45, 65, 75, 85, 95, 99, 55]",
        ]
    );
    // Guessing 45 drops it; only 65 and 55 stay within 10 of 55.
    assert!(transcript.contains(
        "Wrong number. This was your 1 try.\nLet's try again from a shorter list.\n[65, 55]"
    ));
    assert!(transcript.contains("You got the lucky number from try 2"));
}
