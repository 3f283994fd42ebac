//! Console game session: identity, age gate, rounds and replay.

use crate::clock::Clock;
use crate::console::{Console, ConsoleError, prompt_until};
use crate::messages;
use derive_getters::Getters;
use lucky_rules::{
    Birthdate, Eligibility, GuessResult, NumberSource, PlayerName, ReplayChoice, RoundFinished,
    RoundInProgress, RoundOutcome, check_eligibility, compute_age, parse_replay_choice,
    validate_birthdate, validate_name,
};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Identity of the player, fixed once the age gate passes.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Identity {
    /// Validated player name.
    name: PlayerName,
    /// Validated birthdate.
    birthdate: Birthdate,
    /// Age at the time the gate was checked.
    age: i32,
}

/// How a session ended. Both variants are clean exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Player was under the minimum age.
    Ineligible {
        /// Computed age.
        age: i32,
    },
    /// Player declined another round.
    Farewell {
        /// Rounds finished in this session.
        rounds_played: u32,
        /// Rounds in which the lucky number was found.
        rounds_won: u32,
    },
}

/// A single-player session driving the console.
///
/// Owns the console, the number source and the clock. Nothing in here exits
/// the process; [`GameSession::run`] reports a [`SessionEnd`] instead.
pub struct GameSession<R, W, N, C> {
    console: Console<R, W>,
    numbers: N,
    clock: C,
    show_intro: bool,
    identity: Option<Identity>,
    rounds_played: u32,
    rounds_won: u32,
}

impl<R, W, N, C> GameSession<R, W, N, C>
where
    R: BufRead,
    W: Write,
    N: NumberSource,
    C: Clock,
{
    /// Creates a session. The intro banner is shown by default.
    #[instrument(skip_all)]
    pub fn new(console: Console<R, W>, numbers: N, clock: C) -> Self {
        Self {
            console,
            numbers,
            clock,
            show_intro: true,
            identity: None,
            rounds_played: 0,
            rounds_won: 0,
        }
    }

    /// Enables or disables the intro banner.
    pub fn with_intro(mut self, show_intro: bool) -> Self {
        self.show_intro = show_intro;
        self
    }

    /// Player identity, once the age gate has passed.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// The console, e.g. to read back a scripted transcript.
    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    /// Runs the whole session: intro, identity, age gate, then rounds until
    /// the player declines another one.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<SessionEnd, ConsoleError> {
        if self.show_intro {
            self.console.say(messages::INTRO)?;
        }

        let (name, birthdate) = self.collect_identity()?;
        let age = compute_age(&birthdate, self.clock.current_year());

        let age = match self.check_eligibility(age)? {
            Eligibility::Eligible(age) => age,
            Eligibility::Ineligible(age) => return Ok(SessionEnd::Ineligible { age }),
        };

        self.console.say(messages::game_begins(name.as_str()))?;
        info!(player = %name, age, "Player admitted");
        self.identity = Some(Identity {
            name,
            birthdate,
            age,
        });

        let mut round = RoundInProgress::deal(&mut self.numbers);
        loop {
            let finished = self.play_round(round)?;
            match self.ask_play_again()? {
                ReplayChoice::Yes => round = finished.restart(&mut self.numbers),
                ReplayChoice::No => {
                    self.console.say(messages::FAREWELL)?;
                    info!(
                        rounds_played = self.rounds_played,
                        rounds_won = self.rounds_won,
                        "Session finished"
                    );
                    return Ok(SessionEnd::Farewell {
                        rounds_played: self.rounds_played,
                        rounds_won: self.rounds_won,
                    });
                }
            }
        }
    }

    /// Collects name then birthdate, re-prompting each until valid.
    #[instrument(skip(self))]
    pub fn collect_identity(&mut self) -> Result<(PlayerName, Birthdate), ConsoleError> {
        let name = self.collect_name()?;
        let birthdate = self.collect_birthdate()?;
        Ok((name, birthdate))
    }

    /// Prompts until a valid name is entered.
    #[instrument(skip(self))]
    pub fn collect_name(&mut self) -> Result<PlayerName, ConsoleError> {
        prompt_until(&mut self.console, messages::NAME_PROMPT, validate_name)
    }

    /// Prompts until a valid birthdate is entered.
    #[instrument(skip(self))]
    pub fn collect_birthdate(&mut self) -> Result<Birthdate, ConsoleError> {
        prompt_until(&mut self.console, messages::BIRTHDATE_PROMPT, validate_birthdate)
    }

    /// Applies the age gate, printing the rejection when the player is too young.
    #[instrument(skip(self))]
    pub fn check_eligibility(&mut self, age: i32) -> Result<Eligibility, ConsoleError> {
        let gate = check_eligibility(age);
        if let Eligibility::Ineligible(_) = gate {
            self.console.say(gate)?;
        }
        Ok(gate)
    }

    /// Plays one round to completion.
    ///
    /// Shows the pool, then takes guesses until the lucky number is found or
    /// the pool runs out.
    #[instrument(skip(self, round), fields(pool_len = round.pool().len()))]
    pub fn play_round(&mut self, round: RoundInProgress) -> Result<RoundFinished, ConsoleError> {
        self.console.say(messages::lucky_list(round.pool()))?;

        let mut round = round;
        let finished = loop {
            let answer = self.console.prompt(messages::GUESS_PROMPT)?;
            match round.submit(&answer) {
                GuessResult::Rejected { round: next, error } => {
                    self.console.say(error)?;
                    round = next;
                }
                GuessResult::Narrowed { round: next, tries } => {
                    self.console.say(messages::wrong_number(tries, next.pool()))?;
                    round = next;
                }
                GuessResult::Finished(finished) => break finished,
            }
        };

        match finished.outcome() {
            RoundOutcome::Won { tries } => {
                self.console.say(messages::congratulations(*tries))?;
                self.rounds_won += 1;
            }
            RoundOutcome::Lost { tries } => {
                debug!(tries, lucky_number = finished.lucky_number(), "Round lost");
                self.console.say(messages::GAME_OVER)?;
            }
        }
        self.rounds_played += 1;
        Ok(finished)
    }

    /// Asks whether to play again until the answer is `y` or `n`.
    #[instrument(skip(self))]
    pub fn ask_play_again(&mut self) -> Result<ReplayChoice, ConsoleError> {
        prompt_until(
            &mut self.console,
            messages::PLAY_AGAIN_PROMPT,
            parse_replay_choice,
        )
    }
}
