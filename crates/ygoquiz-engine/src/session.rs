use std::mem;

use crate::{
    Challenge, DealError, GameMode, InputKind, Judgement, MissingAttribute, Outcome, Round,
    ScoreBoard, Side, evaluate_free_text, evaluate_option, judge_older,
};

const FETCH_FAILED_MESSAGE: &str = "Failed to load card. Please try again.";
const TIE_MESSAGE: &str = "It's a tie! Both cards were released at the same time.";

/// Identifies one dealt round. Results carrying an older token are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("round #{_0}")]
pub struct RoundToken(u64);

/// Semantic color of a feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub tone: Tone,
    pub message: String,
}

impl Feedback {
    fn from_outcome(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Correct { answer } => Self {
                tone: Tone::Positive,
                message: format!("Correct! It's {answer}!"),
            },
            Outcome::Incorrect { answer } => Self {
                tone: Tone::Negative,
                message: format!("Incorrect. The correct answer was {answer}."),
            },
        }
    }

    fn tie() -> Self {
        Self {
            tone: Tone::Positive,
            message: TIE_MESSAGE.to_owned(),
        }
    }

    fn from_deal_error(error: &DealError) -> Self {
        let message = match error {
            DealError::Fetch(_) => FETCH_FAILED_MESSAGE.to_owned(),
            DealError::Unavailable { mode, missing } => unavailable_message(*mode, *missing),
        };
        Self {
            tone: Tone::Neutral,
            message,
        }
    }
}

fn unavailable_message(mode: GameMode, missing: MissingAttribute) -> String {
    match (mode, missing) {
        (GameMode::ProductGuessing, MissingAttribute::Sets) => {
            "Product information not available for this card. Try another one.".to_owned()
        }
        (GameMode::WhichIsOlder, MissingAttribute::Sets | MissingAttribute::ReleaseDate) => {
            "Could not find release date information for one or both cards. Try another pair."
                .to_owned()
        }
        (_, missing) => format!("This card cannot be used for {mode} ({missing}). Try another one."),
    }
}

/// Where the session is in the round cycle.
///
/// ```text
/// Idle ──select_mode──> Dealing ──deliver──> AwaitingInput ──answer──> Resolved
///  ^                     ^   │                                           │
///  │                     │   └──deliver (error)──> Resolved              │
///  │                     └─────────────next_round────────────────────────┘
///  └──return_to_menu (from anywhere)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Phase {
    Idle,
    Dealing {
        token: RoundToken,
    },
    AwaitingInput {
        round: Round,
    },
    /// The round is over. `round` is `None` when it could not be dealt.
    Resolved {
        round: Option<Round>,
        feedback: Feedback,
    },
}

/// Whether a dealt round was applied to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Delivery {
    Applied,
    /// The round was superseded by a newer one, or the player left for the menu.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SessionError {
    #[display("no game mode selected")]
    NoModeSelected,
    #[display("no round is waiting for an answer")]
    NotAwaitingInput,
    #[display("the current round takes {expected} input")]
    WrongInput { expected: InputKind },
    #[display("option {index} is out of range ({len} options)")]
    OptionOutOfRange { index: usize, len: usize },
}

/// Game state of one player: score, mode and the active round.
///
/// The session is the only place the score changes. Fetching happens outside:
/// callers take the [`RoundToken`] from [`Session::select_mode`] or
/// [`Session::next_round`], deal the round, and hand the result back through
/// [`Session::deliver`].
#[derive(Debug, Clone)]
pub struct Session {
    score: ScoreBoard,
    mode: Option<GameMode>,
    phase: Phase,
    last_token: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: ScoreBoard::new(),
            mode: None,
            phase: Phase::Idle,
            last_token: 0,
        }
    }

    #[must_use]
    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    #[must_use]
    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The round on screen, whether still open or already answered.
    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        match &self.phase {
            Phase::AwaitingInput { round } => Some(round),
            Phase::Resolved { round, .. } => round.as_ref(),
            Phase::Idle | Phase::Dealing { .. } => None,
        }
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        match &self.phase {
            Phase::Resolved { feedback, .. } => Some(feedback),
            _ => None,
        }
    }

    /// Switches to `mode` and starts its first round.
    pub fn select_mode(&mut self, mode: GameMode) -> RoundToken {
        log::info!("mode selected: {mode}");
        self.mode = Some(mode);
        self.start_dealing()
    }

    /// Starts another round of the current mode, abandoning any open round.
    pub fn next_round(&mut self) -> Result<RoundToken, SessionError> {
        if self.mode.is_none() {
            return Err(SessionError::NoModeSelected);
        }
        Ok(self.start_dealing())
    }

    fn start_dealing(&mut self) -> RoundToken {
        self.last_token += 1;
        let token = RoundToken(self.last_token);
        self.phase = Phase::Dealing { token };
        token
    }

    /// Applies a dealt round if `token` is still the round being dealt.
    ///
    /// A deal error ends the round with neutral feedback and leaves the score alone.
    pub fn deliver(&mut self, token: RoundToken, dealt: Result<Round, DealError>) -> Delivery {
        if self.phase != (Phase::Dealing { token }) {
            log::debug!("discarding stale {token}");
            return Delivery::Stale;
        }
        self.phase = match dealt {
            Ok(round) => Phase::AwaitingInput { round },
            Err(error) => {
                match &error {
                    DealError::Fetch(e) => log::warn!("{token} could not be dealt: {e}"),
                    DealError::Unavailable { .. } => log::info!("{token} skipped: {error}"),
                }
                Phase::Resolved {
                    round: None,
                    feedback: Feedback::from_deal_error(&error),
                }
            }
        };
        Delivery::Applied
    }

    /// Answers a free-text round.
    pub fn submit_text(&mut self, input: &str) -> Result<Feedback, SessionError> {
        let round = self.open_round()?;
        let Challenge::FreeText { answer } = round.challenge() else {
            return Err(wrong_input(round));
        };
        let outcome = evaluate_free_text(input, answer, round.answer_name());
        Ok(self.resolve(&outcome))
    }

    /// Answers a multiple-choice round with the option at `index`.
    pub fn choose_option(&mut self, index: usize) -> Result<Feedback, SessionError> {
        let round = self.open_round()?;
        let Challenge::MultipleChoice { options } = round.challenge() else {
            return Err(wrong_input(round));
        };
        let selected = options.get(index).ok_or(SessionError::OptionOutOfRange {
            index,
            len: options.len(),
        })?;
        let outcome = evaluate_option(selected, options.correct());
        Ok(self.resolve(&outcome))
    }

    /// Answers a Which Card Is Older round by picking one of the two cards.
    ///
    /// Equal release dates are a tie worth one point, whichever card was picked.
    pub fn pick_card(&mut self, side: Side) -> Result<Feedback, SessionError> {
        let round = self.open_round()?;
        let mode = round.mode();
        let (Challenge::PickOlder, cards @ [_, _]) = (round.challenge(), round.cards()) else {
            return Err(wrong_input(round));
        };
        let (selected, other) = (&cards[side.index()], &cards[side.other().index()]);
        let feedback = match judge_older(selected, other) {
            Ok(Judgement::Decided(outcome)) => self.resolve(&outcome),
            Ok(Judgement::Tie) => {
                self.score.record_tie();
                self.finish(Feedback::tie())
            }
            Err(missing) => {
                self.finish(Feedback::from_deal_error(&DealError::Unavailable {
                    mode,
                    missing,
                }))
            }
        };
        Ok(feedback)
    }

    /// Leaves the current mode. Resets the score and drops any round in flight.
    pub fn return_to_menu(&mut self) {
        log::info!("returning to menu with score {}", self.score.score());
        self.score.reset();
        self.mode = None;
        self.phase = Phase::Idle;
    }

    fn open_round(&self) -> Result<&Round, SessionError> {
        match &self.phase {
            Phase::AwaitingInput { round } => Ok(round),
            _ => Err(SessionError::NotAwaitingInput),
        }
    }

    fn resolve(&mut self, outcome: &Outcome) -> Feedback {
        self.score.record(outcome);
        self.finish(Feedback::from_outcome(outcome))
    }

    fn finish(&mut self, feedback: Feedback) -> Feedback {
        let round = match mem::replace(&mut self.phase, Phase::Idle) {
            Phase::AwaitingInput { round } => Some(round),
            _ => None,
        };
        self.phase = Phase::Resolved {
            round,
            feedback: feedback.clone(),
        };
        feedback
    }
}

fn wrong_input(round: &Round) -> SessionError {
    SessionError::WrongInput {
        expected: round.input_kind(),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;
    use crate::{
        Card, CardSet, FetchError, setup,
        test_util::{card, date},
    };

    fn awaiting(session: &mut Session, round: Round) -> RoundToken {
        let token = session.select_mode(round.mode());
        assert_eq!(session.deliver(token, Ok(round)), Delivery::Applied);
        token
    }

    fn released(id: u64, name: &str, (y, m, d): (i32, u32, u32)) -> Card {
        Card {
            sets: vec![CardSet::new(format!("{name} Pack")).released(date(y, m, d))],
            ..card(id, name)
        }
    }

    fn older_round(a: (i32, u32, u32), b: (i32, u32, u32)) -> Round {
        setup::which_is_older(released(1, "A", a), released(2, "B", b)).unwrap()
    }

    #[test]
    fn test_correct_answer_increments_score() {
        let mut session = Session::new();
        awaiting(
            &mut session,
            setup::guess_the_card(card(1, "Dark Magician")).unwrap(),
        );
        let feedback = session.submit_text("  dark MAGICIAN ").unwrap();
        assert_eq!(feedback.tone, Tone::Positive);
        assert_eq!(feedback.message, "Correct! It's Dark Magician!");
        assert_eq!(session.score().score(), 1);
        assert!(session.phase().is_resolved());
    }

    #[test]
    fn test_incorrect_answer_resets_score() {
        let mut session = Session::new();
        for _ in 0..3 {
            awaiting(&mut session, setup::guess_the_name(card(1, "Kuriboh")));
            session.submit_text("kuriboh").unwrap();
        }
        assert_eq!(session.score().score(), 3);

        awaiting(&mut session, setup::guess_the_name(card(1, "Kuriboh")));
        let feedback = session.submit_text("winged kuriboh").unwrap();
        assert_eq!(feedback.tone, Tone::Negative);
        assert_eq!(feedback.message, "Incorrect. The correct answer was Kuriboh.");
        assert_eq!(session.score().score(), 0);
    }

    #[test]
    fn test_choose_option() {
        let mut rng = Pcg32::seed_from_u64(9);
        let round = setup::guess_the_art(
            card(1, "Jinzo"),
            &[card(2, "Sangan"), card(3, "Kuriboh"), card(4, "Exodia")],
            &mut rng,
        )
        .unwrap();
        let Challenge::MultipleChoice { options } = round.challenge() else {
            panic!("expected multiple choice");
        };
        let correct = options.correct_index();
        let wrong = (correct + 1) % options.len();

        let mut session = Session::new();
        awaiting(&mut session, round.clone());
        assert_eq!(
            session.choose_option(9),
            Err(SessionError::OptionOutOfRange { index: 9, len: 4 })
        );
        assert!(session.choose_option(correct).unwrap().tone.is_positive());
        assert_eq!(session.score().score(), 1);

        session.next_round().unwrap();
        let token = session.next_round().unwrap();
        session.deliver(token, Ok(round));
        let feedback = session.choose_option(wrong).unwrap();
        assert_eq!(feedback.message, "Incorrect. The correct answer was Jinzo.");
        assert_eq!(session.score().score(), 0);
    }

    #[test]
    fn test_pick_older_card() {
        let mut session = Session::new();
        awaiting(&mut session, older_round((2002, 1, 1), (2010, 5, 5)));
        let feedback = session.pick_card(Side::Left).unwrap();
        assert_eq!(feedback.message, "Correct! It's A!");
        assert_eq!(session.score().score(), 1);

        awaiting(&mut session, older_round((2002, 1, 1), (2010, 5, 5)));
        let feedback = session.pick_card(Side::Right).unwrap();
        assert_eq!(feedback.message, "Incorrect. The correct answer was A.");
        assert_eq!(session.score().score(), 0);
    }

    #[test]
    fn test_tie_awards_point_for_either_card() {
        let mut session = Session::new();
        for side in [Side::Left, Side::Right] {
            awaiting(&mut session, older_round((2004, 3, 1), (2004, 3, 1)));
            let feedback = session.pick_card(side).unwrap();
            assert_eq!(feedback.message, TIE_MESSAGE);
        }
        assert_eq!(session.score().score(), 2);
        assert_eq!(session.score().ties(), 2);
    }

    #[test]
    fn test_unavailable_round_keeps_score() {
        let mut session = Session::new();
        awaiting(&mut session, setup::guess_the_name(card(1, "Kuriboh")));
        session.submit_text("kuriboh").unwrap();

        let token = session.select_mode(GameMode::ProductGuessing);
        let result = Err(DealError::Unavailable {
            mode: GameMode::ProductGuessing,
            missing: MissingAttribute::Sets,
        });
        assert_eq!(session.deliver(token, result), Delivery::Applied);
        let feedback = session.feedback().unwrap();
        assert_eq!(feedback.tone, Tone::Neutral);
        assert_eq!(
            feedback.message,
            "Product information not available for this card. Try another one."
        );
        assert_eq!(session.score().score(), 1);
        assert!(session.next_round().is_ok());
    }

    #[test]
    fn test_fetch_failure_message() {
        let mut session = Session::new();
        let token = session.select_mode(GameMode::GuessTheCard);
        let error = DealError::Fetch(FetchError::Request {
            message: "timed out".into(),
        });
        session.deliver(token, Err(error));
        assert_eq!(session.feedback().unwrap().message, FETCH_FAILED_MESSAGE);
        assert_eq!(
            session.submit_text("anything"),
            Err(SessionError::NotAwaitingInput)
        );
    }

    #[test]
    fn test_stale_round_is_discarded() {
        let mut session = Session::new();
        let stale = session.select_mode(GameMode::GuessTheName);
        let current = session.select_mode(GameMode::GuessTheCard);
        let round = setup::guess_the_name(card(1, "Kuriboh"));
        assert_eq!(session.deliver(stale, Ok(round)), Delivery::Stale);
        assert_eq!(session.phase(), &Phase::Dealing { token: current });

        session.return_to_menu();
        let round = setup::guess_the_card(card(2, "Jinzo")).unwrap();
        assert_eq!(session.deliver(current, Ok(round)), Delivery::Stale);
        assert!(session.phase().is_idle());
    }

    #[test]
    fn test_return_to_menu_resets_score() {
        let mut session = Session::new();
        awaiting(&mut session, setup::guess_the_name(card(1, "Kuriboh")));
        session.submit_text("kuriboh").unwrap();
        session.return_to_menu();
        assert_eq!(session.score().score(), 0);
        assert_eq!(session.mode(), None);
        assert_eq!(session.next_round(), Err(SessionError::NoModeSelected));
    }

    #[test]
    fn test_wrong_input_kind_leaves_round_open() {
        let mut session = Session::new();
        awaiting(&mut session, setup::guess_the_name(card(1, "Kuriboh")));
        assert_eq!(
            session.pick_card(Side::Left),
            Err(SessionError::WrongInput {
                expected: InputKind::FreeText
            })
        );
        assert!(session.phase().is_awaiting_input());
    }

    #[test]
    fn test_answering_twice_is_rejected() {
        let mut session = Session::new();
        awaiting(&mut session, setup::guess_the_name(card(1, "Kuriboh")));
        session.submit_text("kuriboh").unwrap();
        assert_eq!(
            session.submit_text("kuriboh"),
            Err(SessionError::NotAwaitingInput)
        );
        assert_eq!(session.score().score(), 1);
        assert_eq!(session.round().unwrap().answer_name(), "Kuriboh");
    }
}
