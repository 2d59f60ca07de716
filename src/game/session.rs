use std::io;

use tracing::info;

use super::round::{Frontend, Mode, Outcome, Round};
use super::Player;
use crate::ai::{Agent, HeuristicAgent, RandomAgent};

/// Win/draw tally for the lifetime of the program.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub draws: u32,
    pub player_one: u32,
    pub player_two: u32,
}

impl Score {
    /// Count a finished round. Quitting counts for nothing.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Player::One) => self.player_one += 1,
            Outcome::Win(Player::Two) => self.player_two += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Quit => {}
        }
    }

    pub fn total(&self) -> u32 {
        self.draws + self.player_one + self.player_two
    }
}

/// Owns the score and the computer opponents across rounds.
pub struct Session {
    score: Score,
    easy: RandomAgent,
    hard: HeuristicAgent,
}

impl Session {
    /// `seed` makes the computer opponents deterministic.
    pub fn new(seed: Option<u64>) -> Self {
        let (easy, hard) = match seed {
            Some(seed) => (
                RandomAgent::with_seed(seed),
                HeuristicAgent::with_seed(seed.wrapping_add(1)),
            ),
            None => (RandomAgent::new(), HeuristicAgent::new()),
        };
        Session {
            score: Score::default(),
            easy,
            hard,
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Play one round in `mode` and record its outcome.
    pub fn play_round<F: Frontend + ?Sized>(
        &mut self,
        mode: Mode,
        frontend: &mut F,
    ) -> io::Result<Outcome> {
        let mut round = Round::new(mode);
        let opponent: Option<&mut dyn Agent> = match mode {
            Mode::Pvp => None,
            Mode::AiEasy => Some(&mut self.easy),
            Mode::AiHard => Some(&mut self.hard),
        };
        let outcome = round.play(frontend, opponent)?;

        self.score.record(outcome);
        info!(
            ?outcome,
            player_one = self.score.player_one,
            player_two = self.score.player_two,
            draws = self.score.draws,
            "score updated"
        );
        Ok(outcome)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::round::tests::{Scripted, DRAW_GAME};
    use crate::game::round::Action;

    fn columns(cols: &[usize]) -> Vec<Action> {
        cols.iter().map(|&c| Action::Column(c)).collect()
    }

    #[test]
    fn test_score_record() {
        let mut score = Score::default();
        score.record(Outcome::Win(Player::One));
        score.record(Outcome::Win(Player::Two));
        score.record(Outcome::Win(Player::Two));
        score.record(Outcome::Draw);
        score.record(Outcome::Quit);
        assert_eq!(
            score,
            Score {
                draws: 1,
                player_one: 1,
                player_two: 2
            }
        );
        assert_eq!(score.total(), 4);
    }

    #[test]
    fn test_quit_leaves_score_alone() {
        let mut session = Session::new(Some(1));
        let mut frontend = Scripted::new([Action::Quit]);
        let outcome = session.play_round(Mode::Pvp, &mut frontend).unwrap();
        assert_eq!(outcome, Outcome::Quit);
        assert_eq!(session.score(), Score::default());
    }

    #[test]
    fn test_reset_then_quit_leaves_score_alone() {
        let mut session = Session::new(Some(1));
        let mut frontend = Scripted::new(
            columns(&[0, 1, 0, 1])
                .into_iter()
                .chain([Action::Reset, Action::Quit]),
        );
        session.play_round(Mode::Pvp, &mut frontend).unwrap();
        assert_eq!(session.score(), Score::default());
    }

    #[test]
    fn test_pvp_wins_go_to_the_right_counter() {
        let mut session = Session::new(None);

        let mut p1 = Scripted::new(columns(&[0, 1, 0, 1, 0, 1, 0]));
        assert_eq!(
            session.play_round(Mode::Pvp, &mut p1).unwrap(),
            Outcome::Win(Player::One)
        );

        let mut p2 = Scripted::new(columns(&[6, 0, 1, 0, 1, 0, 1, 0]));
        assert_eq!(
            session.play_round(Mode::Pvp, &mut p2).unwrap(),
            Outcome::Win(Player::Two)
        );

        let mut draw = Scripted::new(columns(&DRAW_GAME));
        assert_eq!(
            session.play_round(Mode::Pvp, &mut draw).unwrap(),
            Outcome::Draw
        );

        assert_eq!(
            session.score(),
            Score {
                draws: 1,
                player_one: 1,
                player_two: 1
            }
        );
    }

    #[test]
    fn test_hard_computer_wins_count_for_player_two() {
        let mut session = Session::new(Some(5));
        // Human keeps feeding column 6; the heuristic builds the center column
        let mut frontend = Scripted::new(columns(&[6, 6, 6, 5, 5, 5]));
        let outcome = session.play_round(Mode::AiHard, &mut frontend).unwrap();
        assert_eq!(outcome, Outcome::Win(Player::Two));
        assert_eq!(session.score().player_two, 1);
    }

    #[test]
    fn test_easy_round_finishes() {
        let mut session = Session::new(Some(11));
        // Plenty of moves cycling through all columns; quit if the game outlasts them
        let script: Vec<Action> = (0..21)
            .map(|i| Action::Column((i * 3) % 7))
            .chain([Action::Quit; 30])
            .collect();
        let mut frontend = Scripted::new(script);
        let outcome = session.play_round(Mode::AiEasy, &mut frontend).unwrap();
        assert_eq!(session.score().total(), u32::from(outcome != Outcome::Quit));
    }
}
