use super::basic_types::Coordinates;
use indexmap::IndexSet;
use strum_macros::Display;

#[derive(Clone, PartialEq, Eq, Display, Debug)]
pub enum RevealOutcome {
    AlreadyRevealed,
    /// The fields revealed by this call, in reveal order.
    Continue(IndexSet<Coordinates>),
    MineHit,
    Win,
}

#[derive(Clone, Copy, PartialEq, Eq, Display, Debug)]
pub enum GameOutcome {
    InProgress,
    Won,
    Lost,
}

impl GameOutcome {
    pub fn is_terminal(&self) -> bool {
        self != &GameOutcome::InProgress
    }

    /// The state reached by applying `reveal_outcome` to a game in this state.
    pub fn after(self, reveal_outcome: &RevealOutcome) -> GameOutcome {
        match (self, reveal_outcome) {
            (GameOutcome::InProgress, RevealOutcome::MineHit) => GameOutcome::Lost,
            (GameOutcome::InProgress, RevealOutcome::Win) => GameOutcome::Won,
            (state, _) => state,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn transitions() {
        let in_progress = GameOutcome::InProgress;
        assert_eq!(GameOutcome::Lost, in_progress.after(&RevealOutcome::MineHit));
        assert_eq!(GameOutcome::Won, in_progress.after(&RevealOutcome::Win));
        assert_eq!(
            GameOutcome::InProgress,
            in_progress.after(&RevealOutcome::AlreadyRevealed)
        );
        assert_eq!(
            GameOutcome::InProgress,
            in_progress.after(&RevealOutcome::Continue(IndexSet::new()))
        );
    }

    #[test]
    fn terminal_states_are_sticky() {
        assert_eq!(
            GameOutcome::Lost,
            GameOutcome::Lost.after(&RevealOutcome::Win)
        );
        assert_eq!(
            GameOutcome::Won,
            GameOutcome::Won.after(&RevealOutcome::MineHit)
        );
        assert!(GameOutcome::Won.is_terminal());
        assert!(GameOutcome::Lost.is_terminal());
        assert!(!GameOutcome::InProgress.is_terminal());
    }

    #[test]
    fn display() {
        assert_eq!("MineHit", RevealOutcome::MineHit.to_string());
        assert_eq!("Won", GameOutcome::Won.to_string());
    }
}
