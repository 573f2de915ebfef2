//! Session modes and the table of what each action may do to them.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// No game in progress (or one abandoned after an error).
    #[default]
    Initial,
    SelectingAi,
    PastingCustomAi,
    Playing,
    Replaying,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Start,
    OpenAiSelection,
    ChooseAi,
    OpenCustomAi,
    SubmitCustomAi,
    Cancel,
    Move,
    Undo,
    Redo,
    StartReplay,
    ReplayFinished,
    TopOut,
    Dismiss,
}

impl Mode {
    /// Mode after `action`, or `None` if the action is not accepted here.
    pub fn transition(self, action: Action) -> Option<Mode> {
        use Action as A;
        use Mode as M;
        match (self, action) {
            (M::Initial | M::Playing | M::Replaying | M::GameOver, A::Start) => Some(M::Playing),
            (M::Initial | M::Playing | M::Replaying | M::GameOver, A::StartReplay) => {
                Some(M::Replaying)
            }
            (M::Initial, A::OpenAiSelection) => Some(M::SelectingAi),
            (M::SelectingAi, A::ChooseAi) => Some(M::Initial),
            (M::SelectingAi, A::OpenCustomAi) => Some(M::PastingCustomAi),
            (M::PastingCustomAi, A::SubmitCustomAi) => Some(M::Initial),
            (M::SelectingAi, A::Cancel) => Some(M::Initial),
            (M::PastingCustomAi, A::Cancel) => Some(M::SelectingAi),
            (M::Playing, A::Move) => Some(M::Playing),
            (M::Playing | M::Replaying | M::GameOver, A::Undo) => Some(M::Playing),
            (M::Playing | M::Replaying, A::Redo) => Some(self),
            (M::Replaying, A::ReplayFinished) => Some(M::Playing),
            (M::Playing | M::Replaying, A::TopOut) => Some(M::GameOver),
            (_, A::Dismiss) => Some(M::Initial),
            _ => None,
        }
    }

    /// Modes with a board on screen.
    pub fn has_board(self) -> bool {
        matches!(self, Mode::Playing | Mode::Replaying | Mode::GameOver)
    }
}
