use hate_core::{ConfigError, Move, RotationSystem, WellConfig, WellState};
use hate_enemy::{select_piece, Enemy};
use hate_engine::Engine;
use hate_replay::Encoding;
use tokio::task::AbortHandle;

use crate::{Action, History, Mode, SessionError};

/// One player against one enemy: the mode machine, the undo/redo history
/// and the error the player has not dismissed yet.
pub struct Session<E: Enemy> {
    engine: Engine,
    enemy: E,
    mode: Mode,
    history: Option<History<E::State>>,
    error: Option<SessionError>,
    playback: Option<AbortHandle>,
}

/// Apply `mv` and, if that locked the piece without ending the game, ask
/// the enemy for the next one. A failing enemy still yields the locked
/// frame, with no live piece.
fn advance<E: Enemy>(
    engine: &Engine,
    enemy: &E,
    state: &WellState<E::State>,
    mv: Move,
) -> (WellState<E::State>, Option<SessionError>) {
    let mut next = engine.apply(state, mv);
    if next.piece.is_some() || engine.is_game_over(&next.core) {
        return (next, None);
    }
    match select_piece(enemy, &next.core, &next.ai_state, engine) {
        Ok((id, ai_state)) => {
            next.ai_state = ai_state;
            next.piece = engine.spawn(id);
            (next, None)
        }
        Err(err) => (next, Some(SessionError::NextPiece(err))),
    }
}

impl<E: Enemy> Session<E> {
    pub fn new(
        rotation_system: RotationSystem,
        config: WellConfig,
        enemy: E,
    ) -> Result<Self, ConfigError> {
        Ok(Self::with_engine(Engine::new(rotation_system, config)?, enemy))
    }

    pub fn with_engine(engine: Engine, enemy: E) -> Self {
        Self {
            engine,
            enemy,
            mode: Mode::Initial,
            history: None,
            error: None,
            playback: None,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn enemy(&self) -> &E {
        &self.enemy
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn error(&self) -> Option<&SessionError> {
        self.error.as_ref()
    }

    pub fn history(&self) -> Option<&History<E::State>> {
        self.history.as_ref()
    }

    pub fn current(&self) -> Option<&WellState<E::State>> {
        self.history.as_ref().map(History::current)
    }

    pub fn score(&self) -> u32 {
        self.current().map_or(0, |state| state.core.score)
    }

    fn accept(&self, action: Action) -> Option<Mode> {
        let next = self.mode.transition(action);
        if next.is_none() {
            log::warn!("ignoring {action:?} in {:?} mode", self.mode);
        }
        next
    }

    fn fail(&mut self, err: SessionError) -> Result<(), SessionError> {
        log::warn!("{err}");
        self.error = Some(err.clone());
        Err(err)
    }

    /// Keep the handle of a running playback task so later actions can
    /// stop it. Any previous task is stopped first.
    pub fn set_playback(&mut self, handle: AbortHandle) {
        self.cancel_playback();
        self.playback = Some(handle);
    }

    pub fn cancel_playback(&mut self) {
        if let Some(handle) = self.playback.take() {
            handle.abort();
        }
    }

    /// New game against the current enemy.
    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.accept(Action::Start).is_none() {
            return Ok(());
        }
        self.begin()
    }

    fn begin(&mut self) -> Result<(), SessionError> {
        self.cancel_playback();
        self.error = None;
        self.history = None;

        let core = self.engine.empty_core();
        let ai_state = self.enemy.initial_state();
        match select_piece(&self.enemy, &core, &ai_state, &self.engine) {
            Ok((id, ai_state)) => {
                let piece = self.engine.spawn(id);
                self.history = Some(History::new(WellState::new(core, ai_state, piece)));
                self.mode = Mode::Playing;
                log::info!("new game, first piece {id}");
                Ok(())
            }
            Err(err) => {
                self.mode = Mode::Initial;
                self.fail(SessionError::FirstPiece(err))
            }
        }
    }

    /// Player input.
    pub fn handle_move(&mut self, mv: Move) -> Result<(), SessionError> {
        if self.accept(Action::Move).is_none() {
            return Ok(());
        }
        self.commit(mv)
    }

    fn commit(&mut self, mv: Move) -> Result<(), SessionError> {
        if self.error.is_some() {
            log::warn!("game halted by an enemy error, ignoring {mv}");
            return Ok(());
        }
        let Some(history) = self.history.as_mut() else {
            log::warn!("no game in progress, ignoring {mv}");
            return Ok(());
        };
        if history.current().piece.is_none() {
            log::warn!("no live piece, ignoring {mv}");
            return Ok(());
        }

        let reused = history.recorded_move() == Some(mv) && history.advance();
        let mut failure = None;
        if !reused {
            let (next, err) = advance(&self.engine, &self.enemy, history.current(), mv);
            history.push(mv, next);
            failure = err;
        }

        let core = &history.current().core;
        if self.engine.is_game_over(core) {
            log::info!("game over, score {}", core.score);
            if let Some(mode) = self.mode.transition(Action::TopOut) {
                self.mode = mode;
            }
        }

        match failure {
            Some(err) => self.fail(err),
            None => Ok(()),
        }
    }

    pub fn undo(&mut self) {
        let Some(mode) = self.accept(Action::Undo) else {
            return;
        };
        self.cancel_playback();
        if !self.history.as_mut().is_some_and(History::back) {
            log::warn!("nothing to undo");
        }
        self.mode = mode;
    }

    /// Re-apply the recorded move after the cursor.
    pub fn redo(&mut self) -> Result<(), SessionError> {
        if self.accept(Action::Redo).is_none() {
            return Ok(());
        }
        let Some(mv) = self.history.as_ref().and_then(History::recorded_move) else {
            log::warn!("nothing to redo");
            return Ok(());
        };
        self.commit(mv)
    }

    /// Decode `replay` and start a new game with it recorded ahead of the
    /// cursor. Playback happens one [`Session::replay_step`] at a time.
    pub fn start_replay(&mut self, replay: &str) -> Result<(), SessionError> {
        if self.accept(Action::StartReplay).is_none() {
            return Ok(());
        }
        // A bad replay string leaves the game in progress untouched.
        let moves = match hate_replay::decode(replay) {
            Ok(moves) => moves,
            Err(err) if self.history.is_some() => {
                log::warn!("replay rejected: {err}");
                return Err(err.into());
            }
            Err(err) => return self.fail(err.into()),
        };
        self.begin()?;

        let empty = moves.is_empty();
        if let Some(history) = self.history.as_mut() {
            history.load_replay(moves);
        }
        self.mode = if empty { Mode::Playing } else { Mode::Replaying };
        Ok(())
    }

    fn has_recorded_move(&self) -> bool {
        self.history
            .as_ref()
            .is_some_and(|history| history.recorded_move().is_some())
    }

    fn finish_replay(&mut self) {
        if let Some(mode) = self.mode.transition(Action::ReplayFinished) {
            self.mode = mode;
        }
    }

    /// One playback step. Returns whether another step should follow.
    pub fn replay_step(&mut self) -> bool {
        if self.mode != Mode::Replaying || self.error.is_some() {
            return false;
        }
        if !self.has_recorded_move() {
            self.finish_replay();
            return false;
        }
        if self.redo().is_err() || self.mode != Mode::Replaying {
            return false;
        }
        if self.has_recorded_move() {
            log::debug!(
                "replay step {}",
                self.history.as_ref().map_or(0, History::cursor)
            );
            true
        } else {
            self.finish_replay();
            false
        }
    }

    /// Run playback to completion without a timer.
    pub fn play_replay_to_end(&mut self) {
        while self.replay_step() {}
    }

    /// The moves leading to the current state.
    pub fn export_replay(&self, encoding: Encoding) -> String {
        let played = self.history.as_ref().map_or(&[][..], History::played);
        hate_replay::encode(played, encoding)
    }

    pub fn open_ai_selection(&mut self) {
        if let Some(mode) = self.accept(Action::OpenAiSelection) {
            self.mode = mode;
        }
    }

    /// Swap in another enemy. The old game goes with the old enemy.
    pub fn choose_enemy(&mut self, enemy: E) {
        if let Some(mode) = self.accept(Action::ChooseAi) {
            self.enemy = enemy;
            self.history = None;
            self.mode = mode;
        }
    }

    pub fn open_custom_enemy(&mut self) {
        if let Some(mode) = self.accept(Action::OpenCustomAi) {
            self.mode = mode;
        }
    }

    /// Accept a user-supplied enemy, or the reason building it failed.
    pub fn submit_custom_enemy(&mut self, enemy: Result<E, String>) -> Result<(), SessionError> {
        let Some(mode) = self.accept(Action::SubmitCustomAi) else {
            return Ok(());
        };
        match enemy {
            Ok(enemy) => {
                self.enemy = enemy;
                self.history = None;
                self.error = None;
                self.mode = mode;
                Ok(())
            }
            Err(reason) => self.fail(SessionError::EnemyInstantiation(reason)),
        }
    }

    pub fn cancel(&mut self) {
        if let Some(mode) = self.accept(Action::Cancel) {
            self.mode = mode;
        }
    }

    /// Clear the error and return to the neutral mode. Any board reached
    /// so far stays in the history.
    pub fn dismiss_error(&mut self) {
        if self.error.take().is_none() {
            log::warn!("no error to dismiss");
            return;
        }
        self.cancel_playback();
        if let Some(mode) = self.mode.transition(Action::Dismiss) {
            self.mode = mode;
        }
    }
}
