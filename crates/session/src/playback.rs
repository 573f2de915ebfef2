//! Timed replay playback on a tokio task.

use std::sync::Arc;
use std::time::Duration;

use hate_enemy::Enemy;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tokio::task::{self, JoinHandle};

use crate::{Mode, Session, SessionError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Pause before each replayed move.
    pub step_delay_ms: u64,
}

impl PlaybackConfig {
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self { step_delay_ms: 20 }
    }
}

pub struct ReplayPlayer;

impl ReplayPlayer {
    /// Load `replay` into the session and play it back in the background.
    /// The session holds the task's abort handle, so a new game, a new
    /// replay or an undo stops it.
    ///
    /// No task is spawned when the session does not end up replaying: the
    /// replay was empty, or the current mode ignores replays.
    pub async fn start<E>(
        session: &Arc<Mutex<Session<E>>>,
        replay: &str,
        config: PlaybackConfig,
    ) -> Result<Option<JoinHandle<()>>, SessionError>
    where
        E: Enemy + Send + 'static,
        E::State: Send + 'static,
    {
        let mut guard = session.lock().await;
        guard.start_replay(replay)?;
        if guard.mode() != Mode::Replaying {
            log::debug!("nothing to play back in {:?} mode", guard.mode());
            return Ok(None);
        }
        let task = tokio::spawn(play(Arc::clone(session), config.step_delay()));
        guard.set_playback(task.abort_handle());
        Ok(Some(task))
    }
}

async fn play<E>(session: Arc<Mutex<Session<E>>>, delay: Duration)
where
    E: Enemy + Send + 'static,
    E::State: Send + 'static,
{
    loop {
        tokio::time::sleep(delay).await;
        // A step runs the enemy's search, so keep it off the async workers.
        let mut guard = Arc::clone(&session).lock_owned().await;
        match task::spawn_blocking(move || guard.replay_step()).await {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => {
                log::error!("replay step failed: {err}");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        assert_eq!(PlaybackConfig::default().step_delay(), Duration::from_millis(20));
        let cfg: PlaybackConfig = serde_json::from_str("{}").expect("parse");
        assert_eq!(cfg, PlaybackConfig::default());
    }
}
