use std::sync::Arc;
use std::time::Duration;

use hate_core::Move;
use hate_enemy::Lovetris;
use hate_engine::Engine;
use hate_replay::{encode, Encoding, ReplayError};
use hate_session::{Mode, PlaybackConfig, ReplayPlayer, Session, SessionError};
use tokio::sync::Mutex;

type Shared = Arc<Mutex<Session<Lovetris>>>;

fn shared() -> Shared {
    Arc::new(Mutex::new(Session::with_engine(Engine::hatetris(), Lovetris)))
}

/// Sixteen drops: four full runs, so no padding move comes back.
fn sixteen_downs(encoding: Encoding) -> String {
    encode(&[Move::Down; 16], encoding)
}

async fn cursor(session: &Shared) -> Option<usize> {
    session.lock().await.history().map(|h| h.cursor())
}

#[tokio::test(start_paused = true)]
async fn test_playback_runs_to_end() {
    let session = shared();
    let task = ReplayPlayer::start(
        &session,
        &sixteen_downs(Encoding::Base65536),
        PlaybackConfig::default(),
    )
    .await
    .expect("replay loads")
    .expect("playback task");
    assert_eq!(session.lock().await.mode(), Mode::Replaying);

    task.await.expect("playback finishes");
    let s = session.lock().await;
    assert_eq!(s.mode(), Mode::Playing);
    assert_eq!(s.history().map(|h| h.cursor()), Some(16));
    assert_eq!(s.current().and_then(|state| state.piece).map(|p| p.y), Some(16));
}

#[tokio::test(start_paused = true)]
async fn test_undo_stops_playback() {
    let session = shared();
    let task = ReplayPlayer::start(
        &session,
        &sixteen_downs(Encoding::Hex),
        PlaybackConfig { step_delay_ms: 20 },
    )
    .await
    .expect("replay loads")
    .expect("playback task");

    tokio::time::sleep(Duration::from_millis(50)).await;
    {
        let mut s = session.lock().await;
        s.undo();
        assert_eq!(s.mode(), Mode::Playing);
    }
    let err = task.await.expect_err("task aborted");
    assert!(err.is_cancelled());

    let stopped_at = cursor(&session).await;
    assert!(stopped_at.is_some_and(|c| c < 16));
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(cursor(&session).await, stopped_at);
}

#[tokio::test(start_paused = true)]
async fn test_new_replay_replaces_running_one() {
    let session = shared();
    let first = ReplayPlayer::start(
        &session,
        &sixteen_downs(Encoding::Hex),
        PlaybackConfig::default(),
    )
    .await
    .expect("first replay")
    .expect("playback task");
    tokio::time::sleep(Duration::from_millis(30)).await;

    let lefts = encode(&[Move::Left; 8], Encoding::Base2048);
    let second = ReplayPlayer::start(&session, &lefts, PlaybackConfig::default())
        .await
        .expect("second replay")
        .expect("playback task");
    assert!(first.await.expect_err("first aborted").is_cancelled());
    second.await.expect("second finishes");

    let s = session.lock().await;
    assert_eq!(s.mode(), Mode::Playing);
    assert_eq!(s.history().map(|h| h.replay().to_vec()), Some(vec![Move::Left; 8]));
}

#[tokio::test]
async fn test_bad_replay_is_reported() {
    let session = shared();
    let result = ReplayPlayer::start(&session, "zzz", PlaybackConfig::default()).await;
    assert!(matches!(
        result,
        Err(SessionError::Replay(ReplayError::UnrecognisedEncoding))
    ));
    assert_eq!(session.lock().await.mode(), Mode::Initial);
}

#[tokio::test]
async fn test_empty_replay_spawns_nothing() {
    let session = shared();
    let task = ReplayPlayer::start(&session, "", PlaybackConfig::default())
        .await
        .expect("empty replay loads");
    assert!(task.is_none());
    assert_eq!(session.lock().await.mode(), Mode::Playing);
}

#[tokio::test]
async fn test_replay_ignored_in_menu_spawns_nothing() {
    let session = shared();
    session.lock().await.open_ai_selection();
    let replay = sixteen_downs(Encoding::Hex);
    let task = ReplayPlayer::start(&session, &replay, PlaybackConfig::default())
        .await
        .expect("ignored");
    assert!(task.is_none());
    let s = session.lock().await;
    assert_eq!(s.mode(), Mode::SelectingAi);
    assert!(s.history().is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_playback_on_multi_thread_runtime() {
    let session = shared();
    let task = ReplayPlayer::start(
        &session,
        &sixteen_downs(Encoding::Base2048),
        PlaybackConfig { step_delay_ms: 0 },
    )
    .await
    .expect("replay loads")
    .expect("playback task");
    task.await.expect("playback finishes");
    assert_eq!(cursor(&session).await, Some(16));
}
