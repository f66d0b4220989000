//! Record-replay round trip.
//!
//! 1. Draw with live randomness while recording cassettes.
//! 2. Replay the cassettes and get the identical draw, timestamp included.
//! 3. Replay again to show determinism.
//! 4. Replay a different request (participants or strategy) and see the
//!    replay refuse with an ordinary error.

use std::path::Path;
use std::process::{Command, Output};

use giftdraw::cassette::config::{CLOCK_CASSETTE, DRAW_META, ENTROPY_CASSETTE};
use giftdraw::cassette::format::Cassette;
use giftdraw::context::ServiceContext;
use giftdraw::derangement::{self, Participants};

fn run_giftdraw(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_giftdraw"))
        .args(args)
        .env_remove("GIFTDRAW_STRATEGY")
        .env_remove("GIFTDRAW_MAX_ATTEMPTS")
        .env_remove("GIFTDRAW_SEED")
        .env_remove("GIFTDRAW_RECORD")
        .output()
        .expect("failed to run giftdraw binary")
}

#[test]
fn recorded_cli_draw_replays_identically() {
    let dir = std::env::temp_dir().join("giftdraw_record_replay_cli");
    let _ = std::fs::remove_dir_all(&dir);
    let dir_arg = dir.to_str().unwrap();
    let names = ["Ann", "Bob", "Cy", "Di", "Eve", "Fay"];

    let mut args = vec!["draw"];
    args.extend(names);
    args.extend(["--format", "json", "--record", dir_arg]);
    let recorded = run_giftdraw(&args);
    assert!(recorded.status.success(), "{}", String::from_utf8_lossy(&recorded.stderr));
    assert!(String::from_utf8_lossy(&recorded.stderr).contains("Recording saved to"));
    assert!(dir.join(ENTROPY_CASSETTE).exists());
    assert!(dir.join(CLOCK_CASSETTE).exists());
    assert!(dir.join(DRAW_META).exists());

    let mut args = vec!["draw"];
    args.extend(names);
    args.extend(["--format", "json", "--replay", dir_arg]);
    let first = run_giftdraw(&args);
    let second = run_giftdraw(&args);
    assert!(first.status.success(), "{}", String::from_utf8_lossy(&first.stderr));

    assert_eq!(recorded.stdout, first.stdout, "replay mismatch");
    assert_eq!(first.stdout, second.stdout, "determinism: replays differ");

    let _ = std::fs::remove_dir_all(&dir);
}

/// Records `Ann Bob Cy` with the default strategy, then replays `replay`.
fn replay_after_recording_three(dir_name: &str, replay: &[&str]) -> Output {
    let dir = std::env::temp_dir().join(dir_name);
    let _ = std::fs::remove_dir_all(&dir);
    let dir_arg = dir.to_str().unwrap();

    let recorded = run_giftdraw(&["draw", "Ann", "Bob", "Cy", "--record", dir_arg]);
    assert!(recorded.status.success(), "{}", String::from_utf8_lossy(&recorded.stderr));

    let mut args = vec!["draw"];
    args.extend(replay);
    args.extend(["--replay", dir_arg]);
    let replayed = run_giftdraw(&args);

    let _ = std::fs::remove_dir_all(&dir);
    replayed
}

#[test]
fn replay_with_other_participants_is_refused() {
    let replayed =
        replay_after_recording_three("giftdraw_replay_other_names", &["Ann", "Bob", "Cy", "Di"]);
    let stderr = String::from_utf8_lossy(&replayed.stderr);

    assert_eq!(replayed.status.code(), Some(1), "{stderr}");
    assert!(stderr.contains("replay does not match the recording"), "{stderr}");
    assert!(stderr.contains("requested [Ann, Bob, Cy, Di]"), "{stderr}");
    assert!(!stderr.contains("panicked"), "{stderr}");
}

#[test]
fn replay_with_other_strategy_is_refused() {
    let replayed = replay_after_recording_three(
        "giftdraw_replay_other_strategy",
        &["Ann", "Bob", "Cy", "--strategy", "direct"],
    );
    let stderr = String::from_utf8_lossy(&replayed.stderr);

    assert_eq!(replayed.status.code(), Some(1), "{stderr}");
    assert!(stderr.contains("recorded rejection strategy, requested direct"), "{stderr}");
    assert!(!stderr.contains("participants"), "{stderr}");
    assert!(!stderr.contains("panicked"), "{stderr}");
}

#[test]
fn library_recording_matches_cassette_contents() {
    let dir = std::env::temp_dir().join("giftdraw_record_replay_lib");
    let _ = std::fs::remove_dir_all(&dir);
    let names = Participants::parse(&["Ann", "Bob", "Cy", "Di"]).unwrap();

    let session = giftdraw::cassette::session::RecordingSession::new(&dir).unwrap();
    let recorded = {
        let ctx = ServiceContext::recording(ServiceContext::seeded(5), &session);
        derangement::generate(&names, ctx.entropy.as_ref()).unwrap()
    };
    session.finish().unwrap();

    let cassette = Cassette::load(&dir.join(ENTROPY_CASSETTE)).unwrap();
    assert!(!cassette.interactions.is_empty());
    // Every rejection-sampling attempt shuffles 4 elements with 3 draws.
    assert_eq!(cassette.interactions.len() % 3, 0);
    assert!(cassette.interactions.iter().all(|i| i.port == "entropy"));

    let ctx = ServiceContext::replaying(Path::new(&dir)).unwrap();
    let replayed = derangement::generate(&names, ctx.entropy.as_ref()).unwrap();
    assert_eq!(recorded, replayed);

    let _ = std::fs::remove_dir_all(&dir);
}
