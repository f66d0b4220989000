//! `giftdraw draw` command.

use std::fmt::Write as _;

use log::info;

use crate::cassette::format::DrawMeta;
use crate::cassette::session::RecordingSession;
use crate::cli::{DrawArgs, Format};
use crate::config::{Overrides, Settings};
use crate::context::ServiceContext;
use crate::derangement::Participants;
use crate::exchange::ExchangeState;
use crate::export::{DrawRecord, FileFormat};

/// Placeholder shown instead of a receiver that has not been revealed.
pub const HIDDEN: &str = "(hidden)";

/// Execute the `draw` command.
///
/// # Errors
///
/// Returns an error string if the names are invalid, the draw fails, a
/// replay does not match its recording, cassettes cannot be opened or
/// written, or the export cannot be saved.
pub fn run(args: &DrawArgs) -> Result<(), String> {
    let settings = Settings::resolve(&Overrides {
        strategy: args.strategy,
        max_attempts: args.max_attempts,
        time_limit_ms: args.time_limit_ms,
        seed: args.seed,
        record: args.record.clone(),
    })?;
    let participants = Participants::parse(&args.names).map_err(|e| e.to_string())?;
    let request = DrawMeta {
        participants: participants.names().to_vec(),
        strategy: settings.options.strategy,
    };

    let mut session = match (&settings.record, &args.replay) {
        (Some(dir), None) => Some(RecordingSession::new(dir)?),
        _ => None,
    };
    if let Some(session) = session.as_mut() {
        session.describe(request.clone());
    }
    let ctx = build_context(&settings, args, &request, session.as_ref())?;
    let result = draw_and_print(&settings, args, &ctx);

    if let Some(session) = session {
        // Recording adapters hold the recorders until the context goes away.
        drop(ctx);
        let dir = session.finish()?;
        eprintln!("Recording saved to: {}", dir.display());
    }

    result
}

fn build_context(
    settings: &Settings,
    args: &DrawArgs,
    request: &DrawMeta,
    session: Option<&RecordingSession>,
) -> Result<ServiceContext, String> {
    if let Some(dir) = &args.replay {
        if let Some(recorded) = DrawMeta::load_from_dir(dir)? {
            if let Some(diff) = recorded.mismatch(request) {
                return Err(format!("replay does not match the recording: {diff}"));
            }
        }
        info!("replaying draw from {}", dir.display());
        return ServiceContext::replaying(dir);
    }
    let base = match settings.seed {
        Some(seed) => ServiceContext::seeded(seed),
        None => ServiceContext::live(),
    };
    Ok(match session {
        Some(session) => ServiceContext::recording(base, session),
        None => base,
    })
}

fn draw_and_print(settings: &Settings, args: &DrawArgs, ctx: &ServiceContext) -> Result<(), String> {
    let state = ExchangeState::with_names(args.names.iter().cloned());
    let (mut state, attempts) = state
        .generate(ctx.entropy.as_ref(), Some(ctx.clock.as_ref()), &settings.options)
        .map_err(|e| e.to_string())?;
    let drawn_at = ctx.clock.now();

    for giver in &args.reveal {
        let giver = giver.trim();
        if state.assignment.as_ref().and_then(|a| a.receiver_for(giver)).is_none() {
            return Err(format!("Cannot reveal {giver:?}: not a participant in this draw"));
        }
        if state.revealed_receiver(giver).is_none() {
            state = state.toggle_reveal(giver);
        }
    }
    if args.reveal_all {
        state = state.reveal_all();
    }

    let Some(assignment) = state.assignment.clone() else {
        return Err("Draw produced no assignment".to_string());
    };
    info!(
        "drew {} pairs with {} strategy in {attempts} attempt(s)",
        assignment.len(),
        settings.options.strategy
    );

    let record =
        DrawRecord { drawn_at, strategy: settings.options.strategy, attempts, pairs: assignment };

    match args.format {
        Format::Text => print!("{}", render_text(&state, &record)),
        Format::Json => println!("{}", record.render(FileFormat::Json)?),
        Format::Yaml => print!("{}", record.render(FileFormat::Yaml)?),
    }

    if let Some(path) = &args.output {
        record.save(path)?;
        eprintln!("Draw saved to: {}", path.display());
    }
    Ok(())
}

/// One line per giver, in input order, receivers hidden unless revealed.
fn render_text(state: &ExchangeState, record: &DrawRecord) -> String {
    let mut out = format!(
        "Gift exchange: {} participants ({} strategy, {} attempt(s))\n",
        record.pairs.len(),
        record.strategy,
        record.attempts
    );
    for giver in record.pairs.givers() {
        let receiver = state.revealed_receiver(giver).unwrap_or(HIDDEN);
        let _ = writeln!(out, "  {giver} -> {receiver}");
    }
    out
}
