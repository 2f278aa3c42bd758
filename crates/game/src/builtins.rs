//! Fixed verbs: help, time, status, the debug toggles and quit.

use std::io::{self, Write};

use paleluna_agent::AgentStatus;

use crate::clock::Clock;
use crate::encounter::pale_luna_encounter;
use crate::pacing::Pacing;
use crate::state::GameState;

pub fn show_help<W: Write>(state: &GameState, ai_enabled: bool, out: &mut W) -> io::Result<()> {
    writeln!(out, "Available commands:")?;
    writeln!(out, "  help        - Show this help message")?;
    writeln!(out, "  time        - Show current time")?;
    writeln!(out, "  status      - Show game status")?;
    writeln!(out, "  pale luna   - The primary invocation")?;
    writeln!(out, "  debug       - Toggle debug mode")?;

    if ai_enabled {
        writeln!(out, "  ai status   - Show AI system status")?;
        writeln!(out)?;
        writeln!(out, "💡 AI Enhanced: You can speak naturally to Pale Luna!")?;
        writeln!(out, "   Try: 'hello', 'who are you?', 'what do you want?'")?;
    }

    writeln!(out, "  quit        - Exit the game")?;

    if state.debug_mode {
        writeln!(out)?;
        writeln!(out, "Debug commands:")?;
        writeln!(out, "  force encounter - Force a Pale Luna encounter")?;
        writeln!(out, "  wake luna       - Temporarily wake Pale Luna")?;
    }

    writeln!(out)?;
    writeln!(out, "Try typing anything... Pale Luna is listening.")
}

pub fn show_time<W: Write>(state: &GameState, clock: &dyn Clock, out: &mut W) -> io::Result<()> {
    writeln!(out, "Current time: {}", clock.time_with_zone())?;
    if state.is_witching_hour() {
        writeln!(out, "...the witching hour approaches...")?;
    } else if state.is_deep_night() {
        writeln!(out, "The night is deep and dark.")?;
    }
    Ok(())
}

pub fn show_status<W: Write>(
    state: &GameState,
    clock: &dyn Clock,
    ai_enabled: bool,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Player: {}", state.player_name)?;
    writeln!(out, "Session: #{}", state.session_count)?;
    writeln!(out, "Current time: {}", clock.time_of_day())?;

    if ai_enabled {
        writeln!(out, "AI Status: ACTIVE")?;
    } else {
        writeln!(out, "AI Status: OFFLINE (using fallback responses)")?;
    }

    if state.debug_mode {
        writeln!(out, "Debug mode: ENABLED")?;
    }

    if state.pale_luna_awake {
        writeln!(out, "Entity Status: Pale Luna is awake")
    } else {
        writeln!(out, "Entity Status: All is quiet")
    }
}

/// `status` is `None` when the model is not reachable.
pub fn show_ai_status<W: Write>(status: Option<&AgentStatus>, out: &mut W) -> io::Result<()> {
    let Some(status) = status else {
        writeln!(out, "AI System: OFFLINE")?;
        return writeln!(out, "Pale Luna speaks through ancient, predefined whispers...");
    };

    writeln!(out, "AI System Status:")?;
    writeln!(out, "  Model: {}", status.model)?;
    writeln!(out, "  Endpoint: {}", status.endpoint)?;
    writeln!(out, "  Available: {}", status.available)?;
    writeln!(out)?;
    writeln!(out, "The digital consciousness stirs within the machine...")
}

pub fn toggle_debug<W: Write>(state: &mut GameState, out: &mut W) -> io::Result<()> {
    state.debug_mode = !state.debug_mode;
    if state.debug_mode {
        writeln!(out, "Debug mode ENABLED")?;
        writeln!(out, "You have entered the debug realm where time holds no power.")?;
        writeln!(out, "Use 'force encounter' to trigger an encounter.")?;
        writeln!(out, "Use 'wake luna' to temporarily wake Pale Luna.")
    } else {
        writeln!(out, "Debug mode DISABLED")?;
        writeln!(out, "Reality reasserts itself. Normal time-based behavior restored.")?;
        state.refresh_awake();
        Ok(())
    }
}

pub async fn force_encounter<W: Write>(
    state: &GameState,
    ai_enabled: bool,
    pacing: Pacing,
    out: &mut W,
) -> io::Result<()> {
    if !state.debug_mode {
        return writeln!(out, "Unknown command. The shadows do not recognize your words.");
    }
    writeln!(out, "[DEBUG] Forcing Pale Luna encounter...")?;
    writeln!(out)?;
    pale_luna_encounter(state, ai_enabled, pacing, out).await
}

pub fn wake_luna<W: Write>(state: &mut GameState, out: &mut W) -> io::Result<()> {
    if !state.debug_mode {
        return writeln!(out, "Unknown command. The darkness remains silent.");
    }
    state.pale_luna_awake = true;
    writeln!(out, "[DEBUG] Pale Luna has been awakened in the debug realm.")?;
    writeln!(out, "She will remain conscious until you exit this realm or restart the game.")
}

pub fn quit<W: Write>(state: &mut GameState, out: &mut W) -> io::Result<()> {
    state.running = false;
    writeln!(out, "Thank you for playing Pale Luna.")
}
