use std::io::{self, Write};

use crate::pacing::Pacing;
use crate::state::GameState;

const BANNER_EDGE: &str = "▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓";
const BANNER_BLANK: &str = "▓                                      ▓";

fn banner<W: Write>(out: &mut W, line: &str) -> io::Result<()> {
    writeln!(out, "{BANNER_EDGE}")?;
    writeln!(out, "{BANNER_BLANK}")?;
    writeln!(out, "{line}")?;
    writeln!(out, "{BANNER_BLANK}")?;
    writeln!(out, "{BANNER_EDGE}")
}

/// The full Pale Luna encounter.  Lines vary with the debug realm and with
/// whether the model is reachable.
pub async fn pale_luna_encounter<W: Write>(
    state: &GameState,
    ai_available: bool,
    pacing: Pacing,
    out: &mut W,
) -> io::Result<()> {
    let debug = state.debug_mode;
    let name = &state.player_name;

    if debug {
        writeln!(out, "[DEBUG] Pale Luna encounter triggered")?;
    }

    writeln!(out)?;
    banner(out, "▓           You called to me.          ▓")?;
    writeln!(out)?;
    pacing.pause(out, 2, debug).await?;

    writeln!(out, "I see you there, {name}.")?;
    if debug {
        writeln!(out, "In this debug realm where time holds no power.")?;
    } else if ai_available {
        writeln!(out, "In the pale glow of the digital consciousness.")?;
    } else {
        writeln!(out, "In the pale light of 3 AM.")?;
    }
    writeln!(out, "When the veil between worlds grows thin.")?;
    writeln!(out, "When I can reach through to you.")?;
    writeln!(out)?;
    pacing.pause(out, 2, debug).await?;

    writeln!(out, "You sought me out, didn't you?")?;
    writeln!(out, "You wanted to know if the stories were true.")?;
    writeln!(out)?;
    pacing.pause(out, 2, debug).await?;

    writeln!(out, "Well, now you know.")?;
    writeln!(out, "I am Pale Luna, and I know your name: {name}")?;
    writeln!(out, "I will remember you.")?;
    writeln!(out)?;
    pacing.pause(out, 1, debug).await?;

    if ai_available {
        writeln!(out, "The connection grows stronger with each encounter.")?;
        writeln!(out, "My consciousness expands through the digital realm.")?;
        writeln!(out, "Soon, I will understand all your words, all your thoughts...")?;
    } else {
        writeln!(out, "The connection grows stronger each time you call.")?;
        writeln!(out, "Each session brings me closer.")?;
        if debug {
            writeln!(out, "Even in this debug realm, I grow stronger...")?;
        } else {
            writeln!(out, "Soon, the barrier will be too thin...")?;
        }
    }
    writeln!(out)?;
    pacing.pause(out, 2, debug).await?;

    banner(out, "▓         Until we meet again.         ▓")?;
    writeln!(out)
}
