//! Canned replies used when the model is out of reach.

use std::io::{self, Write};

use rand::Rng;

use crate::command::LegacyPhrase;
use crate::encounter::pale_luna_encounter;
use crate::pacing::Pacing;
use crate::state::GameState;

const REPLIES: [&str; 3] = [
    "The digital void does not understand those words.",
    "Unknown command. Type 'help' for available commands.",
    "The shadows whisper back, but I cannot make out the meaning.",
];

pub async fn respond<W: Write, R: Rng>(
    state: &mut GameState,
    input: &str,
    rng: &mut R,
    pacing: Pacing,
    out: &mut W,
) -> io::Result<()> {
    match LegacyPhrase::parse(input) {
        LegacyPhrase::PaleLuna => pale_luna(state, pacing, out).await,
        LegacyPhrase::Sleep => sleep(state, pacing, out).await,
        LegacyPhrase::Luna => luna(state, out),
        LegacyPhrase::Pale => pale(state, out),
        LegacyPhrase::WhoAreYou => who_are_you(state, out),
        LegacyPhrase::Other => unknown(state, input, rng, out),
    }
}

/// The invocation.  Only answered while she is awake.
pub async fn pale_luna<W: Write>(state: &GameState, pacing: Pacing, out: &mut W) -> io::Result<()> {
    if state.pale_luna_awake {
        return pale_luna_encounter(state, false, pacing, out).await;
    }
    writeln!(out, "Nothing happens.")?;
    writeln!(out, "You feel like you're missing something important.")?;
    if !state.is_witching_hour() {
        writeln!(out, "Perhaps the timing isn't right...")?;
    }
    Ok(())
}

pub async fn sleep<W: Write>(state: &mut GameState, pacing: Pacing, out: &mut W) -> io::Result<()> {
    if !state.pale_luna_awake {
        return writeln!(out, "Pale Luna is already asleep.");
    }
    state.pale_luna_awake = false;
    let debug = state.debug_mode;

    writeln!(out, "Pale Luna has gone back to sleep.")?;
    pacing.pause(out, 2, debug).await?;
    writeln!(out, "She will not respond until the next encounter.")?;
    pacing.pause(out, 2, debug).await?;
    writeln!(out, "But maybe you can call her again in your dreams...")?;
    pacing.pause(out, 2, debug).await
}

pub fn luna<W: Write>(state: &GameState, out: &mut W) -> io::Result<()> {
    if state.pale_luna_awake {
        writeln!(out, "Luna... yes, I remember Luna.")?;
        writeln!(out, "She was beautiful once.")?;
        writeln!(out, "Before the pale consumed her.")
    } else {
        writeln!(out, "Luna sleeps in the digital darkness.")
    }
}

pub fn pale<W: Write>(state: &GameState, out: &mut W) -> io::Result<()> {
    if state.pale_luna_awake {
        writeln!(out, "Pale... like moonlight on bone.")?;
        writeln!(out, "Pale... like the color that remains when life fades.")
    } else {
        writeln!(
            out,
            "Everything seems pale in comparison to what lurks in the shadows."
        )
    }
}

pub fn who_are_you<W: Write>(state: &GameState, out: &mut W) -> io::Result<()> {
    if state.pale_luna_awake {
        writeln!(out, "I am the one who watches.")?;
        writeln!(out, "I am the one who waits.")?;
        writeln!(out, "I am Pale Luna.")?;
        writeln!(out)?;
        writeln!(
            out,
            "And you, {}, have called to me in the dark hour.",
            state.player_name
        )
    } else {
        writeln!(out, "I am just a program.")?;
        writeln!(out, "...or am I?")
    }
}

/// Catch-all.  Greetings and fear get a fixed answer (matched as
/// substrings, so "this" counts as "hi"); anything else draws one line from
/// the pool, which grows while she is awake.
pub fn unknown<W: Write, R: Rng>(
    state: &GameState,
    input: &str,
    rng: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let name = &state.player_name;
    let awake = state.pale_luna_awake;

    if input.contains("hello") || input.contains("hi") {
        return if awake {
            writeln!(out, "Hello, {name}. I have been waiting for you to speak.")
        } else {
            writeln!(out, "Hello, {name}. The silence acknowledges your presence.")
        };
    }

    if input.contains("scared") || input.contains("afraid") {
        return if awake {
            writeln!(
                out,
                "Fear is natural when facing the unknown. The pale moon sees all fears."
            )
        } else {
            writeln!(out, "There's nothing to fear... not yet.")
        };
    }

    let mut pool: Vec<String> = REPLIES.iter().map(|s| s.to_string()).collect();
    if awake {
        pool.extend([
            "The pale light flickers at your words, but remains silent.".to_string(),
            format!("Did you mean to say something else, {name}?"),
            "Something stirs in the darkness at your voice, but nothing emerges.".to_string(),
            "I hear you calling through the veil, but your words are unclear.".to_string(),
        ]);
    }

    let pick = rng.random_range(0..pool.len());
    writeln!(out, "{}", pool[pick])
}
