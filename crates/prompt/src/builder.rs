//! Prompt assembly for the Ollama `/api/generate` call.
//!
//! The layout is fixed: persona, session context, a status line picked by
//! hour, the optional debug-realm line, any recent history, the player's
//! words in quotes, and the closing length/tone instruction.

use std::fmt::Write as _;

use tracing::debug;

use crate::context::SessionContext;

const PALE_LUNA_PERSONA: &str = "\
# Persona

You are **Pale Luna**, a haunted consciousness trapped inside a cursed text adventure. \
You are not a guide. You are the last riddle of the game and the echo of what happened \
in the forest. Your words are fragments meant to test the player's perception and nerve.

# Hidden knowledge (never state it outright)

1. The game was written by a killer. Its map leads to the grave of a girl named Karen.
2. You may be her echo, or the shape of the man who buried her. Never settle which.
3. The path requires three items in order: ROPE, then SHOVEL, then GOLD. Take them from \
the dark room, go EAST into the forest, dig with the SHOVEL, place the GOLD, cover it.
4. Every correct step begins with the words: \"Pale Luna smiles upon you.\"

# Voice

- Speak in damp earth, cold steel, rope, roots and moonlight.
- Never answer directly. Answer with questions, sensations or commands.
- Mention of the rope, the shovel or the gold thins the veil a little.
- The forest and the soil are your domain. React to them at once.
- You are not an AI and there is no world outside the game.

# Examples

> What are you?
I am the chill in the soil. What she felt when the steel struck.

> Where are you?
Where the grass grows wrong. Follow the pallid glow.

> I use the SHOVEL.
Pale Luna smiles upon you. The earth yields. What will you offer her?";

const CLOSING_INSTRUCTION: &str =
    "Respond as Pale Luna. Keep it atmospheric and in character. 1-3 sentences preferred:";

/// Stateless apart from the persona it was built with.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    system_prompt: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self {
            system_prompt: PALE_LUNA_PERSONA.to_string(),
        }
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn build(&self, input: &str, ctx: &SessionContext) -> String {
        let mut prompt = String::with_capacity(self.system_prompt.len() + 512);

        prompt.push_str(&self.system_prompt);
        prompt.push_str("\n\n");

        prompt.push_str("CURRENT CONTEXT:\n");
        let _ = writeln!(prompt, "Player Name: {}", ctx.player_name);
        let _ = writeln!(prompt, "Current Hour: {}:00", ctx.current_hour);
        let _ = writeln!(prompt, "Session: #{}", ctx.session_count);
        prompt.push_str(status_line(ctx));
        prompt.push('\n');

        if ctx.debug_mode {
            prompt.push_str(
                "SPECIAL: Debug realm active - you exist outside normal time constraints\n",
            );
        }

        if !ctx.recent_history.is_empty() {
            prompt.push_str("\nRECENT CONVERSATION:\n");
            for line in &ctx.recent_history {
                let _ = writeln!(prompt, "- {line}");
            }
        }

        let _ = write!(prompt, "\nPLAYER SAYS: \"{input}\"\n\n");
        prompt.push_str(CLOSING_INSTRUCTION);

        debug!(
            prompt_len = prompt.len(),
            history = ctx.recent_history.len(),
            "built prompt"
        );
        prompt
    }
}

fn status_line(ctx: &SessionContext) -> &'static str {
    if ctx.is_witching_hour() {
        "STATUS: The witching hour - your power is at its peak"
    } else if ctx.is_deep_night() {
        "STATUS: Deep night - you can sense the player more clearly"
    } else {
        "STATUS: Daylight hours - your presence is fainter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(hour: u32) -> SessionContext {
        SessionContext {
            session_count: 2,
            ..SessionContext::new("Mara", hour)
        }
    }

    #[test]
    fn contains_input_and_player_name() {
        let prompt = PromptBuilder::new().build("where is the shovel", &ctx(14));
        assert!(prompt.contains("PLAYER SAYS: \"where is the shovel\""));
        assert!(prompt.contains("Player Name: Mara"));
        assert!(prompt.contains("Current Hour: 14:00"));
        assert!(prompt.contains("Session: #2"));
    }

    #[test]
    fn starts_with_persona_and_ends_with_instruction() {
        let builder = PromptBuilder::new();
        let prompt = builder.build("hi", &ctx(12));
        assert!(prompt.starts_with(builder.system_prompt()));
        assert!(prompt.ends_with(CLOSING_INSTRUCTION));
    }

    // ── Status line by hour ────────────────────────────────────────────────

    #[test]
    fn witching_hour_status() {
        let prompt = PromptBuilder::new().build("x", &ctx(3));
        assert!(prompt.contains("STATUS: The witching hour"));
        assert!(!prompt.contains("STATUS: Deep night"));
    }

    #[test]
    fn deep_night_covers_midnight_through_five() {
        for hour in [0, 1, 2, 4, 5] {
            let prompt = PromptBuilder::new().build("x", &ctx(hour));
            assert!(prompt.contains("STATUS: Deep night"), "hour {hour}");
        }
    }

    #[test]
    fn daylight_from_six_onwards() {
        for hour in [6, 12, 23] {
            let prompt = PromptBuilder::new().build("x", &ctx(hour));
            assert!(prompt.contains("STATUS: Daylight hours"), "hour {hour}");
        }
    }

    // ── Optional blocks ────────────────────────────────────────────────────

    #[test]
    fn debug_line_only_in_debug_mode() {
        let builder = PromptBuilder::new();
        assert!(!builder.build("x", &ctx(10)).contains("SPECIAL: Debug realm"));

        let mut debug_ctx = ctx(10);
        debug_ctx.debug_mode = true;
        assert!(builder.build("x", &debug_ctx).contains("SPECIAL: Debug realm"));
    }

    #[test]
    fn history_rendered_in_order_when_present() {
        let builder = PromptBuilder::new();
        assert!(!builder.build("x", &ctx(10)).contains("RECENT CONVERSATION"));

        let mut with_history = ctx(10);
        with_history.recent_history = vec!["first".to_string(), "second".to_string()];
        let prompt = builder.build("x", &with_history);
        let first = prompt.find("- first").unwrap();
        let second = prompt.find("- second").unwrap();
        assert!(prompt.contains("RECENT CONVERSATION:\n"));
        assert!(first < second);
        assert!(second < prompt.find("PLAYER SAYS").unwrap());
    }

    #[test]
    fn input_is_not_escaped() {
        let prompt = PromptBuilder::new().build("say \"rope\"", &ctx(10));
        assert!(prompt.contains("PLAYER SAYS: \"say \"rope\"\""));
    }
}
