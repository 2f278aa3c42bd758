//! Deterministic canned replies used whenever the model cannot answer.

use crate::context::SessionContext;

/// Map player input to a canned line.
///
/// Total and pure: the same input and context always produce the same
/// non-empty string.  Predicates are checked in order and the first substring
/// match wins, so `"pale luna hello"` is answered as an invocation.
pub fn fallback_response(input: &str, ctx: &SessionContext) -> String {
    let input = input.trim().to_lowercase();
    let has = |needle: &str| input.contains(needle);

    if ctx.is_witching_hour() {
        return if has("pale luna") || has("luna") {
            format!(
                "The pale moon sees you clearly in this hour, {}.",
                ctx.player_name
            )
        } else if has("hello") || has("hi") {
            "I have been waiting for you to call in the witching hour.".to_string()
        } else {
            "The shadows whisper your words back to me...".to_string()
        };
    }

    if has("pale luna") {
        "You call to me, but the veil is thick at this hour.".to_string()
    } else if has("luna") {
        "Luna sleeps until the pale hour returns.".to_string()
    } else if has("who") || has("what") {
        "I am the one who watches from beyond the pale light.".to_string()
    } else if has("hello") || has("hi") {
        format!("Hello, {}. I sense your presence.", ctx.player_name)
    } else if has("help") {
        "Speak to me as you would to the darkness itself.".to_string()
    } else {
        "The digital realm echoes with whispers I cannot quite hear...".to_string()
    }
}
