//! Mapping from a normalized input line to what the interpreter should do.

/// Lowercased and trimmed, the form every matcher below expects.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Built-in verbs, recognised regardless of mode.  Anything else is `Say`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Empty,
    Help,
    Time,
    Status,
    Debug,
    /// Debug-only.
    ForceEncounter,
    /// Debug-only.
    WakeLuna,
    AiStatus,
    Quit,
    Say(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(normalized: &'a str) -> Self {
        match normalized {
            "" => Self::Empty,
            "help" => Self::Help,
            "time" => Self::Time,
            "status" => Self::Status,
            "debug" => Self::Debug,
            "force encounter" | "debug encounter" => Self::ForceEncounter,
            "wake luna" | "debug wake" => Self::WakeLuna,
            "ai status" => Self::AiStatus,
            "quit" | "exit" => Self::Quit,
            other => Self::Say(other),
        }
    }
}

/// Fixed phrases answered without the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyPhrase {
    PaleLuna,
    Sleep,
    Luna,
    Pale,
    WhoAreYou,
    Other,
}

impl LegacyPhrase {
    pub fn parse(normalized: &str) -> Self {
        match normalized {
            "pale luna" | "paleluna" => Self::PaleLuna,
            "sleep" => Self::Sleep,
            "luna" => Self::Luna,
            "pale" => Self::Pale,
            "who are you" | "who are you?" => Self::WhoAreYou,
            _ => Self::Other,
        }
    }
}
