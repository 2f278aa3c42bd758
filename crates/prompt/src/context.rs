/// The hour at which Pale Luna wakes and the canned text changes register.
pub const WITCHING_HOUR: u32 = 3;

/// Snapshot of the session handed to the prompt builder and fallback
/// responder.
///
/// Rebuilt for every request from the game state; collaborators only ever
/// read it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub player_name: String,
    /// Wall-clock hour, `0..=23`.
    pub current_hour: u32,
    pub session_count: u32,
    pub debug_mode: bool,
    pub pale_luna_awake: bool,
    pub last_command: String,
    pub recent_history: Vec<String>,
}

impl SessionContext {
    pub fn new(player_name: impl Into<String>, current_hour: u32) -> Self {
        Self {
            player_name: player_name.into(),
            current_hour,
            ..Self::default()
        }
    }

    pub fn is_witching_hour(&self) -> bool {
        self.current_hour == WITCHING_HOUR
    }

    /// `0..=5`, which includes the witching hour.
    pub fn is_deep_night(&self) -> bool {
        self.current_hour <= 5
    }
}
