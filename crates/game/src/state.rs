use paleluna_prompt::{SessionContext, WITCHING_HOUR};

/// The one mutable record of a play session.  Lives for the process; nothing
/// is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub player_name: String,
    pub current_hour: u32,
    pub session_count: u32,
    pub pale_luna_awake: bool,
    pub running: bool,
    pub first_time: bool,
    pub debug_mode: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            player_name: "Unknown".to_string(),
            current_hour: 0,
            session_count: 0,
            pale_luna_awake: false,
            running: true,
            first_time: true,
            debug_mode: false,
        }
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outside the debug realm Pale Luna is awake exactly at the witching
    /// hour.  In debug mode the flag is frozen and only debug commands move
    /// it.
    pub fn refresh_awake(&mut self) {
        if !self.debug_mode {
            self.pale_luna_awake = self.current_hour == WITCHING_HOUR;
        }
    }

    pub fn is_witching_hour(&self) -> bool {
        self.current_hour == WITCHING_HOUR
    }

    pub fn is_deep_night(&self) -> bool {
        self.current_hour <= 5
    }

    /// Trimmed name, or `Unknown` when blank.
    pub fn set_player_name(&mut self, raw: &str) {
        let name = raw.trim();
        self.player_name = if name.is_empty() {
            "Unknown".to_string()
        } else {
            name.to_string()
        };
    }

    pub fn session_context(&self, input: &str, recent_history: Vec<String>) -> SessionContext {
        SessionContext {
            player_name: self.player_name.clone(),
            current_hour: self.current_hour,
            session_count: self.session_count,
            debug_mode: self.debug_mode,
            pale_luna_awake: self.pale_luna_awake,
            last_command: input.to_string(),
            recent_history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running_first_time_session_zero() {
        let state = GameState::new();
        assert!(state.running);
        assert!(state.first_time);
        assert_eq!(state.session_count, 0);
        assert!(!state.debug_mode);
    }

    #[test]
    fn awake_tracks_hour_outside_debug() {
        let mut state = GameState::new();
        for hour in 0..24 {
            state.current_hour = hour;
            state.refresh_awake();
            assert_eq!(state.pale_luna_awake, hour == 3, "hour {hour}");
        }
    }

    #[test]
    fn debug_mode_freezes_awake() {
        let mut state = GameState::new();
        state.debug_mode = true;
        state.pale_luna_awake = true;
        state.current_hour = 15;
        state.refresh_awake();
        assert!(state.pale_luna_awake);

        state.pale_luna_awake = false;
        state.current_hour = 3;
        state.refresh_awake();
        assert!(!state.pale_luna_awake);
    }

    #[test]
    fn blank_name_becomes_unknown() {
        let mut state = GameState::new();
        state.set_player_name("   \n");
        assert_eq!(state.player_name, "Unknown");
        state.set_player_name("  Wren \n");
        assert_eq!(state.player_name, "Wren");
    }

    #[test]
    fn context_copies_session_fields() {
        let mut state = GameState::new();
        state.set_player_name("Wren");
        state.current_hour = 4;
        state.session_count = 1;
        state.debug_mode = true;

        let ctx = state.session_context("dig", vec!["earlier".to_string()]);
        assert_eq!(ctx.player_name, "Wren");
        assert_eq!(ctx.current_hour, 4);
        assert_eq!(ctx.session_count, 1);
        assert!(ctx.debug_mode);
        assert_eq!(ctx.last_command, "dig");
        assert_eq!(ctx.recent_history, vec!["earlier".to_string()]);
    }
}
