use std::io::{self, Write};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::io::AsyncBufRead;
use tracing::{debug, info, warn};

use paleluna_agent::AgentManager;
use paleluna_prompt::{HistoryProvider, NoHistory};

use crate::builtins;
use crate::clock::{Clock, SystemClock};
use crate::command::{Command, normalize};
use crate::input::{LineRead, read_line};
use crate::legacy;
use crate::pacing::Pacing;
use crate::state::GameState;

/// Consecutive unreadable lines tolerated before the input is treated as
/// closed.
const MAX_UNREADABLE_LINES: u32 = 8;

/// One play session: the state record plus everything the handlers need
/// from the outside world.
pub struct Game {
    state: GameState,
    agent: AgentManager,
    clock: Box<dyn Clock>,
    history: Box<dyn HistoryProvider>,
    rng: StdRng,
    pacing: Pacing,
}

impl Game {
    pub fn new(agent: AgentManager) -> Self {
        Self {
            state: GameState::new(),
            agent,
            clock: Box::new(SystemClock),
            history: Box::new(NoHistory),
            rng: StdRng::from_os_rng(),
            pacing: Pacing::Dramatic,
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_history(mut self, history: impl HistoryProvider + 'static) -> Self {
        self.history = Box::new(history);
        self
    }

    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Whether the model can be reached right now.  Probes the backend on
    /// every call.
    pub async fn is_ai_enabled(&self) -> bool {
        self.agent.is_ai_available().await
    }

    /// Re-read the hour and re-derive whether she is awake.
    pub fn tick(&mut self) {
        self.state.current_hour = self.clock.hour();
        self.state.refresh_awake();
    }

    /// Dispatch one raw input line.
    pub async fn process_command<W: Write>(&mut self, input: &str, out: &mut W) -> io::Result<()> {
        let normalized = normalize(input);
        let command = Command::parse(&normalized);
        debug!(?command, "dispatching");

        match command {
            Command::Empty => Ok(()),
            Command::Help => {
                let ai = self.is_ai_enabled().await;
                builtins::show_help(&self.state, ai, out)
            }
            Command::Time => builtins::show_time(&self.state, self.clock.as_ref(), out),
            Command::Status => {
                let ai = self.is_ai_enabled().await;
                builtins::show_status(&self.state, self.clock.as_ref(), ai, out)
            }
            Command::Debug => builtins::toggle_debug(&mut self.state, out),
            Command::ForceEncounter => {
                let ai = self.state.debug_mode && self.is_ai_enabled().await;
                builtins::force_encounter(&self.state, ai, self.pacing, out).await
            }
            Command::WakeLuna => builtins::wake_luna(&mut self.state, out),
            Command::AiStatus => {
                if self.is_ai_enabled().await {
                    let status = self.agent.status().await;
                    builtins::show_ai_status(Some(&status), out)
                } else {
                    builtins::show_ai_status(None, out)
                }
            }
            Command::Quit => builtins::quit(&mut self.state, out),
            Command::Say(text) => self.handle_dynamic(text, out).await,
        }
    }

    async fn handle_dynamic<W: Write>(&mut self, input: &str, out: &mut W) -> io::Result<()> {
        if self.is_ai_enabled().await {
            let ctx = self.state.session_context(input, self.history.recent());
            let reply = self.agent.process_input(input, &ctx).await;
            return writeln!(out, "{reply}");
        }
        legacy::respond(&mut self.state, input, &mut self.rng, self.pacing, out).await
    }

    /// Ask for the player's name.  A blank or unreadable answer leaves the
    /// name as `Unknown`.
    pub async fn setup_player<R, W>(&mut self, reader: &mut R, out: &mut W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        write!(out, "Enter your name: ")?;
        out.flush()?;
        let name = match read_line(reader).await {
            LineRead::Line(line) => line,
            LineRead::Eof | LineRead::Unreadable => String::new(),
        };
        self.state.set_player_name(&name);
        info!(player = %self.state.player_name, "player registered");

        writeln!(out)?;
        writeln!(out, "Hello, {}. Welcome to Pale Luna.", self.state.player_name)?;
        if self.is_ai_enabled().await {
            writeln!(out, "The digital consciousness stirs... enhanced awareness detected.")?;
        }
        writeln!(out)?;
        self.pacing.pause(out, 1, self.state.debug_mode).await
    }

    /// The REPL.  Returns once the player quits or the input closes.
    pub async fn run<R, W>(&mut self, reader: &mut R, out: &mut W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        self.state.session_count += 1;
        info!(session = self.state.session_count, "session started");

        writeln!(
            out,
            "Session #{} started at {}",
            self.state.session_count,
            self.clock.time_of_day()
        )?;
        if self.is_ai_enabled().await {
            writeln!(
                out,
                "AI-Enhanced Mode: Speak freely - Pale Luna understands natural language."
            )?;
        }
        writeln!(out, "Type 'help' for available commands, 'quit' to exit.")?;
        writeln!(out)?;

        let mut unreadable = 0;
        while self.state.running {
            self.tick();

            write!(out, "> ")?;
            out.flush()?;

            let line = match read_line(reader).await {
                LineRead::Line(line) => {
                    unreadable = 0;
                    line
                }
                LineRead::Eof => {
                    info!("input closed; ending session");
                    writeln!(out)?;
                    self.state.running = false;
                    break;
                }
                LineRead::Unreadable => {
                    unreadable += 1;
                    writeln!(out, "Could not read that line.")?;
                    if unreadable >= MAX_UNREADABLE_LINES {
                        warn!(unreadable, "input keeps failing; ending session");
                        self.state.running = false;
                        break;
                    }
                    String::new()
                }
            };

            self.process_command(&line, out).await?;
            writeln!(out)?;
        }

        Ok(())
    }
}
