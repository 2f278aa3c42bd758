use std::io::{self, Write};
use std::time::Duration;

/// Whether scripted sequences pause between lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pacing {
    #[default]
    Dramatic,
    Instant,
}

impl Pacing {
    /// Flush what has been written so far, then wait `secs` seconds.
    ///
    /// The debug realm never pauses.
    pub async fn pause<W: Write>(self, out: &mut W, secs: u64, debug_mode: bool) -> io::Result<()> {
        out.flush()?;
        if self == Self::Dramatic && !debug_mode {
            tokio::time::sleep(Duration::from_secs(secs)).await;
        }
        Ok(())
    }
}
