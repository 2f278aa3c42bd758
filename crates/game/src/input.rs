use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

/// Outcome of reading one terminal line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRead {
    /// The line without its terminator.
    Line(String),
    Eof,
    /// Not valid UTF-8, or the read itself failed.
    Unreadable,
}

pub async fn read_line<R: AsyncBufRead + Unpin>(reader: &mut R) -> LineRead {
    let mut buf = Vec::new();
    match reader.read_until(b'\n', &mut buf).await {
        Ok(0) => LineRead::Eof,
        Ok(_) => match String::from_utf8(buf) {
            Ok(line) => LineRead::Line(line.trim_end_matches(['\n', '\r']).to_string()),
            Err(err) => {
                warn!(%err, "input line is not valid UTF-8");
                LineRead::Unreadable
            }
        },
        Err(err) => {
            warn!(%err, "failed to read input line");
            LineRead::Unreadable
        }
    }
}
