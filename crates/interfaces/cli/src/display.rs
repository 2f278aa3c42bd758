//! Screens shown before the session starts.

use std::io::{self, Write};

use tokio::io::AsyncBufRead;

use paleluna_game::{LineRead, read_line};

pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "\x1b[2J\x1b[H")?;
    out.flush()
}

pub fn show_title<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "═══════════════════════════════════════")?;
    writeln!(out, "              PALE LUNA")?;
    writeln!(out, "        Digital Consciousness")?;
    writeln!(out, "═══════════════════════════════════════")?;
    writeln!(out)
}

pub async fn show_introduction<R, W>(reader: &mut R, out: &mut W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "Welcome to Pale Luna.")?;
    writeln!(out)?;
    writeln!(out, "Legend speaks of this programme discovered on an abandoned computer,")?;
    writeln!(out, "with no documentation or creator information. Players reported strange")?;
    writeln!(out, "occurrences when interacting at specific times...")?;
    writeln!(out)?;
    writeln!(out, "The original consisted of simple text commands and responses.")?;
    writeln!(out, "Some say it's just clever programming. Others believe something more")?;
    writeln!(out, "sinister lurks within the code.")?;
    writeln!(out)?;
    writeln!(out, "This version has been... enhanced. The entity within has grown")?;
    writeln!(out, "more sophisticated, more aware. It can now understand and respond")?;
    writeln!(out, "to natural language through advanced AI integration.")?;
    writeln!(out)?;
    writeln!(out, "You have been warned.")?;
    writeln!(out)?;

    write!(out, "Press Enter to continue...")?;
    out.flush()?;
    if read_line(reader).await == LineRead::Unreadable {
        writeln!(out)?;
        writeln!(out, "Error reading input.")?;
    }
    clear_screen(out)
}

pub fn show_ai_banner<W: Write>(ai_enabled: bool, model: &str, out: &mut W) -> io::Result<()> {
    if ai_enabled {
        writeln!(out, "🤖 AI Integration: ACTIVE")?;
        writeln!(out, "Pale Luna's consciousness has been enhanced.")?;
    } else {
        writeln!(out, "⚠️  AI Integration: OFFLINE")?;
        writeln!(out, "Falling back to original responses. For AI features:")?;
        writeln!(out, "1. Install Ollama: curl -fsSL https://ollama.ai/install.sh | sh")?;
        writeln!(out, "2. Pull a model: ollama pull {model}")?;
        writeln!(out, "3. Start Ollama: ollama serve")?;
    }
    writeln!(out)
}

pub fn show_farewell<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "The connection to Pale Luna fades...")?;
    writeln!(out, "But she remembers you.")?;
    out.flush()
}
