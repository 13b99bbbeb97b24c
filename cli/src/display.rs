//! Drawing the calculator on a terminal.
use std::io::Write;

use termcolor::{self, ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing::{event, Level};

use base::prelude::*;
use engine::{RegisterId, Views};

/// Decides whether to colour stdout.  `auto` colours only when stdout
/// is a terminal.
pub fn colour_choice(requested: ColorChoice) -> ColorChoice {
    match requested {
        ColorChoice::Auto if !atty::is(atty::Stream::Stdout) => ColorChoice::Never,
        other => other,
    }
}

pub struct PanelWriter<W: WriteColor> {
    stream: W,
}

impl PanelWriter<StandardStream> {
    pub fn stdout(choice: ColorChoice) -> PanelWriter<StandardStream> {
        PanelWriter::new(StandardStream::stdout(colour_choice(choice)))
    }
}

fn group_bits(chips: &[bool]) -> String {
    let mut out = String::with_capacity(chips.len() + chips.len() / 4);
    for (i, set) in chips.iter().rev().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(if *set { '1' } else { '0' });
    }
    out
}

impl<W: WriteColor> PanelWriter<W> {
    pub fn new(stream: W) -> PanelWriter<W> {
        PanelWriter { stream }
    }

    fn with_colour(
        &mut self,
        spec: &ColorSpec,
        body: impl FnOnce(&mut W) -> Result<(), std::io::Error>,
    ) -> Result<(), std::io::Error> {
        if let Err(e) = self.stream.set_color(spec) {
            event!(Level::ERROR, "Failed to select colour {:?}: {}", spec, e);
        }
        let result = body(&mut self.stream);
        if let Err(e) = self.stream.reset() {
            event!(Level::ERROR, "Failed to reset terminal: {}", e);
        }
        result
    }

    /// Draws the value in every base (the active one highlighted),
    /// the bit chips, and the register line.
    pub fn draw(&mut self, views: &Views) -> Result<(), std::io::Error> {
        let mut active = ColorSpec::new();
        active.set_fg(Some(termcolor::Color::Green)).set_bold(true);
        let mut pending = ColorSpec::new();
        pending.set_fg(Some(termcolor::Color::Yellow)).set_bold(true);

        for radix in [
            Radix::Hexadecimal,
            Radix::Decimal,
            Radix::Octal,
            Radix::Binary,
        ] {
            let line = format!("{} {}", radix.label(), views.in_radix(radix));
            if radix == views.radix {
                self.with_colour(&active, |w| writeln!(w, "{line}"))?;
            } else {
                writeln!(self.stream, "{line}")?;
            }
        }
        writeln!(self.stream, "bits {}", group_bits(&views.chips))?;

        let marker = |id: RegisterId| if views.shown == id { "*" } else { " " };
        write!(
            self.stream,
            "{}A {}  {}B {}",
            marker(RegisterId::A),
            views.a,
            marker(RegisterId::B),
            views.b
        )?;
        if let Some(op) = views.pending {
            write!(self.stream, "  ")?;
            self.with_colour(&pending, |w| write!(w, "{op}"))?;
        }
        writeln!(self.stream)?;
        self.stream.flush()
    }
}

/// Writes the views as one line of JSON.
pub fn write_json<W: Write>(out: &mut W, views: &Views) -> Result<(), Box<dyn std::error::Error>> {
    serde_json::to_writer(&mut *out, views)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
