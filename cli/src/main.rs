use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io::{stdin, stdout, BufRead};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::{event, Level};
use tracing_subscriber::prelude::*;

use base::prelude::*;
use engine::{Clipboard, ClipboardError, Control, Session};

mod display;
mod input;

use display::{write_json, PanelWriter};
use input::{tokenize, StdinKeyboard, Stroke};

/// A clipboard stored in a file.  Without a file, there is no
/// clipboard and copies fail (quietly).
#[derive(Debug)]
struct FileClipboard {
    path: Option<PathBuf>,
}

impl Clipboard for FileClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        match self.path.as_ref() {
            Some(path) => Ok(std::fs::write(path, text)?),
            None => Err(ClipboardError::Unavailable),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColourMode {
    Auto,
    Always,
    Never,
}

impl From<ColourMode> for termcolor::ColorChoice {
    fn from(mode: ColourMode) -> termcolor::ColorChoice {
        match mode {
            ColourMode::Auto => termcolor::ColorChoice::Auto,
            ColourMode::Always => termcolor::ColorChoice::Always,
            ColourMode::Never => termcolor::ColorChoice::Never,
        }
    }
}

fn parse_radix(s: &str) -> Result<Radix, String> {
    let n: u32 = s.parse().map_err(|e| format!("{s}: {e}"))?;
    Radix::try_from(n).map_err(|e| e.to_string())
}

/// Programmer's calculator working in binary, octal, decimal and
/// hexadecimal.  Keystrokes are read from standard input, a line at
/// a time; named keys are written with a leading colon (`:enter`,
/// `:bs`, `:del`, `:esc`, `:copy`, `:hex`, `:dec`, `:oct`, `:bin`,
/// `:bit0` to `:bit15`, and operator buttons such as `:xor`).
#[derive(Parser, Debug)]
#[command(name = "radixcalc", version)]
struct Args {
    /// Base in which input starts out (2, 8, 10 or 16)
    #[arg(long, default_value = "10", value_parser = parse_radix)]
    radix: Radix,

    /// Print the display as one JSON object per input line
    #[arg(long)]
    json: bool,

    /// File to which copied values are written
    #[arg(long)]
    clipboard_file: Option<PathBuf>,

    /// When to colour the display
    #[arg(long, value_enum, default_value_t = ColourMode::Auto)]
    color: ColourMode,
}

#[derive(Debug)]
enum Fail {
    InitialisationFailure(String),
    Display(Box<dyn Error>),
}

impl Display for Fail {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Fail::InitialisationFailure(msg) => f.write_str(msg.as_str()),
            Fail::Display(e) => write!(f, "failed to update the display: {e}"),
        }
    }
}

impl Error for Fail {}

enum Output {
    Panel(PanelWriter<termcolor::StandardStream>),
    Json,
}

impl Output {
    fn show(&mut self, session: &Session<'_, FileClipboard>) -> Result<(), Fail> {
        let views = session.views();
        match self {
            Output::Panel(w) => w.draw(&views).map_err(|e| Fail::Display(Box::new(e))),
            Output::Json => write_json(&mut stdout().lock(), &views).map_err(Fail::Display),
        }
    }
}

fn run_calculator() -> Result<(), Fail> {
    let args = Args::parse();

    // See
    // https://docs.rs/tracing-subscriber/0.3/tracing_subscriber/fmt/index.html#filtering-events-with-environment-variables
    // for instructions on how to select which trace messages get
    // printed.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);
    let filter_layer = match tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("warn"))
    {
        Err(e) => {
            return Err(Fail::InitialisationFailure(format!(
                "failed to initialise tracing filter (perhaps there is a problem with environment variables): {e}"
            )));
        }
        Ok(layer) => layer,
    };
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    let mut output = if args.json {
        Output::Json
    } else {
        Output::Panel(PanelWriter::stdout(args.color.into()))
    };
    if args.clipboard_file.is_none() {
        event!(
            Level::INFO,
            "No --clipboard-file option specified, copying is disabled"
        );
    }

    let keyboard = StdinKeyboard::default();
    let mut session = Session::open(
        &keyboard,
        FileClipboard {
            path: args.clipboard_file,
        },
        args.radix,
    );
    output.show(&session)?;

    let input = stdin();
    'lines: for line in input.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                event!(Level::ERROR, "failed to read input: {e}");
                break;
            }
        };
        for stroke in tokenize(&line) {
            let control = match stroke {
                Stroke::Key(key) => session.handle_key(&key),
                Stroke::Click(ev) => session.handle_event(ev),
            };
            if control == Control::Close {
                break 'lines;
            }
        }
        output.show(&session)?;
    }

    session.close();
    if keyboard.listeners() != 0 {
        event!(
            Level::ERROR,
            "{} keyboard listeners still attached after close",
            keyboard.listeners()
        );
    }
    Ok(())
}

fn main() {
    match run_calculator() {
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Ok(()) => {
            std::process::exit(0);
        }
    }
}
