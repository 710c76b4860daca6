//! ni — a modal terminal text viewer/editor.
//!
//! Invocation: `ni [path]`. With no argument the editor opens on an empty
//! buffer; with one argument it loads that file's lines. There are no
//! flags and no subcommands.

use ni::{window_size, Editor, KeyDecoder, RawMode};
use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // The raw-mode guard has already restored the terminal by the
            // time an error reaches here. A terminal that failed mid-frame
            // is in an unknown visual state, so clear it before reporting.
            let mut stdout = io::stdout();
            let _ = stdout.write_all(b"\x1b[2J\x1b[H");
            let _ = stdout.flush();
            eprintln!("ni: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> ni::Result<()> {
    let _raw = RawMode::enable()?;
    let (rows, cols) = window_size()?;

    let mut editor = Editor::new(rows, cols);
    if let Some(path) = env::args_os().nth(1) {
        editor.open(Path::new(&path))?;
    }
    editor.set_status_message("Welcome");

    let mut keys = KeyDecoder::new(io::stdin());
    let mut out = io::stdout();
    editor.run(&mut keys, &mut out)
}
