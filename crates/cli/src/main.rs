use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use pickline_cli::cli_args::Args;
use pickline_cli::terminal::{styled_hint, use_color, ChannelInput};
use pickline_cli::{EXIT_CANCELLED, EXIT_FAILURE};
use pickline_core::config::resolve_input_path;
use pickline_core::error::Result;
use pickline_core::picker::{Picker, Selection};

/// Runs one session. `None` means the user cancelled.
fn execute(args: &Args) -> Result<Option<Vec<u8>>> {
    let path = resolve_input_path(&args.file);
    debug!("Input path: `{}`", path);

    let mut picker = Picker::load(&path, args.picker_options())?;
    if use_color(args.no_color) {
        picker = picker.with_hint_style(styled_hint);
    }

    let mut input = ChannelInput::stdin()?;
    let mut status = io::stderr();

    let Selection::Chosen(row) = picker.run(&mut input, &mut status)? else {
        return Ok(None);
    };

    let output = args
        .output_mode()
        .apply(&row, &picker.options().delimiter)?;
    Ok(Some(output))
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match execute(&args) {
        Ok(Some(output)) => {
            let mut stdout = io::stdout();
            match stdout.write_all(&output).and_then(|()| stdout.flush()) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("{e}");
                    ExitCode::from(EXIT_FAILURE)
                }
            }
        }
        Ok(None) => ExitCode::from(EXIT_CANCELLED),
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
