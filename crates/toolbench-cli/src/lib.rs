//! Command-line front end for Toolbench.

pub mod cli_args;

use std::env;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use cli_args::{Cli, ColorSpace, Command, UrlCommand};
use toolbench_core::{
    LoggingDestination, color, encode, init_logging, jsonfmt, organize, query, radix, tabular,
    urlenc,
};

/// True when the process was started with any CLI argument; the launcher
/// uses this to pick CLI mode over the GUI.
pub fn should_run_cli_mode() -> bool {
    env::args_os().len() > 1
}

/// Parse arguments and run the selected tool.
pub fn run() -> Result<(), String> {
    if let Err(err) = init_logging(LoggingDestination::FileAndStderr) {
        eprintln!("Warning: failed to initialize logging: {err}");
    }
    dispatch(Cli::parse())
}

/// Execute a parsed command. Errors are already user-facing strings.
pub fn dispatch(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Color(args) => {
            let result = match args.from {
                ColorSpace::Hex => color::hex_to_rgb(&args.value),
                ColorSpace::Rgb => color::rgb_to_hex(&args.value),
            }
            .map_err(|err| err.to_string())?;
            println!("{result}");
            Ok(())
        }
        Command::Convert(args) => {
            let input = expand_path(&args.input);
            let output = expand_path(&args.output);
            tabular::convert_file(
                &input,
                &output,
                args.from.map(Into::into),
                args.to.map(Into::into),
            )
            .map_err(|err| err.to_string())?;
            info!(input = %input.display(), output = %output.display(), "converted document");
            println!("Wrote {}", output.display());
            Ok(())
        }
        Command::Radix(args) => {
            let result = radix::convert_number(&args.digits, args.from.into(), args.to.into())
                .map_err(|err| err.to_string())?;
            println!("{result}");
            Ok(())
        }
        Command::Query(args) => {
            let json = query::query_params_to_json(&args.query).map_err(|err| err.to_string())?;
            println!("{json}");
            Ok(())
        }
        Command::Url(UrlCommand::Encode { text }) => {
            println!("{}", urlenc::url_encode(&text));
            Ok(())
        }
        Command::Url(UrlCommand::Decode { text }) => {
            let decoded = urlenc::url_decode(&text).map_err(|err| err.to_string())?;
            println!("{decoded}");
            Ok(())
        }
        Command::Encode(args) => {
            let file = expand_path(&args.file);
            let encoded = encode::file_to_base64(&file).map_err(|err| err.to_string())?;
            match args.output {
                Some(ref raw) => {
                    let output = expand_path(raw);
                    fs::write(&output, &encoded).map_err(|err| err.to_string())?;
                    println!("Wrote {}", output.display());
                }
                None => println!("{encoded}"),
            }
            Ok(())
        }
        Command::Organize(args) => {
            let dir = expand_path(&args.dir);
            if args.dry_run {
                let planned = organize::plan_moves(&dir).map_err(|err| err.to_string())?;
                if planned.is_empty() {
                    println!("Nothing to organize.");
                }
                for mv in &planned {
                    println!("{} -> {}/", mv.file_name, mv.bucket);
                }
            } else {
                let report = organize::organize_directory(&dir).map_err(|err| err.to_string())?;
                println!("Moved {} file(s).", report.moved.len());
            }
            Ok(())
        }
        Command::Format(args) => {
            let text = match (args.text, args.input) {
                (Some(text), None) => text,
                (None, Some(ref raw)) => {
                    fs::read_to_string(expand_path(raw)).map_err(|err| err.to_string())?
                }
                (Some(_), Some(_)) => {
                    return Err("Provide JSON text or --input, not both.".to_string());
                }
                (None, None) => return Err("Provide JSON text or --input.".to_string()),
            };
            let formatted = jsonfmt::format_json(&text).map_err(|err| err.to_string())?;
            println!("{formatted}");
            Ok(())
        }
    }
}

fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}
