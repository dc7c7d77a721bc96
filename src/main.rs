mod cli;
mod commands;
mod io;

use std::process::ExitCode;

use clap::Parser;

use cli::{Cli, Command};
use commands::CommandHandler;
use decodex::{error, types, Context, Params};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            e.exit_code().into()
        }
    }
}

fn run(cli: Cli) -> error::Result<()> {
    let ctx = Context::default();

    let handler: Box<dyn CommandHandler> = match cli.command {
        Command::Enc {
            method,
            r#in,
            out,
            shift,
            key,
            json,
        } => Box::new(commands::EncCommand {
            method,
            input: types::InputSource::parse(&r#in),
            output: types::OutputDest::parse(&out),
            params: Params { shift, key },
            json,
        }),

        Command::Dec {
            method,
            r#in,
            out,
            shift,
            key,
            force,
            json,
        } => Box::new(commands::DecCommand {
            method,
            input: types::InputSource::parse(&r#in),
            output: types::OutputDest::parse(&out),
            params: Params { shift, key },
            force,
            json,
        }),

        Command::Detect { r#in, json, top } => Box::new(commands::DetectCommand {
            input: types::InputSource::parse(&r#in),
            json,
            top,
        }),

        Command::List { json } => Box::new(commands::ListCommand { json }),

        Command::Info { method, json } => Box::new(commands::InfoCommand { method, json }),
    };

    handler.execute(&ctx)
}
