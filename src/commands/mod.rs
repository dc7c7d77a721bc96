mod dec;
mod detect;
mod enc;
mod info;
mod list;

pub use dec::{run_decode, run_decode_json};
pub use detect::run_detect;
pub use enc::{run_encode, run_encode_json};
pub use info::run_info;
pub use list::run_list;

use crate::io::{write_output, OutputConfig};
use decodex::error::Result;
use decodex::types::{Context, InputSource, OutputDest, Params};

pub trait CommandHandler {
    fn execute(&self, ctx: &Context) -> Result<()>;
}

pub struct EncCommand {
    pub method: String,
    pub input: InputSource,
    pub output: OutputDest,
    pub params: Params,
    pub json: bool,
}

impl CommandHandler for EncCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        if self.json {
            let result = run_encode_json(ctx, &self.method, &self.input, &self.params)?;
            println!("{}", serde_json::to_string_pretty(&result).unwrap());
            return Ok(());
        }

        let encoded = run_encode(ctx, &self.method, &self.input, &self.params)?;
        let config = OutputConfig {
            dest: self.output.clone(),
            force: true,
        };
        write_output(encoded.as_bytes(), &config)?;
        if matches!(self.output, OutputDest::Stdout) {
            println!();
        }
        Ok(())
    }
}

pub struct DecCommand {
    pub method: String,
    pub input: InputSource,
    pub output: OutputDest,
    pub params: Params,
    pub force: bool,
    pub json: bool,
}

impl CommandHandler for DecCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        if self.json {
            let result = run_decode_json(ctx, &self.method, &self.input, &self.params)?;
            println!("{}", serde_json::to_string_pretty(&result).unwrap());
            return Ok(());
        }

        let decoded = run_decode(ctx, &self.method, &self.input, &self.params)?;
        let config = OutputConfig {
            dest: self.output.clone(),
            force: self.force,
        };
        write_output(&decoded, &config)?;
        Ok(())
    }
}

pub struct DetectCommand {
    pub input: InputSource,
    pub json: bool,
    pub top: usize,
}

impl CommandHandler for DetectCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let result = run_detect(ctx, self.input.clone(), self.top)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result).unwrap());
            return Ok(());
        }

        println!("Input: {}", result.input_preview);
        println!();
        if result.candidates.is_empty() {
            println!("No successful decoding found with any method.");
        } else {
            println!("{:<28} {:<8} TEXT", "METHOD", "SCORE");
            println!("{}", "-".repeat(70));
            for c in &result.candidates {
                let display = if c.text.chars().count() > 40 {
                    let head: String = c.text.chars().take(37).collect();
                    format!("{}...", head)
                } else {
                    c.text.clone()
                };
                println!("{:<28} {:<8.1} {}", c.label, c.score, display);
            }
        }
        Ok(())
    }
}

pub struct ListCommand {
    pub json: bool,
}

impl CommandHandler for ListCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let methods = run_list(ctx);
        if self.json {
            println!("{}", serde_json::to_string_pretty(&methods).unwrap());
        } else {
            println!("{:<12} {:<20} DESCRIPTION", "NAME", "LABEL");
            println!("{}", "-".repeat(60));
            for m in methods {
                println!("{:<12} {:<20} {}", m.name, m.label, m.description);
            }
        }
        Ok(())
    }
}

pub struct InfoCommand {
    pub method: String,
    pub json: bool,
}

impl CommandHandler for InfoCommand {
    fn execute(&self, ctx: &Context) -> Result<()> {
        let meta = run_info(ctx, &self.method)?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&meta).unwrap());
        } else {
            println!("Name:        {}", meta.name);
            println!("Aliases:     {}", meta.aliases.join(", "));
            println!("Label:       {}", meta.label);
            if !meta.alphabet.is_empty() {
                println!("Alphabet:    {}", meta.alphabet);
            }
            println!("Description: {}", meta.description);
        }
        Ok(())
    }
}
