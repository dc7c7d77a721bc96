use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "decodex")]
#[command(about = "Text encode/decode CLI with heuristic auto-detection")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Encode text with a method")]
    Enc {
        #[arg(long, default_value = "base64")]
        method: String,

        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long, short = 'o', default_value = "-")]
        out: String,

        #[arg(long, help = "Shift amount for rot-n/caesar")]
        shift: Option<i64>,

        #[arg(long, help = "Key for vigenere")]
        key: Option<String>,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Decode text with a method")]
    Dec {
        #[arg(long, default_value = "base64")]
        method: String,

        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long, short = 'o', default_value = "-")]
        out: String,

        #[arg(long, help = "Shift amount for rot-n/caesar")]
        shift: Option<i64>,

        #[arg(long, help = "Key for vigenere")]
        key: Option<String>,

        #[arg(long, help = "Write binary output to a terminal anyway")]
        force: bool,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Guess how unlabeled input was encoded")]
    Detect {
        #[arg(long, short = 'i', default_value = "-")]
        r#in: String,

        #[arg(long)]
        json: bool,

        #[arg(long, default_value = "10", help = "Number of candidates to show")]
        top: usize,
    },

    #[command(about = "List supported methods")]
    List {
        #[arg(long)]
        json: bool,
    },

    #[command(about = "Show method details")]
    Info {
        method: String,

        #[arg(long)]
        json: bool,
    },
}
