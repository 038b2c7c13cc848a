use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(about = "Generates combinations with Chase's twiddle algorithm")]
pub struct Args {
    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Subcommand, Clone)]
pub enum Mode {
    /// Print every combination of SIZE out of the given values
    Generate {
        #[arg(short, long, allow_negative_numbers = true)]
        size: isize,
        /// Stop after this many combinations
        #[arg(short, long)]
        limit: Option<usize>,
        values: Vec<String>,
    },
    /// Print every combination of M out of N as zero-based positions
    Indices {
        #[arg(allow_negative_numbers = true)]
        n: isize,
        #[arg(allow_negative_numbers = true)]
        m: isize,
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Print the number of combinations of M out of N
    Count {
        #[arg(allow_negative_numbers = true)]
        n: isize,
        #[arg(allow_negative_numbers = true)]
        m: isize,
    },
}
