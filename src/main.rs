use anyhow::Result;
use clap::Parser;
use envelope_gen::icon_gen::{self, Args};

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_icons(&args)
}
