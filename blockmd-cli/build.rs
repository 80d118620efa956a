use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the convert surface from src/main.rs.
// We need to duplicate this here since build scripts can't access src/ modules.
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("blockmd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting block documents between formats")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Input file path")
                .required_unless_present("list-formats")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("Target format (markdown, clean-json, sectioned-json)")
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .help("Source format (auto-detected from the file extension)")
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output file path (defaults to stdout)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "blockmd", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "blockmd", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "blockmd", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
