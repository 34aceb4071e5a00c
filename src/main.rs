//! Command-line entry point.
//!
//! Usage: `oidmap <schema.ldif>` — writes the generated map-entry lines to
//! stdout, diagnostics to stderr.

use std::env;
use std::io::{self, BufWriter, Write};
use std::process;

use oidmap::schema::{EmitStyle, SchemaExtractor, write_map_entries};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <schema.ldif>", args[0]);
        process::exit(1);
    }

    if let Err(e) = run(&args[1]) {
        eprintln!("{}: {}", args[1], e);
        process::exit(1);
    }
}

fn run(path: &str) -> oidmap::Result<()> {
    let extractor = SchemaExtractor::from_path(path)?;
    let attributes = extractor.attributes()?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_map_entries(&mut out, &attributes, &EmitStyle::default())?;
    out.flush()?;
    Ok(())
}
