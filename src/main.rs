use clap::Parser;
use std::process;

use akta_processor::cli::{args::Args, commands};

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {error:#}");
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("ÄKTA Processor - Chromatography Export Inspector");
    println!("================================================");
    println!();
    println!("Parse tab-delimited ÄKTA/UNICORN export files into typed curve datasets");
    println!("with structural diagnostics and fraction-to-volume mapping.");
    println!();
    println!("USAGE:");
    println!("    akta-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    inspect      Parse export files and report curves and consistency");
    println!("    fractions    List fraction labels and resolve fraction volume ranges");
    println!("    help         Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Inspect a single export file:");
    println!("    akta-processor inspect run.asc");
    println!();
    println!("    # Inspect every export under a results directory:");
    println!("    akta-processor inspect /path/to/results");
    println!();
    println!("    # Resolve the shading volume range for fractions 3 through 7:");
    println!("    akta-processor fractions run.asc --start 3 --stop 7");
    println!();
    println!("For detailed help on any command, use:");
    println!("    akta-processor <COMMAND> --help");
}
