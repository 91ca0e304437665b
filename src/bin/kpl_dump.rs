// kpl-dump - listing tool for compiled AI scripts
// Reads a compiled script file and prints its codes and fields

use std::env;
use std::process;

use kpl::kpl_compiler::config::CompilerConfig;
use kpl::kpl_compiler::listing;
use kpl::kpl_compiler::script::{Script, SCRIPT_VERSION};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        process::exit(1);
    }

    let mut input_file = "";
    let mut config_file = None;
    let mut verbose = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-c" | "--config" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: -c requires a filename");
                    process::exit(1);
                }
                config_file = Some(args[i + 1].clone());
                i += 2;
            }
            "-v" | "--verbose" => {
                verbose = true;
                i += 1;
            }
            "-h" | "--help" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option '{}'", arg);
                print_usage(&args[0]);
                process::exit(1);
            }
            _ => {
                if input_file.is_empty() {
                    input_file = &args[i];
                } else {
                    eprintln!("Error: Multiple input files specified");
                    process::exit(1);
                }
                i += 1;
            }
        }
    }

    if input_file.is_empty() {
        eprintln!("Error: No input file specified");
        print_usage(&args[0]);
        process::exit(1);
    }

    let mut config = match config_file {
        Some(path) => match CompilerConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Error: {}", err);
                process::exit(1);
            }
        },
        None => CompilerConfig::default(),
    };
    if verbose {
        config.logging.filter = "debug".to_string();
    }

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.filter.as_str()),
    )
    .init();

    kpl::kpl_compiler::initialize();

    let mut script = Script::new();
    if let Err(err) = script.read_from_file(input_file) {
        eprintln!("Error reading '{}': {}", input_file, err);
        process::exit(1);
    }

    if config.script.require_version && !script.has_current_version() {
        eprintln!(
            "Error: '{}' has version {}, expected {}",
            input_file,
            script.version(),
            SCRIPT_VERSION
        );
        process::exit(1);
    }

    print!("{}", listing::render(&script, &config.listing));
}

fn print_usage(program_name: &str) {
    println!("Usage: {} [options] <script.dat>", program_name);
    println!();
    println!("Options:");
    println!("  -c, --config <file>    TOML configuration file");
    println!("  -v, --verbose          Debug logging");
    println!("  -h, --help             Show this help message");
}
