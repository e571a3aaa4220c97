//! Placeholder map asset generator
//!
//! Usage:
//!   cargo run --bin generate_placeholders            # Generate map and mask
//!   cargo run --bin generate_placeholders verify     # Check the existing mask
//!   cargo run --bin generate_placeholders --config path/to/settings.toml
//!   cargo run --bin generate_placeholders --help     # Show help

use placeholder_assets::{
    CANVAS_HEIGHT, CANVAS_WIDTH, GenerationError, GenerationResult, GeneratorSettings,
    LAND_MASK_FILE, LandMask, crate_root, generate,
};
use std::path::PathBuf;

enum Command {
    Generate,
    Verify,
    Help,
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let (command, config_path) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("Error: {}\n", message);
            print_help();
            std::process::exit(1);
        }
    };

    let (mut settings, source) = match &config_path {
        Some(path) => GeneratorSettings::load_from(path),
        None => GeneratorSettings::load(),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_filter.as_str()),
    )
    .init();

    source.log();
    settings.apply_env();

    let result = match command {
        Command::Generate => generate(&settings, &mut std::io::stdout().lock()).map(|_| ()),
        Command::Verify => verify(&settings),
        Command::Help => {
            print_help();
            Ok(())
        }
    };

    if let Err(e) = result {
        report_error(&e);
        std::process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Result<(Command, Option<PathBuf>), String> {
    let mut command = Command::Generate;
    let mut config_path = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "all" | "generate" => command = Command::Generate,
            "verify" => command = Command::Verify,
            "--help" | "-h" | "help" => command = Command::Help,
            "--config" => match iter.next() {
                Some(path) => config_path = Some(PathBuf::from(path)),
                None => return Err("'--config' requires a path".to_string()),
            },
            other => return Err(format!("Unknown command '{}'", other)),
        }
    }

    Ok((command, config_path))
}

fn verify(settings: &GeneratorSettings) -> GenerationResult<()> {
    let path = settings.resolve_output_dir().join(LAND_MASK_FILE);
    let mask = LandMask::open(&path)?;
    let (width, height) = mask.dimensions();

    println!("Mask: {}", path.display());
    println!("  Size: {}x{}", width, height);
    println!("  Land: {:.1}%", mask.land_fraction() * 100.0);

    mask.check_dimensions((CANVAS_WIDTH, CANVAS_HEIGHT))
}

fn report_error(e: &GenerationError) {
    // Nothing left to do if the terminal is gone
    let _ = e.write_report(&mut std::io::stdout().lock(), &mut std::io::stderr().lock());
}

fn print_help() {
    println!(
        r#"Placeholder Asset Generator - Draw a placeholder world map and land mask

USAGE:
    cargo run --bin generate_placeholders [COMMAND] [--config <FILE>]

COMMANDS:
    (none), all   Generate map-image.png and land-mask.png
                  Output: public/assets/

    verify        Check the size and land coverage of the existing mask

    help          Show this help message

OPTIONS:
    --config <FILE>   Settings file (default: config/placeholder_assets.toml)

PATHS:
    The default output directory and settings file are resolved against the
    source tree this binary was built from ({}), not the current
    directory. An installed or moved binary still writes there unless
    output_dir or PLACEHOLDER_ASSETS_OUT_DIR points elsewhere.

ENVIRONMENT:
    PLACEHOLDER_ASSETS_OUT_DIR   Override the output directory
    RUST_LOG                     Log filter (overrides log_filter setting)
"#,
        crate_root().display()
    );
}
