use std::env;
use std::process;

mod builder;
mod cli;
mod error;
mod font;
mod models;
mod utils;

use builder::{build_font, render_manifest, write_manifest};
use cli::get_help_message;
use error::Result;
use utils::log;

fn main() {
    let argv: Vec<String> = env::args().collect();

    // Check if help is requested
    if argv.contains(&"--help".to_string()) || argv.contains(&"-h".to_string()) {
        println!("{}", get_help_message());
        return;
    }

    if let Err(err) = run(&argv) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run(argv: &[String]) -> Result<()> {
    let args = cli::parse(argv)?;

    log(
        &args,
        format!("Building {} font record(s)", args.configs.len()),
    );

    // One record per config, numbered in command-line order
    let mut fonts = Vec::with_capacity(args.configs.len());
    for (id, config_path) in args.configs.iter().enumerate() {
        fonts.push(build_font(id, config_path, &args.fonts_dir, &args)?);
    }

    let manifest = render_manifest(&fonts, args.json)?;
    write_manifest(&args.dst_file, &manifest)?;

    log(
        &args,
        format!("Wrote manifest to {}", args.dst_file.display()),
    );
    Ok(())
}
