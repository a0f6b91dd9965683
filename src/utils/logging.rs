use crate::cli::Args;

/// Log a debug message if debug mode is enabled
pub fn log(args: &Args, message: String) {
    if args.debug {
        println!("[DEBUG] {}", message);
    }
}
