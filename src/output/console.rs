//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════╗
║     Roster Folders                                ║
║     Assignment folder generator for instructors   ║
╚═══════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print startup configuration summary.
pub fn print_config_summary(address: &str, subfolders: &[String], name_column: usize) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Listening on: http://{}", address);
    println!("  Student subfolders: {}", subfolders.join(", "));
    println!("  Roster name column: {}", name_column + 1);
    println!();
}
