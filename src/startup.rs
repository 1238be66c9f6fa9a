// Startup module - banner printed before the TUI takes the screen

use crate::config::{Config, VERSION};
use crate::demo::bundled;
use crate::registry::ModuleSource;

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
}

/// Print version, config and session settings before the alternate screen
/// swallows stdout.
pub fn print_startup(config: &Config) {
    use colors::*;

    println!();
    println!("  {BOLD}{CYAN}demodeck{RESET} {DIM}v{VERSION}{RESET}");
    println!("  {DIM}Terminal demo deck{RESET}");
    println!();

    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("  {DIM}Config:{RESET} {GREEN}ok{RESET} {}", path.display());
        } else {
            println!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}");
        }
    }

    println!(
        "  {DIM}Modules:{RESET} {}",
        ModuleSource::parse(&config.modules)
    );
    println!("  {DIM}Bundled:{RESET} {} demos", bundled::BUNDLED.len());
    if config.reload_guard {
        println!("  {DIM}Revisits:{RESET} full session restart");
    } else {
        println!("  {DIM}Revisits:{RESET} {YELLOW}in-place teardown{RESET} {DIM}(resources may leak){RESET}");
    }
    println!(
        "  {DIM}Downloads:{RESET} {}",
        config.download_dir.display()
    );
    println!();
}
