//! Build script for barmatrix-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates channels.toml and generates the channel table from it

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use barmatrix_core::{ConfigError, ControllerConfig};

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    setup_linker(&out_dir);
    let config = load_config();
    write_channel_table(&out_dir, &config);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read, parse and validate channels.toml
fn load_config() -> ControllerConfig {
    println!("cargo:rerun-if-changed=channels.toml");

    let config_path = Path::new("channels.toml");
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: channels.toml not found!                                 ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a channels.toml channel table.            ║\n\
            ║  Please create one in the barmatrix-firmware directory.          ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read channels.toml                             ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: ControllerConfig = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid channels.toml                                    ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid channel configuration                            ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&describe(&config, e))
        );
    }

    println!(
        "cargo:warning=channels.toml validated successfully ({} channel(s), {} Hz)",
        config.channels.len(),
        config.tick_hz
    );
    config
}

/// Explain a validation error in terms of the file
fn describe(config: &ControllerConfig, error: ConfigError) -> String {
    match error {
        ConfigError::DecreasingThreshold { index } => {
            let entry = config
                .channels
                .iter()
                .find(|c| c.validate() == Err(error))
                .map(|c| format!("input {}", c.input))
                .unwrap_or_else(|| "a channel".to_string());
            format!("{}: levels[{}] is below levels[{}]", entry, index, index - 1)
        }
        ConfigError::ColumnOutOfRange(column) => {
            format!("column {} is off the matrix (must be 0-7)", column)
        }
        ConfigError::InputOutOfRange(input) => {
            format!("input {} does not exist (must be 0-7)", input)
        }
        ConfigError::DuplicateInput(input) => {
            format!("input {} is listed more than once", input)
        }
        ConfigError::ZeroTickRate => "tick_hz must be at least 1".to_string(),
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Emit the validated table as Rust source for `include!`
fn write_channel_table(out_dir: &Path, config: &ControllerConfig) {
    let mut src = String::new();
    src.push_str("// Generated from channels.toml by build.rs\n\n");
    src.push_str(&format!("pub const TICK_HZ: u16 = {};\n\n", config.tick_hz));
    src.push_str(&format!(
        "pub const CHANNELS: [ChannelConfig; {}] = [\n",
        config.channels.len()
    ));
    for channel in &config.channels {
        src.push_str(&format!(
            "    ChannelConfig {{ input: {}, column: {}, levels: {:?} }},\n",
            channel.input, channel.column, channel.levels
        ));
    }
    src.push_str("];\n");

    fs::write(out_dir.join("channels.rs"), src).unwrap();
}
