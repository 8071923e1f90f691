//! Build automation tasks for the space shooter
//!
//! Usage:
//!   cargo xtask package                  # Native release build + assets in dist/
//!   cargo xtask package --platform linux # Name the output folder explicitly

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Asset folders the game reads at startup, relative to its working directory
const ASSET_DIRS: [&str; 2] = ["images", "audio"];

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for the space shooter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a native release and copy it with its assets into dist/
    Package {
        /// Target platform folder name: windows, macos, linux
        #[arg(long)]
        platform: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Package { platform } => package(platform),
    }
}

/// Get the project root directory
fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask must live inside the workspace")
}

/// Run a command and check for success
fn run_cmd(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("Failed to execute command")?;
    if !status.success() {
        anyhow::bail!("Command failed with status: {}", status);
    }
    Ok(())
}

/// Copy directory recursively
fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

fn host_platform() -> String {
    if cfg!(target_os = "windows") {
        "windows".to_string()
    } else if cfg!(target_os = "macos") {
        "macos".to_string()
    } else {
        "linux".to_string()
    }
}

/// Release build plus `images/` and `audio/` next to the binary
fn package(platform: Option<String>) -> Result<()> {
    let root = project_root()?;
    let platform = platform.unwrap_or_else(host_platform);
    let dist = root.join("dist").join(&platform);

    // Fail early: the game refuses to start without its assets
    for dir in ASSET_DIRS {
        if !root.join(dir).is_dir() {
            anyhow::bail!("missing asset folder {}", root.join(dir).display());
        }
    }

    println!("Building native release for {}...", platform);
    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "--bin", "space-shooter"]),
    )?;

    if dist.exists() {
        std::fs::remove_dir_all(&dist)?;
    }
    std::fs::create_dir_all(&dist)?;

    let binary_name = if platform == "windows" {
        "space-shooter.exe"
    } else {
        "space-shooter"
    };
    std::fs::copy(
        root.join("target/release").join(binary_name),
        dist.join(binary_name),
    )
    .with_context(|| format!("copying {}", binary_name))?;

    for dir in ASSET_DIRS {
        copy_dir_recursive(&root.join(dir), &dist.join(dir))?;
    }

    println!("Package ready: dist/{}/", platform);
    Ok(())
}
