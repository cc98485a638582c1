use std::path::PathBuf;

use clap::Parser;
use cloud_site::assets::{copy_assets, CopyOutcome};
use cloud_site::config::{resolve_path, workspace_root};
use log::debug;

/// Copy the static asset tree into the build output, keeping symlinks as links.
#[derive(Parser, Debug)]
#[command(name = "copy-assets", version, about)]
struct Args {
    /// Asset tree to package. Relative paths start at the workspace root.
    #[arg(long, default_value = "ui/assets")]
    src: PathBuf,

    /// Output directory. Removed and recreated on every run.
    #[arg(long, default_value = "dist/assets")]
    dest: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let root = workspace_root();
    let src = resolve_path(&root, &args.src);
    let dest = resolve_path(&root, &args.dest);
    debug!("packaging {} -> {}", src.display(), dest.display());

    if let CopyOutcome::SourceMissing = copy_assets(&src, &dest)? {
        debug!("destination left as is");
    }
    Ok(())
}
