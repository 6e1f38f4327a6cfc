use std::env;
use std::path::Path;
use std::path::PathBuf;

use crate::exception::CoreRsResult;
use crate::exception::error_code;

/// Resolves an asset shipped next to the executable, e.g. `assets/conf.json`.
///
/// Debug builds started by `cargo run` fall back to the crate folder, so local runs read assets from source.
pub fn asset_path(path: &str) -> CoreRsResult<PathBuf> {
    let exe_path = env::current_exe()?;
    candidates(&exe_path, path)
        .into_iter()
        .find(|candidate| candidate.exists())
        .ok_or_else(|| {
            exception!(
                code = error_code::CONFIG_ERROR,
                message = format!("asset not found, asset={path}, exe={}", exe_path.to_string_lossy())
            )
        })
}

fn candidates(exe_path: &Path, path: &str) -> Vec<PathBuf> {
    let mut candidates = vec![exe_path.with_file_name(path)];
    if cfg!(debug_assertions)
        && let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR")
    {
        candidates.push(PathBuf::from(manifest_dir).join(path));
    }
    candidates
}
