//! Environment configuration shared by the lotto binaries.
//!
//! | Variable | Default | Used by |
//! |----------|---------|---------|
//! | `LOTTO_BASE_PATH` | `.` | all (working directory) |
//! | `LOTTO_PORT` | 9000 | server |
//! | `LOTTO_HISTORY_DIR` | `data` | server |
//! | `LOTTO_RECORD_HISTORY` | `true` | server |
//! | `LOTTO_SEED` | unset (OS entropy) | server |
//! | `RAYON_NUM_THREADS` / `OMP_NUM_THREADS` | 8 | simulate |

use std::io;
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_HISTORY_DIR;

/// Read `LOTTO_BASE_PATH` (default `.`).
pub fn base_path() -> PathBuf {
    std::env::var("LOTTO_BASE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// Change into `base` and return the absolute working directory that relative
/// paths (history dir, simulation output) resolve against.
pub fn enter_base_path(base: &Path) -> io::Result<PathBuf> {
    std::env::set_current_dir(base)?;
    std::env::current_dir()
}

/// `dir` as seen from `workdir`. Absolute paths are returned unchanged.
pub fn resolve_under(workdir: &Path, dir: &Path) -> PathBuf {
    workdir.join(dir)
}

/// Read `RAYON_NUM_THREADS` (fallback `OMP_NUM_THREADS`, default 8) and build
/// the rayon global pool. Tolerates an already-initialized pool.
pub fn init_rayon_threads() -> usize {
    let num_threads = std::env::var("RAYON_NUM_THREADS")
        .or_else(|_| std::env::var("OMP_NUM_THREADS"))
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8);
    if rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .is_err()
    {
        eprintln!("Rayon pool already initialized; keeping existing pool");
    }
    println!("Rayon threads: {}", num_threads);
    num_threads
}

/// Read `LOTTO_PORT` (default 9000).
pub fn server_port() -> u16 {
    std::env::var("LOTTO_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(9000)
}

/// Read `LOTTO_HISTORY_DIR` (default `data`).
pub fn history_dir() -> PathBuf {
    std::env::var("LOTTO_HISTORY_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_HISTORY_DIR))
}

/// Read `LOTTO_RECORD_HISTORY` (default true). Accepts `0`/`false`/`no`/`off`
/// as false, anything else as true.
pub fn record_history() -> bool {
    std::env::var("LOTTO_RECORD_HISTORY")
        .map(|v| parse_flag(&v))
        .unwrap_or(true)
}

/// Read `LOTTO_SEED`. `None` means seed from OS entropy.
pub fn rng_seed() -> Option<u64> {
    std::env::var("LOTTO_SEED").ok().and_then(|s| s.parse().ok())
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

/// Server settings gathered from the environment.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub base_path: PathBuf,
    pub port: u16,
    pub history_dir: PathBuf,
    pub record_history: bool,
    pub seed: Option<u64>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            base_path: base_path(),
            port: server_port(),
            history_dir: history_dir(),
            record_history: record_history(),
            seed: rng_seed(),
        }
    }

    /// Enter `base_path` and return the absolute history directory.
    pub fn enter_base_path(&self) -> io::Result<PathBuf> {
        let workdir = enter_base_path(&self.base_path)?;
        Ok(resolve_under(&workdir, &self.history_dir))
    }
}
