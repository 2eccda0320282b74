//! Per-application data, config and cache directories.
//!
//! [`AppDirs`] resolves the three directories an application should use,
//! honoring the XDG Base Directory variables (`XDG_DATA_HOME`,
//! `XDG_CONFIG_HOME`, `XDG_CACHE_HOME`) everywhere and falling back to the
//! native layout of the platform: `%APPDATA%` subfolders on Windows,
//! `~/Library` on macOS, dot-directories under `$HOME` elsewhere. It can
//! also create all three directories or recursively remove them.
//!
//! ```no_run
//! use config_better::AppDirs;
//!
//! fn main() -> config_better::Result<()> {
//!     let dirs = AppDirs::new("myapp")?;
//!     println!("data:   {}", dirs.data()?.display());
//!     println!("config: {}", dirs.config()?.display());
//!     println!("cache:  {}", dirs.cache()?.display());
//!     dirs.makedirs()
//! }
//! ```
//!
//! Platform and environment are injectable through
//! [`AppDirs::with_env`], so path layouts can be tested deterministically on
//! any host.

mod app_dirs;
mod env;
mod error;
mod platform;

pub use app_dirs::AppDirs;
pub use env::{Environment, SystemEnv};
pub use error::{Error, Result};
pub use platform::Platform;
