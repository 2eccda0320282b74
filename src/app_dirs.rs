use std::fs;
use std::path::{Path, PathBuf};

use crate::env::{expand, Environment, SystemEnv};
use crate::error::{Error, Result};
use crate::platform::Platform;

#[derive(Debug, Clone, Copy)]
enum Category {
    Data,
    Config,
    Cache,
}

impl Category {
    fn windows_suffix(self) -> &'static str {
        match self {
            Category::Data => "Data",
            Category::Config => "Config",
            Category::Cache => "Cache",
        }
    }
}

/// Resolves the data, config and cache directories for one application.
///
/// The `XDG_DATA_HOME`, `XDG_CONFIG_HOME` and `XDG_CACHE_HOME` overrides are
/// captured once at construction; mutating them afterwards does not affect an
/// existing resolver. Everything else is live: `HOME`, `APPDATA` and `$VAR`
/// references inside a captured override are looked up again on every call to
/// [`data`](AppDirs::data), [`config`](AppDirs::config) and
/// [`cache`](AppDirs::cache), so those calls observe later environment
/// changes.
///
/// An override always wins, even with [`with_posix_layout`]. Without one, the
/// path depends on the platform the resolver was built for:
///
/// | platform | data | config | cache |
/// |----------|------|--------|-------|
/// | Windows  | `%APPDATA%\app\Data` | `%APPDATA%\app\Config` | `%APPDATA%\app\Cache` |
/// | macOS    | `~/Library/app` | `~/Library/Preferences/app` | `~/Library/Caches/app` |
/// | other    | `~/.local/share/app` | `~/.config/app` | `~/.cache/app` |
///
/// [`with_posix_layout`]: AppDirs::with_posix_layout
#[derive(Debug, Clone)]
pub struct AppDirs<E: Environment = SystemEnv> {
    app_name: String,
    force_posix: bool,
    platform: Platform,
    env: E,
    data_override: Option<String>,
    config_override: Option<String>,
    cache_override: Option<String>,
}

impl AppDirs<SystemEnv> {
    /// Creates a resolver for `app_name` bound to the host platform and the
    /// process environment.
    pub fn new(app_name: impl Into<String>) -> Result<Self> {
        Self::with_env(app_name, false, Platform::current(), SystemEnv)
    }

    /// Like [`new`](AppDirs::new), but uses the Unix layout even on Windows
    /// and macOS. Overrides still win.
    pub fn with_posix_layout(app_name: impl Into<String>) -> Result<Self> {
        Self::with_env(app_name, true, Platform::current(), SystemEnv)
    }
}

impl<E: Environment> AppDirs<E> {
    /// Creates a resolver with an explicit platform and environment.
    ///
    /// This is the injection point for tests and embedders that need layouts
    /// pinned independently of the host. The overrides are captured from
    /// `env` here; an empty value counts as absent.
    pub fn with_env(
        app_name: impl Into<String>,
        force_posix: bool,
        platform: Platform,
        env: E,
    ) -> Result<Self> {
        let app_name = app_name.into();
        if app_name.is_empty() {
            return Err(Error::EmptyAppName);
        }
        let data_override = captured(&env, "XDG_DATA_HOME");
        let config_override = captured(&env, "XDG_CONFIG_HOME");
        let cache_override = captured(&env, "XDG_CACHE_HOME");
        Ok(Self {
            app_name,
            force_posix,
            platform,
            env,
            data_override,
            config_override,
            cache_override,
        })
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// The directory for persistent application data.
    ///
    /// Never touches the filesystem; use [`makedirs`](AppDirs::makedirs) to
    /// create it.
    pub fn data(&self) -> Result<PathBuf> {
        self.resolve(Category::Data)
    }

    /// The directory for user configuration files.
    pub fn config(&self) -> Result<PathBuf> {
        self.resolve(Category::Config)
    }

    /// The directory for disposable cached files.
    pub fn cache(&self) -> Result<PathBuf> {
        self.resolve(Category::Cache)
    }

    fn resolve(&self, category: Category) -> Result<PathBuf> {
        if let Some(raw) = self.override_for(category) {
            return Ok(PathBuf::from(expand(raw, &self.env)).join(&self.app_name));
        }
        match self.platform {
            Platform::Windows if !self.force_posix => Ok(self
                .app_data_root()?
                .join(&self.app_name)
                .join(category.windows_suffix())),
            Platform::MacOs if !self.force_posix => {
                let library = self.home_dir()?.join("Library");
                Ok(match category {
                    Category::Data => library.join(&self.app_name),
                    Category::Config => library.join("Preferences").join(&self.app_name),
                    Category::Cache => library.join("Caches").join(&self.app_name),
                })
            }
            _ => {
                let home = self.home_dir()?;
                let base = match category {
                    Category::Data => home.join(".local").join("share"),
                    Category::Config => home.join(".config"),
                    Category::Cache => home.join(".cache"),
                };
                Ok(base.join(&self.app_name))
            }
        }
    }

    fn override_for(&self, category: Category) -> Option<&str> {
        match category {
            Category::Data => self.data_override.as_deref(),
            Category::Config => self.config_override.as_deref(),
            Category::Cache => self.cache_override.as_deref(),
        }
    }

    fn home_dir(&self) -> Result<PathBuf> {
        self.env
            .var("HOME")
            .filter(|value| !value.is_empty())
            .map(|raw| PathBuf::from(expand(&raw, &self.env)))
            .ok_or(Error::MissingVar { name: "HOME" })
    }

    fn app_data_root(&self) -> Result<PathBuf> {
        self.env
            .var("APPDATA")
            .filter(|value| !value.is_empty())
            .map(|raw| PathBuf::from(expand(&raw, &self.env)))
            .ok_or(Error::MissingVar { name: "APPDATA" })
    }

    /// Creates the data, config and cache directories, in that order,
    /// together with any missing ancestors. Existing directories are left
    /// untouched, so calling this twice is a no-op.
    ///
    /// Not transactional: the first failure aborts, leaving directories
    /// already created in place. The check-then-create sequence is not
    /// atomic against concurrent filesystem activity.
    pub fn makedirs(&self) -> Result<()> {
        for path in [self.data()?, self.config()?, self.cache()?] {
            if !path.exists() {
                fs::create_dir_all(&path)
                    .map_err(|source| Error::io("create", path.clone(), source))?;
            }
        }
        Ok(())
    }

    /// Recursively removes the cache, config and data directories, in that
    /// order, skipping any that do not exist. Useful for uninstall and
    /// cleanup flows.
    ///
    /// On Windows without overrides the three directories share a
    /// `%APPDATA%\app_name` parent; that parent is removed too so an empty
    /// folder is not left behind. The cleanup is skipped when any override
    /// was captured, since the directories then need not share a parent.
    ///
    /// Not transactional: the first failure aborts the remaining removals.
    pub fn rmdirs(&self) -> Result<()> {
        for path in [self.cache()?, self.config()?, self.data()?] {
            remove_tree(&path)?;
        }

        let no_overrides = self.data_override.is_none()
            && self.config_override.is_none()
            && self.cache_override.is_none();
        if self.platform == Platform::Windows && !self.force_posix && no_overrides {
            remove_tree(&self.app_data_root()?.join(&self.app_name))?;
        }
        Ok(())
    }
}

fn captured(env: &impl Environment, name: &str) -> Option<String> {
    env.var(name).filter(|value| !value.is_empty())
}

fn remove_tree(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_dir_all(path).map_err(|source| Error::io("remove", path.to_path_buf(), source))?;
    }
    Ok(())
}
