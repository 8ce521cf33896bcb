//! Shell configuration: defaults, environment overrides and validation.

use bolt_core::BrowserResult;
use bolt_resource::ResponseBody;
use bolt_router::PageSpec;
use bolt_router::RouterConfig;
use bolt_window::WindowDetails;
use std::ffi::OsString;
use std::path::PathBuf;

pub const DEFAULT_INTERNAL_URL: &str = "https://bolt-internal/";
pub const DEFAULT_FILES_ROOT: &str = "cef/files";

const ENV_INTERNAL_URL: &str = "BOLT_INTERNAL_URL";
const ENV_FILES_DIR: &str = "BOLT_FILES_DIR";
const ENV_SHOW_SETTINGS: &str = "BOLT_SHOW_SETTINGS";

/// Everything the shell needs at construction. Immutable once the shell is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Prefix for the virtual filesystem and the OAuth redirect targets.
    pub internal_url: String,
    /// Directory the virtual pages are read from.
    pub files_root: PathBuf,
    pub pages: Vec<PageSpec>,
    /// Replaces the built-in overlay chrome when set.
    pub overlay_document: Option<ResponseBody>,
    /// Window opened when the host context becomes ready.
    pub initial_window: WindowDetails,
    pub show_settings_on_start: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            internal_url: DEFAULT_INTERNAL_URL.to_owned(),
            files_root: PathBuf::from(DEFAULT_FILES_ROOT),
            pages: PageSpec::defaults(),
            overlay_document: None,
            initial_window: WindowDetails::default(),
            show_settings_on_start: false,
        }
    }
}

impl ShellConfig {
    /// Defaults overridden by `BOLT_INTERNAL_URL`, `BOLT_FILES_DIR` and `BOLT_SHOW_SETTINGS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_INTERNAL_URL) {
            config.internal_url = url.to_string_lossy().into_owned();
        }

        if let Some(root) = lookup(ENV_FILES_DIR) {
            config.files_root = PathBuf::from(root);
        }

        if let Some(flag) = lookup(ENV_SHOW_SETTINGS) {
            config.show_settings_on_start = parse_flag(&flag.to_string_lossy());
        }

        config
    }

    pub fn router_config(&self) -> BrowserResult<RouterConfig> {
        let config = RouterConfig::new(self.internal_url.clone())?;
        Ok(match &self.overlay_document {
            Some(document) => config.with_overlay_document(ResponseBody::clone(document)),
            None => config,
        })
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
