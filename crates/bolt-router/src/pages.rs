//! Virtual page table read once at startup.

use bolt_core::BrowserError;
use bolt_core::BrowserResult;
use bolt_resource::MIME_TEXT_HTML;
use bolt_resource::ResponseBody;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Name and MIME type of one page to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSpec {
    pub name: String,
    pub mime_type: String,
}

impl PageSpec {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
        }
    }

    /// The pages every shell serves: the launcher UI and both OAuth landing pages.
    pub fn defaults() -> Vec<Self> {
        ["index.html", "oauth.html", "game_auth.html"]
            .into_iter()
            .map(|name| Self::new(name, MIME_TEXT_HTML))
            .collect()
    }
}

/// One page in the table. A page that failed to load keeps its error so it
/// can be reported when the page is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    mime_type: String,
    contents: BrowserResult<ResponseBody>,
}

impl PageEntry {
    pub fn loaded(mime_type: impl Into<String>, bytes: impl Into<ResponseBody>) -> Self {
        Self {
            mime_type: mime_type.into(),
            contents: Ok(bytes.into()),
        }
    }

    pub fn failed(mime_type: impl Into<String>, error: BrowserError) -> Self {
        Self {
            mime_type: mime_type.into(),
            contents: Err(error),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.contents.is_ok()
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn contents(&self) -> Result<&ResponseBody, &BrowserError> {
        self.contents.as_ref()
    }
}

/// Immutable name → page table. Lookups are exact, byte-for-byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VirtualPages {
    entries: HashMap<String, PageEntry>,
}

impl VirtualPages {
    /// Reads every page in `specs` from `root`. Unreadable files are recorded
    /// as failed entries; loading itself never fails.
    pub fn load(root: &Path, specs: &[PageSpec]) -> Self {
        let mut entries = HashMap::with_capacity(specs.len());

        for spec in specs {
            let path = root.join(&spec.name);
            let entry = match fs::read(&path) {
                Ok(bytes) => {
                    tracing::debug!(page = %spec.name, bytes = bytes.len(), "virtual page loaded");
                    PageEntry::loaded(spec.mime_type.clone(), bytes)
                }
                Err(error) => {
                    let error = BrowserError::new(
                        "router.page_read_failed",
                        format!("failed reading page `{}`: {error}", path.display()),
                    );
                    tracing::warn!(page = %spec.name, %error, "virtual page unavailable");
                    PageEntry::failed(spec.mime_type.clone(), error)
                }
            };
            entries.insert(spec.name.clone(), entry);
        }

        Self { entries }
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (String, PageEntry)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&PageEntry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn failed_pages(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, entry)| !entry.is_loaded())
            .map(|(name, _)| name.as_str())
    }
}
