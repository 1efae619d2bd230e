use std::path::PathBuf;

/// Where the IEEE MA-L registry is published.
pub const IEEE_OUI_URL: &str = "https://standards-oui.ieee.org/oui/oui.txt";

/// Default location of the cached registry, relative to the working directory.
pub const DEFAULT_OUI_FILE: &str = "./oui.txt";

pub struct Config {
    /// Path of the cached OUI registry text file.
    pub oui_file: PathBuf,
    /// URL the registry is downloaded from when the cache is missing.
    pub source_url: String,
    /// Print the whole OUI record instead of only the company name.
    pub verbose: bool,
    /// Download the registry again even if a cached copy exists.
    pub refresh: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            oui_file: PathBuf::from(DEFAULT_OUI_FILE),
            source_url: IEEE_OUI_URL.to_string(),
            verbose: false,
            refresh: false,
        }
    }
}
