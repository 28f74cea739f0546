//! Configuration loading for `modaltext.toml`.
//!
//! Every field is optional. A missing file yields defaults silently; a file
//! that fails to parse yields defaults and a WARN under target `config`.
//! Unknown keys are ignored so older binaries accept newer files.

use anyhow::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use std::time::Duration;
use std::{fs, path::PathBuf};
use tracing::{debug, warn};

pub const CONFIG_FILE_NAME: &str = "modaltext.toml";

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub editor: EditorConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub file: ConfigFile,
    pub source: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct InputConfig {
    #[serde(default = "InputConfig::default_timeout")]
    pub timeout: bool,
    #[serde(default = "InputConfig::default_timeoutlen")]
    pub timeoutlen: u32,
    #[serde(default = "InputConfig::default_leader")]
    pub leader: char,
    /// Sequence notation → command name. Merged over the built-in sequences.
    #[serde(default)]
    pub sequences: BTreeMap<String, String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            timeout: Self::default_timeout(),
            timeoutlen: Self::default_timeoutlen(),
            leader: Self::default_leader(),
            sequences: BTreeMap::new(),
        }
    }
}

impl InputConfig {
    const fn default_timeout() -> bool {
        true
    }
    const fn default_timeoutlen() -> u32 {
        1000
    }
    const fn default_leader() -> char {
        '\\'
    }

    /// Effective sequence timeout; `None` when expiry is disabled.
    pub fn sequence_timeout(&self) -> Option<Duration> {
        self.timeout
            .then(|| Duration::from_millis(u64::from(self.timeoutlen)))
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// 0 disables soft wrapping.
    #[serde(default)]
    pub wrap_width: usize,
    #[serde(default = "EditorConfig::default_width")]
    pub width: u16,
    #[serde(default = "EditorConfig::default_height")]
    pub height: u16,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            wrap_width: 0,
            width: Self::default_width(),
            height: Self::default_height(),
        }
    }
}

impl EditorConfig {
    const fn default_width() -> u16 {
        80
    }
    const fn default_height() -> u16 {
        24
    }

    pub fn wrap(&self) -> Option<NonZeroUsize> {
        NonZeroUsize::new(self.wrap_width)
    }
}

/// Config path: `modaltext.toml` in the working directory if present, else
/// the platform config directory (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("modaltext").join(CONFIG_FILE_NAME);
    }
    local
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        debug!(target: "config", path = %path.display(), "config_absent_using_defaults");
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            debug!(
                target: "config",
                path = %path.display(),
                sequences = file.input.sequences.len(),
                "config_loaded"
            );
            Ok(Config {
                file,
                source: Some(path),
            })
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed");
            Ok(Config::default())
        }
    }
}

impl Config {
    pub fn input(&self) -> &InputConfig {
        &self.file.input
    }

    pub fn editor(&self) -> &EditorConfig {
        &self.file.editor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex, MutexGuard};
    use tracing::Level;
    use tracing::subscriber::with_default;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone)]
    struct BufferWriter {
        inner: Arc<Mutex<Vec<u8>>>,
    }

    impl BufferWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buf = Arc::new(Mutex::new(Vec::new()));
            (Self { inner: buf.clone() }, buf)
        }
    }

    struct LockedWriter<'a> {
        guard: MutexGuard<'a, Vec<u8>>,
    }

    impl Write for LockedWriter<'_> {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.guard.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for BufferWriter {
        type Writer = LockedWriter<'a>;

        fn make_writer(&'a self) -> Self::Writer {
            LockedWriter {
                guard: self.inner.lock().expect("log buffer poisoned"),
            }
        }
    }

    fn write_config(body: &str) -> tempfile::NamedTempFile {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), body).unwrap();
        tmp
    }

    #[test]
    fn defaults_when_file_missing() {
        let cfg = load_from(Some(PathBuf::from("__modaltext_missing__.toml"))).unwrap();
        assert!(cfg.source.is_none());
        assert_eq!(cfg.file, ConfigFile::default());
        assert!(cfg.input().timeout);
        assert_eq!(cfg.input().timeoutlen, 1000);
        assert_eq!(cfg.input().leader, '\\');
        assert_eq!(cfg.editor().width, 80);
        assert_eq!(cfg.editor().height, 24);
        assert_eq!(cfg.editor().wrap(), None);
    }

    #[test]
    fn parses_input_section() {
        let tmp = write_config(
            "[input]\ntimeout = false\ntimeoutlen = 250\nleader = \",\"\n\
             [input.sequences]\n\"dd\" = \"delete_line\"\n\"<leader>x\" = \"delete_char\"\n",
        );
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert!(!cfg.input().timeout);
        assert_eq!(cfg.input().timeoutlen, 250);
        assert_eq!(cfg.input().leader, ',');
        assert_eq!(cfg.input().sequences.len(), 2);
        assert_eq!(
            cfg.input().sequences.get("<leader>x").map(String::as_str),
            Some("delete_char")
        );
        assert_eq!(cfg.source.as_deref(), Some(tmp.path()));
    }

    #[test]
    fn sequence_timeout_honors_toggle() {
        let mut input = InputConfig::default();
        assert_eq!(input.sequence_timeout(), Some(Duration::from_millis(1000)));
        input.timeoutlen = 40;
        assert_eq!(input.sequence_timeout(), Some(Duration::from_millis(40)));
        input.timeout = false;
        assert_eq!(input.sequence_timeout(), None);
    }

    #[test]
    fn parses_editor_section() {
        let tmp = write_config("[editor]\nwrap_width = 40\nwidth = 20\n");
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.editor().wrap(), NonZeroUsize::new(40));
        assert_eq!(cfg.editor().width, 20);
        assert_eq!(cfg.editor().height, 24);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let tmp = write_config("[input]\ntimeoutlen = 300\nbogus = 1\n[future]\nx = true\n");
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.input().timeoutlen, 300);
    }

    #[test]
    fn parse_error_falls_back_and_warns() {
        let tmp = write_config("[input]\ntimeoutlen = \"soon\"\n");
        let (writer, buffer) = BufferWriter::new();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::WARN)
            .with_target(true)
            .with_ansi(false)
            .without_time()
            .with_writer(writer)
            .finish();

        let cfg = with_default(subscriber, || load_from(Some(tmp.path().to_path_buf()))).unwrap();

        assert_eq!(cfg.file, ConfigFile::default());
        let log_output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(log_output.contains("WARN config:"));
        assert!(log_output.contains("config_parse_failed"));
    }
}
