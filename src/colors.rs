//! `LS_COLORS`-style color table: parsing and lookup.

/// Escape preamble written before every style payload.
const ESCAPE_PRE: &str = "\x1b[";
/// Terminator written after every style payload.
const ESCAPE_POST: char = 'm';

pub const KEY_DIRECTORY: &str = "di";
pub const KEY_NORMAL: &str = "no";
pub const KEY_FILE: &str = "fi";
pub const KEY_SYMLINK: &str = "ln";
pub const KEY_FIFO: &str = "pi";
pub const KEY_SOCKET: &str = "so";
pub const KEY_BLOCK_DEVICE: &str = "bd";
pub const KEY_CHAR_DEVICE: &str = "cd";
pub const KEY_EXECUTABLE: &str = "ex";
pub const KEY_RESET: &str = "rs";

/// A single `key=value` pair from the color specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRule {
    /// Two-letter kind code or a `*`-prefixed suffix pattern.
    pub key: String,
    /// Style payload, already wrapped in escape controls.
    pub style: String,
}

/// Ordered color rules. Lookups return the first matching rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorTable {
    rules: Vec<ColorRule>,
}

impl ColorTable {
    /// Parse a `key=value:key=value:` specification in a single pass.
    ///
    /// `:` ends a pair, the first `=` switches from key to value, and any
    /// other character extends whichever side is being accumulated. A final
    /// pair that is not terminated by `:` is still kept.
    pub fn parse(spec: &str) -> Self {
        let mut rules = Vec::new();
        let mut key = String::new();
        let mut value = String::new();
        let mut in_value = false;

        for c in spec.chars() {
            match c {
                ':' => {
                    rules.push(ColorRule::new(std::mem::take(&mut key), &value));
                    value.clear();
                    in_value = false;
                }
                '=' => in_value = true,
                c if in_value => value.push(c),
                c => key.push(c),
            }
        }

        if in_value || !key.is_empty() {
            rules.push(ColorRule::new(key, &value));
        }

        Self { rules }
    }

    /// Build a table from an optional specification; `None` yields an empty table.
    pub fn from_spec(spec: Option<&str>) -> Self {
        spec.map(Self::parse).unwrap_or_default()
    }

    pub fn rules(&self) -> &[ColorRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Style of the first rule whose key equals `key`, or `""`.
    pub fn by_exact_key(&self, key: &str) -> &str {
        self.rules
            .iter()
            .find(|rule| rule.key == key)
            .map(|rule| rule.style.as_str())
            .unwrap_or("")
    }

    /// Style of the first `*<ext>` rule matching the extension of `filename`, or `""`.
    pub fn by_suffix(&self, filename: &str) -> &str {
        let extension = extension_of(filename);
        self.rules
            .iter()
            .find(|rule| rule.key.strip_prefix('*') == Some(extension))
            .map(|rule| rule.style.as_str())
            .unwrap_or("")
    }

    pub fn directory(&self) -> &str {
        self.by_exact_key(KEY_DIRECTORY)
    }

    pub fn reset(&self) -> &str {
        self.by_exact_key(KEY_RESET)
    }
}

impl ColorRule {
    fn new(key: String, payload: &str) -> Self {
        let mut style = String::with_capacity(ESCAPE_PRE.len() + payload.len() + 1);
        style.push_str(ESCAPE_PRE);
        style.push_str(payload);
        style.push(ESCAPE_POST);
        Self { key, style }
    }
}

/// Substring from the last `.` to the end of `filename`, or the whole name
/// when it contains no dot. A leading dot counts like any other.
pub fn extension_of(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(idx) => &filename[idx..],
        None => filename,
    }
}
