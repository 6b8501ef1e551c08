//! Extension filter applied to regular files.
//!
//! A filter spec is a `|`-delimited list of extensions such as `"png|jpg|bmp"`. The empty spec
//! accepts every file. Extensions compare case-sensitively; this differs on purpose from the
//! case-insensitive name ordering in [`super::sort`].

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

const DELIMITER: char = '|';

/// Returns the text after the last `.` in `name`, or `""` when there is none.
pub fn extension(name: &str) -> &str {
    name.rfind('.').map(|idx| &name[idx + 1..]).unwrap_or("")
}

/// Check `file_name` against a raw filter spec.
pub fn matches(file_name: &str, filter_spec: &str) -> bool {
    ExtensionFilter::parse(filter_spec).matches(file_name)
}

/// Parsed filter spec. Holds no tokens when it accepts everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ExtensionFilter {
    tokens: Vec<String>,
}

impl ExtensionFilter {
    pub fn accept_all() -> Self {
        Self::default()
    }

    /// Split `spec` on `|`. Empty tokens (`"png|"`) are kept and only match extensionless names.
    pub fn parse(spec: &str) -> Self {
        if spec.is_empty() {
            return Self::accept_all();
        }
        Self { tokens: spec.split(DELIMITER).map(str::to_owned).collect() }
    }

    pub fn is_accept_all(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn matches(&self, file_name: &str) -> bool {
        if self.is_accept_all() {
            return true;
        }
        let ext = extension(file_name);
        self.tokens.iter().any(|token| token == ext)
    }
}

impl fmt::Display for ExtensionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join("|"))
    }
}

impl FromStr for ExtensionFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for ExtensionFilter {
    fn from(spec: &str) -> Self {
        Self::parse(spec)
    }
}
