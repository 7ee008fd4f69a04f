/// Shape of a `SourceCode` payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Standard JSON compiler input, wrapped in an extra pair of braces.
    StandardJson,
    /// A single flattened source file.
    Flat,
}

impl SourceFormat {
    // A flat file that happens to start with `{` and end with `}` is taken as JSON.
    pub fn detect(source_code: &str) -> Self {
        if source_code.starts_with('{') && source_code.ends_with('}') {
            SourceFormat::StandardJson
        } else {
            SourceFormat::Flat
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::StandardJson => write!(f, "standard JSON"),
            SourceFormat::Flat => write!(f, "flat Solidity"),
        }
    }
}
