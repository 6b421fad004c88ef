//! File header model

/// Metadata block at the start of every compiled file.
///
/// Binary format:
/// ```text
/// Size   Field
/// ──────────────────────────────────────────────
/// 1+4    version (sign byte + magnitude, 1000)
/// ...    fields: tag ('M' | 'P'), nature ('#' | '$'), value
/// 1      '.' end of header
/// 1      sentinel (ignored)
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Header {
    pub version: i64,
    pub module_name: Option<String>,
    pub package_name: Option<String>,
}

impl Header {
    pub fn new(version: i64) -> Self {
        Self {
            version,
            ..Self::default()
        }
    }

    pub fn with_module(mut self, name: impl Into<String>) -> Self {
        self.module_name = Some(name.into());
        self
    }

    pub fn with_package(mut self, name: impl Into<String>) -> Self {
        self.package_name = Some(name.into());
        self
    }

    /// Check the version against the format version
    #[inline]
    pub fn is_current(&self) -> bool {
        self.version == crate::VERSION
    }
}
