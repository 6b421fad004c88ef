//! # Disassembler Configuration

use latbc_spec::VERSION;

/// How a block whose last instruction runs past its declared length is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoundaryMode {
    /// Only check the boundary between instructions and accept overruns
    #[default]
    Lax,
    /// Reject blocks whose instructions do not end exactly on the boundary
    Strict,
}

/// Disassembler configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Config {
    /// Header version the input must carry
    pub expected_version: i64,
    /// Block boundary policy
    pub boundary: BoundaryMode,
}

impl Config {
    /// Default configuration:
    /// - Expected version: 1000
    /// - Boundary mode: lax
    pub const DEFAULT: Self = Self {
        expected_version: VERSION,
        boundary: BoundaryMode::Lax,
    };

    pub const fn with_expected_version(mut self, version: i64) -> Self {
        self.expected_version = version;
        self
    }

    pub const fn with_boundary(mut self, boundary: BoundaryMode) -> Self {
        self.boundary = boundary;
        self
    }

    #[inline]
    pub const fn is_strict(&self) -> bool {
        matches!(self.boundary, BoundaryMode::Strict)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}
