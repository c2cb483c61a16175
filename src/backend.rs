use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::{Matrix, Result};

/// Which kernel computes a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// The kernel in [`crate::kernel`].
    #[default]
    Rust,
    /// The C kernel in `csrc/`, only built with the `native` feature.
    Native,
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.to_lowercase();

        match s.trim() {
            "rust" => Ok(Backend::Rust),
            "native" | "c" => Ok(Backend::Native),
            _ => Err(format!(
                "Unknown backend `{}`, available backends are: rust, native.",
                s.trim()
            )),
        }
    }
}

impl Display for Backend {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Backend::Rust => "rust",
            Backend::Native => "native",
        })
    }
}

impl Backend {
    pub fn is_available(self) -> bool {
        match self {
            Backend::Rust => true,
            Backend::Native => cfg!(feature = "native"),
        }
    }

    pub fn multiply(self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        match self {
            Backend::Rust => crate::kernel::multiply(a, b),
            #[cfg(feature = "native")]
            Backend::Native => crate::native::multiply(a, b),
            #[cfg(not(feature = "native"))]
            Backend::Native => Err(crate::Error::BackendUnavailable(self)),
        }
    }
}
