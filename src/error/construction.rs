use core::fmt;

/// Errors occurring while constructing an `XformHash`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConstructionError {
    /// The requested `(cart_resl, cart_bound)` pair would require more than
    /// 8192 Cartesian cells per axis.
    TooManyCartCells {
        /// The number of cells per axis that would have been required.
        requested: u64,
    },
    /// An explicit `ori_nside` was requested that exceeds the variant's
    /// covering-radius table length.
    TooManyOriCells {
        /// The `ori_nside` value that was requested.
        requested: u64,
    },
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::TooManyCartCells { requested } => write!(
                f,
                "too many cart cells, > 8192 (requested {requested})"
            ),
            Self::TooManyOriCells { requested } => {
                write!(f, "too many ori cells (requested {requested})")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConstructionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}
