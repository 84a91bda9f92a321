use std::num::NonZeroUsize;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroBlockSize,
    UnsupportedBlockSize {
        requested: usize,
        default: usize,
        alternate: usize,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroBlockSize => write!(f, "Block size must be at least one byte."),
            Self::UnsupportedBlockSize {
                default, alternate, ..
            } => write!(
                f,
                "Invalid padding size. Use {default} (default) or {alternate}."
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// The alignment target in bytes, never zero
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BlockSize(NonZeroUsize);

impl BlockSize {
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or(ConfigError::ZeroBlockSize)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for BlockSize {
    type Error = ConfigError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for BlockSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What gets appended to reach the next block boundary
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Filler {
    /// Every filler byte is the same byte
    Fixed(u8),
    /// Every filler byte is an independent, uniform pick from `A`-`Z`
    RandomLetter,
}

impl Filler {
    pub const X: Self = Self::Fixed(b'X');

    /// Human readable description, used in the usage text
    pub fn describe(&self) -> String {
        match self {
            Self::Fixed(b) if b.is_ascii_graphic() => format!("'{}' characters", *b as char),
            Self::Fixed(b) => format!("0x{b:02x} bytes"),
            Self::RandomLetter => String::from("random uppercase letters"),
        }
    }
}

/// Everything one run of the padder needs to know
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PadConfig {
    pub block_size: BlockSize,
    pub filler: Filler,
}

impl PadConfig {
    pub fn new(block_size: usize, filler: Filler) -> Result<Self, ConfigError> {
        Ok(Self {
            block_size: BlockSize::new(block_size)?,
            filler,
        })
    }
}

/// A packaged program preset: the two block sizes it accepts and its filler
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Variant {
    pub name: &'static str,
    pub default_size: usize,
    pub alternate_size: usize,
    pub filler: Filler,
}

impl Variant {
    pub const MP: Self = Self {
        name: "mp",
        default_size: 5,
        alternate_size: 4,
        filler: Filler::RandomLetter,
    };

    pub const MP4: Self = Self {
        name: "mp4",
        default_size: 4,
        alternate_size: 5,
        filler: Filler::X,
    };

    pub const MP8: Self = Self {
        name: "mp8",
        default_size: 8,
        alternate_size: 16,
        filler: Filler::X,
    };

    pub const MP16: Self = Self {
        name: "mp16",
        default_size: 16,
        alternate_size: 8,
        filler: Filler::X,
    };

    /// Turn an optional requested block size into the configuration for this run
    pub fn resolve(&self, requested: Option<usize>) -> Result<PadConfig, ConfigError> {
        let size = requested.unwrap_or(self.default_size);
        if size != self.default_size && size != self.alternate_size {
            return Err(ConfigError::UnsupportedBlockSize {
                requested: size,
                default: self.default_size,
                alternate: self.alternate_size,
            });
        }

        PadConfig::new(size, self.filler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_size_zero_fails() {
        assert_eq!(BlockSize::new(0), Err(ConfigError::ZeroBlockSize));
        assert_eq!(BlockSize::try_from(16usize).map(BlockSize::get), Ok(16));
    }

    #[test]
    fn test_resolve_default() {
        let config = Variant::MP.resolve(None).unwrap();
        assert_eq!(config.block_size.get(), 5);
        assert_eq!(config.filler, Filler::RandomLetter);
    }

    #[test]
    fn test_resolve_alternate() {
        let config = Variant::MP8.resolve(Some(16)).unwrap();
        assert_eq!(config.block_size.get(), 16);
        assert_eq!(config.filler, Filler::Fixed(b'X'));
    }

    #[test]
    fn test_resolve_rejects_other_sizes() {
        for size in [0, 1, 3, 6, 8, 32] {
            assert_eq!(
                Variant::MP.resolve(Some(size)),
                Err(ConfigError::UnsupportedBlockSize {
                    requested: size,
                    default: 5,
                    alternate: 4
                })
            );
        }
    }

    #[test]
    fn test_unsupported_message() {
        let err = Variant::MP16.resolve(Some(4)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid padding size. Use 16 (default) or 8."
        );
    }

    #[test]
    fn test_filler_describe() {
        assert_eq!(Filler::X.describe(), "'X' characters");
        assert_eq!(Filler::Fixed(0).describe(), "0x00 bytes");
        assert_eq!(Filler::RandomLetter.describe(), "random uppercase letters");
    }
}
