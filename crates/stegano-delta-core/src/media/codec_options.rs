use std::fmt;
use std::str::FromStr;

/// Codec configuration for hiding and unveiling
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// Decides which message character belongs to which pixel.
    /// Encoder and decoder must agree on this, otherwise the message is garbage.
    pub linear_index: LinearIndex,

    /// What happens when the message does not fit into the image
    pub capacity_policy: CapacityPolicy,
}

impl CodecOptions {
    pub fn with_linear_index(mut self, linear_index: LinearIndex) -> Self {
        self.linear_index = linear_index;
        self
    }

    pub fn with_capacity_policy(mut self, capacity_policy: CapacityPolicy) -> Self {
        self.capacity_policy = capacity_policy;
        self
    }
}

/// Maps a pixel coordinate to the position of a message character.
///
/// Coordinates are relative to the top left corner of the image.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LinearIndex {
    /// `k = x + y`, all pixels on the same anti-diagonal carry the same character.
    /// This is the format of already existing secret images.
    ///
    /// Unveiling walks column by column, only the first column yields the
    /// message in order, so no more than `height` characters come back intact.
    #[default]
    Diagonal,

    /// `k = y * width + x`, every pixel carries its own character.
    RowMajor,
}

impl LinearIndex {
    pub fn index_of(self, x: u32, y: u32, width: u32) -> usize {
        match self {
            LinearIndex::Diagonal => x as usize + y as usize,
            LinearIndex::RowMajor => y as usize * width as usize + x as usize,
        }
    }

    /// Number of characters an image of the given size carries and gives back in order
    pub fn capacity(self, width: u32, height: u32) -> usize {
        if width == 0 || height == 0 {
            return 0;
        }
        match self {
            LinearIndex::Diagonal => height as usize,
            LinearIndex::RowMajor => width as usize * height as usize,
        }
    }

    pub fn is_bijective(self) -> bool {
        matches!(self, LinearIndex::RowMajor)
    }
}

impl fmt::Display for LinearIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinearIndex::Diagonal => write!(f, "diagonal"),
            LinearIndex::RowMajor => write!(f, "row-major"),
        }
    }
}

impl FromStr for LinearIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "diagonal" => Ok(LinearIndex::Diagonal),
            "row-major" | "rowmajor" => Ok(LinearIndex::RowMajor),
            _ => Err(format!("Unsupported linear index: {s}")),
        }
    }
}

/// Decides how a message longer than the image capacity is treated
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CapacityPolicy {
    /// drop all characters that do not fit, a warning is logged
    #[default]
    Truncate,

    /// fail with `SteganoError::ImageCapacityError` before anything is written
    Reject,
}
