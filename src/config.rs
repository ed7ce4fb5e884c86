#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    pub accuracy: u32,
    /// Prefix non-negative numbers with a space so they line up with negative ones.
    pub pad_sign: bool,
}

pub const DEFAULT_ACCURACY: u32 = 8;

impl Default for FormatConfig {
    fn default() -> Self {
        FormatConfig {
            accuracy: DEFAULT_ACCURACY,
            pad_sign: false,
        }
    }
}

impl FormatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accuracy(self, accuracy: u32) -> Self {
        FormatConfig { accuracy, ..self }
    }

    pub fn with_pad_sign(self, pad_sign: bool) -> Self {
        FormatConfig { pad_sign, ..self }
    }
}
