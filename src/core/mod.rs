use crate::config::PrinterConfig;
use crate::printer::{self, LimbArray, PrinterError};
use crate::uint160::UInt160;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// What gets shown for one identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    pub hex: String,
    pub limbs: LimbArray,
    pub bit_length: u32,
}

/// Main application struct that handles shared logic
pub struct Inspector {
    config: PrinterConfig,
}

impl Inspector {
    #[must_use]
    pub const fn new(config: PrinterConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// Render raw limbs in the configured case
    ///
    /// # Errors
    ///
    /// Returns `PrinterError::InvalidInput` unless exactly five limbs are given.
    pub fn format_limbs(&self, limbs: &[u32]) -> Result<String, PrinterError> {
        log::debug!("Formatting {} limbs", limbs.len());
        printer::format_slice(limbs).map(|hex| self.apply_case(hex))
    }

    /// Parse a textual limb list and render it
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The text is not a limb list or a limb overflows 32 bits
    /// - The list does not hold exactly five limbs
    pub fn format_limb_list(&self, text: &str) -> Result<String, PrinterError> {
        let limbs = printer::limbs::parse_limb_list(text)?;
        log::trace!("Parsed limb list {limbs:?}");
        self.format_limbs(&limbs)
    }

    #[must_use]
    pub fn describe(&self, value: &UInt160) -> Description {
        Description {
            hex: self.apply_case(value.to_upper_hex()),
            limbs: *value.limbs(),
            bit_length: value.bit_length(),
        }
    }

    #[must_use]
    pub fn distance(&self, a: &UInt160, b: &UInt160) -> UInt160 {
        a.distance(b)
    }

    /// Generate a random identifier
    ///
    /// The seed argument wins over the configured seed; without either the
    /// generator is seeded from OS entropy.
    #[must_use]
    pub fn random(&self, seed: Option<u64>) -> UInt160 {
        let mut rng = self.rng(seed);
        UInt160::random(&mut rng)
    }

    /// Endless stream of identifiers from a single generator
    pub fn random_iter(&self, seed: Option<u64>) -> impl Iterator<Item = UInt160> + use<> {
        let mut rng = self.rng(seed);
        std::iter::repeat_with(move || UInt160::random(&mut rng))
    }

    /// Generate `count` identifiers from a single generator
    #[must_use]
    pub fn random_many(&self, seed: Option<u64>, count: usize) -> Vec<UInt160> {
        self.random_iter(seed).take(count).collect()
    }

    #[must_use]
    pub fn digest(&self, data: &[u8]) -> UInt160 {
        UInt160::from_digest(data)
    }

    fn rng(&self, seed: Option<u64>) -> ChaCha8Rng {
        match seed.or(self.config.random.seed) {
            Some(seed) => {
                log::debug!("Seeding generator with {seed}");
                ChaCha8Rng::seed_from_u64(seed)
            }
            None => ChaCha8Rng::from_entropy(),
        }
    }

    fn apply_case(&self, hex: String) -> String {
        if self.config.display.uppercase {
            hex
        } else {
            hex.to_ascii_lowercase()
        }
    }
}
