use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct TextGenerationOptions {
    /// Seed for the random number generator to ensure consistent data.
    pub seed: u64,
    /// Length of the generated text in bytes
    pub length: usize,
    /// Number of distinct byte values to draw from, starting at b'a'
    pub alphabet_size: u8,
    /// Number of times the pattern is planted at random positions
    pub planted_matches: usize,
}

impl TextGenerationOptions {
    pub fn estimate_size(&self) -> u64 {
        self.length as u64
    }
}

/// Generates a random text and plants the pattern at `planted_matches` random
/// positions, so searches exercise both the mismatch and the match paths.
pub fn generate_text(pattern: &[u8], options: &TextGenerationOptions) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(options.seed);

    let mut text: Vec<u8> = (0..options.length)
        .map(|_| b'a' + rng.random_range(0..options.alphabet_size))
        .collect();

    if pattern.len() <= text.len() {
        for _ in 0..options.planted_matches {
            let at = rng.random_range(0..=text.len() - pattern.len());
            text[at..at + pattern.len()].copy_from_slice(pattern);
        }
    }

    text
}
