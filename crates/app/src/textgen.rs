//! Sample text generation for demo runs.
//!
//! When no input is specified, the CLI generates sample text with a
//! chosen character distribution so compression behavior is visible in
//! the report:
//! - `uniform`: all symbols equally likely (compresses poorly)
//! - `english`: letter frequencies of English prose (the typical case)
//! - `repetitive`: a fixed skewed pattern (compresses very well)

use std::fmt;
use std::str::FromStr;

use rand::distributions::{Distribution as _, WeightedIndex};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Character distribution of the generated sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    Uniform,
    English,
    Repetitive,
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Distribution::Uniform => "uniform",
            Distribution::English => "english",
            Distribution::Repetitive => "repetitive",
        };
        f.write_str(name)
    }
}

impl FromStr for Distribution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uniform" => Ok(Distribution::Uniform),
            "english" => Ok(Distribution::English),
            "repetitive" => Ok(Distribution::Repetitive),
            other => Err(format!(
                "unknown distribution: {other} (expected uniform, english, or repetitive)"
            )),
        }
    }
}

const UNIFORM_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz ";

/// Letters by descending English frequency, space last.
const ENGLISH_CHARS: &str = "etaoinshrdlcumwfgypbvkjxqz ";
const ENGLISH_WEIGHTS: [f64; 27] = [
    12.7, 9.1, 8.2, 7.5, 7.0, 6.7, 6.3, 6.1, 6.0, 4.3, 4.0, 2.8, 2.8, 2.4, 2.4, 2.2, 2.0, 2.0,
    1.9, 1.5, 1.0, 0.77, 0.15, 0.15, 0.095, 0.074, 18.0,
];

const REPETITIVE_PATTERN: &str = "AAAAAABBBBCCCDDE";

/// Generate `length` characters of sample text.
///
/// Deterministic for a given seed; `repetitive` ignores the seed
/// entirely (it is a fixed cycle).
pub fn generate_text(seed: u64, length: usize, distribution: Distribution) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    match distribution {
        Distribution::Uniform => (0..length)
            .map(|_| UNIFORM_ALPHABET[rng.gen_range(0..UNIFORM_ALPHABET.len())] as char)
            .collect(),
        Distribution::English => {
            let chars: Vec<char> = ENGLISH_CHARS.chars().collect();
            let weighted = WeightedIndex::new(ENGLISH_WEIGHTS).expect("weights are positive");
            (0..length).map(|_| chars[weighted.sample(&mut rng)]).collect()
        }
        Distribution::Repetitive => REPETITIVE_PATTERN.chars().cycle().take(length).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_length() {
        for distribution in [
            Distribution::Uniform,
            Distribution::English,
            Distribution::Repetitive,
        ] {
            for length in [0, 1, 100, 1000] {
                let text = generate_text(42, length, distribution);
                assert_eq!(text.chars().count(), length);
            }
        }
    }

    #[test]
    fn test_determinism() {
        let a = generate_text(12345, 5000, Distribution::English);
        let b = generate_text(12345, 5000, Distribution::English);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds() {
        let a = generate_text(1, 1000, Distribution::Uniform);
        let b = generate_text(2, 1000, Distribution::Uniform);
        assert_ne!(a, b);
    }

    #[test]
    fn test_repetitive_ignores_seed() {
        let a = generate_text(1, 64, Distribution::Repetitive);
        let b = generate_text(2, 64, Distribution::Repetitive);
        assert_eq!(a, b);
        assert!(a.starts_with("AAAAAABBBBCCCDDE"));
    }

    #[test]
    fn test_english_is_skewed() {
        let text = generate_text(7, 10_000, Distribution::English);
        let spaces = text.chars().filter(|&c| c == ' ').count();
        let zs = text.chars().filter(|&c| c == 'z').count();
        // Space weight dwarfs z; huge margin keeps this stable.
        assert!(spaces > 1000, "only {spaces} spaces");
        assert!(zs < 100, "{zs} z's");
        assert!(spaces > zs);
    }

    #[test]
    fn test_distribution_parses() {
        assert_eq!("uniform".parse(), Ok(Distribution::Uniform));
        assert_eq!("english".parse(), Ok(Distribution::English));
        assert_eq!("repetitive".parse(), Ok(Distribution::Repetitive));
        assert!("gaussian".parse::<Distribution>().is_err());
    }
}
