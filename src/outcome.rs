//! Measurement outcome histograms returned by an executor.

use alloc::collections::BTreeMap;
use alloc::string::String;
use core::fmt;

/// Map from measured bit-string to how many shots produced it. Bit-strings
/// are written most-significant first, so the rightmost character is
/// classical bit 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct OutcomeDistribution {
    counts: BTreeMap<String, u64>,
    shots: u64,
}

impl OutcomeDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(bits, count)` pairs. Repeated keys are summed.
    pub fn from_counts<I, S>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut dist = Self::new();
        for (bits, count) in counts {
            dist.add(bits, count);
        }
        dist
    }

    /// Add `count` observations of `bits`.
    pub fn add(&mut self, bits: impl Into<String>, count: u64) {
        if count == 0 {
            return;
        }
        *self.counts.entry(bits.into()).or_insert(0) += count;
        self.shots += count;
    }

    /// Total number of observations.
    pub fn shots(&self) -> u64 {
        self.shots
    }

    pub fn count(&self, bits: &str) -> u64 {
        self.counts.get(bits).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Fraction of `shots` in which classical bit `position` read 1.
    pub fn bit_probability(&self, position: usize, shots: u64) -> f64 {
        if shots == 0 {
            return 0.0;
        }
        let set: u64 = self
            .iter()
            .filter(|(bits, _)| bit_is_set(bits, position))
            .map(|(_, count)| count)
            .sum();
        set as f64 / shots as f64
    }
}

/// Whether bit `position`, counted from the rightmost character, is '1'.
/// Positions past the string's length read as 0.
pub fn bit_is_set(bits: &str, position: usize) -> bool {
    bits.as_bytes()
        .iter()
        .rev()
        .nth(position)
        .is_some_and(|&b| b == b'1')
}

/// Format `value` as a `width`-bit string, most-significant bit first.
pub fn format_bits(value: usize, width: usize) -> String {
    (0..width)
        .rev()
        .map(|bit| if (value >> bit) & 1 == 1 { '1' } else { '0' })
        .collect()
}

impl fmt::Display for OutcomeDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (bits, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{bits}': {count}")?;
        }
        write!(f, "}}")
    }
}
