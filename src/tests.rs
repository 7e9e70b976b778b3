use voxell_rng::{prelude::RngCore, rng::XorShift128};

use crate::rng::RandomSource;

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Replays a fixed list of draws. Panics when it runs dry or a draw is out of range, so a test
/// that consumes more randomness than it scripted fails loudly.
pub struct ScriptedRng {
    draws: Vec<usize>,
    next: usize,
}

impl ScriptedRng {
    pub fn new(draws: &[usize]) -> Self {
        Self {
            draws: draws.to_vec(),
            next: 0,
        }
    }
}

impl RandomSource for ScriptedRng {
    fn next_in_range(&mut self, upper: usize) -> usize {
        let value = *self
            .draws
            .get(self.next)
            .unwrap_or_else(|| panic!("scripted rng exhausted after {} draws", self.next));
        assert!(value < upper, "scripted draw {} out of range [0, {})", value, upper);
        self.next += 1;
        value
    }
}

pub fn zeros(len: usize) -> Vec<u8> {
    vec![0; len]
}

/// A PNG signature followed by deterministic noise, `len` bytes in total.
pub fn sample_image(len: usize) -> Vec<u8> {
    let mut data = PNG_SIGNATURE.to_vec();
    let mut rng = XorShift128::new(0xdeadcafe);
    while data.len() < len {
        data.extend_from_slice(&rng.next_u64().to_le_bytes());
    }
    data.truncate(len);
    data
}

#[test]
fn scripted_rng_replays_in_order() {
    let mut rng = ScriptedRng::new(&[4, 0, 7]);
    assert_eq!(rng.next_in_range(5), 4);
    assert_eq!(rng.next_in_range(1), 0);
    assert_eq!(rng.next_in_range(8), 7);
}

#[test]
#[should_panic(expected = "exhausted")]
fn scripted_rng_panics_when_empty() {
    ScriptedRng::new(&[]).next_in_range(8);
}

#[test]
fn sample_image_is_stable() {
    let a = sample_image(1000);
    assert_eq!(a.len(), 1000);
    assert_eq!(&a[..8], PNG_SIGNATURE);
    assert_eq!(a, sample_image(1000));
}
