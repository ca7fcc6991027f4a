// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Random;

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Generate a string of exactly `length` lowercase letters, one draw per letter
pub fn generate_random_string(random: &mut impl Random, length: usize) -> String {
    (0..length)
        .map(|_| ALPHABET[random.usize(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RngRandom;

    #[test]
    fn test_length_and_alphabet() {
        let mut random = RngRandom::seeded(3);

        for length in [1, 10, 257] {
            let s = generate_random_string(&mut random, length);
            assert_eq!(s.len(), length);
            assert!(s.bytes().all(|b| b.is_ascii_lowercase()), "bad string {}", s);
        }
    }

    struct CountingRandom {
        draws: usize,
    }

    impl Random for CountingRandom {
        fn usize(&mut self, range: std::ops::Range<usize>) -> usize {
            self.draws += 1;
            range.start
        }
        fn u32(&mut self, range: std::ops::RangeInclusive<u32>) -> u32 {
            self.draws += 1;
            *range.start()
        }
    }

    #[test]
    fn test_zero_length_is_empty() {
        let mut random = CountingRandom { draws: 0 };
        assert_eq!(generate_random_string(&mut random, 0), "");
        assert_eq!(random.draws, 0);
    }

    #[test]
    fn test_one_draw_per_letter() {
        let mut random = CountingRandom { draws: 0 };
        assert_eq!(generate_random_string(&mut random, 10), "aaaaaaaaaa");
        assert_eq!(random.draws, 10);
    }

    struct OutOfRangeRandom;

    impl Random for OutOfRangeRandom {
        fn usize(&mut self, range: std::ops::Range<usize>) -> usize {
            range.end
        }
        fn u32(&mut self, range: std::ops::RangeInclusive<u32>) -> u32 {
            *range.end() + 1
        }
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_out_of_range_draw_panics() {
        generate_random_string(&mut OutOfRangeRandom, 1);
    }

    #[test]
    fn test_every_letter_appears_eventually() {
        let mut random = RngRandom::seeded(11);
        let s = generate_random_string(&mut random, 5_000);

        for letter in b'a'..=b'z' {
            assert!(s.as_bytes().contains(&letter), "missing {}", letter as char);
        }
    }
}
