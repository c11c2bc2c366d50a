/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Nearest color search
//!
//! When a pixel's color is not in a reverse table (typically because the
//! image went through a lossy format) it is resolved to the table entry
//! with the smallest squared euclidean distance. Equal distances are
//! resolved in favour of the lower character code, so every matcher
//! returns the same character for the same input.
use textpix_core::color::Rgb;

/// A search structure answering "which table color is closest to this one"
///
/// Implementations are built once per reverse table from its entries,
/// which are unique colors in ascending character order, and must be
/// interchangeable: for every input color all implementations return
/// the same character.
pub trait NearestMatcher: Send + Sync {
    /// Build the search structure
    ///
    /// `entries` is never empty.
    fn from_entries(entries: &[(Rgb, char)]) -> Self
    where
        Self: Sized;

    /// Return the character whose color is nearest to `color`
    fn nearest(&self, color: Rgb) -> char;

    /// A short name for logs
    fn name(&self) -> &'static str;
}

/// Whether `candidate` at `distance` beats the current best
#[inline(always)]
fn is_better(distance: u32, candidate: char, best: Option<(u32, char)>) -> bool {
    match best {
        None => true,
        Some((best_distance, best_char)) => {
            distance < best_distance || (distance == best_distance && candidate < best_char)
        }
    }
}

/// Compare against every entry
///
/// The table never holds more than 95 colors, so this is the default.
pub struct LinearScan {
    entries: Vec<(Rgb, char)>
}

impl NearestMatcher for LinearScan {
    fn from_entries(entries: &[(Rgb, char)]) -> Self {
        LinearScan {
            entries: entries.to_vec()
        }
    }

    fn nearest(&self, color: Rgb) -> char {
        let mut best = None;

        for (entry_color, entry_char) in &self.entries {
            let distance = color.distance_squared(*entry_color);

            if is_better(distance, *entry_char, best) {
                best = Some((distance, *entry_char));
            }
        }
        best.map_or(' ', |(_, c)| c)
    }

    fn name(&self) -> &'static str {
        "linear scan"
    }
}

/// Entries sorted along the red axis
///
/// The search starts at the entries with the closest red value and walks
/// outwards in both directions, stopping once the red difference alone
/// exceeds the best distance found so far.
pub struct RedAxisScan {
    entries: Vec<(Rgb, char)>
}

impl NearestMatcher for RedAxisScan {
    fn from_entries(entries: &[(Rgb, char)]) -> Self {
        let mut entries = entries.to_vec();
        entries.sort_unstable_by_key(|(color, c)| (color.r, *c));

        RedAxisScan { entries }
    }

    fn nearest(&self, color: Rgb) -> char {
        let split = self.entries.partition_point(|(entry, _)| entry.r < color.r);

        let mut best: Option<(u32, char)> = None;

        // red values at or above the target
        for (entry_color, entry_char) in &self.entries[split..] {
            let dr = u32::from(entry_color.r - color.r);

            if matches!(best, Some((d, _)) if dr * dr > d) {
                break;
            }
            let distance = color.distance_squared(*entry_color);

            if is_better(distance, *entry_char, best) {
                best = Some((distance, *entry_char));
            }
        }
        // red values below the target
        for (entry_color, entry_char) in self.entries[..split].iter().rev() {
            let dr = u32::from(color.r - entry_color.r);

            if matches!(best, Some((d, _)) if dr * dr > d) {
                break;
            }
            let distance = color.distance_squared(*entry_color);

            if is_better(distance, *entry_char, best) {
                best = Some((distance, *entry_char));
            }
        }
        best.map_or(' ', |(_, c)| c)
    }

    fn name(&self) -> &'static str {
        "red axis scan"
    }
}

#[cfg(test)]
mod tests {
    use textpix_core::color::Rgb;

    use crate::matcher::{LinearScan, NearestMatcher, RedAxisScan};

    fn sample_entries() -> Vec<(Rgb, char)> {
        vec![
            (Rgb::new(10, 10, 10), 'a'),
            (Rgb::new(20, 10, 10), 'b'),
            (Rgb::new(200, 200, 200), 'c'),
            (Rgb::new(15, 100, 10), 'd'),
        ]
    }

    #[test]
    fn test_linear_nearest() {
        let matcher = LinearScan::from_entries(&sample_entries());

        assert_eq!(matcher.nearest(Rgb::new(11, 10, 10)), 'a');
        assert_eq!(matcher.nearest(Rgb::new(19, 12, 10)), 'b');
        assert_eq!(matcher.nearest(Rgb::new(255, 255, 255)), 'c');
        assert_eq!(matcher.nearest(Rgb::new(15, 90, 10)), 'd');
    }

    #[test]
    fn test_ties_prefer_lower_code() {
        // exactly between 'a' and 'b'
        let target = Rgb::new(15, 10, 10);

        let mut reversed = sample_entries();
        reversed.reverse();

        assert_eq!(LinearScan::from_entries(&sample_entries()).nearest(target), 'a');
        assert_eq!(LinearScan::from_entries(&reversed).nearest(target), 'a');
        assert_eq!(RedAxisScan::from_entries(&sample_entries()).nearest(target), 'a');
        assert_eq!(RedAxisScan::from_entries(&reversed).nearest(target), 'a');
    }

    #[test]
    fn test_red_axis_matches_linear() {
        let entries = sample_entries();
        let linear = LinearScan::from_entries(&entries);
        let red_axis = RedAxisScan::from_entries(&entries);

        for r in (0..=255).step_by(5) {
            for g in (0..=255).step_by(15) {
                for b in (0..=255).step_by(51) {
                    let color = Rgb::new(r, g, b);
                    assert_eq!(linear.nearest(color), red_axis.nearest(color), "{color:?}");
                }
            }
        }
    }
}
