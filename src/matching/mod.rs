pub mod glyph;
pub mod rounding;

use std::collections::{BTreeSet, HashMap};

use glyph::glyph_density;
use rounding::RoundingPolicy;

/// The editable palette and the brightness levels derived from it.
///
/// Glyph densities are memoized for the lifetime of the matcher, so removing
/// and re-adding a char never re-rasterizes it. The normalized level table is
/// rebuilt lazily on the first lookup after the palette changed.
#[derive(Debug, Clone)]
pub struct CharMatcher {
    chars: BTreeSet<char>,
    densities: HashMap<char, f64>,
    levels: Vec<(f64, char)>,
    stale: bool,
    rounding: RoundingPolicy,
}

impl CharMatcher {
    pub fn new(charset: impl IntoIterator<Item = char>) -> Self {
        let mut matcher = Self {
            chars: BTreeSet::new(),
            densities: HashMap::new(),
            levels: Vec::new(),
            stale: true,
            rounding: RoundingPolicy::default(),
        };
        for c in charset {
            matcher.add_char(c);
        }
        matcher
    }

    pub fn add_char(&mut self, c: char) {
        self.densities.entry(c).or_insert_with(|| glyph_density(c));
        if self.chars.insert(c) {
            self.stale = true;
        }
    }

    pub fn remove_char(&mut self, c: char) {
        if self.chars.remove(&c) {
            self.stale = true;
        }
    }

    /// Palette in ascending order.
    pub fn charset(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn rounding(&self) -> RoundingPolicy {
        self.rounding
    }

    pub fn set_rounding(&mut self, policy: RoundingPolicy) {
        self.rounding = policy;
    }

    /// Normalized `(brightness, char)` levels, sorted and unique per brightness.
    pub fn levels(&mut self) -> &[(f64, char)] {
        if self.stale {
            self.rebuild_levels();
        }
        &self.levels
    }

    pub fn char_for_brightness(&mut self, brightness: f64) -> Option<char> {
        let policy = self.rounding;
        policy.pick(brightness, self.levels())
    }

    fn rebuild_levels(&mut self) {
        let (min, max) = self
            .chars
            .iter()
            .map(|c| self.densities[c])
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), d| {
                (lo.min(d), hi.max(d))
            });
        let range = max - min;

        let mut levels: Vec<(f64, char)> = self
            .chars
            .iter()
            .map(|&c| {
                let normalized = if range > 0.0 {
                    (self.densities[&c] - min) / range
                } else {
                    0.0
                };
                (normalized, c)
            })
            .collect();
        // Stable sort over an already char-ordered list keeps the smallest
        // char first within equal brightness.
        levels.sort_by(|a, b| a.0.total_cmp(&b.0));
        levels.dedup_by(|later, earlier| later.0 == earlier.0);

        tracing::debug!(
            palette = self.chars.len(),
            levels = levels.len(),
            "rebuilt brightness levels"
        );
        self.levels = levels;
        self.stale = false;
    }

    #[cfg(test)]
    fn memoized(&self) -> usize {
        self.densities.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits() -> CharMatcher {
        CharMatcher::new('0'..='9')
    }

    #[test]
    fn charset_is_sorted_and_deduplicated() {
        let m = CharMatcher::new(['b', 'a', 'c', 'a']);
        assert_eq!(m.charset().collect::<String>(), "abc");
        assert_eq!(m.len(), 3);
    }

    #[test]
    fn levels_span_zero_to_one() {
        let mut m = CharMatcher::new([' ', '.', '#']);
        let levels = m.levels().to_vec();
        assert_eq!(levels.first(), Some(&(0.0, ' ')));
        assert_eq!(levels.last(), Some(&(1.0, '#')));
        assert!(levels.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn equal_brightness_keeps_smallest_char() {
        // '(' and ')' are mirror images with equal density.
        let mut m = CharMatcher::new([' ', ')', '(', '#']);
        let chars: String = m.levels().iter().map(|&(_, c)| c).collect();
        assert!(chars.contains('('));
        assert!(!chars.contains(')'));
    }

    #[test]
    fn uniform_palette_normalizes_to_zero() {
        let mut m = CharMatcher::new(['(', ')']);
        assert_eq!(m.levels(), &[(0.0, '(')]);
        assert_eq!(m.char_for_brightness(0.9), Some('('));
    }

    #[test]
    fn brightest_cell_maps_to_densest_glyph() {
        let mut m = CharMatcher::new([' ', '.', '#']);
        assert_eq!(m.char_for_brightness(0.0), Some(' '));
        assert_eq!(m.char_for_brightness(1.0), Some('#'));
        m.set_rounding(RoundingPolicy::Up);
        assert_eq!(m.char_for_brightness(0.01), Some('.'));
        m.set_rounding(RoundingPolicy::Down);
        assert_eq!(m.char_for_brightness(0.99), Some('.'));
    }

    #[test]
    fn palette_edits_invalidate_levels() {
        let mut m = CharMatcher::new([' ', '#']);
        assert_eq!(m.char_for_brightness(1.0), Some('#'));
        m.add_char('@');
        m.remove_char('#');
        assert_eq!(m.char_for_brightness(1.0), Some('@'));
    }

    #[test]
    fn unchanged_palette_keeps_levels() {
        let mut m = CharMatcher::new([' ', '.', '#']);
        m.levels();
        assert!(!m.stale);
        m.add_char('#');
        m.remove_char('@');
        m.set_rounding(RoundingPolicy::Up);
        assert!(!m.stale);
        m.add_char('@');
        assert!(m.stale);
        m.levels();
        assert!(!m.stale);
    }

    #[test]
    fn densities_survive_removal() {
        let mut m = digits();
        assert_eq!(m.memoized(), 10);
        m.remove_char('5');
        m.add_char('5');
        m.add_char('x');
        assert_eq!(m.memoized(), 11);
        assert_eq!(m.len(), 11);
    }

    #[test]
    fn empty_palette_matches_nothing() {
        let mut m = CharMatcher::new(std::iter::empty());
        assert!(m.is_empty());
        assert_eq!(m.char_for_brightness(0.5), None);
    }
}
