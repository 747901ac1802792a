//! Readability annotations
//!
//! [`AnnotationHost`] owns the scored ranges for whatever is on screen and
//! rebuilds them from scratch on every view update. [`ScoreStyles`] maps a
//! normalized score to one of eleven host-supplied styles.

use log::debug;

use crate::config::ReadabilitySettings;
use crate::core::normalize::SCORE_MAX;
use crate::core::pipeline::{self, Region, ScoredRange};

/// Number of distinct score styles (scores `0..=10`)
pub const STYLE_COUNT: usize = SCORE_MAX as usize + 1;

/// One style per normalized score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreStyles<S> {
    styles: [S; STYLE_COUNT],
}

impl<S> ScoreStyles<S> {
    pub fn new(styles: [S; STYLE_COUNT]) -> Self {
        Self { styles }
    }

    /// Style for `score`; anything above the top score uses the last style
    pub fn style_for(&self, score: u8) -> &S {
        &self.styles[usize::from(score).min(STYLE_COUNT - 1)]
    }

    /// Pair every range tracked by `host` with its style
    pub fn decorations<'a>(
        &'a self,
        host: &'a AnnotationHost,
    ) -> impl Iterator<Item = (usize, usize, &'a S)> + 'a {
        host.ranges()
            .iter()
            .map(move |range| (range.from, range.to, self.style_for(range.score)))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
enum HostState {
    #[default]
    Disabled,
    Enabled {
        ranges: Vec<ScoredRange>,
    },
}

/// Recomputes readability ranges once per view update
#[derive(Debug, Default)]
pub struct AnnotationHost {
    state: HostState,
    passes: u64,
}

impl AnnotationHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle one view update.
    ///
    /// While enabled, the previous ranges are dropped and rebuilt from the
    /// given regions. While disabled, no work is done and nothing is tracked.
    pub fn update(&mut self, regions: &[Region], settings: &ReadabilitySettings) -> &[ScoredRange] {
        if !settings.enabled {
            if self.is_enabled() {
                debug!("readability annotations disabled");
            }
            self.state = HostState::Disabled;
            return &[];
        }

        if !self.is_enabled() {
            debug!("readability annotations enabled ({})", settings.algorithm);
        }
        self.passes += 1;
        self.state = HostState::Enabled {
            ranges: pipeline::recompute(regions, settings),
        };
        self.ranges()
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self.state, HostState::Enabled { .. })
    }

    /// Ranges from the most recent pass, sorted by `from`
    pub fn ranges(&self) -> &[ScoredRange] {
        match &self.state {
            HostState::Disabled => &[],
            HostState::Enabled { ranges } => ranges,
        }
    }

    /// Score of the range covering `offset`, if any
    pub fn score_at(&self, offset: usize) -> Option<u8> {
        let ranges = self.ranges();
        let idx = ranges.partition_point(|r| r.to <= offset);
        ranges
            .get(idx)
            .filter(|r| r.contains(offset))
            .map(|r| r.score)
    }

    /// Number of recompute passes run since creation
    pub fn passes(&self) -> u64 {
        self.passes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::readability::Algorithm;

    fn settings(enabled: bool) -> ReadabilitySettings {
        ReadabilitySettings {
            enabled,
            algorithm: Algorithm::DaleChall,
        }
    }

    fn regions() -> Vec<Region> {
        vec![Region::new("One sentence. Two sentences here.", 10)]
    }

    #[test]
    fn test_starts_disabled() {
        let host = AnnotationHost::new();
        assert!(!host.is_enabled());
        assert!(host.ranges().is_empty());
        assert_eq!(host.passes(), 0);
    }

    #[test]
    fn test_enable_then_disable() {
        let mut host = AnnotationHost::new();
        assert_eq!(host.update(&regions(), &settings(true)).len(), 2);
        assert!(host.is_enabled());

        assert!(host.update(&regions(), &settings(false)).is_empty());
        assert!(!host.is_enabled());
        assert!(host.ranges().is_empty());
    }

    #[test]
    fn test_disabled_updates_do_no_work() {
        let mut host = AnnotationHost::new();
        host.update(&regions(), &settings(false));
        host.update(&regions(), &settings(false));
        assert_eq!(host.passes(), 0);
    }

    #[test]
    fn test_each_update_replaces_ranges() {
        let mut host = AnnotationHost::new();
        host.update(&regions(), &settings(true));
        let moved = vec![Region::new("Only one now.", 500)];
        let ranges = host.update(&moved, &settings(true));
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].from, 500);
        assert_eq!(host.passes(), 2);
    }

    #[test]
    fn test_score_at() {
        let mut host = AnnotationHost::new();
        host.update(&regions(), &settings(true));
        // "One sentence." spans 10..23
        assert!(host.score_at(10).is_some());
        assert!(host.score_at(22).is_some());
        assert_eq!(host.score_at(23), None);
        assert_eq!(host.score_at(5), None);
        assert!(host.score_at(24).is_some());
    }

    #[test]
    fn test_style_lookup_saturates() {
        let styles = ScoreStyles::new([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(*styles.style_for(0), 0);
        assert_eq!(*styles.style_for(10), 10);
        assert_eq!(*styles.style_for(200), 10);
    }

    #[test]
    fn test_decorations_follow_ranges() {
        let styles = ScoreStyles::new(["s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10"]);
        let mut host = AnnotationHost::new();
        host.update(&regions(), &settings(true));
        let decorations: Vec<_> = styles.decorations(&host).collect();
        assert_eq!(decorations.len(), 2);
        assert_eq!((decorations[0].0, decorations[0].1), (10, 23));
    }
}
