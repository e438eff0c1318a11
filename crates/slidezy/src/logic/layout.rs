//! Panel sequence arithmetic: clone padding, index bounds and page mapping.
//!
//! # Design
//! - Indices address the padded track (clones included); "real" indices
//!   address the author-supplied panels only.
//! - Nothing here touches the DOM so every rule can be checked natively.

/// Where a panel in the padded track comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelSource {
    /// Deep copy of the real panel at this position.
    Clone(usize),
    /// The real panel at this position, moved into the track.
    Real(usize),
}

impl PanelSource {
    /// Real panel this entry mirrors or is.
    #[must_use]
    pub const fn source(self) -> usize {
        match self {
            Self::Clone(idx) | Self::Real(idx) => idx,
        }
    }
}

/// Shape of the track for a given panel count and option set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackLayout {
    real: usize,
    items: usize,
    looped: bool,
}

impl TrackLayout {
    /// Describe a track of `real` panels showing `items` at a time.
    ///
    /// `items` below one is treated as one; callers validate options first.
    #[must_use]
    pub const fn new(real: usize, items: usize, looped: bool) -> Self {
        let items = if items == 0 { 1 } else { items };
        Self {
            real,
            items,
            looped,
        }
    }

    /// Number of author-supplied panels.
    #[must_use]
    pub const fn real_count(&self) -> usize {
        self.real
    }

    /// Panels visible at once.
    #[must_use]
    pub const fn items(&self) -> usize {
        self.items
    }

    /// Whether the track wraps around.
    #[must_use]
    pub const fn is_looped(&self) -> bool {
        self.looped
    }

    /// Clones added on each side of the real panels.
    #[must_use]
    pub const fn padding(&self) -> usize {
        if self.looped && self.real > 0 {
            self.items
        } else {
            0
        }
    }

    /// Length of the track including clones.
    #[must_use]
    pub const fn padded_len(&self) -> usize {
        self.real + 2 * self.padding()
    }

    /// Largest index that still fills the viewport.
    #[must_use]
    pub const fn max_index(&self) -> usize {
        self.padded_len().saturating_sub(self.items)
    }

    /// Index shown right after construction: the first real panel.
    #[must_use]
    pub const fn start_index(&self) -> usize {
        self.padding()
    }

    /// Number of paging dots.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.real.div_ceil(self.items)
    }

    /// Padded track order: head clones, real panels, tail clones.
    ///
    /// Head clones mirror the last `items` real panels and tail clones the
    /// first `items`; when `items` exceeds the real count the sources cycle.
    pub fn panels(&self) -> impl Iterator<Item = PanelSource> + '_ {
        let padding = self.padding();
        let head = (0..padding).map(move |pos| {
            PanelSource::Clone((pos + self.real - padding % self.real.max(1)) % self.real.max(1))
        });
        let real = (0..self.real).map(PanelSource::Real);
        let tail = (0..padding).map(move |pos| PanelSource::Clone(pos % self.real.max(1)));
        head.chain(real).chain(tail)
    }

    /// Clamp `current + step` into the physical track bounds.
    #[must_use]
    pub fn clamp_step(&self, current: usize, step: isize) -> usize {
        current.saturating_add_signed(step).min(self.max_index())
    }

    /// Track index a paging dot jumps to.
    #[must_use]
    pub fn page_target(&self, page: usize) -> usize {
        page.saturating_mul(self.items)
            .saturating_add(self.padding())
            .min(self.max_index())
    }

    /// Translate a track index into real-panel numbering.
    #[must_use]
    pub fn real_index(&self, index: usize) -> usize {
        if self.padding() == 0 {
            return index;
        }
        let shifted = index as i128 - self.items as i128;
        // real > 0 whenever padding is non-zero
        shifted.rem_euclid(self.real as i128) as usize
    }

    /// Page containing `index`.
    ///
    /// Otherwise `floor(real_index / items)`, except that a non-looping track
    /// parked at its last reachable index reports the last page: dot jumps
    /// onto a partial final page are clamped to `max_index`, and the clicked
    /// dot must still light up.
    #[must_use]
    pub fn page_of(&self, index: usize) -> usize {
        let last = self.page_count().saturating_sub(1);
        if !self.looped && index >= self.max_index() {
            return last;
        }
        (self.real_index(index) / self.items).min(last)
    }

    /// Index to snap to once a looping move has landed on a clone.
    ///
    /// Returns `None` when the index already shows real panels (or the track
    /// does not loop).
    #[must_use]
    pub const fn wrap_correction(&self, index: usize) -> Option<usize> {
        if self.padding() == 0 {
            return None;
        }
        if index < self.items {
            Some(index + self.real)
        } else if index > self.real {
            Some(index - self.real)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources(layout: &TrackLayout) -> Vec<PanelSource> {
        layout.panels().collect()
    }

    #[test]
    fn flat_track_has_no_clones() {
        let layout = TrackLayout::new(5, 1, false);
        assert_eq!(layout.padded_len(), 5);
        assert_eq!(layout.max_index(), 4);
        assert_eq!(layout.start_index(), 0);
        assert!(
            sources(&layout)
                .iter()
                .all(|source| matches!(source, PanelSource::Real(_)))
        );
    }

    #[test]
    fn looped_track_pads_both_ends() {
        let layout = TrackLayout::new(6, 2, true);
        assert_eq!(layout.padded_len(), 10);
        assert_eq!(layout.max_index(), 8);
        assert_eq!(layout.start_index(), 2);
        assert_eq!(
            sources(&layout),
            vec![
                PanelSource::Clone(4),
                PanelSource::Clone(5),
                PanelSource::Real(0),
                PanelSource::Real(1),
                PanelSource::Real(2),
                PanelSource::Real(3),
                PanelSource::Real(4),
                PanelSource::Real(5),
                PanelSource::Clone(0),
                PanelSource::Clone(1),
            ]
        );
    }

    #[test]
    fn clone_sources_cycle_when_items_exceed_panels() {
        let layout = TrackLayout::new(2, 3, true);
        assert_eq!(layout.padded_len(), 8);
        let mirrored: Vec<usize> = layout.panels().map(PanelSource::source).collect();
        assert_eq!(mirrored, vec![1, 0, 1, 0, 1, 0, 1, 0]);
        for (index, source) in layout.panels().enumerate() {
            assert_eq!(layout.real_index(index), source.source());
        }
    }

    #[test]
    fn page_targets_land_in_real_window() {
        let looped = TrackLayout::new(9, 3, true);
        assert_eq!(looped.page_count(), 3);
        assert_eq!(looped.page_target(0), 3);
        assert_eq!(looped.page_target(2), 9);

        let flat = TrackLayout::new(9, 3, false);
        assert_eq!(flat.page_target(1), 3);
    }

    #[test]
    fn partial_last_page_is_clamped_and_still_active() {
        let layout = TrackLayout::new(5, 2, false);
        assert_eq!(layout.page_count(), 3);
        assert_eq!(layout.page_target(2), 3);
        assert_eq!(layout.page_of(3), 2);
        assert_eq!(layout.page_of(2), 1);
    }

    #[test]
    fn clamped_end_reports_last_page_over_plain_formula() {
        let layout = TrackLayout::new(6, 4, false);
        assert_eq!(layout.max_index(), 2);
        assert_eq!(layout.page_target(1), 2);
        assert_eq!(layout.page_of(2), 1);
        assert_eq!(layout.page_of(1), 0);
    }

    #[test]
    fn real_index_wraps_clone_positions() {
        let layout = TrackLayout::new(3, 1, true);
        assert_eq!(layout.real_index(0), 2);
        assert_eq!(layout.real_index(1), 0);
        assert_eq!(layout.real_index(4), 0);
        assert_eq!(layout.page_of(0), 2);
    }

    #[test]
    fn wrap_correction_only_fires_on_clones() {
        let layout = TrackLayout::new(3, 1, true);
        assert_eq!(layout.wrap_correction(0), Some(3));
        assert_eq!(layout.wrap_correction(4), Some(1));
        assert_eq!(layout.wrap_correction(2), None);
        assert_eq!(TrackLayout::new(3, 1, false).wrap_correction(0), None);
    }

    #[test]
    fn empty_track_is_inert() {
        let layout = TrackLayout::new(0, 2, true);
        assert_eq!(layout.padded_len(), 0);
        assert_eq!(layout.max_index(), 0);
        assert_eq!(layout.page_count(), 0);
        assert_eq!(layout.clamp_step(0, 3), 0);
        assert_eq!(layout.page_of(0), 0);
        assert_eq!(layout.wrap_correction(0), None);
    }
}
