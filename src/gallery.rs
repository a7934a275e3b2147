//! Selection state shared by the image carousel and its full-screen viewer.
//!
//! The hosting page hands a fixed sequence of image paths (plus one alt-text
//! label) to [`GalleryState::new`]; from then on the carousel, the dot
//! indicators, and the overlay all read and mutate the same selection through
//! the operations below. Navigation is circular and total: `next`/`previous`
//! re-normalize the index with modulo arithmetic, so the selection can never
//! leave `[0, len)` while the sequence is non-empty.

/// Presentation-size hint supplied by the hosting page. Affects layout
/// classes only, never navigation behavior. Mobile screenshots read better
/// narrow, desktop captures full width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GallerySize {
    Small,
    Medium,
    #[default]
    Large,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryState {
    images: Vec<String>,
    alt: String,
    index: usize,
    overlay_open: bool,
}

impl GalleryState {
    pub fn new(images: Vec<String>, alt: String) -> Self {
        Self {
            images,
            alt,
            index: 0,
            overlay_open: false,
        }
    }

    /// Advance to the next image, wrapping from the last back to the first.
    /// Does nothing for sequences of one image or fewer.
    pub fn next(&mut self) {
        if self.has_navigation() {
            self.index = (self.index + 1) % self.images.len();
        }
    }

    /// Step back to the previous image, wrapping from the first to the last.
    /// Does nothing for sequences of one image or fewer.
    pub fn previous(&mut self) {
        if self.has_navigation() {
            // adding len first keeps the intermediate value non-negative
            self.index = (self.index + self.images.len() - 1) % self.images.len();
        }
    }

    /// Jump directly to `index`. Used by the dot indicators, which are
    /// generated from the same sequence; anything out of range is a caller
    /// bug and is ignored rather than corrupting the selection.
    pub fn select(&mut self, index: usize) {
        if index < self.images.len() {
            self.index = index;
        }
    }

    pub fn open_overlay(&mut self) {
        self.overlay_open = true;
    }

    pub fn close_overlay(&mut self) {
        self.overlay_open = false;
    }

    pub fn overlay_open(&self) -> bool {
        self.overlay_open
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Whether prev/next/dots make sense at all. A single image has nowhere
    /// to navigate to, so the controls are not rendered for it.
    pub fn has_navigation(&self) -> bool {
        self.images.len() > 1
    }

    pub fn current(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Alt text for the selected image, e.g. "Sistema de ventas - Imagen 3".
    pub fn current_alt(&self) -> String {
        format!("{} - Imagen {}", self.alt, self.index + 1)
    }

    /// One-based "current / total" caption shown under the carousel and at
    /// the bottom of the overlay.
    pub fn position_caption(&self) -> String {
        format!("{} / {}", self.index + 1, self.images.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery(n: usize) -> GalleryState {
        let images = (0..n).map(|i| format!("/img/{i}.png")).collect();
        GalleryState::new(images, "Proyecto".to_string())
    }

    #[test]
    fn next_cycles_back_to_start() {
        for n in 1..=5 {
            let mut g = gallery(n);
            g.select(n - 1);
            let start = g.index();
            for _ in 0..n {
                g.next();
            }
            assert_eq!(g.index(), start, "cycle of length {n} should close");
        }
    }

    #[test]
    fn previous_then_next_restores_index() {
        for start in 0..3 {
            let mut g = gallery(3);
            g.select(start);
            g.previous();
            g.next();
            assert_eq!(g.index(), start);
            g.next();
            g.previous();
            assert_eq!(g.index(), start);
        }
    }

    #[test]
    fn three_image_wraparound() {
        let mut g = GalleryState::new(
            vec!["a.png".into(), "b.png".into(), "c.png".into()],
            "Demo".to_string(),
        );
        assert_eq!(g.current(), Some("a.png"));
        g.next();
        assert_eq!(g.current(), Some("b.png"));
        g.next();
        assert_eq!(g.current(), Some("c.png"));
        g.next();
        assert_eq!(g.current(), Some("a.png"));
        g.previous();
        assert_eq!(g.current(), Some("c.png"));
    }

    #[test]
    fn empty_sequence_renders_nothing() {
        let mut g = gallery(0);
        assert!(g.is_empty());
        assert!(!g.has_navigation());
        assert_eq!(g.current(), None);
        g.next();
        g.previous();
        g.select(0);
        assert_eq!(g.index(), 0);
    }

    #[test]
    fn single_image_navigation_is_inert() {
        let mut g = gallery(1);
        assert!(!g.has_navigation());
        g.next();
        assert_eq!(g.index(), 0);
        g.previous();
        assert_eq!(g.index(), 0);
    }

    #[test]
    fn select_sets_index_and_caption() {
        let mut g = gallery(3);
        g.select(2);
        assert_eq!(g.index(), 2);
        assert_eq!(g.position_caption(), "3 / 3");
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut g = gallery(3);
        g.select(1);
        g.select(7);
        assert_eq!(g.index(), 1);
        assert!(g.current().is_some());
    }

    #[test]
    fn overlay_opens_and_closes_around_navigation() {
        let mut g = gallery(3);
        assert!(!g.overlay_open());
        g.open_overlay();
        assert!(g.overlay_open());
        // navigating while open moves the shared selection only
        g.next();
        assert!(g.overlay_open());
        assert_eq!(g.index(), 1);
        g.close_overlay();
        assert!(!g.overlay_open());
        // re-enterable; selection survives the round trip
        g.open_overlay();
        assert!(g.overlay_open());
        assert_eq!(g.index(), 1);
    }

    #[test]
    fn current_alt_is_one_based() {
        let mut g = gallery(2);
        g.next();
        assert_eq!(g.current_alt(), "Proyecto - Imagen 2");
    }
}
