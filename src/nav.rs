/// Viewports narrower than this use the hide-on-scroll-down policy.
pub const MOBILE_BREAKPOINT: f64 = 768.0;
/// Scrolling down above this offset never hides the nav.
pub const HIDE_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    pub id: &'static str,
    pub label: &'static str,
}

/// Document-relative geometry of one section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Read-only view of the scroll position and page geometry.
pub trait Viewport {
    fn scroll_y(&self) -> f64;
    fn height(&self) -> f64;
    fn width(&self) -> f64;
    /// `None` when no element carries this id.
    fn section_bounds(&self, id: &str) -> Option<SectionBounds>;
}

pub trait SectionScroller {
    /// Smooth-scrolls the element's top to the viewport top.
    /// Returns `false` if there is no such element.
    fn scroll_into_view(&self, id: &str) -> bool;
}

/// Which section sits under the middle of the viewport, and whether the nav
/// should be shown on narrow screens.
#[derive(Debug, Clone)]
pub struct NavTracker {
    sections: &'static [NavSection],
    active: Option<usize>,
    visible: bool,
    last_scroll_y: f64,
    menu_open: bool,
}

impl NavTracker {
    pub fn new(sections: &'static [NavSection]) -> Self {
        Self {
            sections,
            active: if sections.is_empty() { None } else { Some(0) },
            visible: true,
            last_scroll_y: 0.0,
            menu_open: false,
        }
    }

    pub fn sections(&self) -> &'static [NavSection] {
        self.sections
    }

    pub fn active_id(&self) -> Option<&'static str> {
        self.active.map(|i| self.sections[i].id)
    }

    pub fn nav_visible(&self) -> bool {
        self.visible
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Recomputes the active section and nav visibility for the current
    /// scroll position.
    pub fn on_scroll(&mut self, viewport: &impl Viewport) {
        let scroll_y = viewport.scroll_y();

        self.visible = if viewport.width() < MOBILE_BREAKPOINT {
            !(scroll_y > self.last_scroll_y && scroll_y > HIDE_THRESHOLD)
        } else {
            true
        };
        self.last_scroll_y = scroll_y;

        let probe = scroll_y + viewport.height() / 2.0;
        // every match overwrites the previous one, so overlapping sections
        // resolve to the last in declaration order
        for (i, section) in self.sections.iter().enumerate() {
            let Some(bounds) = viewport.section_bounds(section.id) else {
                continue;
            };
            if bounds.contains(probe) {
                self.active = Some(i);
            }
        }
    }

    /// Closes the mobile menu and asks the scroller to bring `id` into view.
    /// A missing element is ignored.
    pub fn scroll_to(&mut self, scroller: &impl SectionScroller, id: &str) {
        if !scroller.scroll_into_view(id) {
            log::debug!("no element for section '{id}'");
        }
        self.close_menu();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    const TWO: &[NavSection] = &[
        NavSection {
            id: "home",
            label: "Home",
        },
        NavSection {
            id: "about",
            label: "About",
        },
    ];

    const THREE: &[NavSection] = &[
        NavSection {
            id: "home",
            label: "Home",
        },
        NavSection {
            id: "about",
            label: "About",
        },
        NavSection {
            id: "contact",
            label: "Contact",
        },
    ];

    struct FakeViewport {
        scroll_y: f64,
        height: f64,
        width: f64,
        bounds: HashMap<&'static str, SectionBounds>,
    }

    impl FakeViewport {
        fn new(height: f64, width: f64, sections: &[(&'static str, f64, f64)]) -> Self {
            Self {
                scroll_y: 0.0,
                height,
                width,
                bounds: sections
                    .iter()
                    .map(|&(id, top, height)| (id, SectionBounds { top, height }))
                    .collect(),
            }
        }

        fn at(&mut self, scroll_y: f64) -> &Self {
            self.scroll_y = scroll_y;
            self
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_y(&self) -> f64 {
            self.scroll_y
        }

        fn height(&self) -> f64 {
            self.height
        }

        fn width(&self) -> f64 {
            self.width
        }

        fn section_bounds(&self, id: &str) -> Option<SectionBounds> {
            self.bounds.get(id).copied()
        }
    }

    #[derive(Default)]
    struct RecordingScroller {
        known: Vec<&'static str>,
        requests: RefCell<Vec<String>>,
    }

    impl SectionScroller for RecordingScroller {
        fn scroll_into_view(&self, id: &str) -> bool {
            self.requests.borrow_mut().push(id.to_string());
            self.known.iter().any(|known| *known == id)
        }
    }

    #[test]
    fn test_initial_state() {
        let tracker = NavTracker::new(TWO);
        assert_eq!(tracker.active_id(), Some("home"));
        assert!(tracker.nav_visible());
        assert!(!tracker.menu_open());

        let empty = NavTracker::new(&[]);
        assert_eq!(empty.active_id(), None);
    }

    #[test]
    fn test_probe_uses_viewport_midpoint() {
        let mut tracker = NavTracker::new(TWO);
        let mut vp = FakeViewport::new(400.0, 1280.0, &[("home", 0.0, 800.0), ("about", 800.0, 600.0)]);

        tracker.on_scroll(vp.at(500.0));
        assert_eq!(tracker.active_id(), Some("home"));

        tracker.on_scroll(vp.at(900.0));
        assert_eq!(tracker.active_id(), Some("about"));
    }

    #[test]
    fn test_interval_is_half_open() {
        let mut tracker = NavTracker::new(TWO);
        let mut vp = FakeViewport::new(400.0, 1280.0, &[("home", 0.0, 800.0), ("about", 800.0, 600.0)]);

        // probe lands exactly on the boundary
        tracker.on_scroll(vp.at(600.0));
        assert_eq!(tracker.active_id(), Some("about"));

        tracker.on_scroll(vp.at(599.0));
        assert_eq!(tracker.active_id(), Some("home"));
    }

    #[test]
    fn test_no_match_keeps_previous_section() {
        let mut tracker = NavTracker::new(TWO);
        let mut vp = FakeViewport::new(400.0, 1280.0, &[("home", 0.0, 800.0), ("about", 800.0, 600.0)]);

        tracker.on_scroll(vp.at(900.0));
        assert_eq!(tracker.active_id(), Some("about"));

        // probe at 2200 is past every section
        tracker.on_scroll(vp.at(2000.0));
        assert_eq!(tracker.active_id(), Some("about"));
    }

    #[test]
    fn test_overlapping_sections_last_match_wins() {
        let mut tracker = NavTracker::new(THREE);
        let mut vp = FakeViewport::new(
            400.0,
            1280.0,
            &[("home", 0.0, 1000.0), ("about", 500.0, 1000.0), ("contact", 2000.0, 500.0)],
        );

        tracker.on_scroll(vp.at(500.0));
        assert_eq!(tracker.active_id(), Some("about"));

        tracker.on_scroll(vp.at(0.0));
        assert_eq!(tracker.active_id(), Some("home"));
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let mut tracker = NavTracker::new(THREE);
        let mut vp = FakeViewport::new(400.0, 1280.0, &[("home", 0.0, 800.0), ("contact", 800.0, 600.0)]);

        tracker.on_scroll(vp.at(900.0));
        assert_eq!(tracker.active_id(), Some("contact"));
    }

    #[test]
    fn test_mobile_hides_on_scroll_down() {
        let mut tracker = NavTracker::new(TWO);
        let mut vp = FakeViewport::new(700.0, 390.0, &[("home", 0.0, 800.0), ("about", 800.0, 600.0)]);

        tracker.on_scroll(vp.at(50.0));
        assert!(tracker.nav_visible());

        tracker.on_scroll(vp.at(160.0));
        assert!(!tracker.nav_visible());

        tracker.on_scroll(vp.at(80.0));
        assert!(tracker.nav_visible());
    }

    #[test]
    fn test_mobile_small_scroll_near_top_stays_visible() {
        let mut tracker = NavTracker::new(TWO);
        let mut vp = FakeViewport::new(700.0, 390.0, &[("home", 0.0, 800.0)]);

        tracker.on_scroll(vp.at(40.0));
        tracker.on_scroll(vp.at(90.0));
        assert!(tracker.nav_visible());

        // same offset twice is not a downward scroll
        tracker.on_scroll(vp.at(300.0));
        assert!(!tracker.nav_visible());
        tracker.on_scroll(vp.at(300.0));
        assert!(tracker.nav_visible());
    }

    #[test]
    fn test_desktop_always_visible() {
        let mut tracker = NavTracker::new(TWO);
        let mut vp = FakeViewport::new(900.0, MOBILE_BREAKPOINT, &[("home", 0.0, 800.0)]);

        tracker.on_scroll(vp.at(50.0));
        tracker.on_scroll(vp.at(600.0));
        assert!(tracker.nav_visible());
    }

    #[test]
    fn test_desktop_scroll_still_records_offset() {
        let mut tracker = NavTracker::new(TWO);
        let mut vp = FakeViewport::new(700.0, 1280.0, &[("home", 0.0, 800.0)]);

        tracker.on_scroll(vp.at(500.0));
        assert!(tracker.nav_visible());

        // window narrowed; 400 is above the last offset seen on desktop
        vp.width = 390.0;
        tracker.on_scroll(vp.at(400.0));
        assert!(tracker.nav_visible());
    }

    #[test]
    fn test_scroll_to_closes_menu() {
        let mut tracker = NavTracker::new(TWO);
        let scroller = RecordingScroller {
            known: vec!["home", "about"],
            ..Default::default()
        };

        tracker.toggle_menu();
        assert!(tracker.menu_open());
        tracker.scroll_to(&scroller, "about");
        assert!(!tracker.menu_open());

        tracker.toggle_menu();
        tracker.scroll_to(&scroller, "nowhere");
        assert!(!tracker.menu_open());

        assert_eq!(*scroller.requests.borrow(), vec!["about", "nowhere"]);
        // scrolling does not move the highlight by itself
        assert_eq!(tracker.active_id(), Some("home"));
    }
}
