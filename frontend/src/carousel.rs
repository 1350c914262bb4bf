//! Shared active-index selector for the page's carousels.
//!
//! Every carousel on the site (feature cards, tool showcase) cycles one
//! highlighted item over a fixed list, driven by wheel ticks, touch swipes,
//! arrow keys, raw scroll position, or a direct click on a control. All of
//! those inputs converge here: a single state machine owns the active index
//! and a cooldown flag so that rapid continuous input cannot skip or jitter
//! through items faster than the visible transition completes.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Horizontal distance (logical px) a touch must travel to count as a swipe.
pub const MIN_SWIPE_DISTANCE: f64 = 50.0;

const STEP_COOLDOWN_MS: u32 = 500;
const SCROLL_COOLDOWN_MS: u32 = 150;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Previous,
    Next,
}

/// The continuous-input strategy a carousel uses, fixed at construction.
///
/// `Stepped` accepts relative moves (wheel ticks, swipes, arrow keys);
/// `ScrollMapped` derives the index from absolute scroll position inside a
/// section sized at one viewport height per item. A single instance never
/// accepts both, which keeps a scroll-driven index change from feeding back
/// into a programmatic scroll and re-triggering itself.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputMode {
    Stepped,
    ScrollMapped,
}

#[derive(Clone, PartialEq, Debug)]
pub enum CarouselError {
    InvalidConfiguration,
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarouselError::InvalidConfiguration => {
                write!(f, "carousel requires at least one item")
            }
            CarouselError::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for {len} items")
            }
        }
    }
}

impl std::error::Error for CarouselError {}

/// Pure selector state: one active index over `item_count` items plus the
/// cooldown flag. Free of any DOM or timer concern so it can be unit tested;
/// [`UseCarouselHandle`] wires it to real timers and re-rendering.
#[derive(Clone, PartialEq, Debug)]
pub struct Carousel {
    item_count: usize,
    active: usize,
    transitioning: bool,
    mode: InputMode,
    cooldown_ms: u32,
}

impl Carousel {
    pub fn new(item_count: usize, mode: InputMode) -> Result<Self, CarouselError> {
        if item_count == 0 {
            return Err(CarouselError::InvalidConfiguration);
        }
        let cooldown_ms = match mode {
            InputMode::Stepped => STEP_COOLDOWN_MS,
            InputMode::ScrollMapped => SCROLL_COOLDOWN_MS,
        };
        Ok(Self {
            item_count,
            active: 0,
            transitioning: false,
            mode,
            cooldown_ms,
        })
    }

    pub fn with_cooldown(mut self, cooldown_ms: u32) -> Self {
        self.cooldown_ms = cooldown_ms;
        self
    }

    pub fn current_index(&self) -> usize {
        self.active
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn cooldown_ms(&self) -> u32 {
        self.cooldown_ms
    }

    /// Relative move from wheel, swipe, or keyboard input. Clamps at the
    /// ends, and drops the request entirely while a transition is still
    /// cooling down so a fast wheel gesture advances at most one item per
    /// animation cycle. Returns the new index when the move was accepted.
    pub fn request_step(&mut self, direction: Direction) -> Option<usize> {
        if self.mode != InputMode::Stepped || self.transitioning {
            return None;
        }
        let candidate = match direction {
            Direction::Next => (self.active + 1).min(self.item_count - 1),
            Direction::Previous => self.active.saturating_sub(1),
        };
        if candidate == self.active {
            return None;
        }
        self.active = candidate;
        self.transitioning = true;
        Some(candidate)
    }

    /// Maps an absolute scroll offset into the owning section to an index.
    /// The section is laid out at one viewport height per item, so the item
    /// under the viewport is `offset / (height / item_count)`. Offsets above
    /// the section (negative) are ignored, as are updates during cooldown.
    pub fn request_scroll_sync(&mut self, offset: f64, section_height: f64) -> Option<usize> {
        if self.mode != InputMode::ScrollMapped || self.transitioning {
            return None;
        }
        if offset < 0.0 || section_height <= 0.0 {
            return None;
        }
        let per_item = section_height / self.item_count as f64;
        let candidate = ((offset / per_item).floor() as usize).min(self.item_count - 1);
        if candidate == self.active {
            return None;
        }
        self.active = candidate;
        self.transitioning = true;
        Some(candidate)
    }

    /// Direct selection from a dot, tab, or card click. Unlike stepping this
    /// never clamps: an out-of-range index is a caller bug and is surfaced.
    /// Direct user intent also overrides any in-flight cooldown.
    pub fn select_direct(&mut self, index: usize) -> Result<usize, CarouselError> {
        if index >= self.item_count {
            return Err(CarouselError::IndexOutOfRange {
                index,
                len: self.item_count,
            });
        }
        self.active = index;
        self.transitioning = true;
        Ok(index)
    }

    /// Called when the cooldown timer fires.
    pub fn finish_transition(&mut self) {
        self.transitioning = false;
    }
}

/// Resolves a completed horizontal touch gesture into a step direction.
/// Movements shorter than [`MIN_SWIPE_DISTANCE`] are taps, not swipes.
pub fn resolve_swipe(start_x: f64, end_x: f64) -> Option<Direction> {
    let distance = start_x - end_x;
    if distance.abs() < MIN_SWIPE_DISTANCE {
        return None;
    }
    if distance > 0.0 {
        Some(Direction::Next)
    } else {
        Some(Direction::Previous)
    }
}

/// Hook binding a [`Carousel`] to the component tree.
///
/// The authoritative state lives in an `Rc<RefCell<_>>` so that event
/// closures always observe the current index and cooldown flag, not the
/// snapshot of the render they were created in; a `use_state` mirror drives
/// re-rendering. Each accepted change re-arms a one-shot timeout whose handle
/// replaces (and thereby cancels) the previous one, and which is dropped with
/// the component on unmount.
#[hook]
pub fn use_carousel(item_count: usize, mode: InputMode) -> UseCarouselHandle {
    let inner = use_mut_ref(|| {
        Carousel::new(item_count, mode).expect("carousel requires at least one item")
    });
    let snapshot = use_state(|| inner.borrow().clone());
    let pending = use_mut_ref(|| None::<Timeout>);
    let touch_start = use_mut_ref(|| None::<f64>);

    UseCarouselHandle {
        inner,
        snapshot,
        pending,
        touch_start,
    }
}

#[derive(Clone)]
pub struct UseCarouselHandle {
    inner: Rc<RefCell<Carousel>>,
    snapshot: UseStateHandle<Carousel>,
    pending: Rc<RefCell<Option<Timeout>>>,
    touch_start: Rc<RefCell<Option<f64>>>,
}

impl PartialEq for UseCarouselHandle {
    fn eq(&self, other: &Self) -> bool {
        *self.snapshot == *other.snapshot
    }
}

impl UseCarouselHandle {
    pub fn index(&self) -> usize {
        self.snapshot.current_index()
    }

    pub fn is_transitioning(&self) -> bool {
        self.snapshot.is_transitioning()
    }

    pub fn item_count(&self) -> usize {
        self.snapshot.item_count()
    }

    pub fn step(&self, direction: Direction) {
        let accepted = self.inner.borrow_mut().request_step(direction).is_some();
        if accepted {
            self.publish();
        }
    }

    pub fn scroll_sync(&self, offset: f64, section_height: f64) {
        let accepted = self
            .inner
            .borrow_mut()
            .request_scroll_sync(offset, section_height)
            .is_some();
        if accepted {
            self.publish();
        }
    }

    pub fn select(&self, index: usize) {
        let result = self.inner.borrow_mut().select_direct(index);
        match result {
            Ok(_) => self.publish(),
            Err(err) => gloo_console::error!(format!("carousel: {err}")),
        }
    }

    pub fn on_touch_start(&self, x: f64) {
        *self.touch_start.borrow_mut() = Some(x);
    }

    pub fn on_touch_end(&self, x: f64) {
        let start = self.touch_start.borrow_mut().take();
        if let Some(start_x) = start {
            if let Some(direction) = resolve_swipe(start_x, x) {
                self.step(direction);
            }
        }
    }

    fn publish(&self) {
        self.snapshot.set(self.inner.borrow().clone());

        let cooldown = self.inner.borrow().cooldown_ms();
        let inner = self.inner.clone();
        let snapshot = self.snapshot.clone();
        let timer = Timeout::new(cooldown, move || {
            inner.borrow_mut().finish_transition();
            snapshot.set(inner.borrow().clone());
        });
        // Replacing the handle drops the previous timeout, so a direct
        // selection during a cooldown starts a fresh window instead of being
        // cut short by the old timer.
        *self.pending.borrow_mut() = Some(timer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stepped(n: usize) -> Carousel {
        Carousel::new(n, InputMode::Stepped).unwrap()
    }

    fn scroll_mapped(n: usize) -> Carousel {
        Carousel::new(n, InputMode::ScrollMapped).unwrap()
    }

    #[test]
    fn starts_at_index_zero() {
        for n in 1..=8 {
            assert_eq!(stepped(n).current_index(), 0);
            assert!(!stepped(n).is_transitioning());
        }
    }

    #[test]
    fn zero_items_is_an_invalid_configuration() {
        assert_eq!(
            Carousel::new(0, InputMode::Stepped),
            Err(CarouselError::InvalidConfiguration)
        );
    }

    #[test]
    fn steps_clamp_at_both_ends() {
        let mut c = stepped(3);
        assert_eq!(c.request_step(Direction::Previous), None);
        assert_eq!(c.current_index(), 0);

        c.finish_transition();
        assert_eq!(c.request_step(Direction::Next), Some(1));
        c.finish_transition();
        assert_eq!(c.request_step(Direction::Next), Some(2));
        c.finish_transition();
        assert_eq!(c.request_step(Direction::Next), None);
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn steps_move_at_most_one_item_per_accepted_call() {
        let mut c = stepped(5);
        for _ in 0..20 {
            let before = c.current_index();
            if c.request_step(Direction::Next).is_some() {
                assert_eq!(c.current_index(), before + 1);
            }
            c.finish_transition();
            assert!(c.current_index() < 5);
        }
    }

    #[test]
    fn second_step_during_cooldown_is_dropped() {
        let mut c = stepped(5);
        assert_eq!(c.request_step(Direction::Next), Some(1));
        // cooldown has not elapsed yet
        assert_eq!(c.request_step(Direction::Next), None);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn scroll_sync_is_dropped_during_cooldown() {
        let mut c = scroll_mapped(4);
        assert_eq!(c.request_scroll_sync(1500.0, 4000.0), Some(1));
        assert_eq!(c.request_scroll_sync(3500.0, 4000.0), None);
        assert_eq!(c.current_index(), 1);

        c.finish_transition();
        assert_eq!(c.request_scroll_sync(3500.0, 4000.0), Some(3));
    }

    #[test]
    fn scroll_sync_clamps_past_the_section_end() {
        let mut c = scroll_mapped(4);
        assert_eq!(c.request_scroll_sync(9999.0, 4000.0), Some(3));
    }

    #[test]
    fn scroll_sync_ignores_offsets_above_the_section() {
        let mut c = scroll_mapped(4);
        assert_eq!(c.request_scroll_sync(-250.0, 4000.0), None);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn modes_are_mutually_exclusive() {
        let mut c = stepped(4);
        assert_eq!(c.request_scroll_sync(3500.0, 4000.0), None);

        let mut c = scroll_mapped(4);
        assert_eq!(c.request_step(Direction::Next), None);
    }

    #[test]
    fn direct_selection_overrides_an_active_cooldown() {
        let mut c = stepped(5);
        assert_eq!(c.request_step(Direction::Next), Some(1));
        assert!(c.is_transitioning());
        assert_eq!(c.select_direct(4), Ok(4));
        assert_eq!(c.current_index(), 4);
        assert!(c.is_transitioning());
    }

    #[test]
    fn direct_selection_out_of_range_fails_without_clamping() {
        let mut c = stepped(3);
        assert_eq!(
            c.select_direct(3),
            Err(CarouselError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn short_touch_movements_are_not_swipes() {
        assert_eq!(resolve_swipe(100.0, 60.0), None);
        assert_eq!(resolve_swipe(100.0, 151.0), Some(Direction::Previous));
    }

    #[test]
    fn leftward_swipe_advances() {
        // finger moved 60px left: next item
        assert_eq!(resolve_swipe(200.0, 140.0), Some(Direction::Next));
        let mut c = stepped(3);
        if let Some(direction) = resolve_swipe(200.0, 140.0) {
            assert_eq!(c.request_step(direction), Some(1));
        }
    }

    #[test]
    fn cooldown_defaults_follow_the_input_mode() {
        assert_eq!(stepped(2).cooldown_ms(), 500);
        assert_eq!(scroll_mapped(2).cooldown_ms(), 150);
        assert_eq!(stepped(2).with_cooldown(800).cooldown_ms(), 800);
    }
}
