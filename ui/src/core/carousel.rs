//! Index arithmetic for the testimonials strip.
//!
//! The strip renders a *padded* list: `[last, items.., first, second]`. Display
//! position `i` holds logical slide `i - 1`, and the strip is translated by
//! `(current_index + 1) * unit` pixels. Stepping past either end lands on a
//! duplicate; the navigator then snaps to the twin position with animation off
//! and, after [`CAROUSEL_JUMP_DELAY_MS`], moves one more step with animation on.
//! Visually the strip just keeps going in the same direction.
//!
//! The second half of that jump is handed back to the caller as a
//! [`PendingJump`]. The caller owns the timer; [`Carousel::settle`] ignores
//! tickets issued before the latest jump or list swap.

use std::fmt;

/// Delay between the silent snap and the animated corrective step.
pub const CAROUSEL_JUMP_DELAY_MS: u64 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    TooFewItems(usize),
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewItems(n) => write!(f, "carousel needs at least 2 items, got {n}"),
        }
    }
}

impl std::error::Error for CarouselError {}

/// `[items[last], ...items, items[0], items[1]]`.
pub fn build_display_list<T: Clone>(items: &[T]) -> Result<Vec<T>, CarouselError> {
    if items.len() < 2 {
        return Err(CarouselError::TooFewItems(items.len()));
    }
    let mut display = Vec::with_capacity(items.len() + 3);
    display.push(items[items.len() - 1].clone());
    display.extend_from_slice(items);
    display.push(items[0].clone());
    display.push(items[1].clone());
    Ok(display)
}

/// Horizontal step for the current viewport width.
pub fn unit_width_for(viewport_width: f64) -> u32 {
    if viewport_width > 1450.0 {
        696
    } else if viewport_width > 1100.0 {
        496
    } else if viewport_width > 600.0 {
        316
    } else {
        275
    }
}

/// Corrective step scheduled after a wrap-around snap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingJump {
    pub target: usize,
    generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Carousel<T> {
    items: Vec<T>,
    display: Vec<T>,
    current_index: usize,
    animating: bool,
    generation: u64,
}

impl<T: Clone> Carousel<T> {
    pub fn new(items: Vec<T>) -> Result<Self, CarouselError> {
        let display = build_display_list(&items)?;
        Ok(Self {
            items,
            display,
            current_index: 0,
            animating: true,
            generation: 0,
        })
    }

    /// Swap the underlying list (locale change). Position resets to the first
    /// slide and any pending jump is invalidated.
    pub fn replace_items(&mut self, items: Vec<T>) -> Result<(), CarouselError> {
        self.display = build_display_list(&items)?;
        self.items = items;
        self.current_index = 0;
        self.animating = true;
        self.generation += 1;
        Ok(())
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn display_list(&self) -> &[T] {
        &self.display
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Logical slide under the viewport, for the dot indicator.
    pub fn active_item(&self) -> usize {
        self.current_index % self.items.len()
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn next(&mut self) -> Option<PendingJump> {
        self.current_index += 1;
        if self.current_index >= self.items.len() + 1 {
            self.current_index = 0;
            return Some(self.begin_jump(1));
        }
        self.cancel_jump();
        None
    }

    pub fn prev(&mut self) -> Option<PendingJump> {
        if self.current_index == 0 {
            self.current_index = self.items.len();
            return Some(self.begin_jump(self.items.len() - 1));
        }
        self.current_index -= 1;
        self.cancel_jump();
        None
    }

    /// Finish a jump. Returns `false` for stale tickets.
    pub fn settle(&mut self, jump: PendingJump) -> bool {
        if jump.generation != self.generation {
            return false;
        }
        self.current_index = jump.target;
        self.animating = true;
        true
    }

    pub fn offset_px(&self, unit: u32) -> u64 {
        (self.current_index as u64 + 1) * unit as u64
    }

    /// Inline CSS transform for the slide at `display_index`.
    pub fn slide_transform(&self, display_index: usize, unit: u32) -> String {
        let offset = self.offset_px(unit);
        if display_index != self.current_index + 1 {
            format!("translateX(-{offset}px) scale(0.9) rotate(0.2deg)")
        } else {
            format!("translateX(-{offset}px)")
        }
    }

    /// An ordinary step taken mid-jump supersedes the pending ticket.
    fn cancel_jump(&mut self) {
        if !self.animating {
            self.generation += 1;
            self.animating = true;
        }
    }

    fn begin_jump(&mut self, target: usize) -> PendingJump {
        self.animating = false;
        self.generation += 1;
        PendingJump {
            target,
            generation: self.generation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five() -> Carousel<u32> {
        Carousel::new(vec![1, 2, 3, 4, 5]).unwrap()
    }

    #[test]
    fn display_list_is_padded_on_both_ends() {
        let display = build_display_list(&[1, 2, 3, 4, 5]).unwrap();
        assert_eq!(display, vec![5, 1, 2, 3, 4, 5, 1, 2]);
        assert_eq!(display.len(), 5 + 3);
    }

    #[test]
    fn two_items_is_the_minimum() {
        assert_eq!(build_display_list(&[1, 2]).unwrap(), vec![2, 1, 2, 1, 2]);
        assert_eq!(
            build_display_list(&[1]),
            Err(CarouselError::TooFewItems(1))
        );
        assert!(Carousel::<u8>::new(Vec::new()).is_err());
    }

    #[test]
    fn next_past_the_tail_snaps_then_settles_on_one() {
        let mut carousel = five();
        let mut pending = None;
        for _ in 0..carousel.len() + 1 {
            pending = carousel.next();
        }
        assert_eq!(carousel.current_index(), 0);
        assert!(!carousel.is_animating());

        let jump = pending.expect("wrap schedules a corrective jump");
        assert!(carousel.settle(jump));
        assert_eq!(carousel.current_index(), 1);
        assert!(carousel.is_animating());
    }

    #[test]
    fn prev_past_the_head_mirrors_to_the_tail() {
        let mut carousel = five();
        let jump = carousel.prev().expect("wrap");
        assert_eq!(carousel.current_index(), 5);
        assert_eq!(carousel.active_item(), 0);
        assert!(!carousel.is_animating());
        carousel.settle(jump);
        assert_eq!(carousel.current_index(), 4);
    }

    #[test]
    fn ordinary_steps_do_not_jump() {
        let mut carousel = five();
        assert!(carousel.next().is_none());
        assert!(carousel.next().is_none());
        assert!(carousel.prev().is_none());
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn stale_tickets_are_ignored() {
        let mut carousel = five();
        let stale = carousel.prev().unwrap();
        let fresh = carousel.prev();
        assert!(fresh.is_none());
        assert_eq!(carousel.current_index(), 4);
        // A newer jump supersedes the first ticket.
        assert!(carousel.next().is_none());
        let newer = carousel.next().unwrap();
        assert!(!carousel.settle(stale));
        assert!(carousel.settle(newer));
    }

    #[test]
    fn steps_taken_before_a_jump_settles_win() {
        let mut carousel = five();
        let mut pending = None;
        for _ in 0..carousel.len() + 1 {
            pending = carousel.next();
        }
        let jump = pending.expect("wrap");
        assert!(carousel.next().is_none());
        assert!(carousel.is_animating());
        assert!(carousel.next().is_none());

        assert!(!carousel.settle(jump));
        assert_eq!(carousel.current_index(), 2);
        assert!(carousel.is_animating());
    }

    #[test]
    fn replacing_items_resets_position_and_invalidates_jumps() {
        let mut carousel = five();
        let jump = carousel.prev().unwrap();
        carousel.replace_items(vec![10, 20, 30, 40, 50]).unwrap();
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.is_animating());
        assert!(!carousel.settle(jump));
        assert_eq!(carousel.display_list()[0], 50);
    }

    #[test]
    fn offsets_follow_the_breakpoints() {
        assert_eq!(unit_width_for(1920.0), 696);
        assert_eq!(unit_width_for(1450.0), 496);
        assert_eq!(unit_width_for(1100.0), 316);
        assert_eq!(unit_width_for(600.0), 275);
        assert_eq!(unit_width_for(320.0), 275);

        let mut carousel = five();
        assert_eq!(carousel.offset_px(696), 696);
        carousel.next();
        assert_eq!(carousel.offset_px(316), 632);
    }

    #[test]
    fn only_the_current_slide_is_full_size() {
        let carousel = five();
        assert_eq!(carousel.slide_transform(1, 275), "translateX(-275px)");
        assert!(carousel.slide_transform(2, 275).contains("scale(0.9)"));
    }
}
