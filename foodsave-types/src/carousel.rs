// SPDX-License-Identifier: MIT OR Apache-2.0

//! Navigation state for the step carousel.
//!
//! [`StepCarousel`] owns an immutable, non-empty list of [`Step`]s and the
//! index of the step currently on screen. Navigation saturates at both ends:
//! `next` on the last step and `previous` on the first step are no-ops.
//!
//! The type is UI-independent so the same rules drive the Yew component and
//! the unit tests below.

use std::collections::HashSet;
use std::rc::Rc;

use thiserror::Error;

use crate::step::Step;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("a carousel needs at least one step")]
    Empty,
    #[error("step id {0} appears more than once")]
    DuplicateId(u32),
    #[error("step {id} has an empty {field}")]
    BlankField { id: u32, field: &'static str },
    #[error("step index {index} is out of range for {len} steps")]
    IndexOutOfRange { index: usize, len: usize },
}

/// A navigation request, as dispatched by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    Next,
    Previous,
    GoTo(usize),
}

/// Render model for one indicator dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub index: usize,
    pub selected: bool,
}

impl Indicator {
    /// Human-facing step number (1-based).
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepCarousel {
    steps: Rc<[Step]>,
    current: usize,
}

impl StepCarousel {
    /// Validate `steps` and start on the first one.
    pub fn new(steps: impl Into<Rc<[Step]>>) -> Result<Self, CarouselError> {
        let steps = steps.into();
        if steps.is_empty() {
            return Err(CarouselError::Empty);
        }
        let mut seen = HashSet::with_capacity(steps.len());
        for step in steps.iter() {
            if !seen.insert(step.id) {
                return Err(CarouselError::DuplicateId(step.id.get()));
            }
            if let Some(field) = step.blank_field() {
                return Err(CarouselError::BlankField {
                    id: step.id.get(),
                    field,
                });
            }
        }
        Ok(Self { steps, current: 0 })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Shared handle to the step list, for cheap clones in the UI.
    pub fn shared_steps(&self) -> Rc<[Step]> {
        Rc::clone(&self.steps)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`; construction rejects empty step lists.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The active step. Both the detail panel and the preview panel read this.
    pub fn current(&self) -> &Step {
        &self.steps[self.current]
    }

    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current == self.last_index()
    }

    pub fn previous_disabled(&self) -> bool {
        self.is_first()
    }

    pub fn next_disabled(&self) -> bool {
        self.is_last()
    }

    /// Advance one step. Returns `true` if the index changed.
    pub fn next(&mut self) -> bool {
        if self.current < self.last_index() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Go back one step. Returns `true` if the index changed.
    pub fn previous(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to `index`. Out-of-range indices leave the state untouched.
    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.steps.len() {
            return Err(CarouselError::IndexOutOfRange {
                index,
                len: self.steps.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// Dispatch `action`. Returns `Ok(true)` if the index changed.
    pub fn apply(&mut self, action: CarouselAction) -> Result<bool, CarouselError> {
        match action {
            CarouselAction::Next => Ok(self.next()),
            CarouselAction::Previous => Ok(self.previous()),
            CarouselAction::GoTo(index) => {
                let before = self.current;
                self.go_to(index)?;
                Ok(before != self.current)
            }
        }
    }

    pub fn indicators(&self) -> impl Iterator<Item = Indicator> + '_ {
        (0..self.steps.len()).map(move |index| Indicator {
            index,
            selected: index == self.current,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(n: u32) -> Vec<Step> {
        (1..=n)
            .map(|id| {
                Step::new(id, format!("Step {id}"), format!("Body {id}"), "🔍")
                    .expect("non-zero id")
            })
            .collect()
    }

    fn carousel(n: u32) -> StepCarousel {
        StepCarousel::new(steps(n)).expect("valid steps")
    }

    fn assert_single_selected(c: &StepCarousel) {
        let selected: Vec<usize> = c
            .indicators()
            .filter(|i| i.selected)
            .map(|i| i.index)
            .collect();
        assert_eq!(selected, vec![c.current_index()]);
        assert_eq!(c.indicators().count(), c.len());
    }

    #[test]
    fn starts_at_zero_for_every_length() {
        for n in 1..=8 {
            let c = carousel(n);
            assert_eq!(c.current_index(), 0);
            assert_eq!(c.current().id.get(), 1);
            assert_single_selected(&c);
        }
    }

    #[test]
    fn next_saturates_at_last_step() {
        for n in 1..=8 {
            let mut c = carousel(n);
            for _ in 0..(n as usize + 5) {
                c.next();
                assert!(c.current_index() < c.len());
                assert_single_selected(&c);
            }
            assert_eq!(c.current_index(), n as usize - 1);
            assert!(!c.next(), "next on the last step must be a no-op");
            assert_eq!(c.current_index(), n as usize - 1);
        }
    }

    #[test]
    fn previous_saturates_at_first_step() {
        for n in 1..=8 {
            let mut c = carousel(n);
            c.go_to(n as usize - 1).unwrap();
            for _ in 0..(n as usize + 5) {
                c.previous();
                assert_single_selected(&c);
            }
            assert_eq!(c.current_index(), 0);
            assert!(!c.previous(), "previous on the first step must be a no-op");
            assert_eq!(c.current_index(), 0);
        }
    }

    #[test]
    fn go_to_lands_on_exact_index_from_any_state() {
        let n = 6;
        for start in 0..n {
            for target in 0..n {
                let mut c = carousel(n as u32);
                c.go_to(start).unwrap();
                c.go_to(target).unwrap();
                assert_eq!(c.current_index(), target);
                assert_single_selected(&c);
            }
        }
    }

    #[test]
    fn go_to_out_of_range_keeps_state() {
        let mut c = carousel(3);
        c.next();
        assert_eq!(
            c.go_to(3),
            Err(CarouselError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn disabled_flags_track_the_boundaries() {
        for n in 1..=6usize {
            let mut c = carousel(n as u32);
            for i in 0..n {
                c.go_to(i).unwrap();
                assert_eq!(c.previous_disabled(), i == 0);
                assert_eq!(c.next_disabled(), i == n - 1);
            }
        }
    }

    #[test]
    fn single_step_disables_both_controls() {
        let mut c = carousel(1);
        assert!(c.previous_disabled());
        assert!(c.next_disabled());
        assert!(!c.next());
        assert!(!c.previous());
    }

    #[test]
    fn four_step_walkthrough() {
        let mut c = carousel(4);
        assert_eq!(c.current_index(), 0);

        c.next();
        c.next();
        c.next();
        assert_eq!(c.current_index(), 3);
        assert!(c.next_disabled());
        assert!(!c.previous_disabled());

        c.next();
        assert_eq!(c.current_index(), 3);

        c.go_to(1).unwrap();
        assert_eq!(c.current_index(), 1);
        assert!(!c.next_disabled());
        assert!(!c.previous_disabled());
    }

    #[test]
    fn apply_reports_changes() {
        let mut c = carousel(2);
        assert_eq!(c.apply(CarouselAction::Previous), Ok(false));
        assert_eq!(c.apply(CarouselAction::Next), Ok(true));
        assert_eq!(c.apply(CarouselAction::Next), Ok(false));
        assert_eq!(c.apply(CarouselAction::GoTo(1)), Ok(false));
        assert_eq!(c.apply(CarouselAction::GoTo(0)), Ok(true));
        assert!(c.apply(CarouselAction::GoTo(9)).is_err());
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn construction_rejects_invalid_sequences() {
        assert_eq!(StepCarousel::new(Vec::<Step>::new()), Err(CarouselError::Empty));

        let mut dup = steps(3);
        dup[2].id = dup[0].id;
        assert_eq!(StepCarousel::new(dup), Err(CarouselError::DuplicateId(1)));

        let mut blank = steps(2);
        blank[1].content = String::new();
        assert_eq!(
            StepCarousel::new(blank),
            Err(CarouselError::BlankField {
                id: 2,
                field: "content"
            })
        );
    }

    #[test]
    fn indicator_numbers_are_one_based() {
        let c = carousel(3);
        let numbers: Vec<usize> = c.indicators().map(|i| i.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
