// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model for the FoodSave landing site.
//!
//! Everything here is independent of the browser and of Yew so it can be
//! unit tested natively; `foodsave-ui` renders it.

pub mod carousel;
pub mod content;
pub mod lead_form;
pub mod step;

pub use carousel::{CarouselAction, CarouselError, Indicator, StepCarousel};
pub use lead_form::{InputKind, LeadField, LeadForm};
pub use step::Step;
