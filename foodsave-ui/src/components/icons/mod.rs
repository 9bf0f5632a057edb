mod arrows;

pub use arrows::{ArrowLeftIcon, ArrowRightIcon};
