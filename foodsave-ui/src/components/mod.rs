pub mod dialog;
pub mod icons;
pub mod investment_dialog;
pub mod sections;
pub mod step_carousel;
pub mod toaster;
