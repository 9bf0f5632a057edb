//! Static sections of the landing page, top to bottom.

mod call_to_action;
mod environment;
mod global_waste;
mod hero;
mod how_it_works;
mod investment;
mod market;
mod solution;

pub use call_to_action::CallToAction;
pub use environment::EnvironmentalImpact;
pub use global_waste::GlobalWaste;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use investment::InvestmentOpportunity;
pub use market::Market;
pub use solution::Solution;
