pub mod use_ctas;

pub use use_ctas::{open_external, open_google_play, scroll_to_section, use_ctas, Ctas};
