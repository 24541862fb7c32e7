pub mod plot;
pub mod viewport;
