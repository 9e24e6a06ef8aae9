pub mod celebration;
pub mod games;
pub mod letter_card;
pub mod progress_meter;
