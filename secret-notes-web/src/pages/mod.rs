pub mod game;
pub mod landing;
pub mod letter;
pub mod letter_list;
pub mod surprise;
