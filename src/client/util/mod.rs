pub mod celebrate;
