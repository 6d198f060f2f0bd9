pub mod count;
pub mod generate;
pub mod place;
pub mod run;
pub mod version;
