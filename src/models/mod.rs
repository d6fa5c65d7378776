pub mod campsite;
pub mod comment;
