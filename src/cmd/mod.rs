pub mod encode;
pub mod score;
pub mod search;
