pub mod daily;
pub mod problems;
