pub mod data;
pub mod motion;
pub mod validation;
