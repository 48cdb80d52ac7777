// Business domains
pub mod returns;
