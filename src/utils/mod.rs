pub mod chart;
pub mod colors;
pub mod formatting;
pub mod path;
pub mod range;
pub mod table;
