pub mod cell;
pub mod submission;
pub mod table;

pub use cell::Cell;
pub use submission::Submission;
pub use table::TableMeta;
