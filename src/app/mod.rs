pub mod console;
pub mod report;
