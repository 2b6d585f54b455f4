pub mod aggregate;
pub mod format;
pub mod hours;
pub mod record;
pub mod report;
pub mod window;
