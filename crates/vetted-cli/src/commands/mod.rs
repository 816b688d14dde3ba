pub mod audit;
pub mod dispatch;
pub mod init;
pub mod project;
pub mod report;
pub mod shared;
pub mod submission;
