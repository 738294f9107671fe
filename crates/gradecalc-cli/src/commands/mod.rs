pub mod compute;
pub mod init;
pub mod required;
pub mod serve;
