pub mod checks;
pub mod deploy;
pub mod init;
