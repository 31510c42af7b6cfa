pub mod date;
pub mod json_file;
pub mod logs;
pub mod patch;

#[cfg(test)]
pub(crate) mod fixtures;
