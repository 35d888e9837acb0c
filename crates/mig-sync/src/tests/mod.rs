mod checkpoint;
mod error;
mod prompt;
mod records;
