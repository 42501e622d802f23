pub mod coach;
pub mod storage;
