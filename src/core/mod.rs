pub mod brief;
pub mod calculator;
pub mod input;
pub mod log;
pub mod logic;
pub mod policy;
pub mod session;
