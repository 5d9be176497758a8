pub mod actions;
pub mod crew;
pub mod payroll;
pub mod risk;
