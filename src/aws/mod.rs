pub mod regions;
pub mod session;
