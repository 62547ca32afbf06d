pub mod agreement;
pub mod extract;
