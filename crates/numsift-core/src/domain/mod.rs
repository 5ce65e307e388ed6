pub mod phone;
pub mod region;

pub use phone::{strip_invisible, NormalizedNumber};
pub use region::RegionCode;
