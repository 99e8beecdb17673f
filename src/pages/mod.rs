pub mod home;
pub mod requests;

pub use home::*;
pub use requests::*;
