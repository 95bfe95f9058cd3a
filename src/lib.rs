pub mod angle;
pub mod constants;
pub mod linalg;
pub mod precession;
pub mod ref_system;
pub mod sky;
pub mod starsky_errors;
pub mod sun;
pub mod time;
