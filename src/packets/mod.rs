pub mod enums;
pub mod fixed_header;
pub mod utils;
