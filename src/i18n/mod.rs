mod region_code;

pub use region_code::RegionCode;

/// Locale used for every description lookup.
pub const ENGLISH: &str = "en";
