pub mod branch;
pub mod branch_name;

pub const VALID_BRANCH_NAME_REGEX: &str = r"^[A-Za-z0-9_/-]+$";
