//! Regular expressions behind the email and password rules. Also compiled
//! by the validation bench.

pub const EMAIL: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
pub const LOWERCASE: &str = "[a-z]";
pub const UPPERCASE: &str = "[A-Z]";
pub const DIGIT: &str = r"\d";
pub const SPECIAL: &str = "[@$!%*?&#]";
