// Custom log types for different event categories
pub const LOG_TYPE_VALIDATION: &str = "validation";
pub const LOG_TYPE_COMMAND: &str = "command";
