use crate::config::BaseDirection;

/// Deepest embedding level the explicit rules may reach.
pub const MAX_DEPTH: u8 = 125;

#[inline]
pub fn default_max_depth() -> u8 {
    61
}

#[inline]
pub fn default_base_direction() -> BaseDirection {
    BaseDirection::Auto
}

#[inline]
pub fn default_log_level() -> String {
    String::from("OFF")
}

#[inline]
pub fn default_log_file() -> Option<String> {
    None
}

pub fn default_config_file_content() -> String {
    r#"
# Engine
#
# Paragraph base direction.
# Default is "auto", which takes the direction of the first
# strong character in the text.
# Other available options are: "ltr" and "rtl"
#
# Maximum embedding depth reached through LRE, RLE, LRO and RLO.
# Deeper embeddings are ignored along with their PDF.
# Default is 61 and values above 125 are clamped.
#
[engine]
base-direction = "auto"
max-depth = 61

# Developer
#
# Log level
# Default is "OFF"
# Other available options are: "ERROR", "WARN", "INFO", "DEBUG" and "TRACE"
#
# Log file
# Writes the logs to the given path as well.
#
[developer]
log-level = "OFF"
# log-file = "/tmp/rio-bidi.log"
"#
    .to_string()
}
