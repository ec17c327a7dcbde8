/// Format/version marker. Must be the exact first line of every envelope.
pub const HEADER_LINE: &str = "EC v1";

/// Number of meaningful lines in an envelope (header, declaration, payload).
pub const ENVELOPE_LINES: usize = 3;

/// Separators used by the declaration line.
pub const ATTRIBUTE_SEPARATOR: char = ';';
pub const KEY_VALUE_SEPARATOR: char = '=';
pub const STEP_SEPARATOR: char = '>';

/// Attribute keys recognized on the declaration line.
pub mod attr_keys {
    pub const TRANSFORM: &str = "t";
    pub const CONTENT_TYPE: &str = "ct";
}

/// Step names (closed vocabulary, mirrored by `transform::Step`).
pub mod step_names {
    pub const BASE64: &str = "b64";
    pub const GZIP: &str = "gz";
    pub const NONE: &str = "none";
}

/// Chain written by the message encoder.
pub const DEFAULT_CHAIN: &str = "gz>b64";
/// Content type written by the message encoder.
pub const DEFAULT_CONTENT_TYPE: &str = "json";
/// Content type assumed by the validator when `ct=` is absent.
pub const CONTENT_TYPE_JSON: &str = "json";

/// Default gzip level (balanced).
pub const DEFAULT_GZIP_LEVEL: u32 = 6;
pub const MAX_GZIP_LEVEL: u32 = 9;
