/// Error code registry
///
/// Error codes are organized by pipeline stage:
/// - 1000-1999: Input errors (edge list, domain table)
/// - 2000-2999: Degenerate input
/// - 3000-3999: Output errors (dataset export, boxplot rendering)
/// - 4000-4999: Remote query errors (BioMart)
/// - 5000-5999: Configuration errors
pub struct ErrorCode;

impl ErrorCode {
    // Input errors (1000-1999)
    pub const INPUT_GENERIC: u16 = 1000;
    pub const INPUT_READ_FAILED: u16 = 1001;
    pub const INPUT_MISSING_FIELD: u16 = 1002;
    pub const INPUT_MISSING_COLUMN: u16 = 1003;
    pub const INPUT_MALFORMED_RECORD: u16 = 1004;
    pub const INPUT_LENGTH_MISMATCH: u16 = 1005;

    // Degenerate input (2000-2999)
    pub const DEGENERATE_GENERIC: u16 = 2000;
    pub const DEGENERATE_TOO_FEW_NODES: u16 = 2001;

    // Output errors (3000-3999)
    pub const OUTPUT_GENERIC: u16 = 3000;
    pub const OUTPUT_PATH_UNWRITABLE: u16 = 3001;
    pub const OUTPUT_EMPTY_DATASET: u16 = 3002;
    pub const OUTPUT_UNSUPPORTED_FORMAT: u16 = 3003;
    pub const OUTPUT_RENDER_FAILED: u16 = 3004;
    pub const OUTPUT_WRITE_FAILED: u16 = 3005;

    // Remote query errors (4000-4999)
    pub const REMOTE_GENERIC: u16 = 4000;
    pub const REMOTE_INVALID_URL: u16 = 4001;
    pub const REMOTE_UNREACHABLE: u16 = 4002;
    pub const REMOTE_HTTP_STATUS: u16 = 4003;
    pub const REMOTE_QUERY_REJECTED: u16 = 4004;
    pub const REMOTE_INCOMPLETE: u16 = 4005;
    pub const REMOTE_MALFORMED: u16 = 4006;

    // Configuration errors (5000-5999)
    pub const CONFIG_GENERIC: u16 = 5000;
    pub const CONFIG_NOT_FOUND: u16 = 5001;
    pub const CONFIG_PARSE_ERROR: u16 = 5002;
    pub const CONFIG_INVALID_VALUE: u16 = 5003;
}
