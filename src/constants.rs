/// Submission field that names the target table
pub const CATEGORY_FIELD: &str = "chapter";

/// Table used when a submission carries no category
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Plain-text body returned by the GET probe
pub const LIVENESS_TEXT: &str =
    "Analytics Companion Test Receiver is running. POST to submit test results.";

/// Maximum accepted request body (1MB)
/// A fully filled chapter form is a few KB
pub const MAX_SUBMISSION_BYTES: usize = 1_048_576;

/// Row index of the header row in every table
pub const HEADER_ROW: u64 = 0;

// =============================================================================
// Error Messages
// =============================================================================

/// Error message for bodies that are not valid UTF-8
pub const ERR_NOT_UTF8: &str = "Request body is not valid UTF-8";

/// Error message for JSON bodies that are not objects
pub const ERR_NOT_AN_OBJECT: &str = "Submission must be a JSON object";

/// Error message for objects without any field
pub const ERR_EMPTY_SUBMISSION: &str = "Submission has no fields";
