pub const CONTEXT_PATH_KEY: &str = "context_path";
pub const RESULTS_PATH_KEY: &str = "results_path";
pub const RESULTS_DIR_NAME: &str = "out";

pub const UUID_PATTERN: &str = r"^[0-9a-f]{8}-([0-9a-f]{4}-){3}[0-9a-f]{12}$";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const DEFAULT_VALID_EXTENSIONS: [&str; 2] = ["txt", "json"];
pub const DEFAULT_MAX_STRING_LENGTH: usize = 64;
pub const DEFAULT_DATE_RANGE_START: &str = "2014-01-01";
pub const DEFAULT_DATE_RANGE_END: &str = "2024-12-31";
pub const DEFAULT_MINIMUM_AGE: i64 = 40;
pub const DEFAULT_SENSITIVE_PREFIX: &str = "_";
pub const DEFAULT_BIRTH_DATE_FIELD: &str = "date_of_birth";
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_result.json";

pub const DAYS_PER_YEAR: i64 = 365;
pub const JSON_INDENT: &[u8] = b"    ";
