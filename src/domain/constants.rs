//! Fixed deployment values. Set at build/deploy time, never user-editable
//! at runtime beyond the CLI flag defaults that surface them.

/// Gateway base endpoint: scheme, host and port.
pub const DEFAULT_BASE_URL: &str = "https://api-beta.rpm.kr-dv-midasit.com:443";

/// Backend program identifier, used as a path segment in resource requests.
pub const DEFAULT_PROGRAM: &str = "gen";

/// Header carrying the credential on every gateway request.
pub const MAPI_KEY_HEADER: &str = "MAPI-Key";

/// Query parameter carrying the credential in an href. Exact-case match.
pub const MAPI_KEY_PARAM: &str = "mapikey";

/// Column set of the node table, in display order.
pub const NODE_COLUMNS: [&str; 4] = ["NODE", "X", "Y", "Z"];
