use std::ops::Range;
use std::time::Duration;

/// `Accept` header sent with every request.
pub const ACCEPT_HEADER: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// `Accept-Encoding` header sent when compression is requested.
pub const ACCEPT_ENCODING_GZIP: &str = "gzip,deflate";

/// Per-request timeout. Requests exceeding it are recorded as transport failures.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(100);

/// Longest run a deadline can express; longer durations are clamped to it.
pub const MAX_RUN_DURATION: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Range the random URL suffix is drawn from (always five digits).
pub const RANDOM_SUFFIX_RANGE: Range<u32> = 10_000..100_000;

/// Cadence of the progress reporter.
pub const PROGRESS_INTERVAL: Duration = Duration::from_millis(100);

/// Progress glyphs indexed by the number of requests completed since the previous sample.
/// The last glyph is used for every delta at or beyond its index.
pub const PROGRESS_GLYPHS: [char; 18] = [
    ' ', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', '*',
];

/// Trailing option enabling the random URL suffix.
pub const RANDOMIZE_OPTION: &str = "-r";

/// Trailing option enabling gzip/deflate.
pub const GZIP_OPTION: &str = "-gzip";

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "webperf=info";
