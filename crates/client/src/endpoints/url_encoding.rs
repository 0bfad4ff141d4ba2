//! Path construction for Cloudera Manager endpoints.
//!
//! Resource names are free text on the server (`Cluster 1 - CDH4`, user
//! names with `@`, host IDs), so every name is percent-encoded as a single
//! path segment before it is joined to the API root. A `/`, `?` or `#`
//! inside a name therefore can never change which endpoint is hit.
//!
//! ```
//! use cm_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("Cluster 1 - CDH4"), "Cluster%201%20-%20CDH4");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Bytes escaped inside a path segment: RFC 3986 delimiters plus `%`, so
/// names that already look encoded are sent literally.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b';')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}')
    .add(b'~');

/// Encode one resource name as a path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

/// Join an API root and path segments into a request URL.
///
/// Every segment is encoded, so resource names can be passed through
/// unchanged. `api_root` must not end with a slash.
///
/// ```
/// use cm_client::endpoints::url_encoding::endpoint_url;
///
/// let url = endpoint_url("http://cm:7180/api/v1", &["clusters", "Cluster 1", "commands"]);
/// assert_eq!(url, "http://cm:7180/api/v1/clusters/Cluster%201/commands");
/// ```
pub fn endpoint_url(api_root: &str, segments: &[&str]) -> String {
    let mut url = String::from(api_root);
    for segment in segments {
        url.push('/');
        url.push_str(&encode_path_segment(segment));
    }
    url
}
