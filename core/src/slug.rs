/// Deterministic identifier for a name, used as both the artist document
/// filename stem and the `/artists/<slug>` URL path segment.
///
/// Lowercase-hex MD5 over the name's UTF-8 bytes, 32 characters. Deployed
/// pages already link by these digests, so the hash choice is load-bearing
/// and must not change.
pub fn slug(name: &str) -> String { format!("{:x}", md5::compute(name)) }

#[cfg(test)]
mod tests;
