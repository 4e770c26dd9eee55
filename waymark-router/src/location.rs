use url::Url;

use crate::{NavigationError, Result};

/// Parse the origin a history is rooted at.
pub(crate) fn parse_origin(origin: &str) -> Result<Url> {
    Url::parse(origin).map_err(|source| NavigationError::InvalidLocation {
        href: origin.to_string(),
        source,
    })
}

/// Resolve an href the way a link would: absolute hrefs replace the current
/// location, relative ones are taken relative to it.
pub(crate) fn resolve_href(current: &Url, href: &str) -> Result<Url> {
    current
        .join(href)
        .map_err(|source| NavigationError::InvalidLocation {
            href: href.to_string(),
            source,
        })
}
