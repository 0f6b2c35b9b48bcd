/// Owners of sources, collections and repos (users and organizations).
///
/// Every container exposes its listing endpoints relative to its own
/// canonical URI, which always ends in `/`.
pub trait HasSourceContainer {
    /// Name of the URL parameter that carries the container's mnemonic.
    fn url_kwarg() -> &'static str
    where
        Self: Sized;

    /// Human-readable handle used in URIs in place of the opaque id.
    fn mnemonic(&self) -> &str;

    /// Canonical URI, e.g. `/users/ana/`.
    fn uri(&self) -> String;

    fn sources_uri(&self) -> String {
        format!("{}sources/", self.uri())
    }

    fn collections_uri(&self) -> String {
        format!("{}collections/", self.uri())
    }

    fn repos_uri(&self) -> String {
        format!("{}repos/", self.uri())
    }

    fn url_registry_uri(&self) -> String {
        format!("{}url-registry/", self.uri())
    }
}
