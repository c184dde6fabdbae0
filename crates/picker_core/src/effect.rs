#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start a remote catalog fetch; the result comes back as `Msg::CatalogFetched`.
    FetchCatalog,
    /// Write the catalog to the durable cache. Failures are not reported back.
    PersistCatalog(crate::Catalog),
    /// Tell listeners the session changed phase or result.
    Notify(crate::SessionEvent),
}
