pub(crate) mod decode;
pub(crate) mod fetch;
pub(crate) mod store;

pub use fetch::{FixedAssets, RawResources, ResourceLoader, ResourceUrls};
pub use store::ResourceSet;
