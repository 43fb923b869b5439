//! Designer-authored data assets for WARDEN.
//!
//! Every asset carries an [`AssetInfo`] block (unique id, name, description).
//! Ids are assigned lazily by [`DataAsset::ensure_identifier`], which the
//! [`AssetStore`] calls after every load so that an id is generated exactly
//! once and then persisted.

pub mod asset;
pub mod error;
pub mod kinds;
pub mod store;

pub use asset::{AssetInfo, DataAsset};
pub use error::AssetError;
pub use kinds::{GenericAsset, ItemData, PatrolRouteData};
pub use store::{AssetCatalog, AssetStore};
