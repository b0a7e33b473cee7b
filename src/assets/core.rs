use crate::runtime_config::RuntimeConfig;
use dashmap::DashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Kind of a browser asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Js,
    Css,
}

/// Reference to one browser asset file, relative to the public web root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetRef {
    pub path: String,
    pub kind: AssetKind,
}

impl AssetRef {
    #[must_use]
    pub fn js(path: &str) -> Self {
        Self {
            path: path.to_string(),
            kind: AssetKind::Js,
        }
    }

    #[must_use]
    pub fn css(path: &str) -> Self {
        Self {
            path: path.to_string(),
            kind: AssetKind::Css,
        }
    }
}

/// Manager for widget browser assets.
///
/// `include_assets` takes `&self`: inclusion mutates shared page state
/// behind the scenes and is idempotent per asset.
pub trait AssetsManager: Send + Sync {
    /// Widget core assets, needed in every scope the widget renders in.
    fn basic_assets(&self) -> Vec<AssetRef>;

    /// Assets wiring the widget into the admin UI.
    fn backend_assets(&self) -> Vec<AssetRef>;

    /// Request inclusion of the given assets into the current page.
    fn include_assets(&self, assets: &[AssetRef]);
}

const ASSET_BASE: &str = "bundles/uploadgate";

/// Default asset catalog.
///
/// Serves minified variants unless debug assets are enabled. Included
/// assets are tracked in a set; the page renderer reads them back via
/// [`AssetCatalog::included`].
#[derive(Debug, Default)]
pub struct AssetCatalog {
    debug: bool,
    included: DashSet<AssetRef>,
}

impl AssetCatalog {
    #[must_use]
    pub fn new(config: &RuntimeConfig) -> Self {
        Self {
            debug: config.debug_assets,
            included: DashSet::new(),
        }
    }

    fn js(&self, stem: &str) -> AssetRef {
        if self.debug {
            AssetRef::js(&format!("{ASSET_BASE}/js/{stem}.js"))
        } else {
            AssetRef::js(&format!("{ASSET_BASE}/js/{stem}.min.js"))
        }
    }

    fn css(&self, stem: &str) -> AssetRef {
        if self.debug {
            AssetRef::css(&format!("{ASSET_BASE}/css/{stem}.css"))
        } else {
            AssetRef::css(&format!("{ASSET_BASE}/css/{stem}.min.css"))
        }
    }

    /// Assets included so far, ordered by path for stable rendering.
    #[must_use]
    pub fn included(&self) -> Vec<AssetRef> {
        let mut assets: Vec<AssetRef> = self.included.iter().map(|a| a.key().clone()).collect();
        assets.sort_by(|a, b| a.path.cmp(&b.path));
        assets
    }

    /// Whether a specific asset has been included.
    #[must_use]
    pub fn is_included(&self, asset: &AssetRef) -> bool {
        self.included.contains(asset)
    }
}

impl AssetsManager for AssetCatalog {
    fn basic_assets(&self) -> Vec<AssetRef> {
        vec![self.js("fineuploader"), self.css("fineuploader")]
    }

    fn backend_assets(&self) -> Vec<AssetRef> {
        vec![self.js("backend")]
    }

    fn include_assets(&self, assets: &[AssetRef]) {
        debug!(count = assets.len(), "Including widget assets");
        for asset in assets {
            self.included.insert(asset.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(debug: bool) -> AssetCatalog {
        AssetCatalog::new(&RuntimeConfig {
            debug_assets: debug,
        })
    }

    #[test]
    fn test_production_assets_are_minified() {
        let catalog = catalog(false);
        let paths: Vec<_> = catalog
            .basic_assets()
            .into_iter()
            .chain(catalog.backend_assets())
            .map(|a| a.path)
            .collect();
        assert!(paths.iter().all(|p| p.contains(".min.")));
    }

    #[test]
    fn test_debug_assets_are_plain() {
        let catalog = catalog(true);
        let paths: Vec<_> = catalog
            .basic_assets()
            .into_iter()
            .chain(catalog.backend_assets())
            .map(|a| a.path)
            .collect();
        assert!(paths.iter().all(|p| !p.contains(".min.")));
    }

    #[test]
    fn test_include_is_idempotent() {
        let catalog = catalog(false);
        let assets = catalog.basic_assets();
        catalog.include_assets(&assets);
        catalog.include_assets(&assets);
        assert_eq!(catalog.included().len(), assets.len());
        assert!(catalog.is_included(&assets[0]));
    }
}
