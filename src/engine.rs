//! Session-oriented entry point for card rendering.
//!
//! A [`CardEngine`] front-loads the HTTP client and the shared layout, then
//! renders one card per call: a bounded, cancellable, all-or-nothing load of
//! the six resources followed by a strictly sequential drawing phase.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::assets::fetch::{FixedAssets, RawResources, ResourceLoader, ResourceUrls};
use crate::assets::store::ResourceSet;
use crate::foundation::error::{CardError, CardResult};
use crate::layout::LayoutSpec;
use crate::model::VideoCardData;
use crate::render::RenderedCard;
use crate::render::compositor::Compositor;
use crate::text::TextEngine;

/// Default bound on the resource-join phase.
pub const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_secs(10);

/// Cooperative cancellation handle for an in-flight render.
///
/// Cloned freely; firing [`CancelToken::cancel`] on any clone is observed at
/// the resource-join boundary and again before the drawing phase begins.
/// Drawing itself is never interrupted mid-surface.
#[derive(Clone, Debug)]
pub struct CancelToken {
    tx: Arc<watch::Sender<bool>>,
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    /// A fresh, unfired token.
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        Self {
            tx: Arc::new(tx),
            rx,
        }
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve once cancellation is requested.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        // The token holds its own sender, so wait_for can only fail if the
        // process is tearing the runtime down; pending forever is the
        // correct behavior inside a select.
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Engine construction parameters.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Card geometry, shared read-only across renders.
    pub layout: Arc<LayoutSpec>,
    /// Fixed QR and font asset locations.
    pub fixed_assets: FixedAssets,
    /// Bound on the resource-join phase.
    pub load_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            layout: Arc::new(LayoutSpec::share_card()),
            fixed_assets: FixedAssets::default(),
            load_timeout: DEFAULT_LOAD_TIMEOUT,
        }
    }
}

/// Renders share cards from video metadata records.
///
/// Renders through one engine are serialized (`&mut self`: the text-shaping
/// contexts are stateful); concurrent renders use separate engines sharing
/// the same `Arc<LayoutSpec>`.
pub struct CardEngine {
    loader: ResourceLoader,
    layout: Arc<LayoutSpec>,
    fixed_assets: FixedAssets,
    text: TextEngine,
}

impl CardEngine {
    /// Build an engine from configuration.
    pub fn new(config: EngineConfig) -> CardResult<Self> {
        Ok(Self {
            loader: ResourceLoader::new(config.load_timeout)?,
            layout: config.layout,
            fixed_assets: config.fixed_assets,
            text: TextEngine::new(),
        })
    }

    /// Render one card end to end.
    ///
    /// Validates the record, joins the six resource loads (fail-fast,
    /// bounded, cancellable), then composes and reads back the surface. Any
    /// failure surfaces as a single terminal error; no partial card exists.
    #[tracing::instrument(skip_all, fields(title = %data.title))]
    pub async fn render(
        &mut self,
        data: &VideoCardData,
        cancel: &CancelToken,
    ) -> CardResult<RenderedCard> {
        data.validate()?;
        let urls = ResourceUrls::for_card(data, &self.fixed_assets)?;
        let raw = self.loader.load(&urls, cancel).await?;
        if cancel.is_cancelled() {
            return Err(CardError::Cancelled);
        }
        self.render_with_resources(data, &raw, Utc::now())
    }

    /// Compose a card from already-acquired resource bytes.
    ///
    /// This is the load-free back half of [`CardEngine::render`]; useful
    /// when assets are embedded or fetched by other means, and for hermetic
    /// tests. `now` anchors the relative publish-time formatting.
    pub fn render_with_resources(
        &mut self,
        data: &VideoCardData,
        raw: &RawResources,
        now: DateTime<Utc>,
    ) -> CardResult<RenderedCard> {
        data.validate()?;
        let resources = ResourceSet::prepare(raw, &mut self.text)?;
        let layout = Arc::clone(&self.layout);
        Compositor::new(&layout, &mut self.text).compose(data, &resources, now)
    }
}
