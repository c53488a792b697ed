use tracing::debug;

use montre_catalog::{Bundle, FilteredCatalog};
use montre_model::{
    Catalog, CheckoutPayload, ConfigurationResult, Pricing, Region, Result, Rule, Selection, Slot,
};

use crate::{pricing, rules, selection};

/// The one configuration engine shared by every presentation surface.
///
/// Owns the static inputs (catalog, rules, pricing) and the current region
/// and selection. Every mutation refilters, re-validates and re-prices in
/// full, so derived values always reflect the most recently applied change
/// and the selection is never transiently invalid.
#[derive(Debug, Clone)]
pub struct Configurator {
    catalog: Catalog,
    rules: Vec<Rule>,
    pricing: Pricing,
    region: Option<Region>,
    filtered: FilteredCatalog,
    selection: Selection,
}

impl Configurator {
    /// Build an engine with no region filter and the first eligible option
    /// selected per slot.
    pub fn new(catalog: Catalog, rules: Vec<Rule>, pricing: Pricing) -> Result<Self> {
        let catalog = catalog.normalize();
        let filtered = FilteredCatalog::new(&catalog, None);
        let selection = selection::init(&filtered, &Selection::new())?;
        Ok(Self {
            catalog,
            rules,
            pricing,
            region: None,
            filtered,
            selection,
        })
    }

    pub fn from_bundle(bundle: Bundle) -> Result<Self> {
        Self::new(bundle.catalog, bundle.rules, bundle.pricing)
    }

    /// Restore session-start state: a decoded permalink query takes
    /// priority over explicit defaults, which take priority over the first
    /// eligible option. Stale or unknown query values fall through to the
    /// next priority instead of failing.
    pub fn restore(&mut self, query: Option<&str>, defaults: &Selection) -> Result<()> {
        let mut preferred = defaults.clone();
        if let Some(raw) = query {
            for (slot, id) in montre_codec::decode(raw, &self.filtered).iter() {
                preferred.set(slot, Some(id.to_string()));
            }
        }
        self.selection = selection::init(&self.filtered, &preferred)?;
        Ok(())
    }

    /// Switch the region filter. Eligibility of every slot can change at
    /// once, so the whole selection is re-initialized against the new
    /// projection: a still-eligible choice is kept, anything else resets to
    /// the first eligible option (or unset when the slot filtered empty).
    /// Filter and selection swap together; observers never see a mix.
    pub fn set_region(&mut self, region: Option<Region>) -> Result<()> {
        let filtered = FilteredCatalog::new(&self.catalog, region.as_ref());
        let selection = selection::init(&filtered, &self.selection)?;
        debug!(region = region.as_ref().map(Region::as_str), "region changed");
        self.region = region;
        self.filtered = filtered;
        self.selection = selection;
        Ok(())
    }

    /// Pick one option. On error the prior selection is left untouched.
    pub fn select(&mut self, slot: Slot, id: &str) -> Result<()> {
        self.selection = selection::select(&self.selection, &self.filtered, slot, id)?;
        Ok(())
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn filtered(&self) -> &FilteredCatalog {
        &self.filtered
    }

    pub fn pricing(&self) -> &Pricing {
        &self.pricing
    }

    /// Snapshot the externally visible state. Computed wholesale from the
    /// current selection on every call.
    pub fn result(&self) -> ConfigurationResult {
        ConfigurationResult {
            selection: self.selection.clone(),
            price: pricing::price(&self.pricing, &self.filtered, &self.selection),
            currency: self.pricing.currency.clone(),
            violations: rules::validate(&self.rules, &self.selection),
            sku: montre_codec::sku(&self.selection),
            query: montre_codec::encode(&self.selection),
        }
    }

    /// The outbound handoff to the checkout collaborator.
    pub fn checkout(&self) -> CheckoutPayload {
        CheckoutPayload {
            sku: montre_codec::sku(&self.selection),
            price: pricing::price(&self.pricing, &self.filtered, &self.selection),
            currency: self.pricing.currency.clone(),
            selection: self.selection.clone(),
        }
    }
}
