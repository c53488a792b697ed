use anyhow::{Context, Result, anyhow};
use tracing::info;

use montre_catalog::{Bundle, FilteredCatalog, bundle_dir};
use montre_engine::Configurator;
use montre_model::{Region, Selection, Slot};

use crate::cli::{ResolveArgs, SlotsArgs};
use crate::summary::{print_configuration, slots_table};

/// Load the bundle and apply region, permalink query and explicit `--set`
/// choices in that order, mirroring how a configurator session starts.
pub fn build_configurator(args: &ResolveArgs) -> Result<Configurator> {
    let bundle = Bundle::load(&bundle_dir(&args.bundle)).context("load bundle")?;
    let mut engine = Configurator::from_bundle(bundle)?;
    if let Some(code) = &args.region {
        engine.set_region(Some(Region::from(code.as_str())))?;
    }
    engine.restore(args.query.as_deref(), &Selection::new())?;
    for spec in &args.set {
        let (slot, id) = parse_set(spec)?;
        engine
            .select(slot, id)
            .with_context(|| format!("apply --set {spec}"))?;
    }
    info!(
        region = engine.region().map(Region::as_str),
        slots = engine.selection().len(),
        "configuration resolved"
    );
    Ok(engine)
}

/// Parse one `--set slot=id` argument.
pub fn parse_set(spec: &str) -> Result<(Slot, &str)> {
    let (slot, id) = spec
        .split_once('=')
        .ok_or_else(|| anyhow!("invalid --set {spec:?}: expected SLOT=ID"))?;
    let slot: Slot = slot.parse().map_err(|message: String| anyhow!(message))?;
    if id.is_empty() {
        return Err(anyhow!("invalid --set {spec:?}: empty option id"));
    }
    Ok((slot, id))
}

pub fn run_resolve(args: &ResolveArgs) -> Result<()> {
    let engine = build_configurator(args)?;
    let result = engine.result();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_configuration(&result, engine.filtered());
    }
    Ok(())
}

pub fn run_checkout(args: &ResolveArgs) -> Result<()> {
    let engine = build_configurator(args)?;
    println!("{}", serde_json::to_string_pretty(&engine.checkout())?);
    Ok(())
}

pub fn run_slots(args: &SlotsArgs) -> Result<()> {
    let bundle = Bundle::load(&bundle_dir(&args.bundle)).context("load bundle")?;
    let region = args.region.as_ref().map(|code| Region::from(code.as_str()));
    let filtered = FilteredCatalog::new(&bundle.catalog, region.as_ref());
    println!("{}", slots_table(&filtered, &bundle.pricing.currency)?);
    Ok(())
}
