use tracing::debug;

use crate::catalog::CatalogSource;
use crate::error::Result;
use crate::models::{RawCollection, SubassemblyGroup};

/// Pull everything ingestion needs for one set from the catalog
///
/// The first failing query aborts the fetch; its error names the endpoint.
pub fn fetch_collection<C>(catalog: &C, set_id: &str) -> Result<RawCollection>
where
    C: CatalogSource + ?Sized,
{
    let info = catalog.fetch_set(set_id)?;
    let parts = catalog.fetch_set_parts(set_id)?;
    let minifigs = catalog.fetch_set_minifigs(set_id)?;

    let mut subassemblies = Vec::with_capacity(minifigs.len());
    for minifig in minifigs {
        let parts = catalog.fetch_minifig_parts(&minifig.set_num)?;
        debug!(
            set_id,
            minifig = %minifig.set_num,
            multiplier = minifig.quantity,
            parts = parts.len(),
            "fetched minifig inventory"
        );
        subassemblies.push(SubassemblyGroup {
            code: minifig.set_num,
            multiplier: minifig.quantity,
            parts,
        });
    }

    debug!(
        set_id,
        parts = parts.len(),
        minifigs = subassemblies.len(),
        "fetched catalog data"
    );

    Ok(RawCollection { info, parts, subassemblies })
}
