//! Price-list resolution for a customer group.
//!
//! Resolves the price list assigned to a customer group and pulls all
//! of its records into a [`PriceListLookup`], paginating through the
//! pricelists API. Built fresh on every call - price lists are small
//! and authoritative upstream, so there is deliberately no cache.
//!
//! Failures never propagate: pricing must degrade to base catalog
//! prices rather than block a product listing. Whatever was fetched
//! before a failure is returned, together with a diagnostic that
//! callers (and tests) can inspect instead of scraping log output.

use tracing::{debug, instrument, warn};

use product_table_core::CustomerGroupId;
use product_table_core::pricing::PriceListLookup;

use crate::bigcommerce::{BigCommerceError, CatalogClient};

/// Records requested per pricelists API call.
pub const RECORDS_PAGE_LIMIT: u32 = 250;

/// Hard ceiling on record pages fetched per lookup (1,250 records).
/// Very large price lists are truncated rather than walked in full.
pub const MAX_RECORD_PAGES: u32 = 5;

/// Result of a price-list fetch. Never an error: `lookup` may be empty
/// or partial, with `diagnostic` explaining why.
#[derive(Debug, Default)]
pub struct PriceListFetch {
    /// The overrides fetched so far.
    pub lookup: PriceListLookup,
    /// Human-readable failure description, when the fetch did not
    /// complete cleanly.
    pub diagnostic: Option<String>,
}

/// Build the price-list lookup for a customer group.
///
/// Queries the group's assignments, takes the first assigned price
/// list (a deliberate simplification when several are assigned), and
/// fetches its records page by page, sequentially, up to
/// [`MAX_RECORD_PAGES`]. Absent pagination metadata means single page.
#[instrument(skip(catalog), fields(customer_group_id = %customer_group_id))]
pub async fn fetch_price_list_lookup(
    catalog: &CatalogClient,
    customer_group_id: CustomerGroupId,
) -> PriceListFetch {
    match collect_records(catalog, customer_group_id).await {
        Ok(lookup) => PriceListFetch {
            lookup,
            diagnostic: None,
        },
        Err((lookup, error)) => {
            warn!(
                error = %error,
                overrides = lookup.len(),
                "price list fetch failed, degrading to base prices"
            );
            PriceListFetch {
                lookup,
                diagnostic: Some(error.to_string()),
            }
        }
    }
}

/// The fallible inner loop. On failure, returns whatever accumulated
/// so far alongside the error.
async fn collect_records(
    catalog: &CatalogClient,
    customer_group_id: CustomerGroupId,
) -> Result<PriceListLookup, (PriceListLookup, BigCommerceError)> {
    let mut lookup = PriceListLookup::new();

    let assignments = catalog
        .price_list_assignments(customer_group_id)
        .await
        .map_err(|e| (PriceListLookup::new(), e))?;

    let Some(assignment) = assignments.first() else {
        debug!("no price list assigned to customer group");
        return Ok(lookup);
    };
    let price_list_id = assignment.price_list_id;

    let mut page = 1;
    loop {
        let record_page = match catalog
            .price_list_records(price_list_id, page, RECORDS_PAGE_LIMIT)
            .await
        {
            Ok(record_page) => record_page,
            Err(error) => return Err((lookup, error)),
        };

        for record in &record_page.records {
            lookup.insert(record);
        }

        match record_page.pagination {
            Some(pagination)
                if pagination.current_page < pagination.total_pages
                    && page < MAX_RECORD_PAGES =>
            {
                page += 1;
            }
            _ => break,
        }
    }

    debug!(
        price_list_id = %price_list_id,
        overrides = lookup.len(),
        pages = page,
        "price list lookup built"
    );
    Ok(lookup)
}
