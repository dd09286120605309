//! Category slug resolution.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::bigcommerce::Category;
use crate::error::{AppError, Result};
use crate::state::AppState;

const CATEGORY_PAGE_LIMIT: u32 = 250;
const MAX_CATEGORY_PAGES: u32 = 5;

/// Query parameters for slug resolution.
#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    /// Storefront URL path of the category (e.g. `/shoes/`).
    pub path: String,
}

/// Resolve a storefront category path to its category.
///
/// Walks the category listing pages until a matching custom URL is
/// found; paths are compared with trailing slashes ignored.
pub async fn resolve(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> Result<Json<Category>> {
    let wanted = normalize_path(&query.path);
    if wanted.is_empty() {
        return Err(AppError::BadRequest("path must not be empty".to_string()));
    }

    let mut page = 1;
    loop {
        let (categories, pagination) = state
            .catalog()
            .get_categories(page, CATEGORY_PAGE_LIMIT)
            .await?;

        if let Some(category) = categories
            .into_iter()
            .find(|c| c.url.as_deref().is_some_and(|url| normalize_path(url) == wanted))
        {
            return Ok(Json(category));
        }

        match pagination {
            Some(p) if p.current_page < p.total_pages && page < MAX_CATEGORY_PAGES => page += 1,
            _ => break,
        }
    }

    Err(AppError::NotFound(format!("category path {}", query.path)))
}

fn normalize_path(path: &str) -> &str {
    path.trim_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_strips_slashes() {
        assert_eq!(normalize_path("/shoes/"), "shoes");
        assert_eq!(normalize_path("shoes"), "shoes");
        assert_eq!(normalize_path("/shoes/trail/"), "shoes/trail");
        assert_eq!(normalize_path("/"), "");
    }
}
