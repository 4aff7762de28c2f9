//! Pure query operations over a store snapshot.
//!
//! Everything here is side-effect free: filtering, sorting, and
//! pagination all take owned or borrowed item slices and never touch the
//! store or its lock. The list path composes them as
//! filter -> sort -> paginate, with the match count taken over the same
//! filter independently of the page.

use crate::model::Item;

/// A parsed `field,direction` sort specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: Direction,
}

/// The closed set of sortable fields. Anything unrecognized falls back
/// to [`SortField::Id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Price,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl SortSpec {
    /// Parse a `field,direction` token pair, e.g. `price,desc`.
    ///
    /// Returns `None` for blank input. Field and direction tokens are
    /// matched case-insensitively; an unrecognized field silently falls
    /// back to id order, and anything other than `desc` sorts ascending.
    pub fn parse(raw: &str) -> Option<SortSpec> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let mut parts = raw.splitn(2, ',');
        let field_token = parts.next().unwrap_or("").trim();
        let dir_token = parts.next().unwrap_or("").trim();

        let field = if field_token.eq_ignore_ascii_case("name") {
            SortField::Name
        } else if field_token.eq_ignore_ascii_case("price") {
            SortField::Price
        } else if field_token.eq_ignore_ascii_case("createdAt") {
            SortField::CreatedAt
        } else {
            SortField::Id
        };

        let direction = if dir_token.eq_ignore_ascii_case("desc") {
            Direction::Desc
        } else {
            Direction::Asc
        };

        Some(SortSpec { field, direction })
    }
}

/// Case-insensitive substring match against name OR description.
/// A blank term matches everything.
pub fn matches(item: &Item, term: &str) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    item.name.to_lowercase().contains(&needle)
        || item.description.to_lowercase().contains(&needle)
}

/// Keep only the items matching `term`, preserving input order.
pub fn filter(items: Vec<Item>, term: Option<&str>) -> Vec<Item> {
    match term {
        Some(t) if !t.trim().is_empty() => {
            items.into_iter().filter(|i| matches(i, t)).collect()
        }
        _ => items,
    }
}

/// Number of items matching `term`; same predicate as [`filter`],
/// independent of any pagination.
pub fn count(items: &[Item], term: Option<&str>) -> usize {
    match term {
        Some(t) if !t.trim().is_empty() => items.iter().filter(|i| matches(i, t)).count(),
        _ => items.len(),
    }
}

/// Stable in-place sort by the spec's field and direction. Ties keep
/// their filtered order.
pub fn sort(items: &mut [Item], spec: SortSpec) {
    items.sort_by(|a, b| {
        let ord = match spec.field {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Name => a.name.cmp(&b.name),
            SortField::Price => a.price.total_cmp(&b.price),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        };
        match spec.direction {
            Direction::Asc => ord,
            Direction::Desc => ord.reverse(),
        }
    });
}

/// Take the zero-based page `[from, to)` where `from = max(0, page*size)`
/// and `to = min(len, from+size)`. A page beyond the data (or a
/// non-positive size) yields an empty vec. No upper bound is enforced
/// here; that belongs to the boundary layer if anywhere.
pub fn paginate(items: Vec<Item>, page: i64, size: i64) -> Vec<Item> {
    let len = items.len() as i64;
    let from = page.saturating_mul(size).max(0);
    let to = from.saturating_add(size).min(len);
    if from >= to {
        return Vec::new();
    }
    items
        .into_iter()
        .skip(from as usize)
        .take((to - from) as usize)
        .collect()
}
