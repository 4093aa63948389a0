//! Season lifecycle: creation, renaming, recoloring, deletion and diffing.
//!
//! Ids are `"{year}-{slug}"` and are fixed when the season is created.

use serde::Serialize;

use crate::error::CoreError;
use crate::types::{Season, SeasonCollection, SeasonId};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a season name.
pub const MAX_NAME_LEN: usize = 80;

/// Display palette offered for new seasons, in preference order.
pub const PALETTE: &[&str] = &[
    "#ef4444", "#f97316", "#eab308", "#22c55e", "#14b8a6", "#3b82f6", "#8b5cf6", "#ec4899",
    "#64748b", "#84cc16",
];

// ---------------------------------------------------------------------------
// Ids and colors
// ---------------------------------------------------------------------------

/// Lowercase ASCII alphanumerics, with every other run collapsed to one `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// `"{year}-{slug(name)}"`.
pub fn season_id(year: i32, name: &str) -> SeasonId {
    format!("{year}-{}", slugify(name))
}

/// First palette color no season in `seasons` uses yet.
///
/// Falls back to the first palette entry once every color is taken.
pub fn next_palette_color(seasons: &SeasonCollection) -> &'static str {
    PALETTE
        .iter()
        .find(|color| {
            !seasons
                .values()
                .any(|s| s.color.eq_ignore_ascii_case(color))
        })
        .copied()
        .unwrap_or(PALETTE[0])
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Non-empty, at most [`MAX_NAME_LEN`] characters, and slugs to something.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Season name must not be empty".into()));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Season name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    if slugify(trimmed).is_empty() {
        return Err(CoreError::Validation(
            "Season name must contain at least one letter or digit".into(),
        ));
    }
    Ok(())
}

/// `#RRGGBB` hex color.
pub fn validate_color(color: &str) -> Result<(), CoreError> {
    let valid = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid color '{color}': expected #RRGGBB"
        )))
    }
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

/// Build a new, empty season for `year`.
///
/// Picks the next unused palette color when `color` is `None`. Fails with
/// [`CoreError::Conflict`] if the derived id already exists.
pub fn create_season(
    seasons: &SeasonCollection,
    year: i32,
    name: &str,
    color: Option<&str>,
) -> Result<Season, CoreError> {
    validate_name(name)?;
    let color = match color {
        Some(c) => {
            validate_color(c)?;
            c.to_string()
        }
        None => next_palette_color(seasons).to_string(),
    };

    let name = name.trim().to_string();
    let id = season_id(year, &name);
    if seasons.contains_key(&id) {
        return Err(CoreError::Conflict(format!(
            "A season with id '{id}' already exists"
        )));
    }

    Ok(Season {
        id,
        year,
        name,
        color,
        date_ranges: Vec::new(),
    })
}

/// Change a season's display name. The id stays what it was.
pub fn rename_season(season: &Season, name: &str) -> Result<Season, CoreError> {
    validate_name(name)?;
    Ok(Season {
        name: name.trim().to_string(),
        ..season.clone()
    })
}

/// Change a season's display color.
pub fn recolor_season(season: &Season, color: &str) -> Result<Season, CoreError> {
    validate_color(color)?;
    Ok(Season {
        color: color.to_string(),
        ..season.clone()
    })
}

/// Remove a season. Other seasons are unaffected; its days become unassigned.
pub fn delete_season(
    seasons: &SeasonCollection,
    season_id: &str,
) -> Result<SeasonCollection, CoreError> {
    if !seasons.contains_key(season_id) {
        return Err(CoreError::season_not_found(season_id));
    }
    let mut updated = seasons.clone();
    updated.remove(season_id);
    Ok(updated)
}

// ---------------------------------------------------------------------------
// Diffing
// ---------------------------------------------------------------------------

/// Which seasons need writing after an engine call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeasonDiff {
    /// Added or changed.
    pub upserted: Vec<SeasonId>,
    pub deleted: Vec<SeasonId>,
}

impl SeasonDiff {
    pub fn is_empty(&self) -> bool {
        self.upserted.is_empty() && self.deleted.is_empty()
    }
}

/// Compare two snapshots so the host can write one record per changed id.
pub fn changed_season_ids(before: &SeasonCollection, after: &SeasonCollection) -> SeasonDiff {
    let upserted = after
        .iter()
        .filter(|(id, season)| before.get(*id) != Some(*season))
        .map(|(id, _)| id.clone())
        .collect();
    let deleted = before
        .keys()
        .filter(|id| !after.contains_key(*id))
        .cloned()
        .collect();

    SeasonDiff { upserted, deleted }
}
