use crate::{Error, Result};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VertexShape {
    #[default]
    Circle,
    Square,
    /// Vertex is not drawn; its label still is.
    None,
}

impl FromStr for VertexShape {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circle" => Ok(Self::Circle),
            "square" | "rectangle" | "rect" => Ok(Self::Square),
            "none" | "hidden" => Ok(Self::None),
            _ => Err(()),
        }
    }
}

/// Accepts any CSS color `svgtypes` understands, plus the SVG paint keyword `none`.
pub fn validate_color(color: &str) -> Result<()> {
    let trimmed = color.trim();
    if trimmed.eq_ignore_ascii_case("none") || svgtypes::Color::from_str(trimmed).is_ok() {
        Ok(())
    } else {
        Err(Error::InvalidColor {
            color: color.to_string(),
        })
    }
}

/// Expands an optional per-entity color list to exactly `count` validated entries.
/// An empty list means `fallback` for every entity.
pub(crate) fn per_entity_colors<'a>(
    colors: &'a [String],
    fallback: &'a str,
    count: usize,
    what: &'static str,
    per: &'static str,
) -> Result<Vec<&'a str>> {
    if colors.is_empty() {
        validate_color(fallback)?;
        return Ok(vec![fallback; count]);
    }
    if colors.len() != count {
        return Err(Error::LengthMismatch {
            what,
            per,
            got: colors.len(),
            expected: count,
        });
    }
    colors
        .iter()
        .map(|c| validate_color(c).map(|()| c.as_str()))
        .collect()
}
