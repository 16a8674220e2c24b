use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// One of the six quantities a recipe can be scaled by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Coffee,
    Sugar,
    Creamer,
    Water,
    Ingredients,
    Total,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::Coffee,
        Dimension::Sugar,
        Dimension::Creamer,
        Dimension::Water,
        Dimension::Ingredients,
        Dimension::Total,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Coffee => "coffee",
            Dimension::Sugar => "sugar",
            Dimension::Creamer => "creamer",
            Dimension::Water => "water",
            Dimension::Ingredients => "ingredients",
            Dimension::Total => "total",
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dimension `{0}`")]
pub struct UnknownDimension(pub String);

impl FromStr for Dimension {
    type Err = UnknownDimension;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Dimension::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownDimension(wanted.to_string()))
    }
}
