use crate::error::FormatIssue;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub const FIELD_SEPARATOR: char = ';';

/// One `amount;measure;name` line of a recipe.
///
/// All three fields are kept as text so that amounts like `1/2` or `2-3`
/// survive a load/save cycle unchanged. A field holding `;` or a line break
/// cannot be saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ingredient {
    pub amount: String,
    pub measure: String,
    pub name: String,
}

impl Ingredient {
    pub fn new(
        amount: impl Into<String>,
        measure: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            measure: measure.into(),
            name: name.into(),
        }
    }

    /// The on-disk form, `amount;measure;name`.
    pub fn to_line(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}",
            self.amount,
            self.measure,
            self.name,
            sep = FIELD_SEPARATOR
        )
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = [&self.amount, &self.measure, &self.name]
            .into_iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}

impl FromStr for Ingredient {
    type Err = FormatIssue;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(FIELD_SEPARATOR).collect();
        match fields.as_slice() {
            [amount, measure, name] => Ok(Ingredient::new(*amount, *measure, *name)),
            _ => Err(FormatIssue::FieldCount(fields.len())),
        }
    }
}
