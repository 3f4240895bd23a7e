use crate::error::{FormatIssue, RecipeError, Result};
use crate::model::{FIELD_SEPARATOR, Ingredient, Recipe};

pub const SECTION_RECIPE: &str = "[Recept]";
pub const SECTION_INGREDIENTS: &str = "[Ingredienser]";
pub const SECTION_INSTRUCTIONS: &str = "[Instruktioner]";

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// How the next data line of a recipes file is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadStatus {
    #[default]
    Indefinite,
    AwaitingName,
    InIngredients,
    InInstructions,
}

impl ReadStatus {
    /// The state a marker line switches to, or `None` for a data line.
    pub fn from_marker(line: &str) -> Option<Self> {
        match line {
            SECTION_RECIPE => Some(ReadStatus::AwaitingName),
            SECTION_INGREDIENTS => Some(ReadStatus::InIngredients),
            SECTION_INSTRUCTIONS => Some(ReadStatus::InInstructions),
            _ => None,
        }
    }
}

fn format_error(line: usize, content: &str, reason: FormatIssue) -> RecipeError {
    RecipeError::Format {
        line,
        content: content.to_string(),
        reason,
    }
}

/// Parse the text of a recipes file.
///
/// A leading byte-order mark is ignored. Blank lines are skipped without
/// touching the parser state. The result is stable-sorted by recipe name.
pub fn decode(text: &str) -> Result<Vec<Recipe>> {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    let mut recipes: Vec<Recipe> = Vec::new();
    let mut status = ReadStatus::Indefinite;

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;

        if line.trim().is_empty() {
            continue;
        }

        if let Some(next) = ReadStatus::from_marker(line) {
            tracing::trace!(line = line_number, from = ?status, to = ?next, "Section marker");
            status = next;
            continue;
        }

        match status {
            ReadStatus::Indefinite => {
                return Err(format_error(line_number, line, FormatIssue::NoSection));
            }
            ReadStatus::AwaitingName => recipes.push(Recipe::new(line)),
            ReadStatus::InIngredients => {
                let recipe = recipes
                    .last_mut()
                    .ok_or_else(|| format_error(line_number, line, FormatIssue::NoRecipe))?;
                let ingredient: Ingredient = line
                    .parse()
                    .map_err(|reason| format_error(line_number, line, reason))?;
                recipe.add_ingredient(ingredient);
            }
            ReadStatus::InInstructions => {
                let recipe = recipes
                    .last_mut()
                    .ok_or_else(|| format_error(line_number, line, FormatIssue::NoRecipe))?;
                recipe.add_instruction(line);
            }
        }
    }

    recipes.sort_by(|a, b| a.name().cmp(b.name()));
    Ok(recipes)
}

/// Check that `encode` output for `recipes` decodes back to the same values.
///
/// Names and instructions must be single non-blank lines that are not section
/// markers; ingredient fields must be single lines without `;`. The error
/// names the line of the would-be file that breaks the format.
pub fn check_encodable(recipes: &[Recipe]) -> Result<()> {
    let mut line_number = 0;
    let mut next_line = || {
        line_number += 1;
        line_number
    };

    for recipe in recipes {
        next_line();
        let line = next_line();
        if !is_plain_line(recipe.name()) {
            return Err(format_error(line, recipe.name(), FormatIssue::NotEncodable));
        }

        next_line();
        for ingredient in recipe.ingredients() {
            let line = next_line();
            let fields = [&ingredient.amount, &ingredient.measure, &ingredient.name];
            let text = ingredient.to_line();
            if breaks_line(&text) || fields.iter().any(|f| f.contains(FIELD_SEPARATOR)) {
                return Err(format_error(line, &text, FormatIssue::NotEncodable));
            }
        }

        next_line();
        for instruction in recipe.instructions() {
            let line = next_line();
            if !is_plain_line(instruction) {
                return Err(format_error(line, instruction, FormatIssue::NotEncodable));
            }
        }
    }

    Ok(())
}

/// `lines()` splits on `\n` and drops a `\r` right before it.
fn breaks_line(value: &str) -> bool {
    value.contains('\n') || value.ends_with('\r')
}

fn is_plain_line(value: &str) -> bool {
    !value.trim().is_empty()
        && !breaks_line(value)
        && ReadStatus::from_marker(value).is_none()
}

/// Render recipes in file order, one `\n`-terminated line per entry.
pub fn encode(recipes: &[Recipe]) -> String {
    let mut output = String::new();

    for recipe in recipes {
        push_line(&mut output, SECTION_RECIPE);
        push_line(&mut output, recipe.name());

        push_line(&mut output, SECTION_INGREDIENTS);
        for ingredient in recipe.ingredients() {
            push_line(&mut output, &ingredient.to_line());
        }

        push_line(&mut output, SECTION_INSTRUCTIONS);
        for instruction in recipe.instructions() {
            push_line(&mut output, instruction);
        }
    }

    output
}

fn push_line(output: &mut String, line: &str) {
    output.push_str(line);
    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOMATO_SOUP: &str = "[Recept]
Tomatsoppa
[Ingredienser]
2;dl;Tomat
1;st;Lök
[Instruktioner]
Hacka löken
Koka soppan
";

    fn names(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.name()).collect()
    }

    #[test]
    fn test_decode_single_recipe() {
        let recipes = decode(TOMATO_SOUP).unwrap();
        assert_eq!(recipes.len(), 1);

        let soup = &recipes[0];
        assert_eq!(soup.name(), "Tomatsoppa");
        assert_eq!(
            soup.ingredients(),
            [
                Ingredient::new("2", "dl", "Tomat"),
                Ingredient::new("1", "st", "Lök"),
            ]
        );
        assert_eq!(soup.instructions(), ["Hacka löken", "Koka soppan"]);
    }

    #[test]
    fn test_encode_reproduces_sections() {
        let recipes = decode(TOMATO_SOUP).unwrap();
        assert_eq!(encode(&recipes), TOMATO_SOUP);
    }

    #[test]
    fn test_decode_empty_input() {
        assert!(decode("").unwrap().is_empty());
        assert!(decode("\n  \n\t\n").unwrap().is_empty());
    }

    #[test]
    fn test_blank_lines_do_not_reset_state() {
        let text = "\n[Recept]\n\nPannkakor\n   \n[Ingredienser]\n\n3;dl;Mjölk\n\n[Instruktioner]\n\nVispa\n\n";
        let recipes = decode(text).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].ingredients().len(), 1);
        assert_eq!(recipes[0].instructions(), ["Vispa"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = TOMATO_SOUP.replace('\n', "\r\n");
        let recipes = decode(&text).unwrap();
        assert_eq!(recipes, decode(TOMATO_SOUP).unwrap());
    }

    #[test]
    fn test_sorted_by_name() {
        let text = "[Recept]\nPannkakor\n[Recept]\nÄppelpaj\n[Recept]\nKöttbullar\n";
        let recipes = decode(text).unwrap();
        assert_eq!(names(&recipes), ["Köttbullar", "Pannkakor", "Äppelpaj"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let text = "[Recept]\nSoppa\n[Instruktioner]\nförsta\n[Recept]\nBröd\n[Recept]\nSoppa\n[Instruktioner]\nandra\n";
        let recipes = decode(text).unwrap();
        assert_eq!(names(&recipes), ["Bröd", "Soppa", "Soppa"]);
        assert_eq!(recipes[1].instructions(), ["första"]);
        assert_eq!(recipes[2].instructions(), ["andra"]);
    }

    #[test]
    fn test_sections_in_any_order() {
        let text = "[Recept]\nGröt\n[Instruktioner]\nKoka\n[Ingredienser]\n1;dl;Havregryn\n";
        let recipes = decode(text).unwrap();
        assert_eq!(recipes[0].instructions(), ["Koka"]);
        assert_eq!(recipes[0].ingredients()[0].name, "Havregryn");
    }

    #[test]
    fn test_second_name_line_starts_new_recipe() {
        let recipes = decode("[Recept]\nBullar\nLängd\n").unwrap();
        assert_eq!(names(&recipes), ["Bullar", "Längd"]);
    }

    #[test]
    fn test_instruction_lines_kept_verbatim() {
        let text = "[Recept]\nTe\n[Instruktioner]\n  Koka vatten; vänta  \n";
        let recipes = decode(text).unwrap();
        assert_eq!(recipes[0].instructions(), ["  Koka vatten; vänta  "]);
    }

    #[test]
    fn test_data_before_first_section() {
        let err = decode("Tomatsoppa\n[Recept]\nTomatsoppa\n").unwrap_err();
        match err {
            RecipeError::Format {
                line,
                content,
                reason,
            } => {
                assert_eq!(line, 1);
                assert_eq!(content, "Tomatsoppa");
                assert_eq!(reason, FormatIssue::NoSection);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_wrong_ingredient_field_count() {
        let text = "[Recept]\nSoppa\n[Ingredienser]\n2;dl;Tomat\n1;st\n";
        let err = decode(text).unwrap_err();
        match err {
            RecipeError::Format {
                line,
                content,
                reason,
            } => {
                assert_eq!(line, 5);
                assert_eq!(content, "1;st");
                assert_eq!(reason, FormatIssue::FieldCount(2));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_too_many_ingredient_fields() {
        let text = "[Recept]\nSoppa\n[Ingredienser]\n2;dl;Tomat;krossad\n";
        assert!(matches!(
            decode(text),
            Err(RecipeError::Format {
                reason: FormatIssue::FieldCount(4),
                ..
            })
        ));
    }

    #[test]
    fn test_section_data_without_recipe() {
        let err = decode("[Ingredienser]\n2;dl;Tomat\n").unwrap_err();
        assert!(matches!(
            err,
            RecipeError::Format {
                line: 2,
                reason: FormatIssue::NoRecipe,
                ..
            }
        ));

        let err = decode("[Instruktioner]\nKoka\n").unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_markers_are_case_and_whitespace_sensitive() {
        // Not markers, so they are data lines in the Indefinite state.
        assert!(decode("[recept]\n").is_err());
        assert!(decode(" [Recept]\n").is_err());
        assert!(decode("[Recept] \n").is_err());
    }

    #[test]
    fn test_roundtrip_sorts_by_name() {
        let recipes = vec![
            Recipe::new("Våfflor")
                .with_ingredient(Ingredient::new("3", "dl", "Vetemjöl"))
                .with_ingredient(Ingredient::new("", "", "Salt"))
                .with_instruction("Blanda"),
            Recipe::new("Kladdkaka")
                .with_ingredient(Ingredient::new("100", "g", "Smör"))
                .with_instruction("Smält smöret")
                .with_instruction("Grädda"),
            Recipe::new("Te"),
        ];

        let mut expected = recipes.clone();
        expected.sort_by(|a, b| a.name().cmp(b.name()));

        let decoded = decode(&encode(&recipes)).unwrap();
        assert_eq!(decoded, expected);
    }

    #[test]
    fn test_encode_empty_recipe_still_writes_headers() {
        let text = encode(&[Recipe::new("Vatten")]);
        assert_eq!(text, "[Recept]\nVatten\n[Ingredienser]\n[Instruktioner]\n");
    }

    #[test]
    fn test_leading_byte_order_mark_is_ignored() {
        let text = format!("\u{FEFF}{}", TOMATO_SOUP);
        let recipes = decode(&text).unwrap();
        assert_eq!(recipes, decode(TOMATO_SOUP).unwrap());
    }

    #[test]
    fn test_byte_order_mark_only_stripped_at_start() {
        let text = "[Recept]\nTe\n\u{FEFF}[Ingredienser]\n";
        let recipes = decode(text).unwrap();
        assert_eq!(names(&recipes), ["Te", "\u{FEFF}[Ingredienser]"]);
    }

    #[test]
    fn test_check_encodable_accepts_decoded_recipes() {
        let recipes = decode(TOMATO_SOUP).unwrap();
        assert!(check_encodable(&recipes).is_ok());
        assert!(check_encodable(&[]).is_ok());
    }

    #[test]
    fn test_check_encodable_rejects_separator_in_field() {
        let recipes = [Recipe::new("Te")
            .with_ingredient(Ingredient::new("2", "dl", "Vatten"))
            .with_ingredient(Ingredient::new("1", "st", "Citron; pressad"))];

        let err = check_encodable(&recipes).unwrap_err();
        match err {
            RecipeError::Format {
                line,
                content,
                reason,
            } => {
                assert_eq!(line, 5);
                assert_eq!(content, "1;st;Citron; pressad");
                assert_eq!(reason, FormatIssue::NotEncodable);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(decode(&encode(&recipes)).is_err());
    }

    #[test]
    fn test_check_encodable_rejects_broken_lines() {
        let multiline_name = [Recipe::new("Te\nmed honung")];
        assert!(matches!(
            check_encodable(&multiline_name),
            Err(RecipeError::Format { line: 2, .. })
        ));

        let blank_name = [Recipe::new("   ")];
        assert!(check_encodable(&blank_name).is_err());

        let marker_step = [Recipe::new("Te").with_instruction(SECTION_RECIPE)];
        assert!(matches!(
            check_encodable(&marker_step),
            Err(RecipeError::Format { line: 5, .. })
        ));

        let blank_step = [Recipe::new("Te").with_instruction("")];
        assert!(check_encodable(&blank_step).is_err());

        let trailing_carriage_return = [Recipe::new("Te").with_instruction("Koka\r")];
        assert!(check_encodable(&trailing_carriage_return).is_err());

        let inner_carriage_return = [Recipe::new("Te\rLätt").with_instruction("Koka")];
        assert!(check_encodable(&inner_carriage_return).is_ok());

        let newline_measure =
            [Recipe::new("Te").with_ingredient(Ingredient::new("1", "d\nl", "Vatten"))];
        assert!(check_encodable(&newline_measure).is_err());
    }

    #[test]
    fn test_status_from_marker() {
        assert_eq!(
            ReadStatus::from_marker(SECTION_RECIPE),
            Some(ReadStatus::AwaitingName)
        );
        assert_eq!(
            ReadStatus::from_marker(SECTION_INGREDIENTS),
            Some(ReadStatus::InIngredients)
        );
        assert_eq!(
            ReadStatus::from_marker(SECTION_INSTRUCTIONS),
            Some(ReadStatus::InInstructions)
        );
        assert_eq!(ReadStatus::from_marker("Tomatsoppa"), None);
        assert_eq!(ReadStatus::default(), ReadStatus::Indefinite);
    }
}
