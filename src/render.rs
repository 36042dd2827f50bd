//! Text rendering of recipe lists and detail views.
//!
//! Stateless: consumes a recipe list and a loading flag, performs no
//! network or storage I/O.

use std::fmt::Write;

use crate::model::Recipe;

/// Render the suggestion list: a progress line while loading, nothing for
/// an empty list, otherwise one card per recipe.
pub fn render_list(recipes: &[Recipe], loading: bool) -> String {
    if loading {
        return "検索中...\n".to_string();
    }
    if recipes.is_empty() {
        return String::new();
    }

    let mut out = String::from("提案レシピ\n");
    for recipe in recipes {
        let _ = write!(
            out,
            "\n[{}] {}\n  {}\n  タグ: {}\n  調理時間: {}分 / 難易度: {}\n",
            recipe.id,
            recipe.title,
            recipe.description,
            recipe.tags.join(", "),
            recipe.cooking_time,
            recipe.difficulty.label(),
        );
    }
    out
}

/// Render a single recipe in full for the detail view.
pub fn render_detail(recipe: &Recipe) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", recipe.title);
    let _ = writeln!(out, "{}\n", recipe.description);
    let _ = writeln!(
        out,
        "調理時間: {}分 / 難易度: {} / {}人分",
        recipe.cooking_time,
        recipe.difficulty.label(),
        recipe.serving_size,
    );

    if !recipe.ingredients.is_empty() {
        let _ = writeln!(out, "\n材料");
        for ingredient in &recipe.ingredients {
            match &ingredient.note {
                Some(note) => {
                    let _ = writeln!(
                        out,
                        "  {}（{}）: {} {}",
                        ingredient.name, note, ingredient.quantity, ingredient.unit
                    );
                }
                None => {
                    let _ = writeln!(
                        out,
                        "  {}: {} {}",
                        ingredient.name, ingredient.quantity, ingredient.unit
                    );
                }
            }
        }
    }

    if !recipe.instructions.is_empty() {
        let _ = writeln!(out, "\n作り方");
        for (index, step) in recipe.instructions.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", index + 1, step);
        }
    }

    if let Some(nutrition) = &recipe.nutrition_info {
        let _ = writeln!(out, "\n栄養成分（1人前）");
        let _ = writeln!(
            out,
            "  カロリー: {}kcal / タンパク質: {} / 炭水化物: {} / 脂質: {}",
            nutrition.calories, nutrition.protein, nutrition.carbs, nutrition.fat
        );
    }

    out
}
