//! Reconciliation of the suggestion service's response shapes.
//!
//! The service has been observed to answer in three forms: a bare recipe
//! array, an envelope whose `data.recipes` is an array, and an envelope
//! whose `data.recipes` is a single recipe object. All three reduce to one
//! canonical `Vec<Recipe>`; anything else fails closed.

use log::debug;
use serde_json::Value;

use crate::error::SuggestError;
use crate::model::Recipe;

/// Normalize a suggest-endpoint body into the canonical recipe list.
///
/// Shapes are tried in fixed precedence: bare array, enveloped array,
/// enveloped single object. An envelope with `success: false` fails with
/// its `message` when one is present.
pub fn normalize_suggestions(body: Value) -> Result<Vec<Recipe>, SuggestError> {
    if body.is_array() {
        return serde_json::from_value(body).map_err(|err| {
            debug!("bare array did not deserialize as recipes: {err}");
            SuggestError::UnrecognizedShape
        });
    }

    let envelope = body.as_object().ok_or(SuggestError::UnrecognizedShape)?;
    match envelope.get("success").and_then(Value::as_bool) {
        Some(true) => {}
        Some(false) => return Err(SuggestError::Api(envelope_message(&body))),
        None => return Err(SuggestError::UnrecognizedShape),
    }

    let recipes = body
        .get("data")
        .and_then(|data| data.get("recipes"))
        .ok_or(SuggestError::UnrecognizedShape)?;

    if recipes.is_array() {
        serde_json::from_value(recipes.clone()).map_err(|err| {
            debug!("data.recipes array did not deserialize: {err}");
            SuggestError::UnrecognizedShape
        })
    } else {
        // Single item, not a list: wrap it
        serde_json::from_value::<Recipe>(recipes.clone())
            .map(|recipe| vec![recipe])
            .map_err(|err| {
                debug!("data.recipes item did not deserialize: {err}");
                SuggestError::UnrecognizedShape
            })
    }
}

/// Extract the recipe from a `GET /api/v1/recipes/{id}` envelope
/// (`{success, data: {recipe}, message?}`).
pub fn extract_recipe_detail(body: Value) -> Result<Recipe, SuggestError> {
    let envelope = body.as_object().ok_or(SuggestError::UnrecognizedShape)?;
    match envelope.get("success").and_then(Value::as_bool) {
        Some(true) => {}
        Some(false) => return Err(SuggestError::Api(envelope_message(&body))),
        None => return Err(SuggestError::UnrecognizedShape),
    }

    let recipe = body
        .get("data")
        .and_then(|data| data.get("recipe"))
        .ok_or(SuggestError::UnrecognizedShape)?;

    serde_json::from_value(recipe.clone()).map_err(|err| {
        debug!("data.recipe did not deserialize: {err}");
        SuggestError::UnrecognizedShape
    })
}

fn envelope_message(body: &Value) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .unwrap_or("no message")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;
    use serde_json::json;

    fn recipe_json(id: &str) -> Value {
        json!({
            "id": id,
            "title": "野菜炒め",
            "description": "フライパンひとつで作れる一品",
            "ingredients": [],
            "instructions": ["炒める"],
            "cookingTime": 15,
            "difficulty": "EASY",
            "servingSize": 2,
            "tags": ["時短"]
        })
    }

    #[test]
    fn test_bare_array_shape() {
        let recipes = normalize_suggestions(json!([recipe_json("1"), recipe_json("2")])).unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].id, "1");
        assert_eq!(recipes[1].id, "2");
    }

    #[test]
    fn test_enveloped_array_shape() {
        let body = json!({
            "success": true,
            "data": {"recipes": [recipe_json("1")], "generationId": "gen-1"}
        });
        let recipes = normalize_suggestions(body).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_enveloped_single_item_is_wrapped() {
        let body = json!({
            "success": true,
            "data": {"recipes": recipe_json("7"), "generationId": "gen-2"}
        });
        let recipes = normalize_suggestions(body).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].id, "7");
    }

    #[test]
    fn test_all_shapes_reduce_to_same_list() {
        let bare = normalize_suggestions(json!([recipe_json("9")])).unwrap();
        let array = normalize_suggestions(json!({
            "success": true,
            "data": {"recipes": [recipe_json("9")]}
        }))
        .unwrap();
        let single = normalize_suggestions(json!({
            "success": true,
            "data": {"recipes": recipe_json("9")}
        }))
        .unwrap();

        assert_eq!(bare, array);
        assert_eq!(array, single);
    }

    #[test]
    fn test_success_false_fails_with_message() {
        let body = json!({"success": false, "message": "generation failed"});
        match normalize_suggestions(body) {
            Err(SuggestError::Api(message)) => assert_eq!(message, "generation failed"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_shapes_fail_closed() {
        assert!(matches!(
            normalize_suggestions(json!({"recipes": []})),
            Err(SuggestError::UnrecognizedShape)
        ));
        assert!(matches!(
            normalize_suggestions(json!({"success": true, "data": {}})),
            Err(SuggestError::UnrecognizedShape)
        ));
        assert!(matches!(
            normalize_suggestions(json!("recipes")),
            Err(SuggestError::UnrecognizedShape)
        ));
        assert!(matches!(
            normalize_suggestions(json!([{"id": "1"}])),
            Err(SuggestError::UnrecognizedShape)
        ));
    }

    #[test]
    fn test_detail_envelope() {
        let body = json!({"success": true, "data": {"recipe": recipe_json("5")}});
        let recipe = extract_recipe_detail(body).unwrap();
        assert_eq!(recipe.id, "5");
    }

    #[test]
    fn test_detail_failure_envelope() {
        let body = json!({"success": false, "message": "not found"});
        match extract_recipe_detail(body) {
            Err(SuggestError::Api(message)) => assert_eq!(message, "not found"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_detail_missing_recipe_fails_closed() {
        let body = json!({"success": true, "data": {"recipes": [recipe_json("5")]}});
        assert!(matches!(
            extract_recipe_detail(body),
            Err(SuggestError::UnrecognizedShape)
        ));
    }
}
