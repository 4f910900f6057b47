use crate::recipe::Recipe;

/// The recipe list shipped with the binary. Order matters: it is the tie-break
/// used when two recipes miss the same number of ingredients.
pub fn load_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(
            "Pasta with Tomato Sauce",
            ["pasta", "tomato", "garlic", "olive oil", "salt"],
            "1. Cook the pasta according to package instructions.\n\
             2. Heat olive oil in a pan and sauté minced garlic until fragrant.\n\
             3. Add chopped tomatoes and simmer until sauce thickens. Season with salt.\n\
             4. Combine the pasta with the sauce and serve warm.",
        ),
        Recipe::new(
            "Omelette",
            ["eggs", "butter", "cheese", "salt", "pepper"],
            "1. Beat the eggs in a bowl and season with salt and pepper.\n\
             2. Melt butter in a non-stick pan over medium heat.\n\
             3. Pour in the eggs and cook until just set, then sprinkle cheese over half.\n\
             4. Fold the omelette and slide onto a plate.",
        ),
        Recipe::new(
            "Fresh Salad",
            ["lettuce", "tomato", "cucumber", "olive oil", "lemon", "salt"],
            "1. Wash and chop the lettuce, tomato and cucumber.\n\
             2. In a bowl, whisk together olive oil, lemon juice and salt to make a dressing.\n\
             3. Toss the vegetables with the dressing and serve immediately.",
        ),
        Recipe::new(
            "Grilled Cheese Sandwich",
            ["bread", "cheese", "butter"],
            "1. Butter one side of each slice of bread.\n\
             2. Place a slice of cheese between two pieces of bread, buttered sides facing out.\n\
             3. Grill in a pan over medium heat until both sides are golden and the cheese is melted.",
        ),
    ]
}
