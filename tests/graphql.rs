use menu_graphql::{build_schema, schema_sdl, IdStrategy, MenuSchema, MenuStore, UpdatePolicy};
use serde_json::{json, Value};

fn seeded() -> MenuSchema {
    build_schema(MenuStore::seeded(IdStrategy::Length), UpdatePolicy::Falsy)
}

async fn run(schema: &MenuSchema, query: &str) -> Value {
    let response = schema.execute(query).await;
    assert!(response.errors.is_empty(), "unexpected errors: {:?}", response.errors);
    response.data.into_json().unwrap()
}

async fn run_err(schema: &MenuSchema, query: &str) -> Value {
    let response = schema.execute(query).await;
    assert!(!response.errors.is_empty(), "expected an error");
    serde_json::to_value(&response).unwrap()
}

#[tokio::test]
async fn lists_seeded_categories_in_order() {
    let schema = seeded();
    let data = run(&schema, "{ categories { id name } }").await;
    assert_eq!(
        data,
        json!({ "categories": [
            { "id": "1", "name": "Appetizers" },
            { "id": "2", "name": "Main Courses" },
            { "id": "3", "name": "Desserts" },
        ]})
    );
}

#[tokio::test]
async fn unknown_category_is_null_not_an_error() {
    let schema = seeded();
    let data = run(&schema, r#"{ category(id: "42") { name } }"#).await;
    assert_eq!(data, json!({ "category": null }));
}

#[tokio::test]
async fn category_resolves_its_dishes() {
    let schema = seeded();
    let data = run(&schema, r#"{ category(id: "1") { dishes { name } } }"#).await;
    assert_eq!(data, json!({ "category": { "dishes": [{ "name": "Chicken Wings" }] } }));
}

#[tokio::test]
async fn delete_category_leaves_dishes_dangling() {
    let schema = seeded();
    let data = run(&schema, r#"mutation { deleteCategory(id: "1") { id name } }"#).await;
    assert_eq!(data, json!({ "deleteCategory": { "id": "1", "name": "Appetizers" } }));

    let data = run(
        &schema,
        r#"{ dishes(categoryId: "1") { name category { name } } category(id: "1") { name } }"#,
    )
    .await;
    assert_eq!(
        data,
        json!({
            "dishes": [{ "name": "Chicken Wings", "category": null }],
            "category": null,
        })
    );
}

#[tokio::test]
async fn created_dish_resolves_category() {
    let schema = seeded();
    let data = run(
        &schema,
        r#"mutation { createDish(name: "Salad", price: 5.99, categoryId: "2") {
            id name description price category { name }
        } }"#,
    )
    .await;
    assert_eq!(
        data,
        json!({ "createDish": {
            "id": "4",
            "name": "Salad",
            "description": null,
            "price": 5.99,
            "category": { "name": "Main Courses" },
        }})
    );
}

#[tokio::test]
async fn create_and_update_category() {
    let schema = seeded();
    let data = run(&schema, r#"mutation { createCategory(name: "Drinks") { id name } }"#).await;
    assert_eq!(data, json!({ "createCategory": { "id": "4", "name": "Drinks" } }));

    let data = run(&schema, r#"mutation { updateCategory(id: "4", name: "Beverages") { id name } }"#).await;
    assert_eq!(data, json!({ "updateCategory": { "id": "4", "name": "Beverages" } }));

    let data = run(&schema, "{ categories { name } }").await;
    assert_eq!(data["categories"].as_array().unwrap().len(), 4);
    assert_eq!(data["categories"][3]["name"], "Beverages");
}

#[tokio::test]
async fn update_missing_category_reports_not_found() {
    let schema = seeded();
    let body = run_err(&schema, r#"mutation { updateCategory(id: "99", name: "X") { id } }"#).await;
    assert_eq!(body["data"], Value::Null);
    assert_eq!(body["errors"][0]["message"], "Category not found");
    assert_eq!(body["errors"][0]["extensions"]["code"], "NOT_FOUND");
    assert_eq!(body["errors"][0]["extensions"]["id"], "99");
}

#[tokio::test]
async fn delete_missing_dish_reports_not_found() {
    let schema = seeded();
    let body = run_err(&schema, r#"mutation { deleteDish(id: "99") { id } }"#).await;
    assert_eq!(body["errors"][0]["message"], "Dish not found");
    assert_eq!(body["errors"][0]["extensions"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn update_dish_zero_price_keeps_existing_by_default() {
    let schema = seeded();
    let data = run(
        &schema,
        r#"mutation { updateDish(id: "1", price: 0, name: "", description: null) {
            name description price
        } }"#,
    )
    .await;
    assert_eq!(
        data,
        json!({ "updateDish": {
            "name": "Chicken Wings",
            "description": "Spicy buffalo wings",
            "price": 9.99,
        }})
    );
}

#[tokio::test]
async fn update_dish_moves_it_between_categories() {
    let schema = seeded();
    run(&schema, r#"mutation { updateDish(id: "3", categoryId: "1") { id } }"#).await;
    let data = run(&schema, r#"{ dishes(categoryId: "1") { name } }"#).await;
    assert_eq!(
        data,
        json!({ "dishes": [{ "name": "Chicken Wings" }, { "name": "Cheesecake" }] })
    );
}

#[tokio::test]
async fn presence_policy_writes_explicit_values() {
    let schema = build_schema(MenuStore::seeded(IdStrategy::Length), UpdatePolicy::Presence);
    let data = run(
        &schema,
        r#"mutation { updateDish(id: "1", price: 0, description: null) { name description price } }"#,
    )
    .await;
    assert_eq!(
        data,
        json!({ "updateDish": { "name": "Chicken Wings", "description": null, "price": 0.0 } })
    );

    let body = run_err(&schema, r#"mutation { updateDish(id: "1", name: null) { id } }"#).await;
    assert_eq!(body["errors"][0]["extensions"]["code"], "BAD_USER_INPUT");
}

#[tokio::test]
async fn delete_dish_returns_prior_value() {
    let schema = seeded();
    let data = run(&schema, r#"mutation { deleteDish(id: "2") { id name price } }"#).await;
    assert_eq!(
        data,
        json!({ "deleteDish": { "id": "2", "name": "Margherita Pizza", "price": 12.99 } })
    );
    let data = run(&schema, r#"{ dishes(categoryId: "2") { id } }"#).await;
    assert_eq!(data, json!({ "dishes": [] }));
}

#[tokio::test]
async fn schema_rejects_missing_required_argument() {
    let schema = seeded();
    let response = schema.execute(r#"mutation { createCategory { id } }"#).await;
    assert!(!response.errors.is_empty());
    let data = run(&schema, "{ categories { id } }").await;
    assert_eq!(data["categories"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn unseeded_store_starts_empty() {
    let schema = build_schema(MenuStore::new(IdStrategy::Length), UpdatePolicy::Falsy);
    let data = run(&schema, "{ categories { id } }").await;
    assert_eq!(data, json!({ "categories": [] }));
}

#[tokio::test]
async fn root_types_are_named_query_and_mutation() {
    let schema = seeded();
    let data = run(
        &schema,
        "{ __typename __schema { queryType { name } mutationType { name } } }",
    )
    .await;
    assert_eq!(
        data,
        json!({
            "__typename": "Query",
            "__schema": { "queryType": { "name": "Query" }, "mutationType": { "name": "Mutation" } },
        })
    );

    let data = run(&schema, r#"mutation { __typename createCategory(name: "Soups") { __typename } }"#).await;
    assert_eq!(
        data,
        json!({ "__typename": "Mutation", "createCategory": { "__typename": "Category" } })
    );
}

fn sdl_block<'a>(sdl: &'a str, header: &str) -> Vec<&'a str> {
    sdl.lines()
        .skip_while(|line| line.trim() != header)
        .skip(1)
        .take_while(|line| line.trim() != "}")
        .map(str::trim)
        .collect()
}

#[test]
fn sdl_declares_menu_types() {
    let sdl = schema_sdl();
    for header in ["type Query {", "type Mutation {", "type Category {", "type Dish {"] {
        assert!(sdl.lines().any(|line| line.trim() == header), "missing `{header}` in:\n{sdl}");
    }
    assert!(!sdl.contains("QueryRoot") && !sdl.contains("MutationRoot"), "{sdl}");

    let query = sdl_block(&sdl, "type Query {");
    assert!(query.contains(&"dishes(categoryId: ID!): [Dish!]!"), "{query:?}");
    assert!(query.contains(&"category(id: ID!): Category"), "{query:?}");

    let dish = sdl_block(&sdl, "type Dish {");
    assert!(dish.contains(&"category: Category"), "{dish:?}");
    assert!(dish.contains(&"price: Float!"), "{dish:?}");

    let category = sdl_block(&sdl, "type Category {");
    assert!(category.contains(&"dishes: [Dish!]!"), "{category:?}");
}
