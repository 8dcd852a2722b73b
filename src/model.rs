//! Plain menu records as held by the store.

#[derive(Clone, Debug, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    /// Weak reference; may name a category that does not exist.
    pub category_id: String,
}

/// Fields supplied to `createDish`; the store assigns the id.
#[derive(Clone, Debug, PartialEq)]
pub struct NewDish {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category_id: String,
}

impl NewDish {
    pub fn into_dish(self, id: String) -> Dish {
        Dish {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category_id: self.category_id,
        }
    }
}

pub fn seed_categories() -> Vec<Category> {
    [(1, "Appetizers"), (2, "Main Courses"), (3, "Desserts")]
        .into_iter()
        .map(|(id, name)| Category {
            id: id.to_string(),
            name: name.to_string(),
        })
        .collect()
}

pub fn seed_dishes() -> Vec<Dish> {
    [
        (1, "Chicken Wings", "Spicy buffalo wings", 9.99, 1),
        (2, "Margherita Pizza", "Classic tomato and mozzarella pizza", 12.99, 2),
        (3, "Cheesecake", "Creamy New York-style cheesecake", 6.99, 3),
    ]
    .into_iter()
    .map(|(id, name, description, price, category_id)| Dish {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
        price,
        category_id: category_id.to_string(),
    })
    .collect()
}
