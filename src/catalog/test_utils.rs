use crate::model::{Category, CategoryId, Product, ProductId, Sex, User, UserId};
use crate::source::Dataset;

pub fn user(id: u32, name: &str, sex: Sex) -> User {
    User {
        id: UserId(id),
        name: name.to_string(),
        sex,
    }
}

pub fn category(id: u32, title: &str, icon: &str, owner: u32) -> Category {
    Category {
        id: CategoryId(id),
        title: title.to_string(),
        icon: icon.to_string(),
        owner_id: UserId(owner),
    }
}

pub fn product(id: u32, name: &str, category: u32) -> Product {
    Product {
        id: ProductId(id),
        name: name.to_string(),
        category_id: CategoryId(category),
    }
}

/// One user, one category, one product: Max owns Grocery, which holds Milk.
pub fn milk_dataset() -> Dataset {
    Dataset {
        users: vec![user(1, "Max", Sex::M)],
        categories: vec![category(1, "Grocery", "🍺", 1)],
        products: vec![product(1, "Milk", 1)],
    }
}

/// Two owners across three categories, plus one product with a dangling category.
pub fn shop_dataset() -> Dataset {
    Dataset {
        users: vec![user(1, "Roma", Sex::M), user(2, "Anna", Sex::F)],
        categories: vec![
            category(1, "Grocery", "🍞", 2),
            category(2, "Drinks", "🍺", 1),
            category(3, "Fruits", "🍏", 2),
        ],
        products: vec![
            product(1, "Milk", 2),
            product(2, "Bread", 1),
            product(3, "Eggs", 1),
            product(4, "Apple", 3),
            product(5, "Mystery", 42),
            product(6, "Milkshake", 2),
        ],
    }
}

pub fn product_names<'a, I, P>(products: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a P>,
    P: std::ops::Deref<Target = crate::model::EnrichedProduct> + 'a,
{
    products
        .into_iter()
        .map(|p| p.name().to_string())
        .collect()
}
