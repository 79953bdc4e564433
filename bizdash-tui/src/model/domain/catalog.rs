//! 商品与分类数据模型

/// 商品
#[derive(Debug, Clone)]
pub struct Product {
    pub sku: String,
    pub name: String,
    pub category: String,
    pub price_cents: i64,
    pub stock: u32,
}

/// 商品分类
#[derive(Debug, Clone)]
pub struct Category {
    pub name: String,
    pub description: String,
}

fn product(sku: &str, name: &str, category: &str, price_cents: i64, stock: u32) -> Product {
    Product {
        sku: sku.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        price_cents,
        stock,
    }
}

pub(super) fn sample_products() -> Vec<Product> {
    vec![
        product("SKU-001", "Coffee beans 1kg", "Groceries", 2_400, 42),
        product("SKU-002", "Ceramic mug", "Kitchen", 1_200, 7),
        product("SKU-003", "Pour-over kettle", "Kitchen", 5_900, 3),
        product("SKU-004", "Paper filters (100)", "Groceries", 650, 120),
        product("SKU-005", "Gift card", "Vouchers", 5_000, 999),
    ]
}

pub(super) fn sample_categories() -> Vec<Category> {
    [
        ("Groceries", "Consumables sold by weight or pack"),
        ("Kitchen", "Durable kitchenware"),
        ("Vouchers", "Prepaid gift cards"),
    ]
    .into_iter()
    .map(|(name, description)| Category {
        name: name.to_string(),
        description: description.to_string(),
    })
    .collect()
}
