//! 客户数据模型

/// 客户
#[derive(Debug, Clone)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub city: String,
}

pub(super) fn sample() -> Vec<Customer> {
    [
        ("Northwind Traders", "billing@northwind.example", "Seattle"),
        ("Contoso Bakery", "owner@contoso.example", "Portland"),
        ("Fabrikam Studio", "hello@fabrikam.example", "Austin"),
        ("Adventure Works", "accounts@adventure.example", "Denver"),
    ]
    .into_iter()
    .map(|(name, email, city)| Customer {
        name: name.to_string(),
        email: email.to_string(),
        city: city.to_string(),
    })
    .collect()
}
