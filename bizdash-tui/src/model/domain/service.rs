//! 服务套餐与订阅数据模型

/// 服务套餐
#[derive(Debug, Clone)]
pub struct ServicePlan {
    pub name: String,
    pub monthly_cents: i64,
}

/// 客户订阅
#[derive(Debug, Clone)]
pub struct Subscription {
    pub customer: String,
    pub plan: String,
    pub active: bool,
}

pub(super) fn sample_plans() -> Vec<ServicePlan> {
    [("Basic support", 2_900), ("Business support", 9_900), ("Managed hosting", 4_900)]
        .into_iter()
        .map(|(name, monthly_cents)| ServicePlan {
            name: name.to_string(),
            monthly_cents,
        })
        .collect()
}

pub(super) fn sample_subscriptions() -> Vec<Subscription> {
    [
        ("Northwind Traders", "Managed hosting", true),
        ("Contoso Bakery", "Basic support", true),
        ("Fabrikam Studio", "Business support", false),
    ]
    .into_iter()
    .map(|(customer, plan, active)| Subscription {
        customer: customer.to_string(),
        plan: plan.to_string(),
        active,
    })
    .collect()
}
