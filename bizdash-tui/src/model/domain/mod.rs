//! 业务数据模型
//!
//! 页面只展示静态示例数据，数据加载不在本应用范围内。

mod catalog;
mod customer;
mod invoice;
mod service;

pub use catalog::{Category, Product};
pub use customer::Customer;
pub use invoice::{Invoice, InvoiceStatus};
pub use service::{ServicePlan, Subscription};

use chrono::NaiveDate;

/// 所有页面共享的业务数据
#[derive(Debug, Clone, Default)]
pub struct BusinessData {
    pub invoices: Vec<Invoice>,
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub customers: Vec<Customer>,
    pub plans: Vec<ServicePlan>,
    pub subscriptions: Vec<Subscription>,
}

impl BusinessData {
    /// 加载内置示例数据
    pub fn sample() -> Self {
        Self {
            invoices: invoice::sample(),
            products: catalog::sample_products(),
            categories: catalog::sample_categories(),
            customers: customer::sample(),
            plans: service::sample_plans(),
            subscriptions: service::sample_subscriptions(),
        }
    }

    pub fn invoice(&self, id: &str) -> Option<&Invoice> {
        self.invoices.iter().find(|invoice| invoice.id == id)
    }

    /// 未结清发票总额（分）
    pub fn outstanding_cents(&self) -> i64 {
        self.invoices
            .iter()
            .filter(|invoice| invoice.status != InvoiceStatus::Paid)
            .map(|invoice| invoice.amount_cents)
            .sum()
    }

    /// 截至 `today` 已逾期的发票数
    pub fn overdue_count(&self, today: NaiveDate) -> usize {
        self.invoices
            .iter()
            .filter(|invoice| invoice.is_overdue(today))
            .count()
    }

    /// 库存低于阈值的商品
    pub fn low_stock(&self, threshold: u32) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.stock < threshold)
    }
}

/// 构造示例日期；非法日期退化为 1970-01-01
pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
