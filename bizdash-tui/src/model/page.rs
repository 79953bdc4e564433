//! 页面状态定义

/// 页面枚举，由当前路由路径解析而来
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    /// 仪表盘
    #[default]
    Dashboard,
    /// 发票列表
    Invoices,
    /// 发票详情
    InvoiceDetail { id: String },
    /// 商品列表
    Products,
    /// 商品分类
    Categories,
    /// 库存
    Inventory,
    /// 客户
    Customers,
    /// 服务概览
    Services,
    /// 服务套餐
    ServicePlans,
    /// 订阅
    Subscriptions,
    /// 报表
    Reports,
    /// 设置
    Settings,
    /// 未知路由
    NotFound { path: String },
}

impl Page {
    /// 根据路由路径解析页面
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Page::Dashboard,
            ["invoices"] => Page::Invoices,
            ["invoices", id] => Page::InvoiceDetail { id: (*id).to_string() },
            ["products"] => Page::Products,
            ["categories"] => Page::Categories,
            ["inventory"] => Page::Inventory,
            ["customers"] => Page::Customers,
            ["services"] => Page::Services,
            ["services", "plans"] => Page::ServicePlans,
            ["services", "subscriptions"] => Page::Subscriptions,
            ["reports"] => Page::Reports,
            ["settings"] => Page::Settings,
            _ => Page::NotFound {
                path: path.to_string(),
            },
        }
    }

    /// 获取页面标题
    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Invoices => "Invoices",
            Page::InvoiceDetail { .. } => "Invoice",
            Page::Products => "Products",
            Page::Categories => "Categories",
            Page::Inventory => "Inventory",
            Page::Customers => "Customers",
            Page::Services => "Services",
            Page::ServicePlans => "Plans",
            Page::Subscriptions => "Subscriptions",
            Page::Reports => "Reports",
            Page::Settings => "Settings",
            Page::NotFound { .. } => "Not Found",
        }
    }

    /// 是否是详情页面（需要返回按钮）
    pub fn is_detail_page(&self) -> bool {
        matches!(self, Page::InvoiceDetail { .. })
    }

    /// 详情页对应的列表页路由
    pub fn parent_path(&self) -> Option<&'static str> {
        match self {
            Page::InvoiceDetail { .. } => Some("/invoices"),
            _ => None,
        }
    }
}
