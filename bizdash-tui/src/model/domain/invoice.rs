//! 发票数据模型

use chrono::NaiveDate;

use super::date;

/// 发票状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
}

impl InvoiceStatus {
    pub fn display_name(self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "Draft",
            InvoiceStatus::Sent => "Sent",
            InvoiceStatus::Paid => "Paid",
        }
    }
}

/// 发票
#[derive(Debug, Clone)]
pub struct Invoice {
    pub id: String,
    pub customer: String,
    pub amount_cents: i64,
    pub issued: NaiveDate,
    pub due: NaiveDate,
    pub status: InvoiceStatus,
    /// 明细行：(描述, 数量, 单价分)
    pub lines: Vec<(String, u32, i64)>,
}

impl Invoice {
    /// 已发出且过了到期日
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == InvoiceStatus::Sent && self.due < today
    }

    /// 详情页路由
    pub fn route(&self) -> String {
        format!("/invoices/{}", self.id)
    }
}

fn invoice(
    id: &str,
    customer: &str,
    issued: NaiveDate,
    due: NaiveDate,
    status: InvoiceStatus,
    lines: &[(&str, u32, i64)],
) -> Invoice {
    let lines: Vec<(String, u32, i64)> = lines
        .iter()
        .map(|(desc, qty, unit)| ((*desc).to_string(), *qty, *unit))
        .collect();
    Invoice {
        id: id.to_string(),
        customer: customer.to_string(),
        amount_cents: lines
            .iter()
            .map(|(_, qty, unit)| i64::from(*qty) * unit)
            .sum(),
        issued,
        due,
        status,
        lines,
    }
}

pub(super) fn sample() -> Vec<Invoice> {
    vec![
        invoice(
            "INV-1001",
            "Northwind Traders",
            date(2026, 8, 1),
            date(2026, 8, 31),
            InvoiceStatus::Paid,
            &[("Website maintenance", 1, 120_000), ("Hosting (monthly)", 1, 4_900)],
        ),
        invoice(
            "INV-1002",
            "Contoso Bakery",
            date(2026, 8, 12),
            date(2026, 9, 11),
            InvoiceStatus::Sent,
            &[("Espresso machine service", 2, 18_500)],
        ),
        invoice(
            "INV-1003",
            "Fabrikam Studio",
            date(2026, 9, 3),
            date(2026, 10, 3),
            InvoiceStatus::Sent,
            &[("Logo design", 1, 65_000), ("Business cards (box)", 4, 2_250)],
        ),
        invoice(
            "INV-1004",
            "Adventure Works",
            date(2026, 9, 20),
            date(2026, 10, 20),
            InvoiceStatus::Sent,
            &[("Bike tune-up", 6, 4_500)],
        ),
        invoice(
            "INV-1005",
            "Northwind Traders",
            date(2026, 10, 5),
            date(2026, 11, 4),
            InvoiceStatus::Draft,
            &[("Consulting (hours)", 12, 9_500)],
        ),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_is_sum_of_lines() {
        let invoices = sample();
        let first = &invoices[0];
        assert_eq!(first.amount_cents, 124_900);
        assert_eq!(invoices[2].amount_cents, 74_000);
    }

    #[test]
    fn test_paid_and_draft_never_overdue() {
        let far_future = date(2100, 1, 1);
        for invoice in sample() {
            let expected = invoice.status == InvoiceStatus::Sent;
            assert_eq!(invoice.is_overdue(far_future), expected, "{}", invoice.id);
        }
    }

    #[test]
    fn test_route() {
        assert_eq!(sample()[1].route(), "/invoices/INV-1002");
    }
}
