//! Recent retailer orders shown on the dashboard home page

use crate::core::error::ValidationError;
use crate::core::field::{FieldValue, ToFieldValue};
use crate::core::validation::{Validate, check, filters, validators};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "completed" => Ok(OrderStatus::Completed),
            other => Err(format!("unknown order status '{}'", other)),
        }
    }
}

impl ToFieldValue for OrderStatus {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::String(self.as_str().to_string())
    }
}

crate::impl_record!(
    Order,
    "order",
    "orders",
    search: ["order_id", "retailer_name", "sales_name"],
    {
        order_id: String,
        retailer_name: String,
        sales_name: String,
        amount: f64,
        status: OrderStatus,
    }
);

impl Order {
    pub fn is_pending(&self) -> bool {
        self.status == OrderStatus::Pending
    }

    pub fn complete(&mut self) {
        self.status = OrderStatus::Completed;
    }

    /// Amount as shown in the orders table, e.g. `$2500`
    pub fn display_amount(&self) -> String {
        if self.amount.fract() == 0.0 {
            format!("${}", self.amount)
        } else {
            format!("${:.2}", self.amount)
        }
    }
}

impl Validate for Order {
    fn normalize(&mut self) {
        self.order_id = filters::trim(&self.order_id);
        self.retailer_name = filters::trim(&self.retailer_name);
        self.sales_name = filters::trim(&self.sales_name);
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        check(
            &mut errors,
            "order_id",
            &self.order_id.to_field_value(),
            validators::required(),
        );
        check(
            &mut errors,
            "retailer_name",
            &self.retailer_name.to_field_value(),
            validators::required(),
        );
        check(
            &mut errors,
            "amount",
            &self.amount.to_field_value(),
            validators::non_negative(),
        );
        errors.into_result()
    }
}
