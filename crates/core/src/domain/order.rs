use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Auto-approved: price was within the site's approval limit.
    Confirmed,
    /// Over-budget order finalized after explicit human approval.
    ConfirmedWithApproval,
}

/// A persisted order. Appended to the orders list, never mutated or
/// deleted. Created only by the gate or confirmation stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub site_name: String,
    pub vendor_name: String,
    pub material: String,
    pub quantity: u32,
    pub price_inr: u64,
    pub status: OrderStatus,
}

/// Caller-supplied order parameters fed into the gate and confirmation
/// stages. The price is the total order cost in rupees.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub site_name: String,
    pub vendor_name: String,
    pub material: String,
    pub quantity: u32,
    pub price_inr: u64,
}

impl OrderRequest {
    pub fn into_order(self, status: OrderStatus) -> Order {
        Order {
            site_name: self.site_name,
            vendor_name: self.vendor_name,
            material: self.material,
            quantity: self.quantity,
            price_inr: self.price_inr,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{OrderRequest, OrderStatus};

    #[test]
    fn status_serializes_as_snake_case() {
        let confirmed = serde_json::to_string(&OrderStatus::Confirmed).expect("serialize");
        let approved =
            serde_json::to_string(&OrderStatus::ConfirmedWithApproval).expect("serialize");
        assert_eq!(confirmed, "\"confirmed\"");
        assert_eq!(approved, "\"confirmed_with_approval\"");
    }

    #[test]
    fn request_converts_into_order_with_status() {
        let request = OrderRequest {
            site_name: "Delhi-Site-7".to_string(),
            vendor_name: "SlowRock Cements".to_string(),
            material: "cement".to_string(),
            quantity: 500,
            price_inr: 39_000,
        };
        let order = request.into_order(OrderStatus::ConfirmedWithApproval);
        assert_eq!(order.vendor_name, "SlowRock Cements");
        assert_eq!(order.status, OrderStatus::ConfirmedWithApproval);
    }
}
