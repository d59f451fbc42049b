use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use procura_core::{
    AuditSink, OrderRequest, ProcurementService, ProcurementStore, Vendor, VendorCatalog,
};

/// A boundary operation callable by the agent runtime. Input and
/// output are JSON values; every business failure comes back as an
/// `{"error": ...}` payload rather than an `Err`, so the conversation
/// can react to it.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;
    async fn execute(&self, input: Value) -> Result<Value>;
}

#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn register<T>(&mut self, tool: T)
    where
        T: Tool + 'static,
    {
        self.tools.insert(tool.name().to_string(), Box::new(tool));
    }

    pub async fn execute(&self, name: &str, input: Value) -> Result<Value> {
        match self.tools.get(name) {
            Some(tool) => tool.execute(input).await,
            None => Ok(json!({ "error": format!("unknown tool `{name}`") })),
        }
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Register the six procurement boundary operations against a shared
/// service instance.
pub fn register_procurement_tools<S, C, A>(
    registry: &mut ToolRegistry,
    service: Arc<ProcurementService<S, C, A>>,
) where
    S: ProcurementStore + 'static,
    C: VendorCatalog + 'static,
    A: AuditSink + 'static,
{
    registry.register(StoreSiteRulesTool { service: service.clone() });
    registry.register(RetrieveSiteRulesTool { service: service.clone() });
    registry.register(FetchVendorsTool { service: service.clone() });
    registry.register(FilterVendorsTool { service: service.clone() });
    registry.register(PlaceOrderTool { service: service.clone() });
    registry.register(ConfirmOrderTool { service });
}

fn error_payload(message: impl Into<String>) -> Value {
    json!({ "error": message.into() })
}

fn parse_input<T: for<'de> Deserialize<'de>>(input: Value) -> Result<T, Value> {
    serde_json::from_value(input).map_err(|error| error_payload(format!("invalid input: {error}")))
}

pub struct StoreSiteRulesTool<S, C, A> {
    service: Arc<ProcurementService<S, C, A>>,
}

#[derive(Debug, Deserialize)]
struct StoreSiteRulesInput {
    site_name: String,
    approval_limit: u64,
    #[serde(default)]
    vendor_blacklist: Vec<String>,
}

#[async_trait]
impl<S, C, A> Tool for StoreSiteRulesTool<S, C, A>
where
    S: ProcurementStore + 'static,
    C: VendorCatalog + 'static,
    A: AuditSink + 'static,
{
    fn name(&self) -> &'static str {
        "store_site_rules"
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let input: StoreSiteRulesInput = match parse_input(input) {
            Ok(input) => input,
            Err(payload) => return Ok(payload),
        };
        match self.service.store_site_rules(
            &input.site_name,
            input.approval_limit,
            &input.vendor_blacklist,
        ) {
            Ok(text) => Ok(Value::String(text)),
            Err(error) => Ok(error_payload(error.user_message())),
        }
    }
}

pub struct RetrieveSiteRulesTool<S, C, A> {
    service: Arc<ProcurementService<S, C, A>>,
}

#[derive(Debug, Deserialize)]
struct SiteInput {
    site_name: String,
}

#[async_trait]
impl<S, C, A> Tool for RetrieveSiteRulesTool<S, C, A>
where
    S: ProcurementStore + 'static,
    C: VendorCatalog + 'static,
    A: AuditSink + 'static,
{
    fn name(&self) -> &'static str {
        "retrieve_site_rules"
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let input: SiteInput = match parse_input(input) {
            Ok(input) => input,
            Err(payload) => return Ok(payload),
        };
        match self.service.retrieve_site_rules(&input.site_name) {
            Ok(rules) => Ok(serde_json::to_value(rules)?),
            Err(error) => Ok(error_payload(error.user_message())),
        }
    }
}

pub struct FetchVendorsTool<S, C, A> {
    service: Arc<ProcurementService<S, C, A>>,
}

#[derive(Debug, Deserialize)]
struct FetchVendorsInput {
    material: String,
}

#[async_trait]
impl<S, C, A> Tool for FetchVendorsTool<S, C, A>
where
    S: ProcurementStore + 'static,
    C: VendorCatalog + 'static,
    A: AuditSink + 'static,
{
    fn name(&self) -> &'static str {
        "fetch_vendors"
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let input: FetchVendorsInput = match parse_input(input) {
            Ok(input) => input,
            Err(payload) => return Ok(payload),
        };
        Ok(serde_json::to_value(self.service.fetch_vendors(&input.material))?)
    }
}

pub struct FilterVendorsTool<S, C, A> {
    service: Arc<ProcurementService<S, C, A>>,
}

#[derive(Debug, Deserialize)]
struct FilterVendorsInput {
    vendors: Vec<Vendor>,
    #[serde(default)]
    blacklist: Vec<String>,
    budget: u64,
    #[serde(default)]
    site_name: String,
}

#[async_trait]
impl<S, C, A> Tool for FilterVendorsTool<S, C, A>
where
    S: ProcurementStore + 'static,
    C: VendorCatalog + 'static,
    A: AuditSink + 'static,
{
    fn name(&self) -> &'static str {
        "filter_vendors"
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let input: FilterVendorsInput = match parse_input(input) {
            Ok(input) => input,
            Err(payload) => return Ok(payload),
        };
        let outcome = self.service.filter_vendors(
            &input.vendors,
            &input.blacklist,
            input.budget,
            &input.site_name,
        );
        Ok(serde_json::to_value(outcome)?)
    }
}

pub struct PlaceOrderTool<S, C, A> {
    service: Arc<ProcurementService<S, C, A>>,
}

#[derive(Debug, Deserialize)]
struct PlaceOrderInput {
    vendor_name: String,
    price: u64,
    quantity: u32,
    material: String,
    site_name: String,
    approval_limit: u64,
}

#[async_trait]
impl<S, C, A> Tool for PlaceOrderTool<S, C, A>
where
    S: ProcurementStore + 'static,
    C: VendorCatalog + 'static,
    A: AuditSink + 'static,
{
    fn name(&self) -> &'static str {
        "place_order"
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let input: PlaceOrderInput = match parse_input(input) {
            Ok(input) => input,
            Err(payload) => return Ok(payload),
        };
        let request = OrderRequest {
            site_name: input.site_name,
            vendor_name: input.vendor_name,
            material: input.material,
            quantity: input.quantity,
            price_inr: input.price,
        };
        match self.service.place_order(&request, input.approval_limit) {
            Ok(disposition) => Ok(Value::String(disposition.text())),
            Err(error) => Ok(error_payload(error.user_message())),
        }
    }
}

pub struct ConfirmOrderTool<S, C, A> {
    service: Arc<ProcurementService<S, C, A>>,
}

#[derive(Debug, Deserialize)]
struct ConfirmOrderInput {
    vendor_name: String,
    price: u64,
    quantity: u32,
    material: String,
    site_name: String,
}

#[async_trait]
impl<S, C, A> Tool for ConfirmOrderTool<S, C, A>
where
    S: ProcurementStore + 'static,
    C: VendorCatalog + 'static,
    A: AuditSink + 'static,
{
    fn name(&self) -> &'static str {
        "confirm_order"
    }

    async fn execute(&self, input: Value) -> Result<Value> {
        let input: ConfirmOrderInput = match parse_input(input) {
            Ok(input) => input,
            Err(payload) => return Ok(payload),
        };
        let request = OrderRequest {
            site_name: input.site_name,
            vendor_name: input.vendor_name,
            material: input.material,
            quantity: input.quantity,
            price_inr: input.price,
        };
        match self.service.confirm_order(&request) {
            Ok(text) => Ok(Value::String(text)),
            Err(error) => Ok(error_payload(error.user_message())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use procura_core::store::ProcurementStore;
    use procura_core::{
        InMemoryAuditSink, InMemoryCatalog, InMemoryStore, ProcurementService, Vendor,
    };

    use super::{register_procurement_tools, ToolRegistry};

    type Service = ProcurementService<InMemoryStore, InMemoryCatalog, InMemoryAuditSink>;

    fn vendor(id: &str, name: &str, price: u64, category: &str) -> Vendor {
        Vendor {
            id: id.to_string(),
            name: name.to_string(),
            price_per_100_bags_inr: price,
            delivery_days: 7,
            in_stock: true,
            category: category.to_string(),
        }
    }

    fn registry() -> (ToolRegistry, Arc<Service>) {
        let service = Arc::new(ProcurementService::new(
            InMemoryStore::default(),
            InMemoryCatalog::new(vec![
                vendor("badrock", "BadRock Cements", 35_000, "cement"),
                vendor("slowrock", "SlowRock Cements", 39_000, "cement"),
            ]),
            InMemoryAuditSink::default(),
        ));
        let mut registry = ToolRegistry::default();
        register_procurement_tools(&mut registry, service.clone());
        (registry, service)
    }

    #[tokio::test]
    async fn registry_exposes_all_six_boundary_operations() {
        let (registry, _service) = registry();
        assert_eq!(
            registry.names(),
            vec![
                "confirm_order",
                "fetch_vendors",
                "filter_vendors",
                "place_order",
                "retrieve_site_rules",
                "store_site_rules",
            ]
        );
    }

    #[tokio::test]
    async fn rules_round_trip_through_the_tools() {
        let (registry, _service) = registry();

        let stored = registry
            .execute(
                "store_site_rules",
                json!({
                    "site_name": "Delhi-Site-7",
                    "approval_limit": 38_000,
                    "vendor_blacklist": ["BadRock Cements"],
                }),
            )
            .await
            .expect("store tool");
        assert!(stored.as_str().unwrap_or_default().starts_with("Rules stored for site"));

        let rules = registry
            .execute("retrieve_site_rules", json!({ "site_name": "Delhi-Site-7" }))
            .await
            .expect("retrieve tool");
        assert_eq!(rules["approval_limit"], json!(38_000));
        assert_eq!(rules["vendor_blacklist"], json!(["BadRock Cements"]));
    }

    #[tokio::test]
    async fn failures_come_back_as_error_payloads() {
        let (registry, _service) = registry();

        let missing = registry
            .execute("retrieve_site_rules", json!({ "site_name": "NonExistent-Site" }))
            .await
            .expect("retrieve tool");
        let message = missing["error"].as_str().unwrap_or_default();
        assert!(message.contains("No rules found for 'NonExistent-Site'"));

        let invalid = registry
            .execute("store_site_rules", json!({ "approval_limit": 1 }))
            .await
            .expect("store tool");
        assert!(invalid["error"].as_str().unwrap_or_default().contains("invalid input"));

        let unknown = registry.execute("bulldoze_site", json!({})).await.expect("registry");
        assert!(unknown["error"].as_str().unwrap_or_default().contains("unknown tool"));
    }

    #[tokio::test]
    async fn place_order_tool_escalates_without_persisting() {
        let (registry, service) = registry();

        let output = registry
            .execute(
                "place_order",
                json!({
                    "vendor_name": "SlowRock Cements",
                    "price": 39_000,
                    "quantity": 500,
                    "material": "cement",
                    "site_name": "Delhi-Site-7",
                    "approval_limit": 38_000,
                }),
            )
            .await
            .expect("place tool");

        let text = output.as_str().unwrap_or_default();
        assert!(text.starts_with("APPROVAL_REQUIRED"));
        assert!(text.contains("Overage: ₹1,000 (2.6%)"));
        assert!(service.store().orders().expect("orders").is_empty());
    }

    #[tokio::test]
    async fn confirm_order_tool_finalizes_the_escalation() {
        let (registry, service) = registry();

        let output = registry
            .execute(
                "confirm_order",
                json!({
                    "vendor_name": "SlowRock Cements",
                    "price": 39_000,
                    "quantity": 500,
                    "material": "cement",
                    "site_name": "Delhi-Site-7",
                }),
            )
            .await
            .expect("confirm tool");

        assert!(output.as_str().unwrap_or_default().starts_with("ORDER_CONFIRMED:"));
        assert_eq!(service.store().orders().expect("orders").len(), 1);
    }

    #[tokio::test]
    async fn fetch_and_filter_tools_drive_the_selection() {
        let (registry, _service) = registry();

        let vendors = registry
            .execute("fetch_vendors", json!({ "material": "CEMENT" }))
            .await
            .expect("fetch tool");
        assert_eq!(vendors.as_array().map(Vec::len), Some(2));

        let outcome = registry
            .execute(
                "filter_vendors",
                json!({
                    "vendors": vendors,
                    "blacklist": ["BadRock Cements"],
                    "budget": 40_000,
                    "site_name": "Delhi-Site-7",
                }),
            )
            .await
            .expect("filter tool");

        assert_eq!(outcome["eligible"][0]["name"], json!("SlowRock Cements"));
        assert_eq!(outcome["rejected"][0]["vendor"], json!("BadRock Cements"));
    }
}
