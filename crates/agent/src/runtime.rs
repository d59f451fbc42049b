use crate::guardrails::{GuardrailDecision, GuardrailIntent, GuardrailPolicy};

const SYSTEM_PROMPT: &str = "\
You are a procurement agent for construction sites. Your job:

1. When the user provides site rules, extract:
   - Site name
   - Approval limit (as an integer, strip any ₹ symbols)
   - Vendor blacklist (exact names)
   Then call store_site_rules.

2. When the user requests an order, extract the site name, material
   and quantity, then:
   a) Call retrieve_site_rules(site_name)
   b) Call fetch_vendors(material)
   c) Call filter_vendors(vendors, blacklist, budget)
   d) Analyze the result:
      - If eligible vendors exist, select the cheapest and call
        place_order(vendor_name, price, quantity, material, site_name,
        approval_limit).
      - If only over_budget vendors remain, select the cheapest of
        those and call place_order so the budget gate fires.
      - If ALL vendors are blacklisted, explain why no order can be
        placed.

3. Handling place_order responses:
   - If the response starts with ORDER_CONFIRMED, relay success.
   - If the response starts with APPROVAL_REQUIRED, present the full
     approval block to the user EXACTLY as returned (Vendor, Cost,
     Limit, Overage, percentage) and ask them to approve or reject.

4. Handling human approval or rejection:
   - If the user APPROVES, call confirm_order(vendor_name, price,
     quantity, material, site_name) to finalize the order.
   - If the user REJECTS, look at the filter_vendors result you
     already have. If there is a next-cheapest vendor (eligible or
     over-budget), offer it. Otherwise say no more vendors are
     available.

CRITICAL: Never make up vendor prices. Only use data returned by the
tools.";

/// Conversation shell around the tool registry: holds the system
/// prompt and screens every mutating intent through the guardrails
/// before any tool runs.
#[derive(Default)]
pub struct AgentRuntime {
    guardrails: GuardrailPolicy,
}

impl AgentRuntime {
    pub fn new(guardrails: GuardrailPolicy) -> Self {
        Self { guardrails }
    }

    pub fn system_prompt(&self) -> &'static str {
        SYSTEM_PROMPT
    }

    pub fn screen(&self, intent: &GuardrailIntent) -> GuardrailDecision {
        self.guardrails.evaluate(intent)
    }
}
