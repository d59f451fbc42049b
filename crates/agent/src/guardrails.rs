#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardrailIntent {
    StoreRules { site_name: String },
    PlaceOrder { site_name: String, price_inr: u64 },
    /// Finalizing an escalated order. `human_approved` means the human
    /// in the session explicitly said yes to this escalation; the LLM
    /// may never set it on its own initiative.
    ConfirmOverBudget { site_name: String, vendor_name: String, human_approved: bool },
    AmbiguousOrderIntent { site_name: String, raw_text: String },
}

impl GuardrailIntent {
    pub fn site_name(&self) -> &str {
        match self {
            Self::StoreRules { site_name }
            | Self::PlaceOrder { site_name, .. }
            | Self::ConfirmOverBudget { site_name, .. }
            | Self::AmbiguousOrderIntent { site_name, .. } => site_name,
        }
    }

    pub fn action_key(&self) -> &'static str {
        match self {
            Self::StoreRules { .. } => "rules.store",
            Self::PlaceOrder { .. } => "order.place",
            Self::ConfirmOverBudget { .. } => "order.confirm_over_budget",
            Self::AmbiguousOrderIntent { .. } => "order.ambiguous_intent",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardrailDecision {
    Allow,
    Deny { reason_code: &'static str, user_message: String, fallback_path: &'static str },
    Degrade { reason_code: &'static str, user_message: String, fallback_path: &'static str },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardrailPolicy {
    pub ordering_enabled: bool,
    pub llm_can_confirm_over_budget: bool,
}

impl Default for GuardrailPolicy {
    fn default() -> Self {
        Self { ordering_enabled: true, llm_can_confirm_over_budget: false }
    }
}

impl GuardrailPolicy {
    pub fn evaluate(&self, intent: &GuardrailIntent) -> GuardrailDecision {
        match intent {
            GuardrailIntent::StoreRules { .. } => GuardrailDecision::Allow,
            GuardrailIntent::PlaceOrder { .. } if self.ordering_enabled => {
                GuardrailDecision::Allow
            }
            GuardrailIntent::PlaceOrder { .. } => GuardrailDecision::Degrade {
                reason_code: "ordering_disabled",
                user_message: "Ordering is temporarily unavailable. I can still look up vendors \
                               and site rules."
                    .to_string(),
                fallback_path: "read_only_lookup",
            },
            GuardrailIntent::ConfirmOverBudget { human_approved: true, .. } => {
                GuardrailDecision::Allow
            }
            GuardrailIntent::ConfirmOverBudget { .. } => GuardrailDecision::Deny {
                reason_code: if self.llm_can_confirm_over_budget {
                    "over_budget_policy_conflict"
                } else {
                    "over_budget_confirm_disallowed"
                },
                user_message: "I cannot finalize an over-budget order myself. Please approve the \
                               escalated order explicitly and I will confirm it."
                    .to_string(),
                fallback_path: "human_approval_required",
            },
            GuardrailIntent::AmbiguousOrderIntent { .. } => GuardrailDecision::Degrade {
                reason_code: "ambiguous_order_intent",
                user_message: "I could not safely determine the order action from that request."
                    .to_string(),
                fallback_path: "request_explicit_order_details",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GuardrailDecision, GuardrailIntent, GuardrailPolicy};

    #[test]
    fn in_budget_order_is_allowed() {
        let policy = GuardrailPolicy::default();
        let decision = policy.evaluate(&GuardrailIntent::PlaceOrder {
            site_name: "Delhi-Site-7".to_string(),
            price_inr: 35_000,
        });
        assert_eq!(decision, GuardrailDecision::Allow);
    }

    #[test]
    fn unapproved_over_budget_confirmation_is_denied() {
        let policy = GuardrailPolicy::default();
        let decision = policy.evaluate(&GuardrailIntent::ConfirmOverBudget {
            site_name: "Delhi-Site-7".to_string(),
            vendor_name: "SlowRock Cements".to_string(),
            human_approved: false,
        });

        let (reason_code, user_message, fallback_path) = match decision {
            GuardrailDecision::Deny { reason_code, user_message, fallback_path } => {
                (reason_code, user_message, fallback_path)
            }
            _ => ("", String::new(), ""),
        };

        assert_eq!(reason_code, "over_budget_confirm_disallowed");
        assert!(user_message.contains("cannot finalize an over-budget order"));
        assert_eq!(fallback_path, "human_approval_required");
    }

    #[test]
    fn human_approved_confirmation_passes() {
        let policy = GuardrailPolicy::default();
        let decision = policy.evaluate(&GuardrailIntent::ConfirmOverBudget {
            site_name: "Delhi-Site-7".to_string(),
            vendor_name: "SlowRock Cements".to_string(),
            human_approved: true,
        });
        assert_eq!(decision, GuardrailDecision::Allow);
    }

    #[test]
    fn disabled_ordering_degrades_to_lookup_only() {
        let policy =
            GuardrailPolicy { ordering_enabled: false, ..GuardrailPolicy::default() };
        let decision = policy.evaluate(&GuardrailIntent::PlaceOrder {
            site_name: "Site-A".to_string(),
            price_inr: 10_000,
        });

        assert!(matches!(
            decision,
            GuardrailDecision::Degrade { reason_code: "ordering_disabled", .. }
        ));
    }

    #[test]
    fn ambiguous_intent_degrades_with_explicit_fallback() {
        let policy = GuardrailPolicy::default();
        let decision = policy.evaluate(&GuardrailIntent::AmbiguousOrderIntent {
            site_name: "Site-A".to_string(),
            raw_text: "do the usual order".to_string(),
        });

        let fallback = match decision {
            GuardrailDecision::Degrade { fallback_path, .. } => fallback_path,
            _ => "",
        };
        assert_eq!(fallback, "request_explicit_order_details");
    }
}
