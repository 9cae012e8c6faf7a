//! Incoming-call routing.

use crate::transport::{Method, Reply};
use crate::{Client, IcrNumberResult, IcrRouteResult, IcrRouteRule, Number, Result, Wire};
use serde_json::Value;

const NUMBERS: &[&str] = &["icr", "numbers"];
const ROUTE: &[&str] = &["icr", "route"];

impl Client {
    /// Numbers with ICR switched on.
    pub fn get_icr_numbers(&self) -> Result<Vec<Number>> {
        self.get(NUMBERS)?.into_records()
    }

    /// Switch ICR on for each phone number; results come back per number.
    pub fn enable_icr_for_numbers(&self, numbers: &[&str]) -> Result<Vec<IcrNumberResult>> {
        self.send_json(Method::Put, NUMBERS, phone_list(numbers))?
            .into_records()
    }

    /// Switch ICR off for each phone number.
    pub fn stop_icr_for_numbers(&self, numbers: &[&str]) -> Result<Vec<IcrNumberResult>> {
        self.send_json(Method::Delete, NUMBERS, phone_list(numbers))?
            .into_records()
    }

    /// Current inbound-number to extension routes.
    pub fn get_icr_route_rules(&self) -> Result<Vec<IcrRouteRule>> {
        self.get(ROUTE)?.into_records()
    }

    /// Add routes; each rule gets its own result.
    pub fn add_icr_route_rules(&self, rules: &[IcrRouteRule]) -> Result<Vec<IcrRouteResult>> {
        self.change_icr_route_rules(Method::Post, rules)?.into_records()
    }

    /// Replace routes for the given inbound numbers.
    pub fn update_icr_route_rules(&self, rules: &[IcrRouteRule]) -> Result<Vec<IcrRouteResult>> {
        self.change_icr_route_rules(Method::Put, rules)?.into_records()
    }

    /// Remove routes.
    pub fn delete_icr_route_rules(&self, rules: &[IcrRouteRule]) -> Result<Vec<IcrRouteResult>> {
        self.change_icr_route_rules(Method::Delete, rules)?.into_records()
    }

    fn change_icr_route_rules(&self, method: Method, rules: &[IcrRouteRule]) -> Result<Reply> {
        let body = rules
            .iter()
            .map(Wire::to_wire)
            .collect::<Result<Vec<Value>>>()?;
        self.send_json(method, ROUTE, Value::Array(body))
    }
}

fn phone_list(numbers: &[&str]) -> Value {
    Value::Array(numbers.iter().map(|n| Value::from(*n)).collect())
}
