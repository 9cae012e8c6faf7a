//! Call forwarding (CFB, CFS) and black/white lists (BWL) of an abonent.

use crate::transport::Method;
use crate::{
    BwlRule, BwlStatusResponse, BwlType, Cfb, CfbResponse, CfsRule, CfsStatusResponse, Client,
    Result, Wire,
};
use serde_json::json;

impl Client {
    /// Forward-on-busy targets and whether CFB is on.
    pub fn get_cfb(&self, pattern: &str) -> Result<CfbResponse> {
        self.get(&["abonents", pattern, "cfb"])?.into_record()
    }

    /// Replace the forward-on-busy targets and switch CFB on.
    pub fn enable_cfb(&self, pattern: &str, cfb: &Cfb) -> Result<()> {
        self.send_json(Method::Put, &["abonents", pattern, "cfb"], cfb.to_wire()?)?;
        Ok(())
    }

    /// Switch CFB off.
    pub fn stop_cfb(&self, pattern: &str) -> Result<()> {
        self.call(Method::Delete, &["abonents", pattern, "cfb"], &[])?;
        Ok(())
    }

    /// Scheduled forwarding rules and whether CFS is on.
    pub fn get_cfs_rules(&self, pattern: &str) -> Result<CfsStatusResponse> {
        self.get(&["abonents", pattern, "cfs"])?.into_record()
    }

    /// Create a scheduled forwarding rule and return its id.
    pub fn add_cfs_rule(&self, pattern: &str, rule: &CfsRule) -> Result<String> {
        let reply = self.send_json(Method::Post, &["abonents", pattern, "cfs"], rule.to_wire()?)?;
        Ok(reply.into_text())
    }

    /// Switch CFS on.
    pub fn enable_cfs(&self, pattern: &str) -> Result<()> {
        self.call(Method::Put, &["abonents", pattern, "cfs"], &[])?;
        Ok(())
    }

    /// Replace a scheduled forwarding rule.
    pub fn update_cfs_rule(&self, pattern: &str, rule_id: &str, rule: &CfsRule) -> Result<()> {
        self.send_json(
            Method::Put,
            &["abonents", pattern, "cfs", rule_id],
            rule.to_wire()?,
        )?;
        Ok(())
    }

    /// Switch CFS off. Rules are kept.
    pub fn stop_cfs(&self, pattern: &str) -> Result<()> {
        self.call(Method::Delete, &["abonents", pattern, "cfs"], &[])?;
        Ok(())
    }

    /// Remove a scheduled forwarding rule.
    pub fn delete_cfs_rule(&self, pattern: &str, rule_id: &str) -> Result<()> {
        self.call(Method::Delete, &["abonents", pattern, "cfs", rule_id], &[])?;
        Ok(())
    }

    /// Both lists and which one is active.
    pub fn get_bwl_rules(&self, pattern: &str) -> Result<BwlStatusResponse> {
        self.get(&["abonents", pattern, "bwl"])?.into_record()
    }

    /// Add a rule to the black or white list and return its id.
    pub fn add_bwl_rule(&self, pattern: &str, list: BwlType, rule: &BwlRule) -> Result<String> {
        let rule = rule.to_wire()?;
        let body = json!({ "type": list, "rule": rule });
        let reply = self.send_json(Method::Post, &["abonents", pattern, "bwl"], body)?;
        Ok(reply.into_text())
    }

    /// Replace a black or white list rule.
    pub fn update_bwl_rule(&self, pattern: &str, rule_id: &str, rule: &BwlRule) -> Result<()> {
        self.send_json(
            Method::Post,
            &["abonents", pattern, "bwl", rule_id],
            rule.to_wire()?,
        )?;
        Ok(())
    }

    /// Switch filtering on using the given list.
    pub fn enable_bwl(&self, pattern: &str, list: BwlType) -> Result<()> {
        self.call(
            Method::Put,
            &["abonents", pattern, "bwl"],
            &[("ruleType", list.to_string())],
        )?;
        Ok(())
    }

    /// Switch filtering off.
    pub fn stop_bwl(&self, pattern: &str) -> Result<()> {
        self.call(Method::Delete, &["abonents", pattern, "bwl"], &[])?;
        Ok(())
    }

    /// Remove a black or white list rule.
    pub fn delete_bwl_rule(&self, pattern: &str, rule_id: &str) -> Result<()> {
        self.call(Method::Delete, &["abonents", pattern, "bwl", rule_id], &[])?;
        Ok(())
    }
}
