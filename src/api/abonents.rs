//! Abonent lookup and call control.

use crate::transport::Method;
use crate::{Abonent, AgentStatus, Client, Result, Wire};
use serde_json::{Value, json};

impl Client {
    /// List every abonent of the account.
    pub fn get_abonents(&self) -> Result<Vec<Abonent>> {
        self.get(&["abonents"])?.into_records()
    }

    /// Find an abonent by id, phone or extension.
    ///
    /// # Examples
    /// ```no_run
    /// # use beeline_portal::Client;
    /// # fn main() -> Result<(), beeline_portal::Error> {
    /// let client = Client::new("my-api-token")?;
    /// let abonent = client.find_abonent("2310")?;
    /// println!("{}", abonent.user_id);
    /// # Ok(())
    /// # }
    /// ```
    pub fn find_abonent(&self, pattern: &str) -> Result<Abonent> {
        self.get(&["abonents", pattern])?.into_record()
    }

    /// Current call-center agent status of the abonent.
    pub fn get_abonent_agent_status(&self, pattern: &str) -> Result<AgentStatus> {
        let status = self.get(&["abonents", pattern, "agent"])?.into_text();
        AgentStatus::from_wire(Value::String(status))
    }

    /// Set the call-center agent status.
    pub fn set_abonent_agent_status(&self, pattern: &str, status: AgentStatus) -> Result<()> {
        self.send_json(
            Method::Put,
            &["abonents", pattern, "agent"],
            json!({ "status": status }),
        )?;
        Ok(())
    }

    /// Call recording status (e.g. `ON` / `OFF`) as reported by the portal.
    pub fn get_abonent_recording_status(&self, pattern: &str) -> Result<String> {
        Ok(self.get(&["abonents", pattern, "recording"])?.into_text())
    }

    /// Switch call recording on.
    pub fn enable_abonent_recording(&self, pattern: &str) -> Result<()> {
        self.call(Method::Put, &["abonents", pattern, "recording"], &[])?;
        Ok(())
    }

    /// Switch call recording off.
    pub fn stop_abonent_recording(&self, pattern: &str) -> Result<()> {
        self.call(Method::Delete, &["abonents", pattern, "recording"], &[])?;
        Ok(())
    }

    /// Start a call from the abonent to `phone_number`.
    ///
    /// Returns the call id assigned by the portal.
    pub fn call_from_abonent(&self, pattern: &str, phone_number: &str) -> Result<String> {
        let reply = self.call(
            Method::Post,
            &["abonents", pattern, "call"],
            &[("phoneNumber", phone_number.to_string())],
        )?;
        Ok(reply.into_text())
    }

    /// Same as [`Client::call_from_abonent`] through the v2 endpoint.
    pub fn call_from_abonent_v2(&self, pattern: &str, phone_number: &str) -> Result<String> {
        let reply = self.call(
            Method::Post,
            &["v2", "abonents", pattern, "call"],
            &[("phoneNumber", phone_number.to_string())],
        )?;
        Ok(reply.into_text())
    }

    /// Blind transfer of an active call to `phone_number`.
    pub fn transfer_call(&self, pattern: &str, call_id: &str, phone_number: &str) -> Result<()> {
        self.call(
            Method::Post,
            &["abonents", pattern, "callTransfer"],
            &[
                ("callId", call_id.to_string()),
                ("phoneNumber", phone_number.to_string()),
            ],
        )?;
        Ok(())
    }

    /// Attended transfer: joins `call_id` with the consultation call.
    pub fn transfer_call_with_consult(
        &self,
        pattern: &str,
        call_id: &str,
        call_id_consult: &str,
    ) -> Result<()> {
        self.call(
            Method::Post,
            &["abonents", pattern, "callTransferConsult"],
            &[
                ("callId", call_id.to_string()),
                ("callIdConsult", call_id_consult.to_string()),
            ],
        )?;
        Ok(())
    }

    /// Attach an additional number to the abonent on the given schedule.
    pub fn add_extension_number(
        &self,
        pattern: &str,
        phone_number: &str,
        schedule: &str,
    ) -> Result<()> {
        self.call(
            Method::Put,
            &["abonents", pattern, "number"],
            &[
                ("phoneNumber", phone_number.to_string()),
                ("schedule", schedule.to_string()),
            ],
        )?;
        Ok(())
    }

    /// Detach the additional number.
    pub fn delete_extension_number(&self, pattern: &str) -> Result<()> {
        self.call(Method::Delete, &["abonents", pattern, "number"], &[])?;
        Ok(())
    }
}
