//! Call recordings.

use crate::transport::Method;
use crate::{CallRecord, Client, Result};

impl Client {
    /// Every recording of the account.
    pub fn get_records(&self) -> Result<Vec<CallRecord>> {
        self.get(&["records"])?.into_records()
    }

    /// One recording by its portal id.
    pub fn get_record(&self, record_id: &str) -> Result<CallRecord> {
        self.get(&["v2", "records", record_id])?.into_record()
    }

    /// Look up a record by the tracking id an integration attached to the
    /// call, scoped to one abonent.
    pub fn get_record_by_external_id(&self, external_id: &str, user_id: &str) -> Result<CallRecord> {
        self.get(&["v2", "records", external_id, user_id])?
            .into_record()
    }

    /// Delete a recording.
    pub fn delete_record(&self, record_id: &str) -> Result<()> {
        self.call(Method::Delete, &["v2", "records", record_id], &[])?;
        Ok(())
    }

    /// Audio file of the recording.
    ///
    /// # Examples
    /// ```no_run
    /// # use beeline_portal::Client;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::new("my-api-token")?;
    /// let audio = client.download_record("5f0c1a")?;
    /// std::fs::write("call.mp3", audio)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn download_record(&self, record_id: &str) -> Result<Vec<u8>> {
        self.download_from(&["v2", "records", record_id, "download"])
    }

    /// Audio file of the recording found by external id.
    pub fn download_record_by_external_id(&self, external_id: &str, user_id: &str) -> Result<Vec<u8>> {
        self.download_from(&["v2", "records", external_id, user_id, "download"])
    }

    /// Temporary public link to the recording.
    pub fn get_record_link(&self, record_id: &str) -> Result<String> {
        Ok(self.get(&["v2", "records", record_id, "reference"])?.into_text())
    }

    /// Temporary public link to the recording found by external id.
    pub fn get_record_link_by_external_id(&self, external_id: &str, user_id: &str) -> Result<String> {
        Ok(self
            .get(&["v2", "records", external_id, user_id, "reference"])?
            .into_text())
    }
}
