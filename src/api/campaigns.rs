//! Voice campaigns.

use crate::transport::{Method, Payload};
use crate::{
    Client, Result, UploadedFile, VoiceCampaign, VoiceCampaignInfoReport, VoiceCampaignMessage,
    VoiceCampaignQuestion, Wire,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::path::Path;
use tracing::debug;

impl Client {
    /// Every campaign of the account.
    pub fn get_voice_campaigns(&self) -> Result<Vec<VoiceCampaign>> {
        self.get(&["vc"])?.into_records()
    }

    /// Upload campaign audio. The portal takes the file as a base64 string in
    /// the raw request body and answers with the stored file id.
    pub fn upload_voice_campaign_audio(&self, audio: &[u8]) -> Result<UploadedFile> {
        let encoded = STANDARD.encode(audio);
        debug!(bytes = audio.len(), "uploading voice campaign audio");
        self.request(Method::Post, &["vc", "upload"], &[], Payload::Encoded(encoded))?
            .into_record()
    }

    /// Read a local audio file and upload it.
    ///
    /// # Examples
    /// ```no_run
    /// # use beeline_portal::Client;
    /// # fn main() -> Result<(), beeline_portal::Error> {
    /// let client = Client::new("my-api-token")?;
    /// let file = client.upload_voice_campaign_file("greeting.wav")?;
    /// println!("stored as {}", file.id);
    /// # Ok(())
    /// # }
    /// ```
    pub fn upload_voice_campaign_file(&self, path: impl AsRef<Path>) -> Result<UploadedFile> {
        let audio = std::fs::read(path)?;
        self.upload_voice_campaign_audio(&audio)
    }

    /// Create a question campaign and return its id.
    pub fn add_question_voice_campaign(&self, campaign: &VoiceCampaignQuestion) -> Result<String> {
        Ok(self
            .send_json(Method::Post, &["vc", "question"], campaign.to_wire()?)?
            .into_text())
    }

    /// Create a message campaign and return its id.
    pub fn add_message_voice_campaign(&self, campaign: &VoiceCampaignMessage) -> Result<String> {
        Ok(self
            .send_json(Method::Post, &["vc", "message"], campaign.to_wire()?)?
            .into_text())
    }

    /// Replace a campaign's settings.
    pub fn update_voice_campaign(&self, campaign_id: &str, campaign: &VoiceCampaign) -> Result<()> {
        self.send_json(Method::Put, &["vc", campaign_id], campaign.to_wire()?)?;
        Ok(())
    }

    /// Remove a campaign.
    pub fn delete_voice_campaign(&self, campaign_id: &str) -> Result<()> {
        self.call(Method::Delete, &["vc", campaign_id], &[])?;
        Ok(())
    }

    /// Start dialling.
    pub fn start_voice_campaign(&self, campaign_id: &str) -> Result<()> {
        self.call(Method::Put, &["vc", "start", campaign_id], &[])?;
        Ok(())
    }

    /// Pause dialling; the campaign can be started again.
    pub fn stop_voice_campaign(&self, campaign_id: &str) -> Result<()> {
        self.call(Method::Put, &["vc", "stop", campaign_id], &[])?;
        Ok(())
    }

    /// Progress report with per-number status.
    pub fn get_voice_campaign_info(&self, campaign_id: &str) -> Result<VoiceCampaignInfoReport> {
        self.get(&["vc", "info", campaign_id])?.into_record()
    }
}
