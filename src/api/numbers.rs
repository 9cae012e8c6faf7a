use crate::{Client, Number, Result};

impl Client {
    /// Incoming numbers of the account.
    pub fn get_incoming_numbers(&self) -> Result<Vec<Number>> {
        self.get(&["numbers"])?.into_records()
    }

    /// Find an incoming number by id or phone.
    pub fn find_incoming_number(&self, pattern: &str) -> Result<Number> {
        self.get(&["numbers", pattern])?.into_record()
    }
}
