use crate::transport::Method;
use crate::{Client, Result, StatRecord, StatRecordV2, StatisticsQuery};

impl Client {
    /// One page of call statistics.
    ///
    /// # Examples
    /// ```no_run
    /// # use beeline_portal::{Client, StatisticsQuery};
    /// # use chrono::{Duration, Utc};
    /// # fn main() -> Result<(), beeline_portal::Error> {
    /// let client = Client::new("my-api-token")?;
    /// let now = Utc::now();
    /// let query = StatisticsQuery::new("9379992@beeline.ru", now - Duration::days(1), now);
    /// for call in client.get_statistics(&query)? {
    ///     println!("{} {} {}ms", call.start_date, call.phone, call.duration);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_statistics(&self, query: &StatisticsQuery) -> Result<Vec<StatRecord>> {
        self.call(Method::Get, &["statistics"], &query.params())?
            .into_records()
    }

    /// One page of call statistics from the v2 endpoint, with both parties
    /// and the end time of each call.
    pub fn get_statistics_v2(&self, query: &StatisticsQuery) -> Result<Vec<StatRecordV2>> {
        self.call(Method::Get, &["v2", "statistics"], &query.params())?
            .into_records()
    }
}
